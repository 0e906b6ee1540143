//! Table directory of a runtime data container.
//!
//! The container starts with a table count followed by one 12-byte descriptor per table:
//!
//! ```text
//! [table_count: u32]
//! [table_count x { table_type: u32, size: u32, offset: u32 }]
//! [table bytes ...]
//! ```
//!
//! Offsets are relative to the start of the container. Each descriptor is checked against the
//! container length while the directory is read, so every [`TableHeader`] returned here
//! describes a region that lies entirely inside the buffer.
//!
//! # Example
//!
//! ```rust
//! use rdatscope::rdat::{RuntimeDataPartType, TableHeader};
//!
//! #[rustfmt::skip]
//! let container = [
//!     0x01, 0x00, 0x00, 0x00, // one table
//!     0x01, 0x00, 0x00, 0x00, // String
//!     0x04, 0x00, 0x00, 0x00, // 4 bytes
//!     0x10, 0x00, 0x00, 0x00, // at offset 16
//!     b'F', b'o', b'o', 0x00,
//! ];
//!
//! let headers = TableHeader::read_directory(&container)?;
//! assert_eq!(headers[0].kind(), Some(RuntimeDataPartType::String));
//! assert_eq!(headers[0].data(&container)?, b"Foo\0");
//! # Ok::<(), rdatscope::Error>(())
//! ```

use crate::{file::parser::Parser, rdat::RuntimeDataPartType, Error, Result};

/// Size of one table descriptor in bytes
pub const TABLE_HEADER_SIZE: usize = 12;

/// One entry of the container's table directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableHeader {
    /// Raw table type tag, see [`RuntimeDataPartType`]
    pub table_type: u32,
    /// Size of the table region in bytes
    pub size: u32,
    /// Offset of the table region from the start of the container
    pub offset: u32,
}

impl TableHeader {
    /// Read the complete table directory of a container.
    ///
    /// # Arguments
    /// * `data` - The complete container
    ///
    /// # Errors
    /// - [`crate::Error::Empty`] if `data` is empty
    /// - [`crate::Error::OutOfBounds`] if the table count itself is truncated
    /// - [`crate::Error::Malformed`] if the directory or any table region exceeds the container
    pub fn read_directory(data: &[u8]) -> Result<Vec<TableHeader>> {
        if data.is_empty() {
            return Err(Error::Empty);
        }

        let mut parser = Parser::new(data);
        let table_count = parser.read_le::<u32>()?;

        let directory_size = table_count as u64 * TABLE_HEADER_SIZE as u64;
        if directory_size > parser.remaining() as u64 {
            return Err(malformed_error!(
                "Table directory of {} entries exceeds container of {} bytes",
                table_count,
                data.len()
            ));
        }

        let mut headers = Vec::with_capacity(table_count as usize);
        for _ in 0..table_count {
            let header = TableHeader {
                table_type: parser.read_le::<u32>()?,
                size: parser.read_le::<u32>()?,
                offset: parser.read_le::<u32>()?,
            };

            if header.end() > data.len() as u64 {
                return Err(malformed_error!(
                    "Table {} at offset {} with size {} exceeds container of {} bytes",
                    header.table_type,
                    header.offset,
                    header.size,
                    data.len()
                ));
            }

            headers.push(header);
        }

        Ok(headers)
    }

    /// The typed table kind, `None` for tags this library does not know
    #[must_use]
    pub fn kind(&self) -> Option<RuntimeDataPartType> {
        RuntimeDataPartType::from_repr(self.table_type)
    }

    /// One past the last byte of the table region
    #[must_use]
    pub fn end(&self) -> u64 {
        u64::from(self.offset) + u64::from(self.size)
    }

    /// Slice the table region out of the container.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the region does not lie inside `data`.
    pub fn data<'a>(&self, data: &'a [u8]) -> Result<&'a [u8]> {
        if self.end() > data.len() as u64 {
            return Err(out_of_bounds_error!());
        }

        Ok(&data[self.offset as usize..self.offset as usize + self.size as usize])
    }
}
