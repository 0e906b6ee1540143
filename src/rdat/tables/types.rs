//! Generic fixed-stride record table.
//!
//! The resource and function tables are both plain arrays of fixed-size records. This module
//! provides the shared machinery: the [`RowReadable`] trait implemented by each raw record type,
//! and [`RecordTable`], which turns a byte region into indexed, bounds-checked access to those
//! records.

use std::marker::PhantomData;

use crate::{rdat::RuntimeDataPartType, Error, Result};

/// A fixed-size record that can be decoded from a table region.
pub trait RowReadable: Sized {
    /// The table kind this record lives in, used for error reporting
    const TABLE: RuntimeDataPartType;

    /// Size of one record in bytes
    fn row_size() -> u32;

    /// Decode one record at `offset`, advancing the offset past it.
    ///
    /// # Arguments
    /// * `data` - The table region
    /// * `offset` - Byte offset of the record, advanced on success
    /// * `index` - The zero-based record index, stored in the decoded row
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated.
    fn row_read(data: &[u8], offset: &mut usize, index: u32) -> Result<Self>;
}

/// Indexed access to an array of fixed-stride records.
#[derive(Debug)]
pub struct RecordTable<'a, T> {
    data: &'a [u8],
    row_count: u32,
    _phantom: PhantomData<T>,
}

// Manual impls, `T` is a marker only
impl<T> Clone for RecordTable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RecordTable<'_, T> {}

impl<T> Default for RecordTable<'_, T> {
    fn default() -> Self {
        RecordTable {
            data: &[],
            row_count: 0,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: RowReadable> RecordTable<'a, T> {
    /// Create a table over `data`. The row count is the number of complete records the region
    /// holds; a trailing partial record is never addressable, see [`RecordTable::validate`].
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the region holds more than `u32::MAX` records.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let row_count = u32::try_from(data.len() / T::row_size() as usize).map_err(|_| {
            malformed_error!("{} table holds too many records", T::TABLE)
        })?;

        Ok(RecordTable {
            data,
            row_count,
            _phantom: PhantomData,
        })
    }

    /// Check that the region is a whole number of records.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a partial record trails the table.
    pub fn validate(&self) -> Result<()> {
        if self.data.len() % T::row_size() as usize != 0 {
            return Err(malformed_error!(
                "{} table size {} is not a multiple of the record size {}",
                T::TABLE,
                self.data.len(),
                T::row_size()
            ));
        }

        Ok(())
    }

    /// Number of records in the table
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Size of one record in bytes
    #[must_use]
    pub fn row_size(&self) -> u32 {
        T::row_size()
    }

    /// Decode the record at the zero-based `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index` is not below [`RecordTable::row_count`].
    pub fn get(&self, index: u32) -> Result<T> {
        if index >= self.row_count {
            return Err(Error::InvalidReference {
                table: T::TABLE,
                reference: index,
            });
        }

        T::row_read(
            self.data,
            &mut (index as usize * T::row_size() as usize),
            index,
        )
    }

    /// Iterate over all records in order
    #[must_use]
    pub fn iter(&self) -> RecordIterator<'a, T> {
        RecordIterator {
            table: *self,
            current_row: 0,
            current_offset: 0,
        }
    }
}

impl<'a, T: RowReadable> IntoIterator for &RecordTable<'a, T> {
    type Item = T;
    type IntoIter = RecordIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential iterator over a [`RecordTable`]
pub struct RecordIterator<'a, T> {
    table: RecordTable<'a, T>,
    current_row: u32,
    current_offset: usize,
}

impl<T: RowReadable> Iterator for RecordIterator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= self.table.row_count {
            return None;
        }

        match T::row_read(self.table.data, &mut self.current_offset, self.current_row) {
            Ok(row) => {
                self.current_row += 1;
                Some(row)
            }
            Err(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.table.row_count - self.current_row) as usize;
        (0, Some(remaining))
    }
}
