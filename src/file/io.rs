//! Low-level byte order and safe reading utilities for runtime data parsing.
//!
//! Every field of the runtime data container is stored little-endian, so this module only
//! carries the little-endian half of the reading helpers. All functions are bounds-checked and
//! return [`crate::Error::OutOfBounds`] instead of reading past the end of the provided slice.
//!
//! # Key Components
//!
//! - [`crate::file::io::RdatIO`] - Trait for primitive types that can be decoded from bytes
//! - [`crate::file::io::read_le_at`] - Read a value at an offset and advance the offset
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use rdatscope::file::io::read_le_at;
//!
//! let data = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
//! let mut offset = 0;
//!
//! let first: u32 = read_le_at(&data, &mut offset)?;  // offset: 0 -> 4
//! let second: u32 = read_le_at(&data, &mut offset)?; // offset: 4 -> 8
//!
//! assert_eq!(first, 1);
//! assert_eq!(second, 2);
//! # Ok::<(), rdatscope::Error>(())
//! ```

use crate::Result;

/// Trait for primitive types that can be decoded from a fixed number of little-endian bytes.
pub trait RdatIO: Sized {
    /// The fixed-size byte representation of this type
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Decode a value from its little-endian byte representation
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

// Implement RdatIO support for u64
impl RdatIO for u64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u64::from_le_bytes(bytes)
    }
}

// Implement RdatIO support for u32
impl RdatIO for u32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }
}

// Implement RdatIO support for u16
impl RdatIO for u16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u16::from_le_bytes(bytes)
    }
}

// Implement RdatIO support for u8
impl RdatIO for u8 {
    type Bytes = [u8; 1];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u8::from_le_bytes(bytes)
    }
}

/// Safely reads a value of type `T` in little-endian byte order at `offset`, advancing the
/// offset by the size of `T` on success.
///
/// # Arguments
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the read position, advanced after a successful read
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + size_of::<T>()` exceeds the buffer.
pub fn read_le_at<T: RdatIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(out_of_bounds_error!());
    };

    if end > data.len() {
        return Err(out_of_bounds_error!());
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(out_of_bounds_error!());
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}
