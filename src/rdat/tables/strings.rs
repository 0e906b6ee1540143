//! String table for runtime data.
//!
//! The string table is a flat region of nul-terminated UTF-8 strings. Records reference a
//! string purely by the byte offset of its first character (see [`StringRef`]), so the table
//! itself carries no index: every lookup scans forward from the offset to the next nul.
//!
//! Offsets come from an untrusted blob. A lookup outside of the table, a string without a
//! terminator, or bytes that are not UTF-8 are reported as errors instead of being read.

use std::{ffi::CStr, str};

use crate::{
    rdat::{RuntimeDataPartType, StringRef},
    Error, Result,
};

/// Zero-copy view over the string table of a runtime data blob.
///
/// # Examples
///
/// ```rust
/// use rdatscope::rdat::{StringRef, StringTable};
///
/// let strings = StringTable::from(b"Foo\0Bar\0");
/// assert_eq!(strings.get(StringRef(4))?, "Bar");
/// # Ok::<(), rdatscope::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Create a `StringTable` over the provided bytes. No validation is performed here, see
    /// [`StringTable::validate`].
    ///
    /// # Arguments
    /// * 'data' - The byte slice holding the string table region
    #[must_use]
    pub fn from(data: &'a [u8]) -> StringTable<'a> {
        StringTable { data }
    }

    /// Check that the table is either empty or ends with a nul byte, which guarantees every
    /// in-range offset has a terminator.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the final byte is not nul.
    pub fn validate(&self) -> Result<()> {
        match self.data.last() {
            None | Some(0) => Ok(()),
            Some(_) => Err(malformed_error!(
                "String table of {} bytes is not nul-terminated",
                self.data.len()
            )),
        }
    }

    /// Size of the table in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the table holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw bytes of the table
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Get the string starting at the referenced offset, without its terminating nul.
    ///
    /// ## Arguments
    /// * 'offset' - The byte offset of the first character (comes from a record)
    ///
    /// # Errors
    /// - [`crate::Error::InvalidReference`] if the offset is not inside the table
    /// - [`crate::Error::Malformed`] if no nul terminator follows the offset
    /// - [`crate::Error::InvalidString`] if the bytes are not valid UTF-8
    pub fn get(&self, offset: StringRef) -> Result<&'a str> {
        let start = offset.offset() as usize;
        if start >= self.data.len() {
            return Err(Error::InvalidReference {
                table: RuntimeDataPartType::String,
                reference: offset.offset(),
            });
        }

        let Ok(result) = CStr::from_bytes_until_nul(&self.data[start..]) else {
            return Err(malformed_error!(
                "String at offset {} is not terminated",
                offset.offset()
            ));
        };

        result
            .to_str()
            .map_err(|_| Error::InvalidString(offset.offset()))
    }

    /// Iterate over all strings in the table in storage order, together with their offsets
    #[must_use]
    pub fn iter(&self) -> StringTableIterator<'a> {
        StringTableIterator {
            data: self.data,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for &StringTable<'a> {
    type Item = Result<(StringRef, &'a str)>;
    type IntoIter = StringTableIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential iterator over a [`StringTable`].
///
/// Stops after the first error, since the position of the following string can not be
/// determined once a terminator is missing.
pub struct StringTableIterator<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Iterator for StringTableIterator<'a> {
    type Item = Result<(StringRef, &'a str)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.data.len() {
            return None;
        }

        let start = self.position;
        let Ok(offset) = u32::try_from(start) else {
            self.position = self.data.len();
            return Some(Err(malformed_error!("String table larger than 4GiB")));
        };

        let remaining = &self.data[start..];
        let Some(length) = remaining.iter().position(|byte| *byte == 0) else {
            self.position = self.data.len();
            return Some(Err(malformed_error!(
                "String at offset {} is not terminated",
                offset
            )));
        };

        self.position = start + length + 1;
        match str::from_utf8(&remaining[..length]) {
            Ok(value) => Some(Ok((StringRef(offset), value))),
            Err(_) => Some(Err(Error::InvalidString(offset))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crafted() {
        #[rustfmt::skip]
        let data: [u8; 32] = [
            b'm', b'a', b'i', b'n', 0x00,
            b'\x01', b'?', b'R', b'a', b'y', b'G', b'e', b'n', 0x00,
            b'g', b'_', b'S', b'c', b'e', b'n', b'e', 0x00,
            b'C', b'B', 0x00,
            0x00,
            b'o', b'u', b't', b'p', b't', 0x00,
        ];

        let strings = StringTable::from(&data);
        strings.validate().unwrap();

        assert_eq!(strings.get(StringRef(0)).unwrap(), "main");
        assert_eq!(strings.get(StringRef(5)).unwrap(), "\u{1}?RayGen");
        assert_eq!(strings.get(StringRef(14)).unwrap(), "g_Scene");
        assert_eq!(strings.get(StringRef(16)).unwrap(), "Scene");
        assert_eq!(strings.get(StringRef(25)).unwrap(), "");
        assert_eq!(strings.get(StringRef(26)).unwrap(), "outpt");
    }

    #[test]
    fn out_of_range() {
        let strings = StringTable::from(b"Foo\0");

        assert!(matches!(
            strings.get(StringRef(4)),
            Err(Error::InvalidReference {
                table: RuntimeDataPartType::String,
                reference: 4
            })
        ));
        assert!(strings.get(StringRef(u32::MAX)).is_err());

        let empty = StringTable::default();
        assert!(empty.validate().is_ok());
        assert!(empty.get(StringRef(0)).is_err());
    }

    #[test]
    fn unterminated() {
        let strings = StringTable::from(b"Foo\0Bar");

        assert!(matches!(strings.validate(), Err(Error::Malformed { .. })));
        assert_eq!(strings.get(StringRef(0)).unwrap(), "Foo");
        assert!(matches!(
            strings.get(StringRef(4)),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn invalid_utf8() {
        let data = [b'A', 0xFF, 0xFE, 0x00, b'B', 0x00];
        let strings = StringTable::from(&data);

        assert!(matches!(strings.get(StringRef(0)), Err(Error::InvalidString(0))));
        assert_eq!(strings.get(StringRef(4)).unwrap(), "B");
    }

    #[test]
    fn iterate() {
        let strings = StringTable::from(b"Foo\0\0Bar\0");
        let collected: Vec<(StringRef, &str)> =
            strings.iter().collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(
            collected,
            vec![(StringRef(0), "Foo"), (StringRef(4), ""), (StringRef(5), "Bar")]
        );

        let broken = StringTable::from(b"Foo\0Bar");
        let mut iter = broken.iter();
        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }
}
