//! Index table for runtime data.
//!
//! The index table is a flat sequence of little-endian `u32` words that encodes many
//! variable-length integer lists. A row starts with a count word, followed by exactly that many
//! element words:
//!
//! ```text
//! word:   0   1   2   3   4   5
//! value:  2   7   9   1   4   0
//!         |-row 0-|   |r3-|   |r5 (empty)
//! ```
//!
//! Rows are addressed by the word offset of their count field, so records can only reference a
//! row by its exact start offset. Every row is checked against the table size before it is
//! handed out.

use std::marker::PhantomData;

use crate::{
    file::io::read_le_at,
    rdat::{IndexRowRef, RowElement, RuntimeDataPartType},
    Error, Result,
};

/// Size in bytes of one index table word
pub const INDEX_WORD_SIZE: usize = 4;

/// Zero-copy view over the index table of a runtime data blob.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexTable<'a> {
    data: &'a [u8],
}

impl<'a> IndexTable<'a> {
    /// Create an `IndexTable` over the provided bytes. A trailing partial word is never
    /// addressable; [`IndexTable::validate`] rejects it.
    #[must_use]
    pub fn from(data: &'a [u8]) -> IndexTable<'a> {
        IndexTable { data }
    }

    /// Check that the table holds a whole number of words.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the size is not a multiple of four.
    pub fn validate(&self) -> Result<()> {
        if self.data.len() % INDEX_WORD_SIZE != 0 {
            return Err(malformed_error!(
                "Index table size {} is not a multiple of {}",
                self.data.len(),
                INDEX_WORD_SIZE
            ));
        }

        Ok(())
    }

    /// Number of complete words in the table
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.data.len() / INDEX_WORD_SIZE
    }

    /// Read a single word of the table.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index` is past the last word.
    pub fn word(&self, index: u32) -> Result<u32> {
        if index as usize >= self.word_count() {
            return Err(Error::InvalidReference {
                table: RuntimeDataPartType::Index,
                reference: index,
            });
        }

        read_le_at::<u32>(self.data, &mut (index as usize * INDEX_WORD_SIZE))
    }

    /// Resolve a row reference.
    ///
    /// The count word at the referenced offset is read and the full row
    /// (`offset + 1 + count` words) must fit inside the table.
    ///
    /// # Errors
    /// - [`crate::Error::InvalidReference`] if the offset is past the last word
    /// - [`crate::Error::Malformed`] if the declared count runs past the end of the table
    pub fn row<T: RowElement>(&self, row: IndexRowRef<T>) -> Result<IndexRow<'a, T>> {
        let count = self.word(row.offset())?;

        let start = row.offset() as usize + 1;
        let end = start as u64 + u64::from(count);
        if end > self.word_count() as u64 {
            return Err(malformed_error!(
                "Index row at {} declares {} elements, but the table only has {} words",
                row.offset(),
                count,
                self.word_count()
            ));
        }

        #[allow(clippy::cast_possible_truncation)]
        let values = &self.data[start * INDEX_WORD_SIZE..end as usize * INDEX_WORD_SIZE];

        Ok(IndexRow {
            values,
            count,
            _marker: PhantomData,
        })
    }
}

/// A bounds-checked row of the index table, yielding elements of reference kind `T`.
#[derive(Clone, Copy, Debug)]
pub struct IndexRow<'a, T> {
    values: &'a [u8],
    count: u32,
    _marker: PhantomData<T>,
}

impl<'a, T: RowElement> IndexRow<'a, T> {
    /// An empty row, used for absent references
    #[must_use]
    pub fn empty() -> Self {
        IndexRow {
            values: &[],
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Number of elements in the row
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns `true` if the row has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the element at position `i`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `i >= count()`.
    pub fn at(&self, i: u32) -> Result<T> {
        if i >= self.count {
            return Err(out_of_bounds_error!());
        }

        let value = read_le_at::<u32>(self.values, &mut (i as usize * INDEX_WORD_SIZE))?;
        Ok(T::from_raw(value))
    }

    /// Iterate over the elements of the row
    #[must_use]
    pub fn iter(&self) -> IndexRowIterator<'a, T> {
        IndexRowIterator {
            row: *self,
            position: 0,
        }
    }
}

impl<'a, T: RowElement> IntoIterator for IndexRow<'a, T> {
    type Item = T;
    type IntoIter = IndexRowIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of an [`IndexRow`].
pub struct IndexRowIterator<'a, T> {
    row: IndexRow<'a, T>,
    position: u32,
}

impl<T: RowElement> Iterator for IndexRowIterator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.row.count {
            return None;
        }

        let value = self.row.at(self.position).ok()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.row.count - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl<T: RowElement> ExactSizeIterator for IndexRowIterator<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdat::{ResourceRef, StringRef};

    #[rustfmt::skip]
    const INDEX_DATA: [u8; 28] = [
        0x02, 0x00, 0x00, 0x00, // row 0: count 2
        0x07, 0x00, 0x00, 0x00, //   7
        0x09, 0x00, 0x00, 0x00, //   9
        0x01, 0x00, 0x00, 0x00, // row 3: count 1
        0x04, 0x00, 0x00, 0x00, //   4
        0x00, 0x00, 0x00, 0x00, // row 5: count 0
        0x05, 0x00, 0x00, 0x00, // row 6: count 5, runs past the end
    ];

    #[test]
    fn crafted() {
        let index = IndexTable::from(&INDEX_DATA);
        index.validate().unwrap();
        assert_eq!(index.word_count(), 7);

        let row = index.row(IndexRowRef::<ResourceRef>::new(0)).unwrap();
        assert_eq!(row.count(), 2);
        assert_eq!(row.at(0).unwrap(), ResourceRef(7));
        assert_eq!(row.at(1).unwrap(), ResourceRef(9));
        assert!(row.at(2).is_err());

        let row = index.row(IndexRowRef::<StringRef>::new(3)).unwrap();
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![StringRef(4)]);

        let row = index.row(IndexRowRef::<u32>::new(5)).unwrap();
        assert!(row.is_empty());
        assert_eq!(row.iter().len(), 0);
    }

    #[test]
    fn row_overruns_table() {
        let index = IndexTable::from(&INDEX_DATA);

        assert!(matches!(
            index.row(IndexRowRef::<u32>::new(6)),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            index.row(IndexRowRef::<u32>::new(7)),
            Err(Error::InvalidReference {
                table: RuntimeDataPartType::Index,
                reference: 7
            })
        ));
    }

    #[test]
    fn row_count_overflow() {
        let data = [0xFF, 0xFF, 0xFF, 0xFE];
        let index = IndexTable::from(&data);

        assert!(index.row(IndexRowRef::<u32>::new(0)).is_err());
    }

    #[test]
    fn partial_word() {
        let data = [0x00, 0x00, 0x00, 0x00, 0x01];
        let index = IndexTable::from(&data);

        assert!(matches!(index.validate(), Err(Error::Malformed { .. })));
        assert_eq!(index.word_count(), 1);
        assert!(index.row(IndexRowRef::<u32>::new(0)).unwrap().is_empty());
        assert!(index.word(1).is_err());
    }
}
