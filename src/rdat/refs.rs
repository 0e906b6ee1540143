//! Strongly typed references between runtime data tables.
//!
//! Records address other tables with plain `u32` values whose meaning depends on the field they
//! are stored in. Each meaning gets its own type here, so a resource index can not be resolved
//! against the string table by accident:
//!
//! - [`StringRef`] - byte offset into the string table
//! - [`ResourceRef`] - record index into the resource table
//! - [`IndexRowRef`] - word offset of a row in the index table, tagged with the kind of
//!   reference the row's elements hold
//!
//! Optional references use [`ABSENT_REF`] on disk; [`IndexRowRef::from_raw`] maps it to `None`.

use std::{fmt, marker::PhantomData};

/// On-disk sentinel for an absent optional reference
pub const ABSENT_REF: u32 = u32::MAX;

/// A reference type that can be stored as an element of an index table row.
pub trait RowElement: Copy {
    /// Build the reference from the raw element word
    fn from_raw(value: u32) -> Self;
}

// Untyped access to row elements
impl RowElement for u32 {
    fn from_raw(value: u32) -> Self {
        value
    }
}

/// Byte offset of a nul-terminated string inside the string table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct StringRef(pub u32);

impl StringRef {
    /// The raw byte offset
    #[must_use]
    pub fn offset(self) -> u32 {
        self.0
    }
}

impl RowElement for StringRef {
    fn from_raw(value: u32) -> Self {
        StringRef(value)
    }
}

impl fmt::Display for StringRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "str:{:#x}", self.0)
    }
}

/// Flat index of a record inside the resource table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ResourceRef(pub u32);

impl ResourceRef {
    /// The raw record index
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl RowElement for ResourceRef {
    fn from_raw(value: u32) -> Self {
        ResourceRef(value)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "res:{}", self.0)
    }
}

/// Word offset of a row's count field inside the index table.
///
/// Rows are variable-length, so this is not a row ordinal. `T` names the reference kind of
/// the row's elements.
pub struct IndexRowRef<T> {
    offset: u32,
    _marker: PhantomData<T>,
}

impl<T> IndexRowRef<T> {
    /// Reference the row starting at word `offset`
    #[must_use]
    pub fn new(offset: u32) -> Self {
        IndexRowRef {
            offset,
            _marker: PhantomData,
        }
    }

    /// Decode an optional row reference, mapping [`ABSENT_REF`] to `None`
    #[must_use]
    pub fn from_raw(value: u32) -> Option<Self> {
        if value == ABSENT_REF {
            None
        } else {
            Some(Self::new(value))
        }
    }

    /// The word offset of the row's count field
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

// Manual impls: derives would put bounds on `T`, which is only a marker.
impl<T> Clone for IndexRowRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IndexRowRef<T> {}

impl<T> PartialEq for IndexRowRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<T> Eq for IndexRowRef<T> {}

impl<T> fmt::Debug for IndexRowRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexRowRef").field(&self.offset).finish()
    }
}
