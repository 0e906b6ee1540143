use thiserror::Error;

use crate::rdat::RuntimeDataPartType;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure mode of the decoder is reported through this enum. The input blob is treated as
/// untrusted, so anything that would read outside of a table region is turned into one of the
/// variants below instead of being assumed valid.
///
/// # Error Categories
///
/// ## Container Errors
/// - [`Error::Empty`] - Empty input provided
/// - [`Error::OutOfBounds`] - Attempted to read beyond a buffer boundary
/// - [`Error::Malformed`] - Corrupted or structurally invalid container
/// - [`Error::UnknownTable`] - Unrecognized table tag (only with strict validation)
/// - [`Error::DuplicateTable`] - A table kind declared twice (only with strict validation)
///
/// ## Reference Errors
/// - [`Error::InvalidReference`] - A string offset, index row or record index outside its table
/// - [`Error::InvalidString`] - A string that can not be decoded or widened
///
/// # Examples
///
/// ```rust
/// use rdatscope::{Error, RuntimeReflection};
///
/// match RuntimeReflection::from_mem(vec![0x01, 0x00]) {
///     Ok(_) => println!("Successfully loaded runtime data"),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed blob: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// An out of bound access was attempted while parsing the blob.
    ///
    /// This error occurs when trying to read data beyond the end of the container
    /// or one of its tables. The source location of the failed check is attached.
    #[error("Out of Bound read would have occurred - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The blob is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A reference stored in a record points outside of the table it addresses.
    ///
    /// `reference` is the raw value read from the record: a byte offset for the string
    /// table, a word offset for the index table, or a record index for the resource and
    /// function tables.
    #[error("Reference {reference} is out of range for the {table} table")]
    InvalidReference {
        /// The table the reference was resolved against
        table: RuntimeDataPartType,
        /// The raw reference value
        reference: u32,
    },

    /// The string at the given string table offset is not valid UTF-8, or could not be
    /// converted into a wide string.
    #[error("Invalid string at offset - {0}")]
    InvalidString(u32),

    /// The container declares a table tag this library does not know.
    ///
    /// Unknown tags are skipped unless [`crate::ValidationConfig::reject_unknown_tables`]
    /// is set.
    #[error("Unknown table type - {0}")]
    UnknownTable(u32),

    /// The container declares the same table kind more than once.
    #[error("Table declared more than once - {0}")]
    DuplicateTable(RuntimeDataPartType),
}
