// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # rdatscope
//!
//! A safe, zero-copy reader for DXIL runtime data (RDAT) blobs, the compact table container
//! that compiled shader libraries carry to describe their functions, resource bindings and
//! inter-function dependencies.
//!
//! ## Features
//!
//! - **Zero-copy table readers** - strings, index rows and records are decoded in place
//! - **Untrusted input** - every offset and count is bounds checked; damaged blobs produce an
//!   [`Error`], never an out of bounds read
//! - **Typed references** - string offsets, resource indices and index rows can not be mixed up
//! - **Owned reflection** - a self-contained descriptor graph with shared UTF-16 names
//!
//! ## Quick Start
//!
//! ```rust
//! use rdatscope::prelude::*;
//!
//! #[rustfmt::skip]
//! let container = vec![
//!     0x01, 0x00, 0x00, 0x00,             // one table
//!     0x01, 0x00, 0x00, 0x00,             // String
//!     0x08, 0x00, 0x00, 0x00,             // 8 bytes
//!     0x10, 0x00, 0x00, 0x00,             // at offset 16
//!     b'F', b'o', b'o', 0x00, b'B', b'a', b'r', 0x00,
//! ];
//!
//! let reflection = RuntimeReflection::from_mem(container)?;
//! println!("{} functions", reflection.library().num_functions());
//!
//! let strings = reflection.runtime_data().string_table();
//! assert_eq!(strings.get(StringRef(4))?, "Bar");
//! # Ok::<(), rdatscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`rdat`] - The container parser, the four table readers and the lazy view objects
//! - [`reflection`] - The materializer producing an owned [`reflection::LibraryDesc`]
//! - [`prelude`] - Glob import of the commonly used types
//!
//! Loading is controlled by [`ValidationConfig`], which decides how much of the structural
//! contract is checked up front. Bounds checks are always on.

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use rdatscope::prelude::*;
///
/// let config = ValidationConfig::strict();
/// assert!(RuntimeReflection::from_mem_with_config(Vec::new(), config).is_err());
/// ```
pub mod prelude;

pub mod rdat;
pub mod reflection;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `rdatscope` Error type
///
/// # Examples
///
/// ```rust
/// use rdatscope::{Error, RuntimeReflection};
///
/// match RuntimeReflection::from_mem(vec![0x00]) {
///     Ok(_) => println!("Loaded successfully"),
///     Err(Error::OutOfBounds { .. }) => println!("Truncated blob"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// Low-level cursor over little-endian data
pub use file::parser::Parser;

/// Parsed container with zero-copy table readers
pub use rdat::{DxilRuntimeData, ValidationConfig};

/// Main entry point: parse a container and materialize its library
pub use reflection::RuntimeReflection;
