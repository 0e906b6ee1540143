//! Zero-copy decoding of DXIL runtime data (RDAT) blobs.
//!
//! A runtime data blob is a small container embedded in compiled shader libraries. It holds a
//! table directory followed by up to four sub-tables, which reference each other by offset
//! and index:
//!
//! ```text
//!   Function ──name/unmangled──────────────▶ String
//!      │  └──resources row──▶ Index ──▶ Resource ──name──▶ String
//!      └─────dependencies row──▶ Index ──▶ String
//! ```
//!
//! # Architecture
//!
//! - [`TableHeader`] reads the directory and checks every region against the container
//! - [`tables`] holds one reader per sub-table, each borrowing its region
//! - [`DxilRuntimeData`] dispatches the regions to the readers and bundles them into a
//!   [`RuntimeDataContext`]
//! - [`tables::FunctionReader`] and [`tables::ResourceReader`] resolve references lazily
//!   through that context
//! - [`RuntimeDataView`] owns the bytes, for callers that need a `'static` handle
//!
//! All accessors are bounds checked. A damaged blob produces an [`crate::Error`], never a
//! read outside of the buffer, regardless of the [`ValidationConfig`] in use.
//!
//! # Examples
//!
//! ```rust
//! use rdatscope::rdat::{DxilRuntimeData, ShaderKind};
//!
//! #[rustfmt::skip]
//! let container = [
//!     0x02, 0x00, 0x00, 0x00,             // two tables
//!     0x01, 0x00, 0x00, 0x00,             // String
//!     0x08, 0x00, 0x00, 0x00,
//!     0x1C, 0x00, 0x00, 0x00,
//!     0x02, 0x00, 0x00, 0x00,             // Function
//!     0x2C, 0x00, 0x00, 0x00,
//!     0x24, 0x00, 0x00, 0x00,
//!     b'm', b'a', b'i', b'n', 0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,             // name
//!     0x00, 0x00, 0x00, 0x00,             // unmangled name
//!     0xFF, 0xFF, 0xFF, 0xFF,             // no resources
//!     0xFF, 0xFF, 0xFF, 0xFF,             // no dependencies
//!     0x06, 0x00, 0x00, 0x00,             // Library
//!     0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//! ];
//!
//! let runtime_data = DxilRuntimeData::from(&container)?;
//! let function = runtime_data.function(0)?;
//! assert_eq!(function.name()?, "main");
//! assert_eq!(function.shader_kind(), Some(ShaderKind::Library));
//! assert_eq!(function.resource_count()?, 0);
//! # Ok::<(), rdatscope::Error>(())
//! ```

mod config;
mod context;
pub mod flags;
mod header;
mod refs;
mod runtimedata;
pub mod tables;
mod types;
mod view;

pub use config::ValidationConfig;
pub use context::RuntimeDataContext;
pub use flags::ShaderFeatureFlags;
pub use header::{TableHeader, TABLE_HEADER_SIZE};
pub use refs::{IndexRowRef, ResourceRef, RowElement, StringRef, ABSENT_REF};
pub use runtimedata::DxilRuntimeData;
pub use tables::{
    FunctionReader, FunctionTable, IndexRow, IndexTable, ResourceReader, ResourceTable,
    StringTable,
};
pub use types::{ResourceClass, ResourceKind, RuntimeDataPartType, ShaderKind};
pub use view::RuntimeDataView;
