//! File Size - A storage quantity value type for Rust
//!
//! This crate provides [`FileSize`], a signed byte count with views onto a
//! fixed binary unit ladder (bits, bytes, KB, MB, GB, TB), a forgiving parser
//! for human-written sizes and a canonical human-readable rendering.
//!
//! # Features
//!
//! - **Unit views**: read a size in any unit, or build one from a fractional
//!   amount of a unit with `with_*` / `from_*`
//! - **Parsing**: `"2 GB"`, `"212.5tb"`, `"21B"` and `"21"` all parse
//! - **Formatting**: `Display` picks the largest fitting unit, e.g. `"1.5 GB"`
//! - **Arithmetic**: saturating `+` and `-`, with checked variants
//! - **serde** (optional feature): serialize as a byte count, deserialize from
//!   a byte count or a size string
//!
//! # Examples
//!
//! ```rust
//! use file_size::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let download = FileSize::parse("212.5tb")?;
//!     println!("Download: {}", download);
//!
//!     let left = download - FileSize::from_gigabytes(512.0);
//!     assert!(left < download);
//!     assert_eq!(FileSize::parse("2 GB")?.to_string(), "2 GB");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Parsing fails with a crate-level [`Error`]:
//!
//! ```rust
//! use file_size::{Error, FileSize};
//!
//! match FileSize::parse("5xx") {
//!     Err(Error::UnsupportedUnit(unit)) => assert_eq!(unit, "xx"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! // try_parse never fails
//! assert!(FileSize::try_parse("5xx").is_none());
//! ```
//!
//! # Thread Safety
//!
//! `FileSize` is a `Copy` value with no interior mutability, so it is `Send`
//! and `Sync`.

#![doc(html_root_url = "https://docs.rs/file-size/0.1.0")]

pub mod error;
pub mod size;

pub use error::{Error, Result};
pub use size::{FileSize, SizeUnit};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::Error;
    pub use crate::Result;
    pub use crate::size::constants::{GIGABYTE, KILOBYTE, MEGABYTE, TERABYTE};
    pub use crate::size::{FileSize, SizeUnit};
}
