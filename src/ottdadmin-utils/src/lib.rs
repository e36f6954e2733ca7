//! Shared utility code throughout the ottdadmin project.
//!
//! None of the modules here depend on each other. They are small
//! building blocks for admin protocol clients: converting the game's
//! date encoding, attaching lazily created loggers to types, bulk
//! assignment of record fields, and normalizing text and bytes.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use serde_json;
pub use thiserror;

pub mod case;
pub mod dataclass;
pub mod date;
pub mod logging;
pub mod text;

mod error;
pub use error::Error;
