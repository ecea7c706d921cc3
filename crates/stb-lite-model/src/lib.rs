// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STB-Lite Model - Shared types for ST-Bridge structural models
//!
//! This crate provides the in-memory representation produced by an ST-Bridge
//! (STB) decoder, independent of which schema generation the document used.
//!
//! # Architecture
//!
//! - [`StbParser`] - Entry point for decoding STB content
//! - [`StbModel`] - Read-only access to a decoded model
//! - Column-oriented collections ([`StbNodes`], [`StbColumns`], [`StbSecSteel`], ...)
//!   built through the [`Columnar`] trait
//! - [`defaults`] - The default value used for every optional attribute
//!
//! # Example
//!
//! ```ignore
//! use stb_lite_model::{StbParser, StbModel};
//!
//! let parser: Box<dyn StbParser> = get_parser();
//! let model = parser.parse(stb_content)?;
//!
//! let columns = model.columns();
//! for i in 0..columns.len() {
//!     println!("{} on section {}", columns.name()[i], columns.id_section()[i]);
//! }
//! ```

#[macro_use]
pub mod columnar;

pub mod defaults;
pub mod error;
pub mod members;
pub mod sections;
pub mod traits;
pub mod types;

// Re-export all public types
pub use columnar::Columnar;
pub use error::*;
pub use members::*;
pub use sections::*;
pub use traits::*;
pub use types::*;
