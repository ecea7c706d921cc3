// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STB-Lite Parser - ST-Bridge structural model decoder
//!
//! This crate decodes ST-Bridge (STB) XML documents of either schema
//! generation into the column-oriented collections defined in
//! `stb-lite-model`.
//!
//! # Features
//!
//! - **Both generations** - Ver1 (`1.x`) and Ver2 (`2.x`, namespaced) documents
//! - **Schema adapter** - version-specific names resolved in one place
//! - **Explicit defaults** - every optional attribute falls back to a documented value
//! - **Steel shape catalog** - eleven parametric shape kinds normalized to six slots
//! - **Progress reporting** per decoded collection
//!
//! # Example
//!
//! ```ignore
//! use stb_lite_parser::StbReader;
//! use stb_lite_model::StbParser;
//!
//! let reader = StbReader::new().with_tolerance(10.0, 0.01);
//! let model = reader.parse(stb_content)?;
//!
//! println!("{} columns", model.columns().len());
//! ```

mod loader;
mod members;
mod model;
mod schema;
mod sections;
mod xml;

pub use model::StbData;
pub use schema::{Attr, Element, Schema};
pub use sections::{BeamFigure, ColumnFigure, SteelFigure, SteelIndex};

use roxmltree::Document;
use stb_lite_model::{ProgressCallback, Result, StbModel, StbParser, Tolerance};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Main STB decoder implementing the `StbParser` trait
///
/// Carries the caller's tolerances, which are stored on the decoded model
/// and not interpreted during decoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct StbReader {
    /// Tolerances recorded in the model metadata
    pub tolerance: Tolerance,
}

impl StbReader {
    /// Create a reader with zero tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length and angle tolerances
    pub fn with_tolerance(mut self, length: f64, angle: f64) -> Self {
        self.tolerance = Tolerance::new(length, angle);
        self
    }

    /// Decode STB text into the concrete model type
    pub fn read(&self, content: &str) -> Result<StbData> {
        StbData::parse(content, self.tolerance)
    }

    /// Read and decode an STB file
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<StbData> {
        let path = path.as_ref();
        log::debug!("Reading {}", path.display());
        let content = fs::read_to_string(path)?;
        self.read(&content)
    }

    /// Decode an already parsed document
    pub fn read_document(&self, doc: &Document<'_>) -> Result<StbData> {
        StbData::load(doc, self.tolerance)
    }
}

impl StbParser for StbReader {
    fn parse(&self, content: &str) -> Result<Arc<dyn StbModel>> {
        self.read(content).map(|m| Arc::new(m) as Arc<dyn StbModel>)
    }

    fn parse_with_progress(
        &self,
        content: &str,
        on_progress: ProgressCallback,
    ) -> Result<Arc<dyn StbModel>> {
        StbData::parse_with_progress(content, self.tolerance, &*on_progress)
            .map(|m| Arc::new(m) as Arc<dyn StbModel>)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<Arc<dyn StbModel>> {
    StbReader::new().parse(content)
}

/// Decode a parsed document with the given tolerances
pub fn load(doc: &Document<'_>, tolerance_length: f64, tolerance_angle: f64) -> Result<StbData> {
    StbReader::new()
        .with_tolerance(tolerance_length, tolerance_angle)
        .read_document(doc)
}

/// Parse with progress reporting
pub fn parse_with_progress(
    content: &str,
    on_progress: impl Fn(&str, f32) + Send + 'static,
) -> Result<Arc<dyn StbModel>> {
    StbReader::new().parse_with_progress(content, Box::new(on_progress))
}
