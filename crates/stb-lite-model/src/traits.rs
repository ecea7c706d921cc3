// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for STB decoding
//!
//! These traits define the seam between a decoder backend and its consumers.

use crate::{
    ModelMetadata, Result, StbBeams, StbBraces, StbColumns, StbGirders, StbNodes, StbPosts,
    StbSecBeamRc, StbSecBeamS, StbSecBraceS, StbSecColumnRc, StbSecColumnS, StbSecSteel,
    StbSlabs, StbWalls,
};
use std::sync::Arc;

/// Progress callback type for decoding operations
pub type ProgressCallback = Box<dyn Fn(&str, f32) + Send>;

/// Main parsing interface - entry point for decoding STB content
///
/// # Example
///
/// ```ignore
/// use stb_lite_model::{StbParser, StbModel};
///
/// let parser: Box<dyn StbParser> = get_parser();
/// let model = parser.parse(stb_content)?;
/// println!("Version: {}", model.metadata().version);
/// ```
pub trait StbParser: Send + Sync {
    /// Decode STB content and return a model
    fn parse(&self, content: &str) -> Result<Arc<dyn StbModel>>;

    /// Decode STB content with progress reporting
    ///
    /// The callback receives (phase_name, percent_complete).
    fn parse_with_progress(
        &self,
        content: &str,
        on_progress: ProgressCallback,
    ) -> Result<Arc<dyn StbModel>>;
}

/// Read-only access to a decoded structural model
///
/// Every collection is column oriented: index `i` of each accessor slice
/// describes the same element.
pub trait StbModel: Send + Sync {
    fn nodes(&self) -> &StbNodes;
    fn columns(&self) -> &StbColumns;
    fn posts(&self) -> &StbPosts;
    fn girders(&self) -> &StbGirders;
    fn beams(&self) -> &StbBeams;
    fn braces(&self) -> &StbBraces;
    fn slabs(&self) -> &StbSlabs;
    fn walls(&self) -> &StbWalls;

    fn sec_column_rc(&self) -> &StbSecColumnRc;
    fn sec_column_s(&self) -> &StbSecColumnS;
    fn sec_beam_rc(&self) -> &StbSecBeamRc;
    fn sec_beam_s(&self) -> &StbSecBeamS;
    fn sec_brace_s(&self) -> &StbSecBraceS;
    fn sec_steel(&self) -> &StbSecSteel;

    /// Version, namespace and tolerances
    fn metadata(&self) -> &ModelMetadata;
}
