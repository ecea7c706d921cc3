// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! StbData - Decoded structural model

use crate::members::{
    load_beams, load_braces, load_columns, load_girders, load_nodes, load_posts, load_slabs,
    load_walls,
};
use crate::schema::Schema;
use crate::sections::{
    load_sec_beam_rc, load_sec_beam_s, load_sec_brace_s, load_sec_column_rc, load_sec_column_s,
    load_sec_steel, SteelIndex,
};

use roxmltree::Document;
use serde::Serialize;
use stb_lite_model::{
    ModelMetadata, ParseError, Result, StbBeams, StbBraces, StbColumns, StbGirders, StbModel,
    StbNodes, StbPosts, StbSecBeamRc, StbSecBeamS, StbSecBraceS, StbSecColumnRc, StbSecColumnS,
    StbSecSteel, StbSlabs, StbWalls, Tolerance,
};

/// Number of collections loaded, used for progress percentages
const PHASES: f32 = 14.0;

/// Fully decoded STB document implementing the `StbModel` trait
///
/// Collections are loaded in a fixed order and the whole load fails on the
/// first malformed element.
#[derive(Clone, Debug, Serialize)]
pub struct StbData {
    pub metadata: ModelMetadata,
    pub nodes: StbNodes,
    pub slabs: StbSlabs,
    pub walls: StbWalls,
    pub columns: StbColumns,
    pub posts: StbPosts,
    pub girders: StbGirders,
    pub beams: StbBeams,
    pub braces: StbBraces,
    pub sec_column_rc: StbSecColumnRc,
    pub sec_column_s: StbSecColumnS,
    pub sec_beam_rc: StbSecBeamRc,
    pub sec_beam_s: StbSecBeamS,
    pub sec_brace_s: StbSecBraceS,
    pub sec_steel: StbSecSteel,
    #[serde(skip)]
    steel_index: SteelIndex,
}

impl StbData {
    /// Parse STB text and decode it
    pub fn parse(content: &str, tolerance: Tolerance) -> Result<Self> {
        let doc = parse_document(content)?;
        Self::load(&doc, tolerance)
    }

    /// Parse STB text and decode it with progress reporting
    pub fn parse_with_progress(
        content: &str,
        tolerance: Tolerance,
        on_progress: &dyn Fn(&str, f32),
    ) -> Result<Self> {
        on_progress("Parsing XML", 0.0);
        let doc = parse_document(content)?;
        Self::load_with_progress(&doc, tolerance, on_progress)
    }

    /// Decode an already parsed document
    pub fn load(doc: &Document<'_>, tolerance: Tolerance) -> Result<Self> {
        Self::load_with_progress(doc, tolerance, &|_, _| {})
    }

    /// Decode an already parsed document with progress reporting
    ///
    /// The callback receives (phase_name, percent_complete) after each
    /// collection.
    pub fn load_with_progress(
        doc: &Document<'_>,
        tolerance: Tolerance,
        on_progress: &dyn Fn(&str, f32),
    ) -> Result<Self> {
        let schema = Schema::resolve(doc)?;
        let mut phase = 0.0;
        let mut step = |name: &str| {
            phase += 1.0;
            on_progress(name, phase / PHASES * 100.0);
        };

        let nodes = load_nodes(doc, &schema)?;
        step("Nodes");
        let slabs = load_slabs(doc, &schema)?;
        step("Slabs");
        let walls = load_walls(doc, &schema)?;
        step("Walls");
        let columns = load_columns(doc, &schema)?;
        step("Columns");
        let posts = load_posts(doc, &schema)?;
        step("Posts");
        let girders = load_girders(doc, &schema)?;
        step("Girders");
        let beams = load_beams(doc, &schema)?;
        step("Beams");
        let braces = load_braces(doc, &schema)?;
        step("Braces");
        let sec_column_rc = load_sec_column_rc(doc, &schema)?;
        step("RC column sections");
        let sec_column_s = load_sec_column_s(doc, &schema)?;
        step("S column sections");
        let sec_beam_rc = load_sec_beam_rc(doc, &schema)?;
        step("RC beam sections");
        let sec_beam_s = load_sec_beam_s(doc, &schema)?;
        step("S beam sections");
        let sec_brace_s = load_sec_brace_s(doc, &schema)?;
        step("S brace sections");
        let sec_steel = load_sec_steel(doc, &schema)?;
        step("Steel shapes");

        log::info!(
            "Decoded STB {}: {} nodes, {} members, {} sections, {} steel shapes",
            schema.version(),
            nodes.len(),
            columns.len()
                + posts.len()
                + girders.len()
                + beams.len()
                + braces.len()
                + slabs.len()
                + walls.len(),
            sec_column_rc.len()
                + sec_column_s.len()
                + sec_beam_rc.len()
                + sec_beam_s.len()
                + sec_brace_s.len(),
            sec_steel.len()
        );

        let metadata = ModelMetadata {
            version: schema.version(),
            version_string: schema.version_string().to_string(),
            namespace: schema.namespace().map(str::to_string),
            tolerance,
        };
        let steel_index = SteelIndex::build(&sec_steel);

        Ok(Self {
            metadata,
            nodes,
            slabs,
            walls,
            columns,
            posts,
            girders,
            beams,
            braces,
            sec_column_rc,
            sec_column_s,
            sec_beam_rc,
            sec_beam_s,
            sec_brace_s,
            sec_steel,
            steel_index,
        })
    }

    /// Row of the steel catalog entry called `name`
    pub fn steel_shape_index(&self, name: &str) -> Option<usize> {
        self.steel_index.get(name)
    }

    pub fn tolerance(&self) -> Tolerance {
        self.metadata.tolerance
    }

    /// Serialize every collection and the metadata as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ParseError::other(e.to_string()))
    }
}

/// Parse XML text into a document tree
pub(crate) fn parse_document(content: &str) -> Result<Document<'_>> {
    Document::parse(content).map_err(|e| match e {
        roxmltree::Error::NoRootNode => ParseError::MissingRoot,
        e => ParseError::xml(e.to_string()),
    })
}

impl StbModel for StbData {
    fn nodes(&self) -> &StbNodes {
        &self.nodes
    }

    fn columns(&self) -> &StbColumns {
        &self.columns
    }

    fn posts(&self) -> &StbPosts {
        &self.posts
    }

    fn girders(&self) -> &StbGirders {
        &self.girders
    }

    fn beams(&self) -> &StbBeams {
        &self.beams
    }

    fn braces(&self) -> &StbBraces {
        &self.braces
    }

    fn slabs(&self) -> &StbSlabs {
        &self.slabs
    }

    fn walls(&self) -> &StbWalls {
        &self.walls
    }

    fn sec_column_rc(&self) -> &StbSecColumnRc {
        &self.sec_column_rc
    }

    fn sec_column_s(&self) -> &StbSecColumnS {
        &self.sec_column_s
    }

    fn sec_beam_rc(&self) -> &StbSecBeamRc {
        &self.sec_beam_rc
    }

    fn sec_beam_s(&self) -> &StbSecBeamS {
        &self.sec_beam_s
    }

    fn sec_brace_s(&self) -> &StbSecBraceS {
        &self.sec_brace_s
    }

    fn sec_steel(&self) -> &StbSecSteel {
        &self.sec_steel
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
