// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross-section collections
//!
//! RC sections carry resolved plan dimensions and a bar arrangement vector;
//! steel sections carry the name of the steel shape they use, which can be
//! looked up in [`StbSecSteel`].

use crate::{BaseType, KindBeam, KindBrace, KindColumn, ShapeType, SteelShapeKind};

columnar! {
    /// All `StbSecColumn_RC` elements
    pub struct StbSecColumnRc => SecColumnRcRecord {
        /// Section id
        id: i32,
        /// Section name
        name: String,
        /// Floor name, empty when absent
        floor: String,
        /// Main column or post
        kind_column: KindColumn,
        /// Width (X extent, or diameter for circular sections)
        width: f64,
        /// Height (Y extent, 0 for circular sections)
        height: f64,
        /// True for rectangular sections
        is_rect: bool,
        /// Bar arrangement: main X/Y 1st, main X/Y 2nd, main total,
        /// band pitch, band count X/Y. Empty for Ver2 documents.
        bar_list: Vec<f64>,
    }
}

columnar! {
    /// All `StbSecBeam_RC` elements
    pub struct StbSecBeamRc => SecBeamRcRecord {
        /// Section id
        id: i32,
        /// Section name
        name: String,
        /// Floor name, empty when absent
        floor: String,
        /// Girder or secondary beam
        kind_beam: KindBeam,
        /// Foundation beam flag
        is_foundation: bool,
        /// Cantilever flag
        is_canti: bool,
        /// Outer/inner end flag
        is_out_in: bool,
        /// Width
        width: f64,
        /// Depth
        depth: f64,
        /// Bar arrangement: main top/bottom 1st, 2nd, 3rd, stirrup pitch,
        /// stirrup count. Empty for Ver2 documents.
        bar_list: Vec<f64>,
    }
}

columnar! {
    /// All `StbSecColumn_S` elements
    pub struct StbSecColumnS => SecColumnSRecord {
        /// Section id
        id: i32,
        /// Section name
        name: String,
        /// Floor name, empty when absent
        floor: String,
        /// Main column or post
        kind_column: KindColumn,
        /// Whether the steel shape's reference direction is the member X axis
        direction: bool,
        /// Column base fixity
        base_type: BaseType,
        /// Joint id at the column head, -1 when absent
        joint_id_top: i32,
        /// Joint id at the column base, -1 when absent
        joint_id_bottom: i32,
        /// Position of the representative steel descriptor
        pos: String,
        /// Steel shape name
        shape: String,
        /// Main steel grade
        strength_main: String,
        /// Web steel grade, empty when absent
        strength_web: String,
    }
}

columnar! {
    /// All `StbSecBeam_S` elements
    pub struct StbSecBeamS => SecBeamSRecord {
        /// Section id
        id: i32,
        /// Section name
        name: String,
        /// Floor name, empty when absent
        floor: String,
        /// Girder or secondary beam
        kind_beam: KindBeam,
        /// Cantilever flag
        is_canti: bool,
        /// Outer/inner end flag
        is_out_in: bool,
        /// Joint id at the start, -1 when absent
        joint_id_start: i32,
        /// Joint id at the end, -1 when absent
        joint_id_end: i32,
        /// Position of the representative steel descriptor
        pos: String,
        /// Steel shape name
        shape: String,
        /// Main steel grade
        strength_main: String,
        /// Web steel grade, empty when absent
        strength_web: String,
    }
}

columnar! {
    /// All `StbSecBrace_S` elements
    pub struct StbSecBraceS => SecBraceSRecord {
        /// Section id
        id: i32,
        /// Section name
        name: String,
        /// Floor name, empty when absent
        floor: String,
        /// Horizontal or vertical brace
        kind_brace: KindBrace,
        /// Position of the representative steel descriptor
        pos: String,
        /// Steel shape name
        shape: String,
        /// Main steel grade
        strength_main: String,
        /// Web steel grade, empty when absent
        strength_web: String,
    }
}

columnar! {
    /// Combined steel shape catalog (children of `StbSecSteel`)
    ///
    /// Kinds appear grouped, in [`SteelShapeKind::ALL`] order; within a kind
    /// rows keep document order.
    pub struct StbSecSteel => SteelShapeRecord {
        /// Shape name, referenced by steel sections
        name: String,
        /// Catalog the row came from
        kind: SteelShapeKind,
        /// Family used to interpret the parameters
        shape_type: ShapeType,
        /// Parameter slot 1
        p1: f64,
        /// Parameter slot 2
        p2: f64,
        /// Parameter slot 3
        p3: f64,
        /// Parameter slot 4, -1 when unused
        p4: f64,
        /// Parameter slot 5, -1 when unused
        p5: f64,
        /// Parameter slot 6, -1 when unused
        p6: f64,
    }
}

impl SteelShapeRecord {
    /// The six parameters as an array
    pub fn params(&self) -> [f64; 6] {
        [self.p1, self.p2, self.p3, self.p4, self.p5, self.p6]
    }
}

impl StbSecSteel {
    /// Parameter vector of row `index`
    pub fn params(&self, index: usize) -> Option<[f64; 6]> {
        self.get(index).map(|r| r.params())
    }
}
