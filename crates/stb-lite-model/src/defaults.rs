// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default values for optional attributes
//!
//! Every optional field the decoder reads falls back to one of these
//! constants when the attribute is absent. Keeping them here makes the
//! policy auditable in one place.

use crate::{BaseType, KindBeam, KindBrace, KindColumn, KindNode, KindSlab, KindStructure};

/// `floor` on section elements
pub const FLOOR: &str = "";
/// `guid` on any element
pub const GUID: &str = "";
/// `name` on nodes (the only kind where it is optional)
pub const NODE_NAME: &str = "";

/// `kind_column`
pub const KIND_COLUMN: KindColumn = KindColumn::Column;
/// `kind_beam`
pub const KIND_BEAM: KindBeam = KindBeam::Girder;
/// `kind_brace`
pub const KIND_BRACE: KindBrace = KindBrace::Vertical;
/// `base_type`
pub const BASE_TYPE: BaseType = BaseType::Expose;
/// `kind_structure`
pub const KIND_STRUCTURE: KindStructure = KindStructure::Other;
/// `kind` on nodes
pub const KIND_NODE: KindNode = KindNode::Other;
/// `kind_slab`
pub const KIND_SLAB: KindSlab = KindSlab::Normal;

/// Joint ids (`joint_id_top`, `joint_id_bottom`, `joint_id_start`, `joint_id_end`)
pub const JOINT_ID: i32 = -1;
/// `id_member` on nodes
pub const ID_MEMBER: i32 = -1;

/// `isCanti` / `is_canti`
pub const IS_CANTI: bool = false;
/// `isOutIn` / `is_outin`
pub const IS_OUT_IN: bool = false;
/// `isFoundation` / `is_foundation`
pub const IS_FOUNDATION: bool = false;
/// `direction` on steel column sections
pub const DIRECTION: bool = true;

/// `rotate` on members
pub const ROTATE: f64 = 0.0;
/// `level` on girders, beams and slabs
pub const LEVEL: f64 = 0.0;

/// Reinforcement count or pitch attribute missing inside a recognized form
pub const BAR_VALUE: f64 = 0.0;

/// Parameter slot not used by a steel shape kind
pub const SHAPE_PARAM_SENTINEL: f64 = -1.0;

/// Column bar arrangement used when no recognized arrangement form exists
///
/// Main X/Y 1st, main X/Y 2nd, main total, band pitch, band count X/Y.
pub const COLUMN_BAR_FALLBACK: [f64; 8] = [2.0, 2.0, 0.0, 0.0, 4.0, 200.0, 2.0, 2.0];

/// Beam bar arrangement used when no recognized arrangement form exists
///
/// Main top/bottom 1st, 2nd, 3rd, stirrup pitch, stirrup count.
pub const BEAM_BAR_FALLBACK: [f64; 8] = [2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 200.0, 2.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        assert_eq!(FLOOR, "");
        assert_eq!(KIND_COLUMN, KindColumn::Column);
        assert_eq!(KIND_BEAM, KindBeam::Girder);
        assert_eq!(BASE_TYPE, BaseType::Expose);
        assert_eq!(KIND_BRACE, KindBrace::Vertical);
        assert_eq!(JOINT_ID, -1);
        assert!(!IS_CANTI && !IS_OUT_IN);
    }

    #[test]
    fn test_fallback_vectors() {
        assert_eq!(COLUMN_BAR_FALLBACK, [2.0, 2.0, 0.0, 0.0, 4.0, 200.0, 2.0, 2.0]);
        assert_eq!(BEAM_BAR_FALLBACK, [2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 200.0, 2.0]);
    }
}
