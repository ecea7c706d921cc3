// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural member collections
//!
//! Nodes and the members placed between them. Relations to other entities
//! (nodes, sections) are stored as plain ids; resolving them is left to the
//! caller.

use crate::{KindNode, KindSlab, KindStructure, Point3};

columnar! {
    /// All `StbNode` elements
    pub struct StbNodes => NodeRecord {
        /// Node id
        id: i32,
        /// Node name, empty when absent
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
        /// Z coordinate
        z: f64,
        /// Coordinates as a point
        position: Point3,
        /// Member kind the node sits on
        kind: KindNode,
        /// Id of the member the node belongs to, -1 when absent
        id_member: i32,
    }
}

columnar! {
    /// All `StbColumn` elements
    pub struct StbColumns => ColumnRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Bottom node id
        id_node_bottom: i32,
        /// Top node id
        id_node_top: i32,
        /// Rotation angle
        rotate: f64,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
    }
}

columnar! {
    /// All `StbPost` elements
    pub struct StbPosts => PostRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Bottom node id
        id_node_bottom: i32,
        /// Top node id
        id_node_top: i32,
        /// Rotation angle
        rotate: f64,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
    }
}

columnar! {
    /// All `StbGirder` elements
    pub struct StbGirders => GirderRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Start node id
        id_node_start: i32,
        /// End node id
        id_node_end: i32,
        /// Rotation angle
        rotate: f64,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
        /// Foundation girder flag
        is_foundation: bool,
        /// Level offset
        level: f64,
    }
}

columnar! {
    /// All `StbBeam` elements
    pub struct StbBeams => BeamRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Start node id
        id_node_start: i32,
        /// End node id
        id_node_end: i32,
        /// Rotation angle
        rotate: f64,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
        /// Foundation beam flag
        is_foundation: bool,
        /// Level offset
        level: f64,
    }
}

columnar! {
    /// All `StbBrace` elements
    pub struct StbBraces => BraceRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Start node id
        id_node_start: i32,
        /// End node id
        id_node_end: i32,
        /// Rotation angle
        rotate: f64,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
    }
}

columnar! {
    /// All `StbSlab` elements
    pub struct StbSlabs => SlabRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
        /// Normal or cantilever slab
        kind_slab: KindSlab,
        /// Level offset
        level: f64,
        /// Foundation slab flag
        is_foundation: bool,
        /// Boundary node ids in document order
        node_ids: Vec<i32>,
    }
}

columnar! {
    /// All `StbWall` elements
    pub struct StbWalls => WallRecord {
        /// Member id
        id: i32,
        /// Member name
        name: String,
        /// GUID, empty when absent
        guid: String,
        /// Section id
        id_section: i32,
        /// Structural material
        kind_structure: KindStructure,
        /// Boundary node ids in document order
        node_ids: Vec<i32>,
    }
}
