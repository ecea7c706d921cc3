// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Member decoders: nodes, columns, posts, girders, beams, braces, slabs, walls

use crate::loader::{load, Common};
use crate::schema::{Attr, Element, Schema};
use crate::xml::{
    optional_bool, optional_enum, optional_f64, optional_i32, required_f64, required_i32,
    text_id_list,
};
use roxmltree::{Document, Node};
use stb_lite_model::{
    defaults, BeamRecord, BraceRecord, ColumnRecord, GirderRecord, KindNode, KindSlab,
    KindStructure, NodeRecord, Point3, PostRecord, Result, SlabRecord, StbBeams, StbBraces,
    StbColumns, StbGirders, StbNodes, StbPosts, StbSlabs, StbVersion, StbWalls, WallRecord,
};

pub fn load_nodes(doc: &Document<'_>, schema: &Schema) -> Result<StbNodes> {
    load(doc, schema, Element::Node, decode_node)
}

pub fn load_columns(doc: &Document<'_>, schema: &Schema) -> Result<StbColumns> {
    load(doc, schema, Element::Column, |node, schema, common| {
        let v = Vertical::decode(node, schema)?;
        Ok(ColumnRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_node_bottom: v.bottom,
            id_node_top: v.top,
            rotate: v.rotate,
            id_section: v.id_section,
            kind_structure: v.kind_structure,
        })
    })
}

pub fn load_posts(doc: &Document<'_>, schema: &Schema) -> Result<StbPosts> {
    load(doc, schema, Element::Post, |node, schema, common| {
        let v = Vertical::decode(node, schema)?;
        Ok(PostRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_node_bottom: v.bottom,
            id_node_top: v.top,
            rotate: v.rotate,
            id_section: v.id_section,
            kind_structure: v.kind_structure,
        })
    })
}

pub fn load_girders(doc: &Document<'_>, schema: &Schema) -> Result<StbGirders> {
    load(doc, schema, Element::Girder, |node, schema, common| {
        let h = Horizontal::decode(node, schema)?;
        Ok(GirderRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_node_start: h.start,
            id_node_end: h.end,
            rotate: h.rotate,
            id_section: h.id_section,
            kind_structure: h.kind_structure,
            is_foundation: foundation(node, schema)?,
            level: level(node)?,
        })
    })
}

pub fn load_beams(doc: &Document<'_>, schema: &Schema) -> Result<StbBeams> {
    load(doc, schema, Element::Beam, |node, schema, common| {
        let h = Horizontal::decode(node, schema)?;
        Ok(BeamRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_node_start: h.start,
            id_node_end: h.end,
            rotate: h.rotate,
            id_section: h.id_section,
            kind_structure: h.kind_structure,
            is_foundation: foundation(node, schema)?,
            level: level(node)?,
        })
    })
}

pub fn load_braces(doc: &Document<'_>, schema: &Schema) -> Result<StbBraces> {
    load(doc, schema, Element::Brace, |node, schema, common| {
        let h = Horizontal::decode(node, schema)?;
        Ok(BraceRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_node_start: h.start,
            id_node_end: h.end,
            rotate: h.rotate,
            id_section: h.id_section,
            kind_structure: h.kind_structure,
        })
    })
}

pub fn load_slabs(doc: &Document<'_>, schema: &Schema) -> Result<StbSlabs> {
    load(doc, schema, Element::Slab, |node, schema, common| {
        Ok(SlabRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_section: required_i32(node, "id_section")?,
            kind_structure: kind_structure(node),
            kind_slab: optional_enum(node, "kind_slab", defaults::KIND_SLAB, KindSlab::parse)
                .into_value(),
            level: level(node)?,
            is_foundation: foundation(node, schema)?,
            node_ids: node_ids(node, schema)?,
        })
    })
}

pub fn load_walls(doc: &Document<'_>, schema: &Schema) -> Result<StbWalls> {
    load(doc, schema, Element::Wall, |node, schema, common| {
        Ok(WallRecord {
            id: common.id,
            name: common.name,
            guid: common.guid,
            id_section: required_i32(node, "id_section")?,
            kind_structure: kind_structure(node),
            node_ids: node_ids(node, schema)?,
        })
    })
}

// ============================================================================
// Per-kind decoding
// ============================================================================

fn decode_node(node: Node<'_, '_>, schema: &Schema, common: Common) -> Result<NodeRecord> {
    let x = required_f64(node, schema.attr(Attr::NodeX))?;
    let y = required_f64(node, schema.attr(Attr::NodeY))?;
    let z = required_f64(node, schema.attr(Attr::NodeZ))?;

    Ok(NodeRecord {
        id: common.id,
        name: common.name,
        guid: common.guid,
        x,
        y,
        z,
        position: Point3::new(x, y, z),
        kind: optional_enum(node, "kind", defaults::KIND_NODE, KindNode::parse).into_value(),
        id_member: optional_i32(node, "id_member", defaults::ID_MEMBER)?.into_value(),
    })
}

/// Fields shared by columns and posts
struct Vertical {
    bottom: i32,
    top: i32,
    rotate: f64,
    id_section: i32,
    kind_structure: KindStructure,
}

impl Vertical {
    fn decode(node: Node<'_, '_>, schema: &Schema) -> Result<Self> {
        Ok(Self {
            bottom: required_i32(node, schema.attr(Attr::IdNodeBottom))?,
            top: required_i32(node, schema.attr(Attr::IdNodeTop))?,
            rotate: rotate(node)?,
            id_section: required_i32(node, "id_section")?,
            kind_structure: kind_structure(node),
        })
    }
}

/// Fields shared by girders, beams and braces
struct Horizontal {
    start: i32,
    end: i32,
    rotate: f64,
    id_section: i32,
    kind_structure: KindStructure,
}

impl Horizontal {
    fn decode(node: Node<'_, '_>, schema: &Schema) -> Result<Self> {
        Ok(Self {
            start: required_i32(node, schema.attr(Attr::IdNodeStart))?,
            end: required_i32(node, schema.attr(Attr::IdNodeEnd))?,
            rotate: rotate(node)?,
            id_section: required_i32(node, "id_section")?,
            kind_structure: kind_structure(node),
        })
    }
}

fn rotate(node: Node<'_, '_>) -> Result<f64> {
    Ok(optional_f64(node, "rotate", defaults::ROTATE)?.into_value())
}

fn level(node: Node<'_, '_>) -> Result<f64> {
    Ok(optional_f64(node, "level", defaults::LEVEL)?.into_value())
}

fn kind_structure(node: Node<'_, '_>) -> KindStructure {
    optional_enum(node, "kind_structure", defaults::KIND_STRUCTURE, KindStructure::parse)
        .into_value()
}

fn foundation(node: Node<'_, '_>, schema: &Schema) -> Result<bool> {
    let attr = schema.attr(Attr::IsFoundation);
    Ok(optional_bool(node, attr, defaults::IS_FOUNDATION)?.into_value())
}

/// Boundary node ids of a slab or wall
///
/// Ver1 lists one `StbNodeid` child per node; Ver2 stores the ids as text.
/// A missing list yields no ids.
fn node_ids(node: Node<'_, '_>, schema: &Schema) -> Result<Vec<i32>> {
    let Some(list) = schema.child(node, schema.element(Element::NodeIdList)) else {
        return Ok(Vec::new());
    };

    match schema.version() {
        StbVersion::Ver1 => schema
            .children(list, "StbNodeid")
            .map(|n| required_i32(n, "id"))
            .collect(),
        StbVersion::Ver2 => text_id_list(list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ver1<R>(body: &str, f: impl FnOnce(&Document<'_>, &Schema) -> R) -> R {
        let xml = format!(r#"<ST_BRIDGE version="1.4.00">{body}</ST_BRIDGE>"#);
        let doc = Document::parse(&xml).unwrap();
        let schema = Schema::resolve(&doc).unwrap();
        f(&doc, &schema)
    }

    fn ver2<R>(body: &str, f: impl FnOnce(&Document<'_>, &Schema) -> R) -> R {
        let xml = format!(r#"<ST_BRIDGE xmlns="urn:stb2" version="2.0.2">{body}</ST_BRIDGE>"#);
        let doc = Document::parse(&xml).unwrap();
        let schema = Schema::resolve(&doc).unwrap();
        f(&doc, &schema)
    }

    #[test]
    fn test_nodes_ver1() {
        ver1(
            r#"<StbNodes>
                <StbNode id="1" x="0" y="0" z="0" kind="ON_COLUMN"/>
                <StbNode id="2" name="N2" x="6000" y="0" z="3500" id_member="7"/>
            </StbNodes>"#,
            |doc, schema| {
                let nodes = load_nodes(doc, schema).unwrap();
                assert_eq!(nodes.len(), 2);
                assert_eq!(nodes.id(), &[1, 2]);
                assert_eq!(nodes.name(), &["".to_string(), "N2".to_string()]);
                assert_eq!(nodes.kind(), &[KindNode::OnColumn, KindNode::Other]);
                assert_eq!(nodes.id_member(), &[-1, 7]);
                assert_eq!(nodes.position()[1], Point3::new(6000.0, 0.0, 3500.0));
            },
        );
    }

    #[test]
    fn test_nodes_ver2_uppercase_coordinates() {
        ver2(r#"<StbNode id="1" X="1" Y="2" Z="3"/>"#, |doc, schema| {
            let nodes = load_nodes(doc, schema).unwrap();
            assert_eq!(nodes.x(), &[1.0]);
            assert_eq!(nodes.z(), &[3.0]);
        });
    }

    #[test]
    fn test_columns_required_node() {
        ver1(
            r#"<StbColumn id="1" name="C1" idNode_bottom="1" id_section="1"/>"#,
            |doc, schema| {
                let err = load_columns(doc, schema).unwrap_err();
                assert!(err.to_string().contains("idNode_top"));
            },
        );
    }

    #[test]
    fn test_girders_defaults() {
        ver1(
            r#"<StbGirder id="5" name="G1" idNode_start="1" idNode_end="2" id_section="3" kind_structure="RC"/>"#,
            |doc, schema| {
                let girders = load_girders(doc, schema).unwrap();
                let g = girders.get(0).unwrap();
                assert_eq!(g.rotate, 0.0);
                assert_eq!(g.level, 0.0);
                assert!(!g.is_foundation);
                assert_eq!(g.kind_structure, KindStructure::Rc);
            },
        );
    }

    #[test]
    fn test_slab_node_ids_ver1() {
        ver1(
            r#"<StbSlab id="1" name="S1" id_section="1" kind_slab="CANTI" isFoundation="true">
                <StbNodeid_List>
                    <StbNodeid id="4"/><StbNodeid id="5"/><StbNodeid id="6"/>
                </StbNodeid_List>
            </StbSlab>"#,
            |doc, schema| {
                let slabs = load_slabs(doc, schema).unwrap();
                assert_eq!(slabs.node_ids()[0], vec![4, 5, 6]);
                assert_eq!(slabs.kind_slab(), &[KindSlab::Canti]);
                assert_eq!(slabs.is_foundation(), &[true]);
            },
        );
    }

    #[test]
    fn test_wall_node_ids_ver2() {
        ver2(
            r#"<StbWall id="1" name="W1" id_section="2">
                <StbNodeIdOrder>10 11 12 13</StbNodeIdOrder>
            </StbWall>"#,
            |doc, schema| {
                let walls = load_walls(doc, schema).unwrap();
                assert_eq!(walls.node_ids()[0], vec![10, 11, 12, 13]);
                assert_eq!(walls.kind_structure(), &[KindStructure::Other]);
            },
        );
    }

    #[test]
    fn test_empty_document() {
        ver2("", |doc, schema| {
            assert!(load_braces(doc, schema).unwrap().is_empty());
            assert!(load_slabs(doc, schema).unwrap().is_empty());
        });
    }
}
