// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end decoding of equivalent Ver1 and Ver2 frame documents.

use stb_lite_model::{
    BaseType, Columnar, KindBeam, KindColumn, KindNode, KindStructure, ParseError, ShapeType,
    StbModel, StbParser, StbVersion, SteelShapeKind,
};
use stb_lite_parser::{StbData, StbReader};

const FRAME_V1: &str = include_str!("fixtures/frame_v1.stb");
const FRAME_V2: &str = include_str!("fixtures/frame_v2.stb");

fn decode(content: &str) -> StbData {
    StbReader::new()
        .with_tolerance(10.0, 0.01)
        .read(content)
        .expect("fixture decodes")
}

fn assert_all_aligned(data: &StbData) {
    assert!(data.nodes.is_aligned());
    assert!(data.columns.is_aligned());
    assert!(data.posts.is_aligned());
    assert!(data.girders.is_aligned());
    assert!(data.beams.is_aligned());
    assert!(data.braces.is_aligned());
    assert!(data.slabs.is_aligned());
    assert!(data.walls.is_aligned());
    assert!(data.sec_column_rc.is_aligned());
    assert!(data.sec_column_s.is_aligned());
    assert!(data.sec_beam_rc.is_aligned());
    assert!(data.sec_beam_s.is_aligned());
    assert!(data.sec_brace_s.is_aligned());
    assert!(data.sec_steel.is_aligned());
}

#[test]
fn test_collections_stay_aligned() {
    for content in [FRAME_V1, FRAME_V2] {
        let data = decode(content);
        assert_all_aligned(&data);
        assert_eq!(data.nodes.len(), 6);
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.posts.len(), 1);
        assert_eq!(data.girders.len(), 2);
        assert_eq!(data.sec_column_rc.len(), 2);
        assert_eq!(data.sec_steel.len(), 11);
    }
}

#[test]
fn test_metadata() {
    let v1 = decode(FRAME_V1);
    assert_eq!(v1.metadata.version, StbVersion::Ver1);
    assert_eq!(v1.metadata.namespace, None);

    let v2 = decode(FRAME_V2);
    assert_eq!(v2.metadata.version, StbVersion::Ver2);
    assert_eq!(v2.metadata.version_string, "2.0.2");
    assert_eq!(v2.tolerance().length, 10.0);
}

#[test]
fn test_defaults_for_omitted_attributes() {
    let data = decode(FRAME_V1);

    // Node 5 carries neither kind nor id_member.
    assert_eq!(data.nodes.kind()[4], KindNode::Other);
    assert_eq!(data.nodes.id_member()[4], -1);
    assert_eq!(data.nodes.name()[4], "");

    let sc = data.sec_column_s.get(0).unwrap();
    assert_eq!(sc.kind_column, KindColumn::Column);
    assert_eq!(sc.joint_id_top, 12);
    assert_eq!(sc.joint_id_bottom, -1);
    assert!(sc.direction);
    assert_eq!(sc.strength_web, "");

    let brace = data.sec_brace_s.get(0).unwrap();
    assert_eq!(brace.floor, "");

    let beam_s = data.sec_beam_s.get(0).unwrap();
    assert_eq!(beam_s.joint_id_end, -1);
    assert!(!beam_s.is_out_in);

    assert_eq!(data.posts.rotate(), &[0.0]);
    assert_eq!(data.girders.level(), &[-50.0, 0.0]);
    assert_eq!(data.girders.is_foundation(), &[false, true]);
}

#[test]
fn test_cross_version_equivalence() {
    let v1 = decode(FRAME_V1);
    let v2 = decode(FRAME_V2);

    assert_eq!(v1.nodes, v2.nodes);
    assert_eq!(v1.columns, v2.columns);
    assert_eq!(v1.posts, v2.posts);
    assert_eq!(v1.girders, v2.girders);
    assert_eq!(v1.beams, v2.beams);
    assert_eq!(v1.braces, v2.braces);
    assert_eq!(v1.slabs, v2.slabs);
    assert_eq!(v1.walls, v2.walls);
    assert_eq!(v1.sec_column_s, v2.sec_column_s);
    assert_eq!(v1.sec_beam_s, v2.sec_beam_s);
    assert_eq!(v1.sec_brace_s, v2.sec_brace_s);
    assert_eq!(v1.sec_steel, v2.sec_steel);

    // Bar arrangements are only read from Ver1 documents.
    for i in 0..v1.sec_column_rc.len() {
        let a = v1.sec_column_rc.get(i).unwrap();
        let b = v2.sec_column_rc.get(i).unwrap();
        assert_eq!((a.id, a.width, a.height, a.is_rect), (b.id, b.width, b.height, b.is_rect));
        assert_eq!(a.kind_column, b.kind_column);
        assert!(b.bar_list.is_empty());
    }
    let a = v1.sec_beam_rc.get(0).unwrap();
    let b = v2.sec_beam_rc.get(0).unwrap();
    assert_eq!((a.width, a.depth), (b.width, b.depth));
    assert_eq!((a.is_canti, a.is_out_in), (b.is_canti, b.is_out_in));
}

#[test]
fn test_member_details() {
    let data = decode(FRAME_V2);
    assert_eq!(data.columns.kind_structure(), &[KindStructure::Rc, KindStructure::S]);
    assert_eq!(data.columns.guid()[1], "0f3c-aa");
    assert_eq!(data.columns.rotate()[1], 90.0);
    assert_eq!(data.slabs.node_ids()[0], vec![3, 4, 6]);
    assert_eq!(data.walls.node_ids()[0], vec![1, 2, 4, 3]);
    assert_eq!(data.nodes.position()[5].y, 5000.0);
}

#[test]
fn test_figure_priority_not_document_order() {
    // The Ver1 beam lists a taper before a straight form; straight wins.
    let data = decode(FRAME_V1);
    let g = data.sec_beam_rc.get(0).unwrap();
    assert_eq!((g.width, g.depth), (400.0, 750.0));
    assert_eq!(g.kind_beam, KindBeam::Girder);
    assert!(!g.is_canti);
    assert!(g.is_out_in);

    let circle = data.sec_column_rc.get(1).unwrap();
    assert_eq!((circle.width, circle.height, circle.is_rect), (500.0, 0.0, false));
    assert_eq!(circle.kind_column, KindColumn::Post);
}

#[test]
fn test_bar_arrangement() {
    let data = decode(FRAME_V1);
    assert_eq!(
        data.sec_column_rc.bar_list()[0],
        vec![5.0, 6.0, 0.0, 0.0, 18.0, 100.0, 2.0, 3.0]
    );
    // Circular column with an empty arrangement uses the fallback.
    assert_eq!(
        data.sec_column_rc.bar_list()[1],
        vec![2.0, 2.0, 0.0, 0.0, 4.0, 200.0, 2.0, 2.0]
    );
    assert_eq!(
        data.sec_beam_rc.bar_list()[0],
        vec![4.0, 3.0, 0.0, 0.0, 0.0, 0.0, 150.0, 2.0]
    );
}

#[test]
fn test_steel_catalog() {
    for content in [FRAME_V1, FRAME_V2] {
        let data = decode(content);
        let steel = &data.sec_steel;

        assert_eq!(steel.kind(), &SteelShapeKind::ALL);

        let bx = data.steel_shape_index("BX-400x400x19").unwrap();
        assert_eq!(steel.shape_type()[bx], ShapeType::RollBox);
        assert_eq!(steel.params(bx), Some([400.0, 400.0, 19.0, 12.5, -1.0, -1.0]));

        let rb = data.steel_shape_index("RB-22").unwrap();
        assert_eq!(steel.params(rb), Some([22.0, 22.0, -1.0, -1.0, -1.0, -1.0]));

        let l = data.steel_shape_index("L-75x75x6").unwrap();
        assert_eq!(steel.params(l), Some([75.0, 75.0, 6.0, 6.0, 8.0, 4.0]));

        let fb = data.steel_shape_index("FB-65x9").unwrap();
        assert_eq!(steel.shape_type()[fb], ShapeType::FlatBar);
    }
}

#[test]
fn test_steel_catalog_parameter_layout() {
    const S: f64 = -1.0;
    let expected: [(&str, ShapeType, [f64; 6]); 11] = [
        ("H-400x200x8x13", ShapeType::H, [400.0, 200.0, 8.0, 13.0, 16.0, S]),
        ("BH-600x250x12x22", ShapeType::H, [600.0, 250.0, 12.0, 22.0, S, S]),
        ("BX-400x400x19", ShapeType::RollBox, [400.0, 400.0, 19.0, 12.5, S, S]),
        ("BBX-500x500x22", ShapeType::BuildBox, [500.0, 500.0, 22.0, 22.0, S, S]),
        ("P-139.8x6", ShapeType::Pipe, [6.0, 139.8, S, S, S, S]),
        ("T-200x200", ShapeType::T, [200.0, 200.0, 8.0, 12.0, 13.0, S]),
        ("C-150x75", ShapeType::C, [150.0, 75.0, 6.5, 10.0, 10.0, 5.0]),
        ("L-75x75x6", ShapeType::L, [75.0, 75.0, 6.0, 6.0, 8.0, 4.0]),
        ("LC-100x50x20x2.3", ShapeType::C, [100.0, 50.0, 20.0, 2.3, S, S]),
        ("FB-65x9", ShapeType::FlatBar, [65.0, 9.0, S, S, S, S]),
        ("RB-22", ShapeType::Bar, [22.0, 22.0, S, S, S, S]),
    ];

    for content in [FRAME_V1, FRAME_V2] {
        let data = decode(content);
        let steel = &data.sec_steel;
        assert_eq!(steel.len(), expected.len());

        for (row, (name, shape_type, params)) in expected.iter().enumerate() {
            assert_eq!(&steel.name()[row], name);
            assert_eq!(steel.shape_type()[row], *shape_type, "{name}");
            assert_eq!(steel.params(row), Some(*params), "{name}");
        }
    }
}

#[test]
fn test_steel_section_resolves_catalog_shape() {
    let data = decode(FRAME_V2);
    let sc = data.sec_column_s.get(0).unwrap();
    assert_eq!(sc.pos, "ALL");
    assert_eq!(sc.base_type, BaseType::Embedded);
    assert!(data.steel_shape_index(&sc.shape).is_some());
}

#[test]
fn test_unsupported_version_rejected() {
    let content = FRAME_V1.replace(r#"version="1.4.00""#, r#"version="3.0""#);
    let err = StbReader::new().parse(&content).err().unwrap();
    assert!(matches!(err, ParseError::UnsupportedVersion(ref v) if v == "3.0"));
}

#[test]
fn test_malformed_element_fails_whole_document() {
    let content = FRAME_V2.replace(r#"X="3000""#, r#"X="three thousand""#);
    let err = StbReader::new().read(&content).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidAttribute { ref element, ref attribute, .. }
            if element == "StbNode" && attribute == "X"
    ));
}

#[test]
fn test_read_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/frame_v1.stb");
    let data = StbReader::new().read_file(path).unwrap();
    assert_eq!(data.walls.len(), 1);
}

#[test]
fn test_trait_object_access() {
    let model = stb_lite_parser::parse(FRAME_V2).unwrap();
    assert_eq!(model.braces().len(), 1);
    assert_eq!(model.sec_steel().len(), 11);
    assert_eq!(model.metadata().version, StbVersion::Ver2);
}

#[test]
fn test_json_snapshot() {
    let data = decode(FRAME_V1);
    let json: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();

    assert_eq!(json["metadata"]["version"], "Ver1");
    assert_eq!(json["metadata"]["tolerance"]["length"], 10.0);
    assert_eq!(json["columns"]["name"], serde_json::json!(["C1", "C2"]));
    assert_eq!(json["sec_steel"]["shape_type"][2], "RollBOX");
    assert_eq!(json["sec_steel"]["shape_type"][9], "FB");
    assert_eq!(json["nodes"]["position"][1]["x"], 6000.0);
}
