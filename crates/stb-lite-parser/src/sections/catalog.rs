// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Steel shape catalog
//!
//! Every steel shape kind has its own parameter layout. Rows are normalized
//! to six positional slots; slots a kind does not use hold
//! [`defaults::SHAPE_PARAM_SENTINEL`].

use crate::schema::{Attr, Element, Schema};
use crate::xml::{required_f64, required_str};
use roxmltree::{Document, Node};
use rustc_hash::FxHashMap;
use stb_lite_model::{defaults, Columnar, Result, StbSecSteel, SteelShapeKind, SteelShapeRecord};

/// Attribute read into each parameter slot, `None` for unused slots
pub fn param_attrs(schema: &Schema, kind: SteelShapeKind) -> [Option<&'static str>; 6] {
    use SteelShapeKind::*;

    let radius = schema.attr(Attr::RollBoxRadius);
    match kind {
        RollH | RollT => [Some("A"), Some("B"), Some("t1"), Some("t2"), Some("r"), None],
        BuildH | BuildBox => [Some("A"), Some("B"), Some("t1"), Some("t2"), None, None],
        RollBox => [Some("A"), Some("B"), Some("t"), Some(radius), None, None],
        Pipe => [Some("t"), Some("D"), None, None, None, None],
        RollC | RollL => [
            Some("A"),
            Some("B"),
            Some("t1"),
            Some("t2"),
            Some("r1"),
            Some("r2"),
        ],
        RollLipC => [Some("H"), Some("A"), Some("C"), Some("t"), None, None],
        FlatBar => [Some("B"), Some("t"), None, None, None, None],
        RoundBar => [Some("R"), Some("R"), None, None, None, None],
    }
}

fn decode_shape(
    node: Node<'_, '_>,
    schema: &Schema,
    kind: SteelShapeKind,
) -> Result<SteelShapeRecord> {
    let mut params = [defaults::SHAPE_PARAM_SENTINEL; 6];
    for (slot, attr) in params.iter_mut().zip(param_attrs(schema, kind)) {
        if let Some(attr) = attr {
            *slot = required_f64(node, attr)?;
        }
    }
    let [p1, p2, p3, p4, p5, p6] = params;

    Ok(SteelShapeRecord {
        name: required_str(node, "name")?.to_string(),
        kind,
        shape_type: kind.shape_type(),
        p1,
        p2,
        p3,
        p4,
        p5,
        p6,
    })
}

/// Load the combined catalog, kinds in [`SteelShapeKind::ALL`] order
pub fn load_sec_steel(doc: &Document<'_>, schema: &Schema) -> Result<StbSecSteel> {
    let container = schema.element(Element::SecSteel);
    let mut catalog = StbSecSteel::new();

    for kind in SteelShapeKind::ALL {
        let tag = schema.steel_shape(kind);
        let mut rows = StbSecSteel::new();
        for steel in schema.descendants(doc, container) {
            for shape in schema.children(steel, tag) {
                rows.push(decode_shape(shape, schema, kind)?);
            }
        }
        if !rows.is_empty() {
            log::debug!("Loaded {} <{}> shapes", rows.len(), tag);
        }
        catalog.append(rows);
    }

    log::debug!("Loaded {} steel shapes", catalog.len());
    Ok(catalog)
}

/// Name to row lookup over a loaded catalog
///
/// When a name appears more than once the first row wins.
#[derive(Clone, Debug, Default)]
pub struct SteelIndex {
    rows: FxHashMap<String, usize>,
}

impl SteelIndex {
    pub fn build(catalog: &StbSecSteel) -> Self {
        let mut rows = FxHashMap::default();
        for (i, name) in catalog.name().iter().enumerate() {
            rows.entry(name.clone()).or_insert(i);
        }
        Self { rows }
    }

    /// Row index of the shape called `name`
    pub fn get(&self, name: &str) -> Option<usize> {
        self.rows.get(name).copied()
    }
}
