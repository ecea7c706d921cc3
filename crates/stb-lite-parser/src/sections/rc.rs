// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RC column and beam sections
//!
//! The plan dimensions of an RC section live in one of several mutually
//! exclusive figure forms. Forms are tried in a fixed priority order, which
//! does not depend on the order they appear in the document.

use super::bar;
use crate::loader::{load, Common};
use crate::schema::{Attr, Element, Schema};
use crate::xml::{optional_bool, optional_enum, optional_str, required_f64};
use roxmltree::{Document, Node};
use stb_lite_model::{
    defaults, KindBeam, KindColumn, Result, SecBeamRcRecord, SecColumnRcRecord, StbSecBeamRc,
    StbSecColumnRc, StbVersion,
};

// ============================================================================
// Column figure
// ============================================================================

/// Resolved plan shape of an RC column
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnFigure {
    Rect { width: f64, height: f64 },
    Circle { diameter: f64 },
    /// No recognized figure
    Absent,
}

impl ColumnFigure {
    /// Rectangle first, then circle
    pub fn resolve(section: Node<'_, '_>, schema: &Schema) -> Result<Self> {
        let Some(figure) = schema.child(section, schema.element(Element::ColumnRcFigure)) else {
            log::trace!("RC column section without figure");
            return Ok(ColumnFigure::Absent);
        };

        if let Some(rect) = schema.child(figure, schema.element(Element::ColumnRcRect)) {
            return Ok(ColumnFigure::Rect {
                width: required_f64(rect, schema.attr(Attr::RectWidth))?,
                height: required_f64(rect, schema.attr(Attr::RectHeight))?,
            });
        }
        if let Some(circle) = schema.child(figure, schema.element(Element::ColumnRcCircle)) {
            return Ok(ColumnFigure::Circle {
                diameter: required_f64(circle, "D")?,
            });
        }
        Ok(ColumnFigure::Absent)
    }

    pub fn width(&self) -> f64 {
        match *self {
            ColumnFigure::Rect { width, .. } => width,
            ColumnFigure::Circle { diameter } => diameter,
            ColumnFigure::Absent => 0.0,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            ColumnFigure::Rect { height, .. } => height,
            _ => 0.0,
        }
    }

    pub fn is_rect(&self) -> bool {
        matches!(self, ColumnFigure::Rect { .. })
    }
}

// ============================================================================
// Beam figure
// ============================================================================

/// Resolved representative dimensions of an RC beam
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeamFigure {
    Straight { width: f64, depth: f64 },
    Taper { width: f64, depth: f64 },
    Haunch { width: f64, depth: f64 },
    /// No recognized form, or no segment at the representative position
    Absent,
}

#[derive(Clone, Copy, Debug)]
enum BeamForm {
    Straight,
    Taper,
    Haunch,
}

/// One entry of a beam form priority table
struct BeamFormRule {
    form: BeamForm,
    element: Element,
    /// Required `pos` of the representative segment, `None` for single-segment forms
    pos: Option<&'static str>,
    width: &'static str,
    depth: &'static str,
}

const VER1_BEAM_FORMS: [BeamFormRule; 3] = [
    BeamFormRule {
        form: BeamForm::Haunch,
        element: Element::BeamRcHaunch,
        pos: None,
        width: "width_center",
        depth: "depth_center",
    },
    BeamFormRule {
        form: BeamForm::Straight,
        element: Element::BeamRcStraight,
        pos: None,
        width: "width",
        depth: "depth",
    },
    BeamFormRule {
        form: BeamForm::Taper,
        element: Element::BeamRcTaper,
        pos: None,
        width: "width_end",
        depth: "depth_end",
    },
];

const VER2_BEAM_FORMS: [BeamFormRule; 3] = [
    BeamFormRule {
        form: BeamForm::Straight,
        element: Element::BeamRcStraight,
        pos: None,
        width: "width",
        depth: "depth",
    },
    BeamFormRule {
        form: BeamForm::Taper,
        element: Element::BeamRcTaper,
        pos: Some("END"),
        width: "width",
        depth: "depth",
    },
    BeamFormRule {
        form: BeamForm::Haunch,
        element: Element::BeamRcHaunch,
        pos: Some("CENTER"),
        width: "width",
        depth: "depth",
    },
];

impl BeamFigure {
    /// Pick the first form present in priority order and read its dimensions
    pub fn resolve(section: Node<'_, '_>, schema: &Schema) -> Result<Self> {
        let Some(figure) = schema.child(section, schema.element(Element::BeamRcFigure)) else {
            log::trace!("RC beam section without figure");
            return Ok(BeamFigure::Absent);
        };

        let rules: &[BeamFormRule] = match schema.version() {
            StbVersion::Ver1 => &VER1_BEAM_FORMS,
            StbVersion::Ver2 => &VER2_BEAM_FORMS,
        };

        for rule in rules {
            let tag = schema.element(rule.element);
            if schema.child(figure, tag).is_none() {
                continue;
            }

            let segment = match rule.pos {
                None => schema.child(figure, tag),
                Some(pos) => schema
                    .children(figure, tag)
                    .find(|n| n.attribute("pos") == Some(pos)),
            };
            let Some(segment) = segment else {
                log::trace!("<{}> has no segment at pos {:?}", tag, rule.pos);
                return Ok(BeamFigure::Absent);
            };

            let width = required_f64(segment, rule.width)?;
            let depth = required_f64(segment, rule.depth)?;
            return Ok(match rule.form {
                BeamForm::Straight => BeamFigure::Straight { width, depth },
                BeamForm::Taper => BeamFigure::Taper { width, depth },
                BeamForm::Haunch => BeamFigure::Haunch { width, depth },
            });
        }

        Ok(BeamFigure::Absent)
    }

    pub fn width(&self) -> f64 {
        match *self {
            BeamFigure::Straight { width, .. }
            | BeamFigure::Taper { width, .. }
            | BeamFigure::Haunch { width, .. } => width,
            BeamFigure::Absent => 0.0,
        }
    }

    pub fn depth(&self) -> f64 {
        match *self {
            BeamFigure::Straight { depth, .. }
            | BeamFigure::Taper { depth, .. }
            | BeamFigure::Haunch { depth, .. } => depth,
            BeamFigure::Absent => 0.0,
        }
    }
}

// ============================================================================
// Loaders
// ============================================================================

pub fn load_sec_column_rc(doc: &Document<'_>, schema: &Schema) -> Result<StbSecColumnRc> {
    load(doc, schema, Element::SecColumnRc, decode_column)
}

pub fn load_sec_beam_rc(doc: &Document<'_>, schema: &Schema) -> Result<StbSecBeamRc> {
    load(doc, schema, Element::SecBeamRc, decode_beam)
}

fn decode_column(node: Node<'_, '_>, schema: &Schema, common: Common) -> Result<SecColumnRcRecord> {
    let figure = ColumnFigure::resolve(node, schema)?;

    Ok(SecColumnRcRecord {
        id: common.id,
        name: common.name,
        floor: optional_str(node, "floor", defaults::FLOOR).into_value(),
        kind_column: optional_enum(node, "kind_column", defaults::KIND_COLUMN, KindColumn::parse)
            .into_value(),
        width: figure.width(),
        height: figure.height(),
        is_rect: figure.is_rect(),
        bar_list: bar::column_bars(node, schema)?,
    })
}

fn decode_beam(node: Node<'_, '_>, schema: &Schema, common: Common) -> Result<SecBeamRcRecord> {
    let figure = BeamFigure::resolve(node, schema)?;
    let flag = |attr: Attr, default: bool| -> Result<bool> {
        Ok(optional_bool(node, schema.attr(attr), default)?.into_value())
    };

    Ok(SecBeamRcRecord {
        id: common.id,
        name: common.name,
        floor: optional_str(node, "floor", defaults::FLOOR).into_value(),
        kind_beam: optional_enum(node, "kind_beam", defaults::KIND_BEAM, KindBeam::parse)
            .into_value(),
        is_foundation: flag(Attr::IsFoundation, defaults::IS_FOUNDATION)?,
        is_canti: flag(Attr::IsCanti, defaults::IS_CANTI)?,
        is_out_in: flag(Attr::IsOutIn, defaults::IS_OUT_IN)?,
        width: figure.width(),
        depth: figure.depth(),
        bar_list: bar::beam_bars(node, schema)?,
    })
}
