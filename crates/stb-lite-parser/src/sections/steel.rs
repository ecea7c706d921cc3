// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Steel column, beam and brace sections
//!
//! Each steel section names one steel shape through a descriptor element.
//! Ver1 stores that descriptor directly under the section. Ver2 wraps it in
//! a figure container holding one of several multi-segment forms, whose
//! segments are told apart by `pos`; one segment is picked as representative.

use crate::loader::{load, Common};
use crate::schema::{Attr, Element, Schema};
use crate::xml::{optional_bool, optional_enum, optional_i32, optional_str};
use roxmltree::{Document, Node};
use stb_lite_model::{
    defaults, BaseType, KindBeam, KindBrace, KindColumn, Result, SecBeamSRecord,
    SecBraceSRecord, SecColumnSRecord, StbSecBeamS, StbSecBraceS, StbSecColumnS, StbVersion,
};

/// Representative steel descriptor of a section
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SteelFigure {
    pub pos: String,
    pub shape: String,
    pub strength_main: String,
    pub strength_web: String,
}

/// One Ver2 multi-segment form, in priority order
pub(crate) struct SteelFormRule {
    tag: &'static str,
    /// `pos` of the segment to read, `None` when the form has a single segment
    select: Option<&'static str>,
    /// Position stored on the section
    report: &'static str,
}

const COLUMN_FORMS: [SteelFormRule; 3] = [
    SteelFormRule {
        tag: "StbSecSteelColumn_S_Same",
        select: None,
        report: "ALL",
    },
    SteelFormRule {
        tag: "StbSecSteelColumn_S_NotSame",
        select: Some("BOTTOM"),
        report: "CENTER",
    },
    SteelFormRule {
        tag: "StbSecSteelColumn_S_ThreeTypes",
        select: Some("CENTER"),
        report: "CENTER",
    },
];

const BEAM_FORMS: [SteelFormRule; 5] = [
    SteelFormRule {
        tag: "StbSecSteelBeam_S_Straight",
        select: None,
        report: "ALL",
    },
    SteelFormRule {
        tag: "StbSecSteelBeam_S_Taper",
        select: Some("END"),
        report: "END",
    },
    SteelFormRule {
        tag: "StbSecSteelBeam_S_Joint",
        select: Some("CENTER"),
        report: "CENTER",
    },
    SteelFormRule {
        tag: "StbSecSteelBeam_S_Haunch",
        select: Some("CENTER"),
        report: "CENTER",
    },
    SteelFormRule {
        tag: "StbSecSteelBeam_S_FiveTypes",
        select: Some("CENTER"),
        report: "CENTER",
    },
];

const BRACE_FORMS: [SteelFormRule; 3] = [
    SteelFormRule {
        tag: "StbSecSteelBrace_S_Same",
        select: None,
        report: "ALL",
    },
    SteelFormRule {
        tag: "StbSecSteelBrace_S_NotSame",
        select: Some("TOP"),
        report: "TOP",
    },
    SteelFormRule {
        tag: "StbSecSteelBrace_S_ThreeTypes",
        select: Some("CENTER"),
        report: "CENTER",
    },
];

impl SteelFigure {
    fn from_descriptor(node: Node<'_, '_>, pos: String) -> Self {
        Self {
            pos,
            shape: optional_str(node, "shape", "").into_value(),
            strength_main: optional_str(node, "strength_main", "").into_value(),
            strength_web: optional_str(node, "strength_web", "").into_value(),
        }
    }

    /// Resolve the representative descriptor of a steel section
    ///
    /// Returns empty strings when no descriptor is found.
    pub(crate) fn resolve(
        section: Node<'_, '_>,
        schema: &Schema,
        container: Element,
        forms: &[SteelFormRule],
    ) -> Self {
        let Some(figure) = schema.child(section, schema.element(container)) else {
            log::trace!("<{}> has no steel figure", section.tag_name().name());
            return Self::default();
        };

        if schema.version() == StbVersion::Ver1 {
            let pos = optional_str(figure, "pos", "").into_value();
            return Self::from_descriptor(figure, pos);
        }

        let Some(rule) = forms.iter().find(|r| schema.child(figure, r.tag).is_some()) else {
            log::trace!("<{}> has no recognized steel form", section.tag_name().name());
            return Self::default();
        };

        let segment = match rule.select {
            None => schema.child(figure, rule.tag),
            Some(pos) => schema
                .children(figure, rule.tag)
                .find(|n| n.attribute("pos") == Some(pos)),
        };

        match segment {
            Some(segment) => Self::from_descriptor(segment, rule.report.to_string()),
            None => {
                log::trace!("<{}> has no segment at pos {:?}", rule.tag, rule.select);
                Self::default()
            }
        }
    }
}

// ============================================================================
// Loaders
// ============================================================================

pub fn load_sec_column_s(doc: &Document<'_>, schema: &Schema) -> Result<StbSecColumnS> {
    load(doc, schema, Element::SecColumnS, decode_column)
}

pub fn load_sec_beam_s(doc: &Document<'_>, schema: &Schema) -> Result<StbSecBeamS> {
    load(doc, schema, Element::SecBeamS, decode_beam)
}

pub fn load_sec_brace_s(doc: &Document<'_>, schema: &Schema) -> Result<StbSecBraceS> {
    load(doc, schema, Element::SecBraceS, decode_brace)
}

fn joint(node: Node<'_, '_>, name: &str) -> Result<i32> {
    Ok(optional_i32(node, name, defaults::JOINT_ID)?.into_value())
}

fn decode_column(node: Node<'_, '_>, schema: &Schema, common: Common) -> Result<SecColumnSRecord> {
    let figure = SteelFigure::resolve(node, schema, Element::ColumnSFigure, &COLUMN_FORMS);

    Ok(SecColumnSRecord {
        id: common.id,
        name: common.name,
        floor: optional_str(node, "floor", defaults::FLOOR).into_value(),
        kind_column: optional_enum(node, "kind_column", defaults::KIND_COLUMN, KindColumn::parse)
            .into_value(),
        direction: optional_bool(node, "direction", defaults::DIRECTION)?.into_value(),
        base_type: optional_enum(node, "base_type", defaults::BASE_TYPE, BaseType::parse)
            .into_value(),
        joint_id_top: joint(node, "joint_id_top")?,
        joint_id_bottom: joint(node, "joint_id_bottom")?,
        pos: figure.pos,
        shape: figure.shape,
        strength_main: figure.strength_main,
        strength_web: figure.strength_web,
    })
}

fn decode_beam(node: Node<'_, '_>, schema: &Schema, common: Common) -> Result<SecBeamSRecord> {
    let figure = SteelFigure::resolve(node, schema, Element::BeamSFigure, &BEAM_FORMS);

    Ok(SecBeamSRecord {
        id: common.id,
        name: common.name,
        floor: optional_str(node, "floor", defaults::FLOOR).into_value(),
        kind_beam: optional_enum(node, "kind_beam", defaults::KIND_BEAM, KindBeam::parse)
            .into_value(),
        is_canti: optional_bool(node, schema.attr(Attr::IsCanti), defaults::IS_CANTI)?
            .into_value(),
        is_out_in: optional_bool(node, schema.attr(Attr::IsOutIn), defaults::IS_OUT_IN)?
            .into_value(),
        joint_id_start: joint(node, "joint_id_start")?,
        joint_id_end: joint(node, "joint_id_end")?,
        pos: figure.pos,
        shape: figure.shape,
        strength_main: figure.strength_main,
        strength_web: figure.strength_web,
    })
}

fn decode_brace(node: Node<'_, '_>, schema: &Schema, common: Common) -> Result<SecBraceSRecord> {
    let figure = SteelFigure::resolve(node, schema, Element::BraceSFigure, &BRACE_FORMS);

    Ok(SecBraceSRecord {
        id: common.id,
        name: common.name,
        floor: optional_str(node, "floor", defaults::FLOOR).into_value(),
        kind_brace: optional_enum(node, "kind_brace", defaults::KIND_BRACE, KindBrace::parse)
            .into_value(),
        pos: figure.pos,
        shape: figure.shape,
        strength_main: figure.strength_main,
        strength_web: figure.strength_web,
    })
}
