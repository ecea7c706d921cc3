// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bar arrangement vectors for RC sections
//!
//! Only Ver1 documents are read; Ver2 sections get an empty vector.

use crate::schema::Schema;
use crate::xml::optional_f64;
use roxmltree::Node;
use stb_lite_model::{defaults, Presence, Result, StbVersion};

const CONTAINER: &str = "StbSecBar_Arrangement";

const COLUMN_FORMS: [&str; 4] = [
    "StbSecRect_Column_Same",
    "StbSecRect_Column_Not_Same",
    "StbSecCircle_Column_Same",
    "StbSecCircle_Column_Not_Same",
];

const COLUMN_ATTRS: [&str; 8] = [
    "count_main_X_1st",
    "count_main_Y_1st",
    "count_main_X_2nd",
    "count_main_Y_2nd",
    "count_main_total",
    "pitch_band",
    "count_band_dir_X",
    "count_band_dir_Y",
];

const BEAM_FORMS: [&str; 3] = [
    "StbSecBeam_Start_Center_End_Section",
    "StbSecBeam_Start_End_Section",
    "StbSecBeam_Same_Section",
];

const BEAM_ATTRS: [&str; 8] = [
    "count_main_top_1st",
    "count_main_bottom_1st",
    "count_main_top_2nd",
    "count_main_bottom_2nd",
    "count_main_top_3rd",
    "count_main_bottom_3rd",
    "pitch_stirrup",
    "count_stirrup",
];

pub fn column_bars(section: Node<'_, '_>, schema: &Schema) -> Result<Vec<f64>> {
    bar_list(section, schema, &COLUMN_FORMS, &COLUMN_ATTRS, &defaults::COLUMN_BAR_FALLBACK)
}

pub fn beam_bars(section: Node<'_, '_>, schema: &Schema) -> Result<Vec<f64>> {
    bar_list(section, schema, &BEAM_FORMS, &BEAM_ATTRS, &defaults::BEAM_BAR_FALLBACK)
}

/// Read the first recognized form
///
/// A section without an arrangement yields no values; an arrangement with
/// no recognized form yields the literal fallback.
fn bar_list(
    section: Node<'_, '_>,
    schema: &Schema,
    forms: &[&str],
    attrs: &[&str; 8],
    fallback: &[f64; 8],
) -> Result<Vec<f64>> {
    if schema.version() == StbVersion::Ver2 {
        return Ok(Vec::new());
    }

    let Some(container) = schema.child(section, CONTAINER) else {
        return Ok(Vec::new());
    };

    let Some(form) = forms.iter().find_map(|tag| schema.child(container, tag)) else {
        log::trace!(
            "<{}> has no recognized bar arrangement, using fallback",
            section.tag_name().name()
        );
        return Ok(fallback.to_vec());
    };

    attrs
        .iter()
        .map(|attr| optional_f64(form, attr, defaults::BAR_VALUE).map(Presence::into_value))
        .collect()
}
