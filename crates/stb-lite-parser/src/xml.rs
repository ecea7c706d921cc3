// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute coercion
//!
//! Converts attribute text to typed values. Required readers fail with a
//! [`ParseError`] naming the element and attribute; optional readers return
//! a [`Presence`] so the caller can see whether the default table was used.

use nom::{
    character::complete::{i32 as int32, multispace0, multispace1},
    combinator::all_consuming,
    multi::separated_list0,
    sequence::delimited,
    IResult, Parser,
};
use roxmltree::Node;
use stb_lite_model::{ParseError, Presence, Result};

// ============================================================================
// Scalar conversion
// ============================================================================

fn element_name(node: Node<'_, '_>) -> String {
    node.tag_name().name().to_string()
}

/// Convert attribute text to `f64`
///
/// Surrounding whitespace is ignored and `INF` / `-INF` are accepted.
fn to_f64(node: Node<'_, '_>, name: &str, value: &str) -> Result<f64> {
    let text = value.trim();
    match text {
        "INF" => return Ok(f64::INFINITY),
        "-INF" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }
    lexical_core::parse::<f64>(text.as_bytes())
        .map_err(|_| ParseError::invalid(element_name(node), name, value, "a number"))
}

fn to_i32(node: Node<'_, '_>, name: &str, value: &str) -> Result<i32> {
    lexical_core::parse::<i32>(value.trim().as_bytes())
        .map_err(|_| ParseError::invalid(element_name(node), name, value, "an integer"))
}

/// Convert attribute text to `bool`: `true`/`false` (any case) or `1`/`0`
fn to_bool(node: Node<'_, '_>, name: &str, value: &str) -> Result<bool> {
    let text = value.trim();
    if text == "1" || text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text == "0" || text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::invalid(element_name(node), name, value, "a boolean"))
    }
}

// ============================================================================
// Required attributes
// ============================================================================

pub fn required_str<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .ok_or_else(|| ParseError::missing(element_name(node), name))
}

pub fn required_f64(node: Node<'_, '_>, name: &str) -> Result<f64> {
    let value = required_str(node, name)?;
    to_f64(node, name, value)
}

pub fn required_i32(node: Node<'_, '_>, name: &str) -> Result<i32> {
    let value = required_str(node, name)?;
    to_i32(node, name, value)
}

// ============================================================================
// Optional attributes
// ============================================================================

pub fn optional_str(node: Node<'_, '_>, name: &str, default: &str) -> Presence<String> {
    match node.attribute(name) {
        Some(value) => Presence::Present(value.to_string()),
        None => Presence::Defaulted(default.to_string()),
    }
}

pub fn optional_f64(node: Node<'_, '_>, name: &str, default: f64) -> Result<Presence<f64>> {
    match node.attribute(name) {
        Some(value) => to_f64(node, name, value).map(Presence::Present),
        None => Ok(Presence::Defaulted(default)),
    }
}

pub fn optional_i32(node: Node<'_, '_>, name: &str, default: i32) -> Result<Presence<i32>> {
    match node.attribute(name) {
        Some(value) => to_i32(node, name, value).map(Presence::Present),
        None => Ok(Presence::Defaulted(default)),
    }
}

pub fn optional_bool(node: Node<'_, '_>, name: &str, default: bool) -> Result<Presence<bool>> {
    match node.attribute(name) {
        Some(value) => to_bool(node, name, value).map(Presence::Present),
        None => Ok(Presence::Defaulted(default)),
    }
}

/// Read an enumerated attribute with the type's own string mapping
pub fn optional_enum<T>(
    node: Node<'_, '_>,
    name: &str,
    default: T,
    parse: impl FnOnce(&str) -> T,
) -> Presence<T> {
    match node.attribute(name) {
        Some(value) => Presence::Present(parse(value)),
        None => Presence::Defaulted(default),
    }
}

// ============================================================================
// Node id lists
// ============================================================================

fn id_list(input: &str) -> IResult<&str, Vec<i32>> {
    all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, int32),
        multispace0,
    ))
    .parse(input)
}

/// Parse whitespace separated integer ids from the text of `node`
pub fn text_id_list(node: Node<'_, '_>) -> Result<Vec<i32>> {
    let text = node.text().unwrap_or_default();
    id_list(text).map(|(_, ids)| ids).map_err(|_| {
        ParseError::invalid(element_name(node), "#text", text, "whitespace separated integers")
    })
}
