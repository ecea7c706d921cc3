// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for STB data representation
//!
//! Closed enumerations for every discriminator the decoder emits, plus the
//! small value types shared by the collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ST-Bridge schema generation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StbVersion {
    /// 1.x documents: unqualified legacy tag and attribute names
    Ver1,
    /// 2.x documents: namespace-qualified, renamed tags and attributes
    Ver2,
}

impl StbVersion {
    /// Select the generation from the major component of a version string
    ///
    /// Returns `None` for anything other than `"1"` or `"2"`.
    pub fn from_major(major: &str) -> Option<Self> {
        match major {
            "1" => Some(StbVersion::Ver1),
            "2" => Some(StbVersion::Ver2),
            _ => None,
        }
    }
}

impl fmt::Display for StbVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StbVersion::Ver1 => write!(f, "Ver1"),
            StbVersion::Ver2 => write!(f, "Ver2"),
        }
    }
}

/// Whether a column section is a main column or a post
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KindColumn {
    /// Main column (`COLUMN`)
    #[default]
    Column,
    /// Post / stud column
    Post,
}

impl KindColumn {
    /// `COLUMN` maps to a main column, every other value to a post
    pub fn parse(s: &str) -> Self {
        if s == "COLUMN" {
            KindColumn::Column
        } else {
            KindColumn::Post
        }
    }
}

/// Whether a beam section is a girder or a secondary beam
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KindBeam {
    /// Girder (`GIRDER`)
    #[default]
    Girder,
    /// Secondary beam
    Beam,
}

impl KindBeam {
    /// `GIRDER` maps to a girder, every other value to a secondary beam
    pub fn parse(s: &str) -> Self {
        if s == "GIRDER" {
            KindBeam::Girder
        } else {
            KindBeam::Beam
        }
    }
}

/// Brace orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KindBrace {
    /// Vertical brace
    #[default]
    Vertical,
    /// Horizontal brace (`HORIZONTAL`)
    Horizontal,
}

impl KindBrace {
    /// `HORIZONTAL` maps to a horizontal brace, every other value to vertical
    pub fn parse(s: &str) -> Self {
        if s == "HORIZONTAL" {
            KindBrace::Horizontal
        } else {
            KindBrace::Vertical
        }
    }
}

/// Steel column base fixity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaseType {
    /// Exposed base plate
    #[default]
    Expose,
    /// Embedded base
    Embedded,
    /// Wrapped (encased) base
    Wrap,
    /// Any other value found in the document
    Any,
}

impl BaseType {
    pub fn parse(s: &str) -> Self {
        match s {
            "EXPOSE" => BaseType::Expose,
            "EMBEDDED" => BaseType::Embedded,
            "WRAP" => BaseType::Wrap,
            _ => BaseType::Any,
        }
    }
}

/// Structural material of a member
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KindStructure {
    /// Reinforced concrete
    Rc,
    /// Steel
    S,
    /// Steel reinforced concrete
    Src,
    /// Concrete filled steel tube
    Cft,
    /// Anything else, or not stated
    #[default]
    Other,
}

impl KindStructure {
    pub fn parse(s: &str) -> Self {
        match s {
            "RC" => KindStructure::Rc,
            "S" => KindStructure::S,
            "SRC" => KindStructure::Src,
            "CFT" => KindStructure::Cft,
            _ => KindStructure::Other,
        }
    }
}

/// Which kind of member a node sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KindNode {
    OnGirder,
    OnBeam,
    OnColumn,
    OnPost,
    OnGrid,
    OnCanti,
    OnSlab,
    #[default]
    Other,
}

impl KindNode {
    pub fn parse(s: &str) -> Self {
        match s {
            "ON_GIRDER" => KindNode::OnGirder,
            "ON_BEAM" => KindNode::OnBeam,
            "ON_COLUMN" => KindNode::OnColumn,
            "ON_POST" => KindNode::OnPost,
            "ON_GRID" => KindNode::OnGrid,
            "ON_CANTI" => KindNode::OnCanti,
            "ON_SLAB" => KindNode::OnSlab,
            _ => KindNode::Other,
        }
    }
}

/// Slab kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KindSlab {
    #[default]
    Normal,
    Canti,
}

impl KindSlab {
    pub fn parse(s: &str) -> Self {
        if s == "CANTI" {
            KindSlab::Canti
        } else {
            KindSlab::Normal
        }
    }
}

/// Steel cross-section family used to interpret a parameter vector
///
/// Several catalog kinds share one family (rolled and built H, rolled and
/// lipped C); see [`SteelShapeKind`] for the originating kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    H,
    #[serde(rename = "RollBOX")]
    RollBox,
    #[serde(rename = "BuildBOX")]
    BuildBox,
    Pipe,
    T,
    C,
    L,
    #[serde(rename = "FB")]
    FlatBar,
    Bar,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeType::H => "H",
            ShapeType::RollBox => "RollBOX",
            ShapeType::BuildBox => "BuildBOX",
            ShapeType::Pipe => "Pipe",
            ShapeType::T => "T",
            ShapeType::C => "C",
            ShapeType::L => "L",
            ShapeType::FlatBar => "FB",
            ShapeType::Bar => "Bar",
        };
        f.write_str(s)
    }
}

/// The eleven parametric steel shape catalogs of the STB format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelShapeKind {
    RollH,
    BuildH,
    RollBox,
    BuildBox,
    Pipe,
    RollT,
    RollC,
    RollL,
    RollLipC,
    FlatBar,
    RoundBar,
}

impl SteelShapeKind {
    /// All kinds, in catalog load order
    pub const ALL: [SteelShapeKind; 11] = [
        SteelShapeKind::RollH,
        SteelShapeKind::BuildH,
        SteelShapeKind::RollBox,
        SteelShapeKind::BuildBox,
        SteelShapeKind::Pipe,
        SteelShapeKind::RollT,
        SteelShapeKind::RollC,
        SteelShapeKind::RollL,
        SteelShapeKind::RollLipC,
        SteelShapeKind::FlatBar,
        SteelShapeKind::RoundBar,
    ];

    /// Family tag stored next to the parameter vector
    pub fn shape_type(self) -> ShapeType {
        match self {
            SteelShapeKind::RollH | SteelShapeKind::BuildH => ShapeType::H,
            SteelShapeKind::RollBox => ShapeType::RollBox,
            SteelShapeKind::BuildBox => ShapeType::BuildBox,
            SteelShapeKind::Pipe => ShapeType::Pipe,
            SteelShapeKind::RollT => ShapeType::T,
            SteelShapeKind::RollC | SteelShapeKind::RollLipC => ShapeType::C,
            SteelShapeKind::RollL => ShapeType::L,
            SteelShapeKind::FlatBar => ShapeType::FlatBar,
            SteelShapeKind::RoundBar => ShapeType::Bar,
        }
    }
}

/// Plain 3D point, used for node positions
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Geometric tolerances supplied by the caller
///
/// Stored on the model and never interpreted by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Tolerance {
    /// Length tolerance
    pub length: f64,
    /// Angle tolerance
    pub angle: f64,
}

impl Tolerance {
    pub const fn new(length: f64, angle: f64) -> Self {
        Self { length, angle }
    }
}

/// Outcome of reading an optional attribute
///
/// Keeps track of whether the value came from the document or from the
/// default table, so callers and tests can tell the two apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence<T> {
    /// The attribute was present and converted
    Present(T),
    /// The attribute was absent; the documented default applies
    Defaulted(T),
}

impl<T> Presence<T> {
    /// Take the resolved value regardless of where it came from
    pub fn into_value(self) -> T {
        match self {
            Presence::Present(v) | Presence::Defaulted(v) => v,
        }
    }
}

/// Model metadata taken from the document root
#[derive(Clone, Debug, Serialize)]
pub struct ModelMetadata {
    /// Detected schema generation
    pub version: StbVersion,
    /// Raw `version` attribute (e.g., "1.4.00", "2.0.2")
    pub version_string: String,
    /// Default namespace of the root element, if declared
    pub namespace: Option<String>,
    /// Caller supplied tolerances
    pub tolerance: Tolerance,
}
