// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema detection and version-keyed name resolution
//!
//! [`Schema`] is built once from the root element and passed to every
//! decoder. It answers two questions: which literal tag/attribute name a
//! concept has in this document's generation, and whether a node matches a
//! tag once the document namespace is taken into account.

use roxmltree::{Document, Node};
use stb_lite_model::{ParseError, Result, SteelShapeKind, StbVersion};

/// Element concepts whose tag is known to the adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    // Members
    Node,
    Column,
    Post,
    Girder,
    Beam,
    Brace,
    Slab,
    Wall,
    /// Container of a slab/wall boundary node list
    NodeIdList,

    // Sections
    SecColumnRc,
    SecBeamRc,
    SecColumnS,
    SecBeamS,
    SecBraceS,
    SecSteel,

    // RC column figure
    ColumnRcFigure,
    ColumnRcRect,
    ColumnRcCircle,

    // RC beam figure
    BeamRcFigure,
    BeamRcStraight,
    BeamRcTaper,
    BeamRcHaunch,

    // Steel figures (Ver1: the descriptor itself, Ver2: the form container)
    ColumnSFigure,
    BeamSFigure,
    BraceSFigure,
}

impl Element {
    /// Whether `name` must be present on elements of this kind
    pub fn requires_name(self) -> bool {
        !matches!(self, Element::Node)
    }
}

/// Attribute concepts that were renamed between generations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    NodeX,
    NodeY,
    NodeZ,
    IdNodeBottom,
    IdNodeTop,
    IdNodeStart,
    IdNodeEnd,
    IsFoundation,
    IsCanti,
    IsOutIn,
    /// X extent of a rectangular RC column
    RectWidth,
    /// Y extent of a rectangular RC column
    RectHeight,
    /// Fillet radius of a rolled box
    RollBoxRadius,
}

/// Resolved schema generation and namespace of one document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    version: StbVersion,
    version_string: String,
    namespace: Option<String>,
}

impl Schema {
    /// Build a schema for an explicit version and namespace
    pub fn new(version: StbVersion, namespace: Option<&str>) -> Self {
        let version_string = match version {
            StbVersion::Ver1 => "1",
            StbVersion::Ver2 => "2",
        };
        Self {
            version,
            version_string: version_string.to_string(),
            namespace: namespace.map(str::to_string),
        }
    }

    /// Detect version and namespace from the document root
    ///
    /// The text before the first `.` of the root `version` attribute selects
    /// the generation. The root's default namespace, when declared, qualifies
    /// every element name looked up afterwards.
    pub fn resolve(doc: &Document<'_>) -> Result<Self> {
        let root = doc.root_element();
        if root.tag_name().name() != "ST_BRIDGE" {
            log::warn!(
                "Root element is <{}>, expected <ST_BRIDGE>",
                root.tag_name().name()
            );
        }

        let version_string = root.attribute("version").ok_or(ParseError::MissingVersion)?;
        let major = version_string.split('.').next().unwrap_or_default();
        let version = StbVersion::from_major(major)
            .ok_or_else(|| ParseError::UnsupportedVersion(version_string.to_string()))?;

        let namespace = root
            .lookup_namespace_uri(None)
            .filter(|ns| !ns.is_empty())
            .map(str::to_string);

        log::info!(
            "Detected STB {} (version=\"{}\", namespace={:?})",
            version,
            version_string,
            namespace
        );

        Ok(Self {
            version,
            version_string: version_string.to_string(),
            namespace,
        })
    }

    pub fn version(&self) -> StbVersion {
        self.version
    }

    /// Raw `version` attribute of the root element
    pub fn version_string(&self) -> &str {
        &self.version_string
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Tag name of an element concept in this generation
    pub fn element(&self, element: Element) -> &'static str {
        use Element::*;
        use StbVersion::*;

        match (self.version, element) {
            (_, Element::Node) => "StbNode",
            (_, Column) => "StbColumn",
            (_, Post) => "StbPost",
            (_, Girder) => "StbGirder",
            (_, Beam) => "StbBeam",
            (_, Brace) => "StbBrace",
            (_, Slab) => "StbSlab",
            (_, Wall) => "StbWall",
            (Ver1, NodeIdList) => "StbNodeid_List",
            (Ver2, NodeIdList) => "StbNodeIdOrder",

            (_, SecColumnRc) => "StbSecColumn_RC",
            (_, SecBeamRc) => "StbSecBeam_RC",
            (_, SecColumnS) => "StbSecColumn_S",
            (_, SecBeamS) => "StbSecBeam_S",
            (_, SecBraceS) => "StbSecBrace_S",
            (_, SecSteel) => "StbSecSteel",

            (Ver1, ColumnRcFigure) => "StbSecFigure",
            (Ver2, ColumnRcFigure) => "StbSecFigureColumn_RC",
            (Ver1, ColumnRcRect) => "StbSecRect",
            (Ver2, ColumnRcRect) => "StbSecColumn_RC_Rect",
            (Ver1, ColumnRcCircle) => "StbSecCircle",
            (Ver2, ColumnRcCircle) => "StbSecColumn_RC_Circle",

            (Ver1, BeamRcFigure) => "StbSecFigure",
            (Ver2, BeamRcFigure) => "StbSecFigureBeam_RC",
            (Ver1, BeamRcStraight) => "StbSecStraight",
            (Ver2, BeamRcStraight) => "StbSecBeam_RC_Straight",
            (Ver1, BeamRcTaper) => "StbSecTaper",
            (Ver2, BeamRcTaper) => "StbSecBeam_RC_Taper",
            (Ver1, BeamRcHaunch) => "StbSecHaunch",
            (Ver2, BeamRcHaunch) => "StbSecBeam_RC_Haunch",

            (Ver1, ColumnSFigure) => "StbSecSteelColumn",
            (Ver2, ColumnSFigure) => "StbSecSteelFigureColumn_S",
            (Ver1, BeamSFigure) => "StbSecSteelBeam",
            (Ver2, BeamSFigure) => "StbSecSteelFigureBeam_S",
            (Ver1, BraceSFigure) => "StbSecSteelBrace",
            (Ver2, BraceSFigure) => "StbSecSteelFigureBrace_S",
        }
    }

    /// Attribute name of a renamed attribute concept in this generation
    pub fn attr(&self, attr: Attr) -> &'static str {
        use Attr::*;
        use StbVersion::*;

        match (self.version, attr) {
            (Ver1, NodeX) => "x",
            (Ver2, NodeX) => "X",
            (Ver1, NodeY) => "y",
            (Ver2, NodeY) => "Y",
            (Ver1, NodeZ) => "z",
            (Ver2, NodeZ) => "Z",
            (Ver1, IdNodeBottom) => "idNode_bottom",
            (Ver2, IdNodeBottom) => "id_node_bottom",
            (Ver1, IdNodeTop) => "idNode_top",
            (Ver2, IdNodeTop) => "id_node_top",
            (Ver1, IdNodeStart) => "idNode_start",
            (Ver2, IdNodeStart) => "id_node_start",
            (Ver1, IdNodeEnd) => "idNode_end",
            (Ver2, IdNodeEnd) => "id_node_end",
            (Ver1, IsFoundation) => "isFoundation",
            (Ver2, IsFoundation) => "is_foundation",
            (Ver1, IsCanti) => "isCanti",
            (Ver2, IsCanti) => "is_canti",
            (Ver1, IsOutIn) => "isOutIn",
            (Ver2, IsOutIn) => "is_outin",
            (Ver1, RectWidth) => "DX",
            (Ver2, RectWidth) => "width_X",
            (Ver1, RectHeight) => "DY",
            (Ver2, RectHeight) => "width_Y",
            (Ver1, RollBoxRadius) => "R",
            (Ver2, RollBoxRadius) => "r",
        }
    }

    /// Tag of a steel shape catalog entry in this generation
    pub fn steel_shape(&self, kind: SteelShapeKind) -> &'static str {
        use SteelShapeKind::*;

        match (self.version, kind) {
            (_, RollH) => "StbSecRoll-H",
            (_, BuildH) => "StbSecBuild-H",
            (_, RollBox) => "StbSecRoll-BOX",
            (_, BuildBox) => "StbSecBuild-BOX",
            (_, Pipe) => "StbSecPipe",
            (_, RollT) => "StbSecRoll-T",
            (_, RollC) => "StbSecRoll-C",
            (_, RollL) => "StbSecRoll-L",
            (_, RollLipC) => "StbSecRoll-LipC",
            (StbVersion::Ver1, FlatBar) => "StbSecRoll-FB",
            (StbVersion::Ver2, FlatBar) => "StbSecFlatBar",
            (StbVersion::Ver1, RoundBar) => "StbSecRoll-Bar",
            (StbVersion::Ver2, RoundBar) => "StbSecRoundBar",
        }
    }

    /// True if `node` is an element with local name `tag` in the document namespace
    pub fn is(&self, node: Node<'_, '_>, tag: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == tag
            && node.tag_name().namespace() == self.namespace()
    }

    /// First child element matching `tag`
    pub fn child<'a, 'input>(&self, node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
        node.children().find(|child| self.is(*child, tag))
    }

    /// All child elements matching `tag`, in document order
    pub fn children<'a, 'input: 'a>(
        &'a self,
        node: Node<'a, 'input>,
        tag: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        node.children().filter(move |child| self.is(*child, tag))
    }

    /// All elements of the document matching `tag`, in document order
    pub fn descendants<'a, 'input: 'a>(
        &'a self,
        doc: &'a Document<'input>,
        tag: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        doc.root_element()
            .descendants()
            .filter(move |node| self.is(*node, tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(xml: &str) -> Result<Schema> {
        let doc = Document::parse(xml).unwrap();
        Schema::resolve(&doc)
    }

    #[test]
    fn test_resolve_ver1_without_namespace() {
        let schema = resolve(r#"<ST_BRIDGE version="1.4.00"></ST_BRIDGE>"#).unwrap();
        assert_eq!(schema.version(), StbVersion::Ver1);
        assert_eq!(schema.version_string(), "1.4.00");
        assert_eq!(schema.namespace(), None);
    }

    #[test]
    fn test_resolve_ver2_with_namespace() {
        let schema = resolve(
            r#"<ST_BRIDGE xmlns="https://www.building-smart.or.jp/dl" version="2.0.2"></ST_BRIDGE>"#,
        )
        .unwrap();
        assert_eq!(schema.version(), StbVersion::Ver2);
        assert_eq!(
            schema.namespace(),
            Some("https://www.building-smart.or.jp/dl")
        );
    }

    #[test]
    fn test_major_only_version() {
        let schema = resolve(r#"<ST_BRIDGE version="2"></ST_BRIDGE>"#).unwrap();
        assert_eq!(schema.version(), StbVersion::Ver2);
    }

    #[test]
    fn test_unsupported_version() {
        let err = resolve(r#"<ST_BRIDGE version="3.0"></ST_BRIDGE>"#).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion(v) if v == "3.0"));
    }

    #[test]
    fn test_missing_version() {
        let err = resolve(r#"<ST_BRIDGE></ST_BRIDGE>"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingVersion));
    }

    #[test]
    fn test_renamed_names() {
        let v1 = Schema::new(StbVersion::Ver1, None);
        let v2 = Schema::new(StbVersion::Ver2, Some("urn:stb"));

        assert_eq!(v1.element(Element::ColumnRcRect), "StbSecRect");
        assert_eq!(v2.element(Element::ColumnRcRect), "StbSecColumn_RC_Rect");
        assert_eq!(v1.attr(Attr::RollBoxRadius), "R");
        assert_eq!(v2.attr(Attr::RollBoxRadius), "r");
        assert_eq!(v1.steel_shape(SteelShapeKind::FlatBar), "StbSecRoll-FB");
        assert_eq!(v2.steel_shape(SteelShapeKind::RoundBar), "StbSecRoundBar");
    }

    #[test]
    fn test_namespace_qualified_matching() {
        let xml = r#"<ST_BRIDGE xmlns="urn:stb" version="2.0">
            <StbNode id="1"/>
            <x:StbNode xmlns:x="urn:other" id="2"/>
        </ST_BRIDGE>"#;
        let doc = Document::parse(xml).unwrap();
        let schema = Schema::resolve(&doc).unwrap();

        let ids: Vec<_> = schema
            .descendants(&doc, "StbNode")
            .filter_map(|n| n.attribute("id"))
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_unqualified_schema_ignores_namespaced_elements() {
        let xml = r#"<ST_BRIDGE version="1.4"><x:StbNode xmlns:x="urn:other" id="9"/></ST_BRIDGE>"#;
        let doc = Document::parse(xml).unwrap();
        let schema = Schema::resolve(&doc).unwrap();
        assert_eq!(schema.descendants(&doc, "StbNode").count(), 0);
    }
}
