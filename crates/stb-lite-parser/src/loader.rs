// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic collection loader
//!
//! Every entity kind is loaded the same way: find all matching elements in
//! document order, read the common fields, then hand the element to a
//! kind-specific decoder that produces one complete record.

use crate::schema::{Element, Schema};
use crate::xml::{optional_str, required_i32, required_str};
use roxmltree::{Document, Node};
use stb_lite_model::{defaults, Columnar, Result};

/// Fields carried by every entity element
#[derive(Clone, Debug, PartialEq)]
pub struct Common {
    pub id: i32,
    pub name: String,
    pub guid: String,
}

impl Common {
    /// Read `id`, `name` and `guid`
    ///
    /// `id` is always required. `name` is required unless `name_required` is
    /// false, in which case it defaults to an empty string.
    pub fn decode(node: Node<'_, '_>, name_required: bool) -> Result<Self> {
        let id = required_i32(node, "id")?;
        let name = if name_required {
            required_str(node, "name")?.to_string()
        } else {
            optional_str(node, "name", defaults::NODE_NAME).into_value()
        };
        let guid = optional_str(node, "guid", defaults::GUID).into_value();
        Ok(Self { id, name, guid })
    }
}

/// Load every element of one kind into a column-oriented collection
///
/// Any error from a single element aborts the whole load.
pub fn load<C, F>(doc: &Document<'_>, schema: &Schema, element: Element, mut decode: F) -> Result<C>
where
    C: Columnar,
    F: FnMut(Node<'_, '_>, &Schema, Common) -> Result<C::Record>,
{
    let tag = schema.element(element);
    let mut collection = C::default();

    for node in schema.descendants(doc, tag) {
        let common = Common::decode(node, element.requires_name())?;
        let record = decode(node, schema, common)?;
        collection.push(record);
    }

    log::debug!("Loaded {} <{}> elements", collection.len(), tag);
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stb_lite_model::ParseError;

    #[test]
    fn test_common_fields() {
        let doc = Document::parse(r#"<StbColumn id="3" name="C1" guid="abc"/>"#).unwrap();
        let common = Common::decode(doc.root_element(), true).unwrap();
        assert_eq!(
            common,
            Common {
                id: 3,
                name: "C1".to_string(),
                guid: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_optional_name() {
        let doc = Document::parse(r#"<StbNode id="1"/>"#).unwrap();
        let common = Common::decode(doc.root_element(), false).unwrap();
        assert_eq!(common.name, "");
        assert_eq!(common.guid, "");

        let err = Common::decode(doc.root_element(), true).unwrap_err();
        assert!(matches!(err, ParseError::MissingAttribute { .. }));
    }
}
