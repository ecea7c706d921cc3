// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for STB decoding operations

use thiserror::Error;

/// Result type alias for decoding operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while decoding an STB document
///
/// Every variant is fatal: a document that produces any of them yields no
/// model at all.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input could not be parsed as XML
    #[error("XML parsing failed: {0}")]
    Xml(String),

    /// The document has no root element
    #[error("Document has no root element")]
    MissingRoot,

    /// The root element carries no `version` attribute
    #[error("The STB version is not set")]
    MissingVersion,

    /// The root `version` attribute names a generation we do not decode
    #[error("Unsupported STB schema version: {0}")]
    UnsupportedVersion(String),

    /// A required attribute is missing on a matched element
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute is present but cannot be converted to its expected type
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{element}>: expected {expected}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        expected: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ParseError {
    /// Create a new XML error
    pub fn xml(msg: impl Into<String>) -> Self {
        ParseError::Xml(msg.into())
    }

    /// Create a missing attribute error
    pub fn missing(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        ParseError::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an invalid attribute error
    pub fn invalid(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ParseError::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
            expected,
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ParseError::Other(msg.into())
    }

    /// True for errors caused by the root element (version, namespace, presence)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ParseError::MissingRoot | ParseError::MissingVersion | ParseError::UnsupportedVersion(_)
        )
    }
}
