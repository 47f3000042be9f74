//! Client construction errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised synchronously while binding a client to the page.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum InitError {
    /// The element handed to the constructor was null/undefined
    #[error("element is null")]
    MissingElement,

    /// The element is detached from the document
    #[error("element.parentNode is null")]
    MissingParent,

    /// The element's parent has no parent of its own
    #[error("element.parentNode.parentNode is null")]
    MissingGrandparent,

    /// No window or document is reachable (not running in a browser page)
    #[error("document is unavailable")]
    NoDocument,

    /// A DOM call failed while creating the panel or spinner
    #[error("DOM operation failed: {message}")]
    Dom {
        /// Stringified JS exception
        message: String,
    },
}
