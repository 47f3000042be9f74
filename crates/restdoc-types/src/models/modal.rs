//! Modal trigger attributes.

/// Value of `data-close-modal` that closes the enclosing modal.
pub const CLOSE_ENCLOSING: &str = "this";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// `data-open-modal="<id>"`
    Open(String),
    /// `data-close-modal="this"`
    CloseEnclosing,
}

impl ModalAction {
    /// Read the action a control carries, from its two data attributes.
    pub fn from_attributes(open: Option<&str>, close: Option<&str>) -> Option<Self> {
        if let Some(id) = open.map(str::trim).filter(|id| !id.is_empty()) {
            return Some(Self::Open(id.to_string()));
        }
        match close {
            Some(CLOSE_ENCLOSING) => Some(Self::CloseEnclosing),
            _ => None,
        }
    }
}
