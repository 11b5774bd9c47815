/// High-level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    Switch,
    Container,
}

/// Semantics attached to a `View`, used by hosts that expose an accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    /// Primary role of this node (what kind of thing it is).
    pub role: Role,
    /// Human-readable label for screen readers.
    pub label: Option<String>,
    /// Pressed state for toggle buttons (`aria-pressed`). `None` when the
    /// node is not a toggle.
    pub pressed: Option<bool>,
    /// Whether this node is actionable; disabled nodes remain in the tree
    /// but are marked not enabled.
    pub enabled: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            pressed: None,
            enabled: true,
        }
    }
}
