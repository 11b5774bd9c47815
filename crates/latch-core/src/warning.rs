//! Advisory diagnostics for misuse that should not stop the program.
//!
//! Components report [`Warning`]s to a [`WarningSink`]. The default sink
//! forwards to `log::warn!`; tests swap in [`CapturingWarnings`] either
//! directly or for a subtree via [`with_warning_sink`](crate::with_warning_sink).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Who owns a control value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// The parent supplies the value every render.
    Controlled,
    /// The component holds the value itself.
    Uncontrolled,
}

impl Mode {
    pub fn of<T>(controlled: &Option<T>) -> Self {
        if controlled.is_some() {
            Mode::Controlled
        } else {
            Mode::Uncontrolled
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Controlled => f.write_str("controlled"),
            Mode::Uncontrolled => f.write_str("uncontrolled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Warning {
    #[error(
        "`{component}` is changing from {from} to be {to}. Components should not switch from {from} to {to} (or vice versa). \
         Decide between using a controlled or uncontrolled `{component}` for the lifetime of the component. Check the `{prop}` prop."
    )]
    ModeChanged {
        component: String,
        prop: String,
        from: Mode,
        to: Mode,
    },

    #[error(
        "A `{prop}` prop was provided to `{component}` without an `{on_change_prop}` handler. This will result in a read-only `{prop}` value. \
         If you want it to be mutable, use `{initial_prop}`. Otherwise, set either `{on_change_prop}` or `{read_only_prop}`."
    )]
    ReadOnly {
        component: String,
        prop: String,
        on_change_prop: String,
        read_only_prop: String,
        initial_prop: String,
    },
}

pub trait WarningSink {
    fn warn(&self, warning: &Warning);
}

/// Forwards warnings to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&self, warning: &Warning) {
        log::warn!("{warning}");
    }
}

/// Keeps every warning it receives. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct CapturingWarnings {
    seen: Rc<RefCell<Vec<Warning>>>,
}

impl CapturingWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.seen.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }
}

impl WarningSink for CapturingWarnings {
    fn warn(&self, warning: &Warning) {
        self.seen.borrow_mut().push(warning.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capturing_sink_clones_share_buffer() {
        let capture = CapturingWarnings::new();
        let sink: Rc<dyn WarningSink> = Rc::new(capture.clone());
        sink.warn(&Warning::ModeChanged {
            component: "Toggle".into(),
            prop: "on".into(),
            from: Mode::Controlled,
            to: Mode::Uncontrolled,
        });
        assert_eq!(capture.len(), 1);
        capture.clear();
        assert!(capture.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn warnings_serialize_with_kind_tag() {
        let warning = Warning::ModeChanged {
            component: "Toggle".into(),
            prop: "on".into(),
            from: Mode::Uncontrolled,
            to: Mode::Controlled,
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"mode_changed","component":"Toggle","prop":"on","from":"uncontrolled","to":"controlled"}"#
        );
        let back: Warning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, warning);
    }
}
