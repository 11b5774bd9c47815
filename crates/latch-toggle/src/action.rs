use std::rc::Rc;

use latch_core::UsageError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum ToggleAction {
    Toggle,
    /// Carries the snapshot taken when the controller was created.
    Reset { initial_state: ToggleState },
    /// For caller-supplied reducers; the stock reducer rejects it.
    Custom { kind: String },
}

impl ToggleAction {
    pub fn kind(&self) -> &str {
        match self {
            ToggleAction::Toggle => "toggle",
            ToggleAction::Reset { .. } => "reset",
            ToggleAction::Custom { kind } => kind,
        }
    }
}

pub type ToggleReducer = Rc<dyn Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, UsageError>>;

/// The stock reducer.
pub fn toggle_reducer(
    state: &ToggleState,
    action: &ToggleAction,
) -> Result<ToggleState, UsageError> {
    match action {
        ToggleAction::Toggle => Ok(ToggleState { on: !state.on }),
        ToggleAction::Reset { initial_state } => Ok(*initial_state),
        ToggleAction::Custom { kind } => Err(UsageError::UnsupportedAction { kind: kind.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let s = toggle_reducer(&ToggleState::new(false), &ToggleAction::Toggle).unwrap();
        assert!(s.on);
        let s = toggle_reducer(&s, &ToggleAction::Toggle).unwrap();
        assert!(!s.on);
    }

    #[test]
    fn reset_returns_embedded_snapshot() {
        let action = ToggleAction::Reset {
            initial_state: ToggleState::new(true),
        };
        assert_eq!(
            toggle_reducer(&ToggleState::new(false), &action),
            Ok(ToggleState::new(true))
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = toggle_reducer(
            &ToggleState::default(),
            &ToggleAction::Custom {
                kind: "force_on".into(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type: force_on");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn actions_serialize_with_type_tag() {
        let json = serde_json::to_string(&ToggleAction::Reset {
            initial_state: ToggleState::new(false),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"reset","initial_state":{"on":false}}"#);
    }
}
