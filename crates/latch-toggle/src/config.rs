use std::fmt;
use std::rc::Rc;

use latch_core::{ControlPropNames, Mode, UsageError, WarningSink};

use crate::action::{ToggleAction, ToggleReducer, ToggleState};

/// Receives the intended next state and the action that produced it.
pub type OnChange = Rc<dyn Fn(ToggleState, &ToggleAction)>;

/// Props for a toggle. Build with the chained setters:
///
/// ```rust
/// use latch_toggle::ToggleConfig;
///
/// let config = ToggleConfig::new()
///     .controlled(Some(true))
///     .on_change(|state, action| println!("{} -> {}", action.kind(), state.on));
/// assert!(config.is_controlled());
/// ```
#[derive(Clone)]
pub struct ToggleConfig {
    pub initial_on: bool,
    /// The controlled value; `None` leaves the toggle uncontrolled.
    pub on: Option<bool>,
    pub on_change: Option<OnChange>,
    pub read_only: bool,
    pub reducer: Option<ToggleReducer>,
    pub component_name: String,
    pub prop_names: ControlPropNames,
    /// Falls back to the ambient sink when unset.
    pub warnings: Option<Rc<dyn WarningSink>>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            initial_on: false,
            on: None,
            on_change: None,
            read_only: false,
            reducer: None,
            component_name: "Toggle".into(),
            prop_names: ControlPropNames::default(),
            warnings: None,
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = on;
        self
    }

    pub fn controlled(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    pub fn on_change(mut self, f: impl Fn(ToggleState, &ToggleAction) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn reducer(
        mut self,
        f: impl Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, UsageError> + 'static,
    ) -> Self {
        self.reducer = Some(Rc::new(f));
        self
    }

    pub fn component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    pub fn prop_names(mut self, names: ControlPropNames) -> Self {
        self.prop_names = names;
        self
    }

    pub fn warnings(mut self, sink: Rc<dyn WarningSink>) -> Self {
        self.warnings = Some(sink);
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::of(&self.on)
    }

    pub fn is_controlled(&self) -> bool {
        self.on.is_some()
    }
}

impl fmt::Debug for ToggleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("initial_on", &self.initial_on)
            .field("on", &self.on)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .field("read_only", &self.read_only)
            .field("reducer", &self.reducer.as_ref().map(|_| "<reducer>"))
            .field("component_name", &self.component_name)
            .finish_non_exhaustive()
    }
}
