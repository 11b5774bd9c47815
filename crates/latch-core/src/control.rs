//! # Control props
//!
//! A component's value is *controlled* when its parent passes the value in
//! on every render and *uncontrolled* when the component keeps it itself.
//! Two kinds of misuse are common and both are reported as [`Warning`]s:
//!
//! - switching between the two modes during the component's lifetime;
//! - passing a controlled value with no change handler and without opting
//!   into read-only, which silently freezes the value.
//!
//! [`ControlChecks`] runs both checks after a render has been committed and
//! only re-evaluates a check when the inputs it depends on changed, so a
//! single misuse yields one warning rather than one per frame.

use smallvec::SmallVec;

use crate::warning::{Mode, Warning};

/// Prop names used when wording warnings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlPropNames {
    pub control: String,
    pub on_change: String,
    pub read_only: String,
    pub initial: String,
}

impl Default for ControlPropNames {
    fn default() -> Self {
        Self {
            control: "on".into(),
            on_change: "on_change".into(),
            read_only: "read_only".into(),
            initial: "initial_on".into(),
        }
    }
}

/// What the checks observe about a component at commit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub mode: Mode,
    pub has_on_change: bool,
    pub read_only: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ModeDeps {
    component: String,
    prop: String,
    mode: Mode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ReadOnlyDeps {
    component: String,
    prop: String,
    controlled: bool,
    has_on_change: bool,
    read_only: bool,
}

pub type Warnings = SmallVec<[Warning; 2]>;

#[derive(Debug)]
pub struct ControlChecks {
    component: String,
    names: ControlPropNames,
    previous_mode: Mode,
    mode_deps: Option<ModeDeps>,
    read_only_deps: Option<ReadOnlyDeps>,
}

impl ControlChecks {
    /// `initial_mode` is the mode the component was created in.
    pub fn new(component: impl Into<String>, names: ControlPropNames, initial_mode: Mode) -> Self {
        Self {
            component: component.into(),
            names,
            previous_mode: initial_mode,
            mode_deps: None,
            read_only_deps: None,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn names(&self) -> &ControlPropNames {
        &self.names
    }

    pub fn set_component(&mut self, component: impl Into<String>) {
        self.component = component.into();
    }

    pub fn set_names(&mut self, names: ControlPropNames) {
        self.names = names;
    }

    /// Evaluates the checks whose dependencies changed since the last run.
    pub fn run(&mut self, snapshot: ControlSnapshot) -> Warnings {
        let mut out = Warnings::new();

        let mode_deps = ModeDeps {
            component: self.component.clone(),
            prop: self.names.control.clone(),
            mode: snapshot.mode,
        };
        if self.mode_deps.as_ref() != Some(&mode_deps) {
            if snapshot.mode != self.previous_mode {
                out.push(Warning::ModeChanged {
                    component: self.component.clone(),
                    prop: self.names.control.clone(),
                    from: self.previous_mode,
                    to: snapshot.mode,
                });
            }
            self.previous_mode = snapshot.mode;
            self.mode_deps = Some(mode_deps);
        }

        let controlled = snapshot.mode == Mode::Controlled;
        let read_only_deps = ReadOnlyDeps {
            component: self.component.clone(),
            prop: self.names.control.clone(),
            controlled,
            has_on_change: snapshot.has_on_change,
            read_only: snapshot.read_only,
        };
        if self.read_only_deps.as_ref() != Some(&read_only_deps) {
            if controlled && !snapshot.has_on_change && !snapshot.read_only {
                out.push(Warning::ReadOnly {
                    component: self.component.clone(),
                    prop: self.names.control.clone(),
                    on_change_prop: self.names.on_change.clone(),
                    read_only_prop: self.names.read_only.clone(),
                    initial_prop: self.names.initial.clone(),
                });
            }
            self.read_only_deps = Some(read_only_deps);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(mode: Mode, has_on_change: bool, read_only: bool) -> ControlSnapshot {
        ControlSnapshot {
            mode,
            has_on_change,
            read_only,
        }
    }

    #[test]
    fn stable_uncontrolled_is_quiet() {
        let mut checks =
            ControlChecks::new("Toggle", ControlPropNames::default(), Mode::Uncontrolled);
        for _ in 0..3 {
            assert!(checks.run(snapshot(Mode::Uncontrolled, false, false)).is_empty());
        }
    }

    #[test]
    fn mode_switch_warns_once_per_transition() {
        let mut checks =
            ControlChecks::new("Toggle", ControlPropNames::default(), Mode::Uncontrolled);
        assert!(checks.run(snapshot(Mode::Uncontrolled, true, false)).is_empty());

        let w = checks.run(snapshot(Mode::Controlled, true, false));
        assert_eq!(w.len(), 1);
        assert_eq!(
            w[0],
            Warning::ModeChanged {
                component: "Toggle".into(),
                prop: "on".into(),
                from: Mode::Uncontrolled,
                to: Mode::Controlled,
            }
        );
        assert!(checks.run(snapshot(Mode::Controlled, true, false)).is_empty());

        let back = checks.run(snapshot(Mode::Uncontrolled, true, false));
        assert_eq!(back.len(), 1);
        assert!(back[0].to_string().contains("from controlled to be uncontrolled"));
    }

    #[test]
    fn read_only_warns_until_handler_or_flag_appears() {
        let mut checks =
            ControlChecks::new("Toggle", ControlPropNames::default(), Mode::Controlled);
        let w = checks.run(snapshot(Mode::Controlled, false, false));
        assert_eq!(w.len(), 1);
        assert!(matches!(w[0], Warning::ReadOnly { .. }));

        // same deps: nothing new
        assert!(checks.run(snapshot(Mode::Controlled, false, false)).is_empty());
        // opting into read-only silences it
        assert!(checks.run(snapshot(Mode::Controlled, false, true)).is_empty());
    }

    #[test]
    fn warning_text_names_component_and_props() {
        let names = ControlPropNames {
            control: "checked".into(),
            on_change: "on_toggle".into(),
            read_only: "frozen".into(),
            initial: "default_checked".into(),
        };
        let mut checks = ControlChecks::new("Checkbox", names, Mode::Controlled);
        let w = checks.run(snapshot(Mode::Controlled, false, false));
        let text = w[0].to_string();
        assert!(text.contains("`checked` prop was provided to `Checkbox`"));
        assert!(text.contains("without an `on_toggle` handler"));
        assert!(text.contains("use `default_checked`"));
        assert!(text.contains("`frozen`"));
    }
}
