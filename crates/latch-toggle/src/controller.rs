use std::cell::RefCell;
use std::rc::Rc;

use latch_core::{
    ARIA_PRESSED, ControlChecks, ControlSnapshot, Handler, Mode, ON_CLICK, PropBundle, Signal,
    SubId, UsageError, Warnings, WarningSink, call_all, warning_sink,
};

use crate::action::{ToggleAction, ToggleReducer, ToggleState, toggle_reducer};
use crate::config::{OnChange, ToggleConfig};

/// Owns a toggle's on/off state and reconciles it with an optional value
/// supplied by the parent.
///
/// Uncontrolled, the controller is the source of truth and `toggle`/`reset`
/// update it. Controlled, [`on`](Self::on) always reports the parent's value;
/// `toggle`/`reset` only tell `on_change` what the next state would be.
///
/// Handles are cheap to clone and share the same state. No borrow is held
/// while `on_change` or subscribers run, so they may call back into the
/// controller.
#[derive(Clone)]
pub struct ToggleStateController {
    inner: Rc<RefCell<Inner>>,
    state: Signal<ToggleState>,
}

struct Inner {
    initial_state: ToggleState,
    controlled: Option<bool>,
    on_change: Option<OnChange>,
    read_only: bool,
    reducer: ToggleReducer,
    warnings: Rc<dyn WarningSink>,
    checks: ControlChecks,
}

impl ToggleStateController {
    pub fn new(config: ToggleConfig) -> Self {
        let initial_state = ToggleState::new(config.initial_on);
        let checks = ControlChecks::new(
            config.component_name.clone(),
            config.prop_names.clone(),
            config.mode(),
        );
        log::debug!(
            "{}: created {} (initial_on={})",
            config.component_name,
            config.mode(),
            config.initial_on
        );

        Self {
            inner: Rc::new(RefCell::new(Inner {
                initial_state,
                controlled: config.on,
                on_change: config.on_change,
                read_only: config.read_only,
                reducer: config.reducer.unwrap_or_else(stock_reducer),
                warnings: config.warnings.unwrap_or_else(warning_sink),
                checks,
            })),
            state: Signal::new(initial_state),
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::of(&self.inner.borrow().controlled)
    }

    pub fn is_controlled(&self) -> bool {
        self.mode() == Mode::Controlled
    }

    /// The parent's value when controlled, otherwise the internal state.
    pub fn on(&self) -> bool {
        let controlled = self.inner.borrow().controlled;
        controlled.unwrap_or_else(|| self.state.with(|s| s.on))
    }

    /// The state as observers should see it.
    pub fn state(&self) -> ToggleState {
        ToggleState { on: self.on() }
    }

    /// Snapshot used by `reset`; fixed at construction.
    pub fn initial_state(&self) -> ToggleState {
        self.inner.borrow().initial_state
    }

    pub fn toggle(&self) -> Result<ToggleState, UsageError> {
        self.dispatch(ToggleAction::Toggle)
    }

    pub fn reset(&self) -> Result<ToggleState, UsageError> {
        let initial_state = self.initial_state();
        self.dispatch(ToggleAction::Reset { initial_state })
    }

    /// Applies `action` and reports the intended next state to `on_change`.
    ///
    /// The internal state only changes when uncontrolled. The reported state
    /// is computed from the state observed before this call, whatever the
    /// mode, and is also returned.
    pub fn dispatch(&self, action: ToggleAction) -> Result<ToggleState, UsageError> {
        let (reducer, on_change, controlled) = {
            let inner = self.inner.borrow();
            (
                inner.reducer.clone(),
                inner.on_change.clone(),
                inner.controlled,
            )
        };
        let current = ToggleState {
            on: controlled.unwrap_or_else(|| self.state.with(|s| s.on)),
        };

        if controlled.is_none() {
            let next = self.state.with(|s| reducer(s, &action))?;
            self.state.set(next);
        }

        let intended = reducer(&current, &action)?;
        log::trace!(
            "dispatch {}: {} -> {} ({})",
            action.kind(),
            current.on,
            intended.on,
            Mode::of(&controlled)
        );
        if let Some(on_change) = on_change {
            on_change(intended, &action);
        }
        Ok(intended)
    }

    /// Props for the element that flips the toggle.
    ///
    /// `aria-pressed` and an `onClick` that toggles first and then runs the
    /// caller's `onClick` (if any). Every other override is passed through
    /// unchanged and wins over the base fields.
    pub fn toggler_props(&self, overrides: PropBundle) -> PropBundle {
        let this = self.clone();
        let toggle: Handler = Rc::new(move || this.toggle().map(drop));
        Self::compose_props(
            PropBundle::new().with(ARIA_PRESSED, self.on()),
            toggle,
            overrides,
        )
    }

    /// Props for the element that resets the toggle to its initial state.
    pub fn resetter_props(&self, overrides: PropBundle) -> PropBundle {
        let this = self.clone();
        let reset: Handler = Rc::new(move || this.reset().map(drop));
        Self::compose_props(PropBundle::new(), reset, overrides)
    }

    fn compose_props(base: PropBundle, own: Handler, mut overrides: PropBundle) -> PropBundle {
        let external = overrides.take_handler(ON_CLICK);
        base.with(ON_CLICK, call_all(std::iter::once(own).chain(external)))
            .merge(overrides)
    }

    pub fn set_controlled(&self, on: Option<bool>) {
        self.inner.borrow_mut().controlled = on;
    }

    pub fn set_on_change(&self, on_change: Option<OnChange>) {
        self.inner.borrow_mut().on_change = on_change;
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    /// Re-applies per-render props. `initial_on` is ignored after construction.
    pub fn apply_config(&self, config: &ToggleConfig) {
        let mut inner = self.inner.borrow_mut();
        inner.controlled = config.on;
        inner.on_change = config.on_change.clone();
        inner.read_only = config.read_only;
        inner.reducer = config.reducer.clone().unwrap_or_else(stock_reducer);
        if let Some(sink) = &config.warnings {
            inner.warnings = sink.clone();
        }
        if inner.checks.component() != config.component_name {
            inner.checks.set_component(config.component_name.clone());
        }
        if *inner.checks.names() != config.prop_names {
            inner.checks.set_names(config.prop_names.clone());
        }
    }

    /// Called by the host once a render is applied. Runs the consistency
    /// checks whose inputs changed and reports any warnings to the sink.
    pub fn commit(&self) -> Warnings {
        let (warnings, sink) = {
            let mut inner = self.inner.borrow_mut();
            let snapshot = ControlSnapshot {
                mode: Mode::of(&inner.controlled),
                has_on_change: inner.on_change.is_some(),
                read_only: inner.read_only,
            };
            (inner.checks.run(snapshot), inner.warnings.clone())
        };
        for w in &warnings {
            sink.warn(w);
        }
        warnings
    }

    /// Notified after every change to the internal state.
    pub fn subscribe(&self, f: impl Fn(&ToggleState) + 'static) -> SubId {
        self.state.subscribe(f)
    }
}

fn stock_reducer() -> ToggleReducer {
    Rc::new(toggle_reducer)
}
