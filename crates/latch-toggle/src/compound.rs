//! Compound toggle: a parent owns the state and its direct children receive
//! it according to what they are.

use latch_core::{PropBundle, View};
use latch_ui::{Fragment, Switch};

use crate::config::ToggleConfig;
use crate::hook::use_toggle;

/// A child of [`Toggle`].
pub enum ToggleChild {
    /// Rendered only while the toggle is on.
    On(View),
    /// Rendered only while the toggle is off.
    Off(View),
    /// A switch wired to the shared state.
    Button,
    /// Passed through untouched.
    Other(View),
}

#[allow(non_snake_case)]
pub fn ToggleOn(view: View) -> ToggleChild {
    ToggleChild::On(view)
}

#[allow(non_snake_case)]
pub fn ToggleOff(view: View) -> ToggleChild {
    ToggleChild::Off(view)
}

#[allow(non_snake_case)]
pub fn ToggleButton() -> ToggleChild {
    ToggleChild::Button
}

impl From<View> for ToggleChild {
    fn from(view: View) -> Self {
        ToggleChild::Other(view)
    }
}

/// Uncontrolled toggle starting off. Must be called during composition.
#[allow(non_snake_case)]
pub fn Toggle(children: Vec<ToggleChild>) -> View {
    let toggle = use_toggle(ToggleConfig::new().component_name("Toggle"));
    let on = toggle.on();

    let rendered = children
        .into_iter()
        .map(|child| match child {
            ToggleChild::On(view) => {
                if on {
                    view
                } else {
                    View::empty()
                }
            }
            ToggleChild::Off(view) => {
                if on {
                    View::empty()
                } else {
                    view
                }
            }
            ToggleChild::Button => Switch(on, toggle.toggler_props(PropBundle::new())),
            ToggleChild::Other(view) => view,
        })
        .collect::<Vec<_>>();

    Fragment(rendered)
}
