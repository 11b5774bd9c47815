//! # Toggle
//!
//! A toggle whose on/off value is either owned by the toggle itself
//! (*uncontrolled*) or supplied by its parent on every render (*controlled*).
//!
//! - [`ToggleStateController`] holds the state, dispatches [`ToggleAction`]s
//!   through a reducer and reports intended changes to `on_change`.
//! - [`toggler_props`](ToggleStateController::toggler_props) and
//!   [`resetter_props`](ToggleStateController::resetter_props) build prop
//!   bundles that chain the toggle's own click handling with the caller's.
//! - [`use_toggle`] binds a controller to a composition slot.
//! - [`Toggle`] is the compound form: `ToggleOn`, `ToggleOff` and
//!   `ToggleButton` children share the parent's state.
//!
//! ```rust
//! use latch_toggle::*;
//!
//! let toggle = ToggleStateController::new(ToggleConfig::new());
//! toggle.toggle().unwrap();
//! assert!(toggle.on());
//! toggle.reset().unwrap();
//! assert!(!toggle.on());
//! ```

pub mod action;
pub mod compound;
pub mod config;
pub mod controller;
pub mod hook;
pub mod tests;

pub use action::{ToggleAction, ToggleReducer, ToggleState, toggle_reducer};
pub use compound::{Toggle, ToggleButton, ToggleChild, ToggleOff, ToggleOn};
pub use config::{OnChange, ToggleConfig};
pub use controller::ToggleStateController;
pub use hook::use_toggle;
