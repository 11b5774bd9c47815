//! # Prop bundles
//!
//! A [`PropBundle`] is an open, string-keyed set of attributes and event
//! handlers that a component hands to whatever it renders. Components build
//! a fixed base, then fold in caller overrides: unknown keys pass through
//! unchanged, and handlers for the same event are chained with [`call_all`]
//! instead of replacing each other.
//!
//! ```rust
//! use latch_core::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let clicks = Rc::new(Cell::new(0));
//! let props = PropBundle::new()
//!     .with("id", "save")
//!     .on_click({
//!         let clicks = clicks.clone();
//!         move || clicks.set(clicks.get() + 1)
//!     });
//!
//! props.fire(ON_CLICK).unwrap();
//! assert_eq!(clicks.get(), 1);
//! assert_eq!(props.text("id"), Some("save"));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::UsageError;

pub const ON_CLICK: &str = "onClick";
pub const ARIA_PRESSED: &str = "aria-pressed";

/// Event handler carried in a prop bundle. Usage errors raised while handling
/// the event propagate to whoever fired it.
pub type Handler = Rc<dyn Fn() -> Result<(), UsageError>>;

/// Chains handlers into one that runs them in order, stopping at the first error.
pub fn call_all(handlers: impl IntoIterator<Item = Handler>) -> Handler {
    let handlers: SmallVec<[Handler; 2]> = handlers.into_iter().collect();
    Rc::new(move || {
        for h in &handlers {
            h()?;
        }
        Ok(())
    })
}

#[derive(Clone)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Handler(Handler),
}

impl PropValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            PropValue::Handler(h) => Some(h),
            _ => None,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Int(i) => write!(f, "{i}"),
            PropValue::Text(s) => write!(f, "{s:?}"),
            PropValue::Handler(_) => f.write_str("<handler>"),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Text(a), PropValue::Text(b)) => a == b,
            (PropValue::Handler(a), PropValue::Handler(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Int(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Text(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Text(v)
    }
}

impl From<Handler> for PropValue {
    fn from(v: Handler) -> Self {
        PropValue::Handler(v)
    }
}

/// Ordered by key so iteration and debug output are deterministic.
#[derive(Clone, Default, PartialEq)]
pub struct PropBundle {
    entries: BTreeMap<String, PropValue>,
}

impl PropBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds an infallible click handler.
    pub fn on_click(self, f: impl Fn() + 'static) -> Self {
        self.with_handler(ON_CLICK, move || {
            f();
            Ok(())
        })
    }

    pub fn with_handler(
        self,
        key: impl Into<String>,
        f: impl Fn() -> Result<(), UsageError> + 'static,
    ) -> Self {
        let h: Handler = Rc::new(f);
        self.with(key, h)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::as_bool)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_text)
    }

    pub fn handler(&self, key: &str) -> Option<Handler> {
        self.get(key).and_then(PropValue::as_handler).cloned()
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.remove(key)
    }

    /// Removes `key` and returns it if it held a handler. A non-handler value
    /// under that key is dropped with a warning.
    pub fn take_handler(&mut self, key: &str) -> Option<Handler> {
        match self.entries.remove(key)? {
            PropValue::Handler(h) => Some(h),
            other => {
                log::warn!("prop `{key}` expected a handler, got {other:?}; ignoring it");
                None
            }
        }
    }

    /// Folds `other` into `self`; keys present in both take `other`'s value.
    pub fn merge(mut self, other: PropBundle) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Invokes the handler under `key`. Firing a missing handler is a no-op.
    pub fn fire(&self, key: &str) -> Result<(), UsageError> {
        match self.handler(key) {
            Some(h) => h(),
            None => {
                log::trace!("no `{key}` handler to fire");
                Ok(())
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.entries.iter()
    }
}

impl fmt::Debug for PropBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl IntoIterator for PropBundle {
    type Item = (String, PropValue);
    type IntoIter = btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Handler {
        let log = log.clone();
        Rc::new(move || {
            log.borrow_mut().push(name);
            Ok(())
        })
    }

    #[test]
    fn call_all_runs_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let h = call_all([recorder(&log, "first"), recorder(&log, "second")]);
        h().unwrap();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn call_all_stops_at_first_error() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let failing: Handler = Rc::new(|| {
            Err(UsageError::UnsupportedAction {
                kind: "explode".into(),
            })
        });
        let h = call_all([failing, recorder(&log, "after")]);
        assert!(h().is_err());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn merge_prefers_incoming_values() {
        let base = PropBundle::new().with(ARIA_PRESSED, false).with("id", "a");
        let merged = base.merge(PropBundle::new().with(ARIA_PRESSED, true));
        assert_eq!(merged.bool(ARIA_PRESSED), Some(true));
        assert_eq!(merged.text("id"), Some("a"));
    }

    #[test]
    fn take_handler_drops_non_handlers() {
        let mut props = PropBundle::new().with(ON_CLICK, "not a function");
        assert!(props.take_handler(ON_CLICK).is_none());
        assert!(!props.contains(ON_CLICK));
    }

    #[test]
    fn fire_without_handler_is_noop() {
        assert_eq!(PropBundle::new().fire(ON_CLICK), Ok(()));
    }

    #[test]
    fn debug_output_is_sorted_and_hides_handlers() {
        let props = PropBundle::new()
            .with("id", "x")
            .with(ARIA_PRESSED, true)
            .on_click(|| {});
        assert_eq!(
            format!("{props:?}"),
            r#"{"aria-pressed": true, "id": "x", "onClick": <handler>}"#
        );
    }
}
