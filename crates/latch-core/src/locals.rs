//! # Context and locals
//!
//! Latch uses thread-local "composition locals" to hand values down a subtree
//! without threading them through every call:
//!
//! - [`provide`] / [`use_context`]: any `Clone + 'static` value, looked up
//!   by type; the innermost provider wins.
//! - [`with_warning_sink`] / [`warning_sink`]: where components report
//!   [`Warning`](crate::Warning)s.
//!
//! ```rust
//! use latch_core::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Locale(&'static str);
//!
//! provide(Locale("en"), || {
//!     assert_eq!(use_context::<Locale>(), Some(Locale("en")));
//!     provide(Locale("fr"), || {
//!         assert_eq!(use_context::<Locale>(), Some(Locale("fr")));
//!     });
//! });
//! assert_eq!(use_context::<Locale>(), None);
//! ```

use std::any::{Any, TypeId, type_name};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::UsageError;
use crate::warning::{LogWarnings, WarningSink};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

fn lookup<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Some(t.clone());
            }
        }
        None
    })
}

/// Makes `value` visible to [`use_context`] for the duration of `f`.
pub fn provide<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided value of type `T`, if any.
pub fn use_context<T: Clone + 'static>() -> Option<T> {
    lookup::<T>()
}

/// Like [`use_context`] but treats a missing provider as a usage error.
pub fn require_context<T: Clone + 'static>(
    hook: &'static str,
    provider: &'static str,
) -> Result<T, UsageError> {
    lookup::<T>().ok_or_else(|| {
        log::debug!("{hook}: no {} in scope", type_name::<T>());
        UsageError::MissingProvider { hook, provider }
    })
}

#[derive(Clone)]
struct SinkLocal(Rc<dyn WarningSink>);

pub fn with_warning_sink<R>(sink: Rc<dyn WarningSink>, f: impl FnOnce() -> R) -> R {
    provide(SinkLocal(sink), f)
}

/// Current warning sink; [`LogWarnings`] when none was provided.
pub fn warning_sink() -> Rc<dyn WarningSink> {
    match lookup::<SinkLocal>() {
        Some(SinkLocal(sink)) => sink,
        None => Rc::new(LogWarnings),
    }
}
