//! # State, Effects, and Context
//!
//! Latch's core is a small reactive host for components that are plain
//! functions returning a [`View`]. There are five main pieces:
//!
//! - `Signal<T>`: observable value; writes notify subscribers.
//! - `remember*`: storage bound to a call position in the composition.
//! - `Scheduler`: runs composition passes and flushes commit effects.
//! - `provide` / `use_context`: values handed down a subtree.
//! - `PropBundle`: open attribute/handler sets that components spread onto views.
//!
//! ## Signals
//!
//! ```rust
//! use latch_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state and re-rendering
//!
//! `remember` is order-based: the Nth call in a composition pass always
//! refers to the Nth stored value. `remember_signal` additionally asks the
//! scheduler for another pass whenever the signal is written:
//!
//! ```rust
//! use latch_core::*;
//!
//! let mut scheduler = Scheduler::new();
//! let mut count = None;
//! scheduler.compose(|| {
//!     count = Some(remember_signal(|| 0));
//!     View::empty()
//! });
//!
//! count.unwrap().set(3);
//! assert!(scheduler.take_invalidated());
//! ```
//!
//! ## Commit effects
//!
//! Work that must observe a fully applied frame, such as the control-prop
//! checks, is queued with [`after_commit`] and runs once
//! `Scheduler::compose` has finished building and restored its state.
//!
//! ## Warnings
//!
//! Misuse that should not stop the program (see [`control`]) is reported to
//! a [`WarningSink`]; the default one logs through `log::warn!`.

pub mod control;
pub mod effects;
pub mod error;
pub mod locals;
pub mod prelude;
pub mod props;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod view;
pub mod warning;

pub use control::*;
pub use effects::*;
pub use error::*;
pub use locals::*;
pub use props::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
pub use warning::*;
