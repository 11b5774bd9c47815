pub use crate::control::{ControlChecks, ControlPropNames, ControlSnapshot};
pub use crate::effects::{Dispose, after_commit, on_unmount};
pub use crate::error::UsageError;
pub use crate::locals::{provide, require_context, use_context, warning_sink, with_warning_sink};
pub use crate::props::{ARIA_PRESSED, Handler, ON_CLICK, PropBundle, PropValue, call_all};
pub use crate::runtime::{
    Invalidator, Scheduler, invalidator, remember, remember_signal, remember_state,
    remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::view::{View, ViewId, ViewKind};
pub use crate::warning::{CapturingWarnings, LogWarnings, Mode, Warning, WarningSink};
