use latch_core::{after_commit, invalidator, remember};

use crate::config::ToggleConfig;
use crate::controller::ToggleStateController;

/// Toggle state for the calling component.
///
/// The first call at a given position creates the controller from `config`
/// and hooks it to the host, so changes to the internal state request a new
/// composition pass. Every call re-applies the per-render props from
/// `config` and schedules the consistency checks for after the frame commits.
pub fn use_toggle(config: ToggleConfig) -> ToggleStateController {
    let controller = remember(|| {
        let controller = ToggleStateController::new(config.clone());
        if let Some(inv) = invalidator() {
            controller.subscribe(move |_| inv.invalidate());
        }
        controller
    });
    controller.apply_config(&config);

    let committed = (*controller).clone();
    after_commit(move || {
        committed.commit();
    });

    (*controller).clone()
}
