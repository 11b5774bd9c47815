use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::effects::{self, CommitQueue};
use crate::{Signal, View};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static INVALIDATOR: RefCell<Option<Invalidator>> = const { RefCell::new(None) };
}

/// Remembered values for one composition, addressed by call order or by key.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Installs a scheduler's composer, scope, invalidator and a fresh commit
/// queue for the duration of one composition pass. Dropping without `finish` (e.g. on unwind) still
/// restores whatever was installed before.
pub struct ComposeGuard {
    scope: Scope,
    previous: Option<Composer>,
    previous_invalidator: Option<Invalidator>,
    previous_effects: Option<CommitQueue>,
}

impl ComposeGuard {
    pub fn begin(mut composer: Composer, scope: Scope, invalidator: Invalidator) -> Self {
        composer.cursor = 0;
        let previous = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), composer));
        let previous_invalidator = INVALIDATOR.with(|i| i.borrow_mut().replace(invalidator));
        let previous_effects = effects::swap_commit_queue(CommitQueue::new());

        ComposeGuard {
            scope,
            previous: Some(previous),
            previous_invalidator,
            previous_effects: Some(previous_effects),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Ends the pass and hands back the composer that was used for it along
    /// with the commit effects it queued.
    pub fn finish(mut self) -> (Composer, CommitQueue) {
        self.restore().unwrap_or_default()
    }

    fn restore(&mut self) -> Option<(Composer, CommitQueue)> {
        let previous = self.previous.take()?;
        let used = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), previous));
        INVALIDATOR.with(|i| *i.borrow_mut() = self.previous_invalidator.take());
        let queued = effects::swap_commit_queue(self.previous_effects.take().unwrap_or_default());
        Some((used, queued))
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let cursor = {
            let mut c = c.borrow_mut();
            let cursor = c.cursor;
            c.cursor += 1;
            if let Some(slot) = c.slots.get(cursor) {
                if let Some(rc) = slot.downcast_ref::<Rc<T>>() {
                    return rc.clone();
                }
                log::warn!(
                    "remember: slot {} type changed; replacing. \
                     If this is due to conditional composition, prefer remember_with_key.",
                    cursor
                );
            }
            cursor
        };

        // `init` may itself call into the composer (nested remember), so no borrow is held.
        let rc: Rc<T> = Rc::new(init());
        let mut c = c.borrow_mut();
        if cursor < c.slots.len() {
            c.slots[cursor] = Box::new(rc.clone());
        } else {
            c.slots.push(Box::new(rc.clone()));
        }
        rc
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    COMPOSER.with(|c| {
        if let Some(existing) = c.borrow().keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            } else {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
            }
        }

        let rc: Rc<T> = Rc::new(init());
        c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

/// Remembers a signal whose writes ask the host for another composition pass.
pub fn remember_signal<T: Clone + 'static>(init: impl FnOnce() -> T) -> Rc<Signal<T>> {
    remember(|| {
        let sig = Signal::new(init());
        if let Some(inv) = invalidator() {
            sig.subscribe(move |_| inv.invalidate());
        }
        sig
    })
}

/// Handle that marks the owning scheduler dirty.
#[derive(Clone, Default)]
pub struct Invalidator(Rc<Cell<bool>>);

impl Invalidator {
    pub fn invalidate(&self) {
        self.0.set(true);
    }

    pub fn is_invalidated(&self) -> bool {
        self.0.get()
    }

    fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// The invalidator of the scheduler currently composing, if any.
pub fn invalidator() -> Option<Invalidator> {
    INVALIDATOR.with(|i| i.borrow().clone())
}

/// Drives composition for one root: owns remembered slots and the root scope
/// across frames and flushes commit effects after each pass.
pub struct Scheduler {
    composer: Composer,
    scope: Scope,
    invalidator: Invalidator,
    frames: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            composer: Composer::default(),
            scope: Scope::new(),
            invalidator: Invalidator::default(),
            frames: 0,
        }
    }

    /// Number of committed composition passes.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn invalidator(&self) -> Invalidator {
        self.invalidator.clone()
    }

    /// Returns whether a re-render was requested since the last call, clearing the flag.
    pub fn take_invalidated(&self) -> bool {
        self.invalidator.take()
    }

    pub fn compose<F>(&mut self, build_root: F) -> View
    where
        F: FnOnce() -> View,
    {
        let composer = std::mem::take(&mut self.composer);
        let guard = ComposeGuard::begin(composer, self.scope.clone(), self.invalidator.clone());
        let root = guard.scope().run(build_root);
        let (composer, queued) = guard.finish();
        self.composer = composer;
        self.frames += 1;
        log::trace!(
            "frame {} committed with {} slots",
            self.frames,
            self.composer.slots.len()
        );

        effects::flush_commit_effects(queued);
        root
    }

    /// Unmounts everything composed so far: runs scope disposers and drops remembered slots.
    pub fn dispose(self) {
        self.scope.dispose();
    }
}
