use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

thread_local! {
    static COMMIT_QUEUE: RefCell<VecDeque<Box<dyn FnOnce()>>> = RefCell::new(VecDeque::new());
}

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }
}

/// Cleanup for [`scoped_effect`](crate::scoped_effect).
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

/// Commit effects queued by one composition pass.
pub type CommitQueue = VecDeque<Box<dyn FnOnce()>>;

/// Queues `f` to run once the current composition pass has been committed.
///
/// Outside of a composition there is no pass to wait for, so `f` runs
/// immediately.
pub fn after_commit(f: impl FnOnce() + 'static) {
    if crate::runtime::invalidator().is_none() {
        log::trace!("after_commit outside of a composition; running now");
        f();
        return;
    }
    COMMIT_QUEUE.with(|q| q.borrow_mut().push_back(Box::new(f)));
}

/// Installs `queue` as the current commit queue and returns the one it replaced.
pub(crate) fn swap_commit_queue(queue: CommitQueue) -> CommitQueue {
    COMMIT_QUEUE.with(|q| std::mem::replace(&mut *q.borrow_mut(), queue))
}

/// Runs one pass's commit effects in submission order, including any queued
/// while flushing. An enclosing pass's queue is left alone.
pub(crate) fn flush_commit_effects(queue: CommitQueue) {
    let outer = swap_commit_queue(queue);
    loop {
        let next = COMMIT_QUEUE.with(|q| q.borrow_mut().pop_front());
        match next {
            Some(f) => f(),
            None => break,
        }
    }
    swap_commit_queue(outer);
}
