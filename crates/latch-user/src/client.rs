use std::cell::RefCell;
use std::collections::VecDeque;

use thiserror::Error;

use crate::model::{User, UserUpdates};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("update rejected: {message}")]
    Rejected { message: String },
    #[error("user service unavailable")]
    Unavailable,
}

/// Called exactly once with the outcome of a request.
pub type Completion = Box<dyn FnOnce(Result<User, ClientError>)>;

/// Backend that persists profile edits. Implementations may complete
/// synchronously or hold on to `done` and call it later.
pub trait UserClient {
    fn update_user(&self, user: &User, updates: &UserUpdates, done: Completion);
}

struct PendingRequest {
    user: User,
    updates: UserUpdates,
    done: Completion,
}

/// In-memory client whose requests stay pending until resolved explicitly,
/// oldest first.
#[derive(Default)]
pub struct ScriptedUserClient {
    pending: RefCell<VecDeque<PendingRequest>>,
}

impl ScriptedUserClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Completes the oldest request with the merged user, as a server that
    /// accepted the edits would. Returns that user.
    pub fn succeed_next(&self) -> Option<User> {
        let req = self.pending.borrow_mut().pop_front()?;
        let updated = req.user.merged(&req.updates);
        log::debug!("user client: accepting update for {}", req.user.username);
        (req.done)(Ok(updated.clone()));
        Some(updated)
    }

    /// Fails the oldest request. Returns `false` if nothing was pending.
    pub fn fail_next(&self, error: ClientError) -> bool {
        let Some(req) = self.pending.borrow_mut().pop_front() else {
            return false;
        };
        log::debug!("user client: failing update for {}: {error}", req.user.username);
        (req.done)(Err(error));
        true
    }
}

impl UserClient for ScriptedUserClient {
    fn update_user(&self, user: &User, updates: &UserUpdates, done: Completion) {
        self.pending.borrow_mut().push_back(PendingRequest {
            user: user.clone(),
            updates: updates.clone(),
            done,
        });
    }
}
