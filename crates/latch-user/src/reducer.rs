use crate::model::{UpdateStatus, UserAction, UserState};

/// Optimistic update with rollback.
///
/// `StartUpdate` applies the edits right away and remembers the previous
/// user; `FinishUpdate` replaces it with what the server returned;
/// `FailUpdate` restores the remembered user.
pub fn user_reducer(state: &UserState, action: UserAction) -> UserState {
    match action {
        UserAction::StartUpdate { updates } => UserState {
            user: state.user.merged(&updates),
            stored_user: Some(state.user.clone()),
            status: Some(UpdateStatus::Pending),
            error: state.error.clone(),
        },
        UserAction::FinishUpdate { updated_user } => UserState {
            user: updated_user,
            stored_user: None,
            status: Some(UpdateStatus::Resolved),
            error: None,
        },
        UserAction::FailUpdate { error } => UserState {
            user: state
                .stored_user
                .clone()
                .unwrap_or_else(|| state.user.clone()),
            stored_user: None,
            status: Some(UpdateStatus::Rejected),
            error: Some(error),
        },
        UserAction::Reset => UserState {
            status: None,
            error: None,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::model::{User, UserUpdates};

    fn alice() -> User {
        User {
            username: "alice".into(),
            tagline: "hello".into(),
            bio: "".into(),
        }
    }

    fn bio(text: &str) -> UserUpdates {
        UserUpdates {
            bio: Some(text.into()),
            ..UserUpdates::default()
        }
    }

    fn start(state: &UserState, text: &str) -> UserState {
        user_reducer(
            state,
            UserAction::StartUpdate {
                updates: bio(text),
            },
        )
    }

    #[test]
    fn start_applies_optimistically() {
        let s = start(&UserState::new(alice()), "rustacean");
        assert_eq!(s.user.bio, "rustacean");
        assert_eq!(s.user.tagline, "hello");
        assert_eq!(s.stored_user, Some(alice()));
        assert!(s.is_pending());
    }

    #[test]
    fn finish_takes_server_copy() {
        let pending = start(&UserState::new(alice()), "draft");
        let server = alice().merged(&bio("final"));
        let s = user_reducer(
            &pending,
            UserAction::FinishUpdate {
                updated_user: server.clone(),
            },
        );
        assert_eq!(s.user, server);
        assert_eq!(s.stored_user, None);
        assert_eq!(s.status, Some(UpdateStatus::Resolved));
    }

    #[test]
    fn fail_rolls_back() {
        let pending = start(&UserState::new(alice()), "oops");
        let error = ClientError::Rejected {
            message: "bio too spicy".into(),
        };
        let s = user_reducer(
            &pending,
            UserAction::FailUpdate {
                error: error.clone(),
            },
        );
        assert_eq!(s.user, alice());
        assert_eq!(s.status, Some(UpdateStatus::Rejected));
        assert_eq!(s.error, Some(error));
    }

    #[test]
    fn fail_without_snapshot_keeps_current_user() {
        let mut state = UserState::new(alice());
        state.stored_user = None;
        let s = user_reducer(
            &state,
            UserAction::FailUpdate {
                error: ClientError::Unavailable,
            },
        );
        assert_eq!(s.user, alice());
    }

    #[test]
    fn reset_clears_status_and_error_only() {
        let pending = start(&UserState::new(alice()), "x");
        let failed = user_reducer(
            &pending,
            UserAction::FailUpdate {
                error: ClientError::Unavailable,
            },
        );
        let s = user_reducer(&failed, UserAction::Reset);
        assert_eq!(s.status, None);
        assert_eq!(s.error, None);
        assert_eq!(s.user, failed.user);
    }
}
