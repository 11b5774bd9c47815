use std::cell::Cell;
use std::rc::Rc;

use latch_core::{
    Signal, SubId, UsageError, invalidator, on_unmount, provide, remember, require_context,
    scoped_effect,
};

use crate::client::UserClient;
use crate::model::{User, UserAction, UserState, UserUpdates};
use crate::reducer::user_reducer;

/// Shared handle to the profile state of one provider.
#[derive(Clone)]
pub struct UserStore {
    state: Signal<UserState>,
    mounted: Rc<Cell<bool>>,
}

impl UserStore {
    pub fn new(user: User) -> Self {
        Self {
            state: Signal::new(UserState::new(user)),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn state(&self) -> UserState {
        self.state.get()
    }

    pub fn user(&self) -> User {
        self.state.with(|s| s.user.clone())
    }

    pub fn dispatch(&self, action: UserAction) {
        log::trace!("user store: {action:?}");
        self.state.update(|s| *s = user_reducer(s, action));
    }

    pub fn subscribe(&self, f: impl Fn(&UserState) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    fn unmount(&self) {
        self.mounted.set(false);
    }
}

/// Makes a [`UserStore`] seeded with `user` available to `f` through
/// [`use_user`]. The store is remembered across frames; `user` only seeds it
/// on the first pass.
#[allow(non_snake_case)]
pub fn UserProvider<R>(user: User, f: impl FnOnce() -> R) -> R {
    let store = remember(|| {
        log::debug!("mounting UserProvider for {}", user.username);
        let store = UserStore::new(user);
        if let Some(inv) = invalidator() {
            store.subscribe(move |_| inv.invalidate());
        }
        let unmounted = store.clone();
        scoped_effect(move || on_unmount(move || unmounted.unmount()));
        store
    });
    log::trace!("rendering UserProvider");
    provide((*store).clone(), f)
}

/// The nearest provider's store.
pub fn use_user() -> Result<UserStore, UsageError> {
    require_context::<UserStore>("use_user", "UserProvider")
}

/// Applies `updates` optimistically and asks `client` to persist them. The
/// client's answer either confirms the server copy or rolls the edit back.
/// Answers that arrive after the provider unmounted are dropped.
pub fn update_user(store: &UserStore, client: &dyn UserClient, updates: UserUpdates) {
    let user = store.user();
    store.dispatch(UserAction::StartUpdate {
        updates: updates.clone(),
    });

    let store = store.clone();
    client.update_user(
        &user,
        &updates,
        Box::new(move |result| {
            if !store.is_mounted() {
                log::debug!("user update finished after UserProvider unmounted; ignoring");
                return;
            }
            match result {
                Ok(updated_user) => store.dispatch(UserAction::FinishUpdate { updated_user }),
                Err(error) => {
                    log::warn!("user update failed, rolling back: {error}");
                    store.dispatch(UserAction::FailUpdate { error })
                }
            }
        }),
    );
}
