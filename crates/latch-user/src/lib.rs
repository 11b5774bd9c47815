//! User profile state with optimistic updates.
//!
//! A [`UserProvider`] owns a [`UserStore`]; components below it reach the
//! store with [`use_user`]. [`update_user`] applies edits immediately, then
//! lets the [`UserClient`] confirm them or roll them back.

pub mod client;
pub mod model;
pub mod reducer;
pub mod store;

pub use client::{ClientError, Completion, ScriptedUserClient, UserClient};
pub use model::{UpdateStatus, User, UserAction, UserState, UserUpdates};
pub use reducer::user_reducer;
pub use store::{UserProvider, UserStore, update_user, use_user};
