use serde::{Deserialize, Serialize};

use crate::client::ClientError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Copy of `self` with every field present in `updates` overwritten.
    pub fn merged(&self, updates: &UserUpdates) -> User {
        User {
            username: updates
                .username
                .clone()
                .unwrap_or_else(|| self.username.clone()),
            tagline: updates
                .tagline
                .clone()
                .unwrap_or_else(|| self.tagline.clone()),
            bio: updates.bio.clone().unwrap_or_else(|| self.bio.clone()),
        }
    }
}

/// Form edits; absent fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserUpdates {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.tagline.is_none() && self.bio.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    Pending,
    Resolved,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserState {
    pub user: User,
    /// Pre-update snapshot kept while an update is in flight.
    pub stored_user: Option<User>,
    /// `None` when no update has run since the last reset.
    pub status: Option<UpdateStatus>,
    pub error: Option<ClientError>,
}

impl UserState {
    pub fn new(user: User) -> Self {
        Self {
            stored_user: Some(user.clone()),
            user,
            status: None,
            error: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(UpdateStatus::Pending)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    StartUpdate { updates: UserUpdates },
    FinishUpdate { updated_user: User },
    FailUpdate { error: ClientError },
    Reset,
}
