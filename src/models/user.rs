//! User profile data structures.

use serde::{Deserialize, Serialize};

/// Full profile document returned by the profile endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfileDocument {
    /// Account login
    pub login: String,

    /// Display name, null when the user never set one
    #[serde(default)]
    pub name: Option<String>,

    /// Follower count
    #[serde(default)]
    pub followers: u64,

    /// Avatar image URL
    pub avatar_url: String,

    /// Public profile page URL
    pub html_url: String,
}

/// An enriched, user-facing profile.
///
/// Serialized with the front-end field names (`name`, `followers`,
/// `avatar`, `profile`).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    login: String,
    #[serde(rename = "name")]
    display_name: Option<String>,
    #[serde(rename = "followers")]
    follower_count: u64,
    #[serde(rename = "avatar")]
    avatar_url: String,
    #[serde(rename = "profile")]
    profile_url: String,
}

impl User {
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn follower_count(&self) -> u64 {
        self.follower_count
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }
}

impl From<ProfileDocument> for User {
    fn from(doc: ProfileDocument) -> Self {
        Self {
            login: doc.login,
            display_name: doc.name,
            follower_count: doc.followers,
            avatar_url: doc.avatar_url,
            profile_url: doc.html_url,
        }
    }
}
