//! Signed-in identity, passed explicitly to everything that attributes a write.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_USER: &str = "Unknown User";
pub const PLACEHOLDER_AVATAR: &str = "https://www.itdp.org/wp-content/uploads/2021/06/avatar-man-icon-profile-placeholder-260nw-1229859850-e1623694994111.jpg";

/// User data asserted by the session. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: Option<String>,
    pub image: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            image: Some(image.into()),
        }
    }
}

/// Current session. `None` inside means signed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self { identity: None }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn sign_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub fn sign_out(&mut self) {
        self.identity = None;
    }

    /// Author attribution for a write, with placeholder fallback.
    pub fn author(&self) -> Author {
        Author::resolve(self.identity())
    }
}

/// Name and avatar stamped onto a write payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub username: String,
    pub profile_img: String,
}

impl Author {
    pub fn resolve(identity: Option<&Identity>) -> Self {
        let username = identity
            .and_then(|id| id.name.clone())
            .unwrap_or_else(|| UNKNOWN_USER.to_string());
        let profile_img = identity
            .and_then(|id| id.image.clone())
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());
        Self {
            username,
            profile_img,
        }
    }
}
