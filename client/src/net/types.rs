//! Shared wire DTOs for the client/auth-API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the remote API's camelCase JSON so serde round-trips
//! stay lossless. `User` is the minimal identity used for route guarding;
//! `Profile` is the richer record shown in dashboard views.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The minimal authenticated identity mirrored into persistent storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl User {
    /// Full name for headers and greetings, falling back to the email.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }

    /// Up to two uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl From<&Profile> for User {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            role: profile.role.clone(),
            is_active: profile.status == ProfileStatus::Active,
        }
    }
}

/// Partial update applied to the in-memory user. `None` leaves a field as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// Merge the present fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Account status reported by the profile endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl ProfileStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
        }
    }
}

/// Postal address attached to a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Public social links attached to a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// Extended user record used by dashboard views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default)]
    pub status: ProfileStatus,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

impl Profile {
    /// Reconcile a cached minimal user into the profile shape.
    ///
    /// The cached record carries no status, so it is reported as
    /// [`ProfileStatus::Active`]. Fields the user shape lacks stay `None`.
    pub fn from_cached_user(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: None,
            role: user.role,
            status: ProfileStatus::Active,
            profile_image: None,
            address: None,
            social_links: None,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Envelope returned by `GET /auth/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ProfileData>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileData {
    pub user: Profile,
}

impl ProfileResponse {
    /// The profile when the envelope reports success and carries data.
    pub fn into_profile(self) -> Option<Profile> {
        if self.success { self.data.map(|data| data.user) } else { None }
    }
}
