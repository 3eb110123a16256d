use std::fmt;

use models::{location, user};
use serde::{Deserialize, Serialize};

fn default_role() -> String { user::DEFAULT_ROLE.to_string() }

/// Body of `POST /user/create/`. Missing locations mean none.
#[derive(Clone, Deserialize)]
pub struct UserCreateInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub age: i32,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Body of `PATCH /user/{id}/update/`. Absent fields are left untouched;
/// `locations` are added to the user's current set.
#[derive(Clone, Default, Deserialize)]
pub struct UserUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub age: Option<i32>,
    pub locations: Option<Vec<String>>,
}

impl fmt::Debug for UserCreateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreateInput")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("age", &self.age)
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for UserUpdateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdateInput")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("age", &self.age)
            .field("password_changed", &self.password.is_some())
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}

/// Public profile. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub role: String,
    pub age: i32,
    pub location: Vec<String>,
}

impl UserDetail {
    pub fn new(m: user::Model, locations: Vec<location::Model>) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            username: m.username,
            role: m.role,
            age: m.age,
            location: locations.into_iter().map(|l| l.name).collect(),
        }
    }
}

/// Row of the user list: the profile plus the derived ad count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListItem {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub role: String,
    pub age: i32,
    pub location: Vec<String>,
    pub total_ads: u64,
}

impl UserListItem {
    pub fn new(detail: UserDetail, total_ads: u64) -> Self {
        Self {
            id: detail.id,
            first_name: detail.first_name,
            last_name: detail.last_name,
            username: detail.username,
            role: detail.role,
            age: detail.age,
            location: detail.location,
            total_ads,
        }
    }
}
