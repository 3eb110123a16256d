use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ad, errors::ModelError, location, user_location, validate};

pub const NAME_MAX_LEN: usize = 64;
pub const ROLES: [&str; 3] = ["member", "moderator", "admin"];
pub const DEFAULT_ROLE: &str = "member";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Ads,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Ads => Entity::has_many(ad::Entity).into() }
    }
}

impl Related<ad::Entity> for Entity {
    fn to() -> RelationDef { Relation::Ads.def() }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef { user_location::Relation::Location.def() }

    fn via() -> Option<RelationDef> { Some(user_location::Relation::User.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_first_name(v: &str) -> Result<String, ModelError> {
    validate::required_text("first_name", v, NAME_MAX_LEN)
}

pub fn validate_last_name(v: &str) -> Result<String, ModelError> {
    validate::required_text("last_name", v, NAME_MAX_LEN)
}

pub fn validate_username(v: &str) -> Result<String, ModelError> {
    let username = validate::required_text("username", v, NAME_MAX_LEN)?;
    if username.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation("username must not contain whitespace".into()));
    }
    Ok(username)
}

pub fn validate_role(v: &str) -> Result<String, ModelError> {
    let role = v.trim().to_ascii_lowercase();
    if !ROLES.contains(&role.as_str()) {
        return Err(ModelError::Validation(format!("role must be one of {}", ROLES.join(", "))));
    }
    Ok(role)
}

pub fn validate_age(age: i32) -> Result<i32, ModelError> {
    if !(0..=150).contains(&age) {
        return Err(ModelError::Validation("age must be between 0 and 150".into()));
    }
    Ok(age)
}

pub fn validate_password(v: &str) -> Result<(), ModelError> {
    if v.is_empty() {
        return Err(ModelError::Validation("password required".into()));
    }
    Ok(())
}
