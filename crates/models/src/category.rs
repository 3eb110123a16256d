use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ad, errors, validate};

pub const NAME_MAX_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
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

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, errors::ModelError> {
    validate::required_text("category name", name, NAME_MAX_LEN)
}
