//! Join table for the user <-> location many-to-many relation.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{location, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub location_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Location,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Location => Entity::belongs_to(location::Entity)
                .from(Column::LocationId)
                .to(location::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
