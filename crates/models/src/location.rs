use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    validate::required_text("location name", name, NAME_MAX_LEN)
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Return the location called `name`, inserting it first if absent.
///
/// The insert is an `ON CONFLICT (name) DO NOTHING` upsert, so concurrent
/// callers racing on the same name converge on a single row.
pub async fn get_or_create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    let name = validate_name(name)?;
    let am = ActiveModel { name: Set(name.clone()), ..Default::default() };
    Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    find_by_name(db, &name)
        .await?
        .ok_or_else(|| ModelError::Db(format!("location '{name}' missing after upsert")))
}
