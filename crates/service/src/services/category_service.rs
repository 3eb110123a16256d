use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{info, instrument};

use models::category;
use crate::{
    domain::category::{CategoryInput, CategoryView},
    errors::ServiceError,
};

/// Category CRUD. Names are unique; duplicates surface as `Conflict`.
#[derive(Clone)]
pub struct CategoryService {
    db: DatabaseConnection,
}

impl CategoryService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// All categories ordered by name.
    pub async fn list(&self) -> Result<Vec<CategoryView>, ServiceError> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(CategoryView::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CategoryView, ServiceError> {
        let found = category::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("category"))?;
        Ok(found.into())
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CategoryInput) -> Result<CategoryView, ServiceError> {
        let name = category::validate_name(&input.name)?;
        let am = category::ActiveModel { name: Set(name), ..Default::default() };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::from_db("category", e))?;
        info!(category_id = created.id, name = %created.name, "category_created");
        Ok(created.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: CategoryInput) -> Result<CategoryView, ServiceError> {
        let name = category::validate_name(&input.name)?;
        let existing = category::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("category"))?;
        if existing.name == name {
            return Ok(existing.into());
        }
        let mut am: category::ActiveModel = existing.into();
        am.name = Set(name);
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::from_db("category", e))?;
        info!(category_id = updated.id, "category_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = category::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("category"));
        }
        info!(category_id = id, "category_deleted");
        Ok(())
    }
}
