use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use models::location;
use crate::{domain::location::LocationView, errors::ServiceError};

/// Read access to locations. Rows are created through users.
#[derive(Clone)]
pub struct LocationService {
    db: DatabaseConnection,
}

impl LocationService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn list(&self) -> Result<Vec<LocationView>, ServiceError> {
        let rows = location::Entity::find()
            .order_by_asc(location::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(LocationView::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<LocationView, ServiceError> {
        location::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(LocationView::from)
            .ok_or_else(|| ServiceError::not_found("location"))
    }
}
