use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::{info, instrument};

use models::{ad, category, user};
use crate::{
    domain::ad::{AdCreateInput, AdUpdateInput, AdView},
    errors::ServiceError,
    pagination::{self, Page},
};

/// Ad CRUD. Authors are referenced by username and categories by name.
#[derive(Clone)]
pub struct AdService {
    db: DatabaseConnection,
    page_size: u64,
}

impl AdService {
    pub fn new(db: DatabaseConnection, page_size: u64) -> Self { Self { db, page_size: page_size.max(1) } }

    pub async fn list(&self, page: Option<&str>) -> Result<Page<AdView>, ServiceError> {
        let paginator = ad::Entity::find()
            .order_by_asc(ad::Column::Id)
            .paginate(&self.db, self.page_size);
        let mut page = pagination::fetch(&paginator, page).await?;
        let ads = std::mem::take(&mut page.items);
        let views = views(&self.db, ads).await?;
        Ok(page.with_items(views))
    }

    pub async fn get(&self, id: i32) -> Result<AdView, ServiceError> {
        let found = ad::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("ad"))?;
        single_view(&self.db, found).await
    }

    #[instrument(skip(self, input), fields(author = %input.author))]
    pub async fn create(&self, input: AdCreateInput) -> Result<AdView, ServiceError> {
        let name = ad::validate_name(&input.name)?;
        let price = ad::validate_price(input.price)?;
        let author = author_by_username(&self.db, &input.author).await?;
        let category_id = match input.category.as_deref() {
            Some(c) => Some(category_by_name(&self.db, c).await?.id),
            None => None,
        };

        let am = ad::ActiveModel {
            name: Set(name),
            author_id: Set(author.id),
            price: Set(price),
            description: Set(input.description),
            is_published: Set(input.is_published),
            image: Set(input.image),
            category_id: Set(category_id),
            ..Default::default()
        };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::from_db("ad", e))?;
        info!(ad_id = created.id, author_id = created.author_id, "ad_created");
        single_view(&self.db, created).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: AdUpdateInput) -> Result<AdView, ServiceError> {
        let existing = ad::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("ad"))?;

        let mut am: ad::ActiveModel = existing.clone().into();
        if let Some(v) = input.name.as_deref() { am.name = Set(ad::validate_name(v)?); }
        if let Some(v) = input.price { am.price = Set(ad::validate_price(v)?); }
        if let Some(v) = input.author.as_deref() { am.author_id = Set(author_by_username(&self.db, v).await?.id); }
        match input.category {
            Some(Some(name)) => am.category_id = Set(Some(category_by_name(&self.db, &name).await?.id)),
            Some(None) => am.category_id = Set(None),
            None => {}
        }
        if let Some(v) = input.description { am.description = Set(v); }
        if let Some(v) = input.is_published { am.is_published = Set(v); }
        if let Some(v) = input.image { am.image = Set(v); }

        let updated = if am.is_changed() {
            am.update(&self.db).await.map_err(|e| ServiceError::from_db("ad", e))?
        } else {
            existing
        };
        info!(ad_id = updated.id, "ad_updated");
        single_view(&self.db, updated).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = ad::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("ad"));
        }
        info!(ad_id = id, "ad_deleted");
        Ok(())
    }
}

async fn author_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<user::Model, ServiceError> {
    user::Entity::find()
        .filter(user::Column::Username.eq(username.trim()))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("Object with username={} does not exist.", username)))
}

async fn category_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<category::Model, ServiceError> {
    category::Entity::find()
        .filter(category::Column::Name.eq(name.trim()))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("Object with name={} does not exist.", name)))
}

async fn single_view<C: ConnectionTrait>(db: &C, m: ad::Model) -> Result<AdView, ServiceError> {
    let mut out = views(db, vec![m]).await?;
    out.pop().ok_or_else(|| ServiceError::Db("ad view missing".into()))
}

/// Resolve author and category for a batch of ads with one query each.
async fn views<C: ConnectionTrait>(db: &C, ads: Vec<ad::Model>) -> Result<Vec<AdView>, ServiceError> {
    if ads.is_empty() {
        return Ok(Vec::new());
    }
    let authors = ads.load_one(user::Entity, db).await?;

    let category_ids: Vec<i32> = ads.iter().filter_map(|a| a.category_id).collect();
    let categories: HashMap<i32, category::Model> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect()
    };

    Ok(ads
        .into_iter()
        .zip(authors)
        .map(|(a, author)| {
            let cat = a.category_id.and_then(|id| categories.get(&id).cloned());
            AdView::new(a, author, cat)
        })
        .collect())
}
