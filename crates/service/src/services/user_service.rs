use std::collections::HashMap;

use sea_orm::sea_query::{Expr, OnConflict, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    LoaderTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, instrument};

use models::{ad, location, user, user_location};
use crate::{
    domain::{
        location::normalize_names,
        user::{UserCreateInput, UserDetail, UserListItem, UserUpdateInput},
    },
    errors::ServiceError,
    pagination::{self, Page},
    password::hash_password,
};

/// User CRUD plus the published-author listing.
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
    page_size: u64,
}

impl UserService {
    pub fn new(db: DatabaseConnection, page_size: u64) -> Self { Self { db, page_size: page_size.max(1) } }

    /// Users with at least one published ad, ordered by username, with their total ad count.
    pub async fn list(&self, page: Option<&str>) -> Result<Page<UserListItem>, ServiceError> {
        let published_authors = Query::select()
            .column(ad::Column::AuthorId)
            .from(ad::Entity)
            .and_where(ad::Column::IsPublished.eq(true))
            .to_owned();
        let paginator = user::Entity::find()
            .filter(user::Column::Id.in_subquery(published_authors))
            .order_by_asc(user::Column::Username)
            .paginate(&self.db, self.page_size);
        let mut page = pagination::fetch(&paginator, page).await?;

        let users = std::mem::take(&mut page.items);
        let locations = users
            .load_many_to_many(location::Entity::find(), user_location::Entity, &self.db)
            .await?;
        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let counts = ad_counts(&self.db, ids).await?;

        let items = users
            .into_iter()
            .zip(locations)
            .map(|(u, locs)| {
                let total = counts.get(&u.id).copied().unwrap_or(0);
                UserListItem::new(UserDetail::new(u, sorted(locs)), total)
            })
            .collect();
        Ok(page.with_items(items))
    }

    pub async fn get(&self, id: i32) -> Result<UserDetail, ServiceError> {
        let found = user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;
        let locs = user_locations(&self.db, &found).await?;
        Ok(UserDetail::new(found, locs))
    }

    /// Insert the user and get-or-create each named location in one transaction.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: UserCreateInput) -> Result<UserDetail, ServiceError> {
        let first_name = user::validate_first_name(&input.first_name)?;
        let last_name = user::validate_last_name(&input.last_name)?;
        let username = user::validate_username(&input.username)?;
        let role = user::validate_role(&input.role)?;
        let age = user::validate_age(input.age)?;
        user::validate_password(&input.password)?;
        let names = normalize_names(&input.locations)?;
        let password_hash = hash_password(&input.password)?;

        let txn = self.db.begin().await?;
        let am = user::ActiveModel {
            first_name: Set(first_name),
            last_name: Set(last_name),
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(role),
            age: Set(age),
            ..Default::default()
        };
        let created = am.insert(&txn).await.map_err(|e| ServiceError::from_db("user", e))?;

        let mut location_ids = Vec::with_capacity(names.len());
        for name in &names {
            location_ids.push(location::get_or_create(&txn, name).await?.id);
        }
        attach_locations(&txn, created.id, &location_ids).await?;
        let locs = user_locations(&txn, &created).await?;
        txn.commit().await?;

        info!(user_id = created.id, locations = locs.len(), "user_created");
        Ok(UserDetail::new(created, locs))
    }

    /// Apply the given fields and add the named locations, which must all exist.
    ///
    /// Names are resolved before any write; an unknown one aborts the whole update.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UserUpdateInput) -> Result<UserDetail, ServiceError> {
        let first_name = input.first_name.as_deref().map(user::validate_first_name).transpose()?;
        let last_name = input.last_name.as_deref().map(user::validate_last_name).transpose()?;
        let username = input.username.as_deref().map(user::validate_username).transpose()?;
        let role = input.role.as_deref().map(user::validate_role).transpose()?;
        let age = input.age.map(user::validate_age).transpose()?;
        let password_hash = match input.password.as_deref() {
            Some(p) => {
                user::validate_password(p)?;
                Some(hash_password(p)?)
            }
            None => None,
        };
        let names = match &input.locations {
            Some(names) => normalize_names(names)?,
            None => Vec::new(),
        };

        let txn = self.db.begin().await?;
        let existing = user::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;
        let location_ids = resolve_existing(&txn, &names).await?;

        let mut am: user::ActiveModel = existing.clone().into();
        if let Some(v) = first_name { am.first_name = Set(v); }
        if let Some(v) = last_name { am.last_name = Set(v); }
        if let Some(v) = username { am.username = Set(v); }
        if let Some(v) = role { am.role = Set(v); }
        if let Some(v) = age { am.age = Set(v); }
        if let Some(v) = password_hash { am.password_hash = Set(v); }
        let updated = if am.is_changed() {
            am.update(&txn).await.map_err(|e| ServiceError::from_db("user", e))?
        } else {
            existing
        };

        attach_locations(&txn, updated.id, &location_ids).await?;
        let locs = user_locations(&txn, &updated).await?;
        txn.commit().await?;

        info!(user_id = updated.id, "user_updated");
        Ok(UserDetail::new(updated, locs))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("user"));
        }
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}

fn sorted(mut locs: Vec<location::Model>) -> Vec<location::Model> {
    locs.sort_by(|a, b| a.name.cmp(&b.name));
    locs
}

async fn user_locations<C: ConnectionTrait>(db: &C, u: &user::Model) -> Result<Vec<location::Model>, ServiceError> {
    Ok(u.find_related(location::Entity)
        .order_by_asc(location::Column::Name)
        .all(db)
        .await?)
}

/// Map each known location name to its id; the first unknown name fails.
async fn resolve_existing(txn: &DatabaseTransaction, names: &[String]) -> Result<Vec<i32>, ServiceError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let found: HashMap<String, i32> = location::Entity::find()
        .filter(location::Column::Name.is_in(names.iter().cloned()))
        .all(txn)
        .await?
        .into_iter()
        .map(|l| (l.name, l.id))
        .collect();
    names
        .iter()
        .map(|n| found.get(n).copied().ok_or_else(|| ServiceError::LocationNotFound(n.clone())))
        .collect()
}

/// Link `user_id` to each location, ignoring links that already exist.
async fn attach_locations(txn: &DatabaseTransaction, user_id: i32, location_ids: &[i32]) -> Result<(), ServiceError> {
    if location_ids.is_empty() {
        return Ok(());
    }
    let links = location_ids.iter().map(|&location_id| user_location::ActiveModel {
        user_id: Set(user_id),
        location_id: Set(location_id),
    });
    user_location::Entity::insert_many(links)
        .on_conflict(
            OnConflict::columns([user_location::Column::UserId, user_location::Column::LocationId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

/// Total ads (published or not) per author among `author_ids`.
async fn ad_counts(db: &DatabaseConnection, author_ids: Vec<i32>) -> Result<HashMap<i32, u64>, ServiceError> {
    if author_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<(i32, i64)> = ad::Entity::find()
        .select_only()
        .column(ad::Column::AuthorId)
        .column_as(Expr::col(ad::Column::Id).count(), "total_ads")
        .filter(ad::Column::AuthorId.is_in(author_ids))
        .group_by(ad::Column::AuthorId)
        .into_tuple()
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|(id, n)| (id, n.max(0) as u64)).collect())
}
