use sea_orm::DatabaseConnection;
use service::{AdService, CategoryService, LocationService, UserService};

/// Shared handler state. Services are cheap to clone; the pool is shared.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub users: UserService,
    pub ads: AdService,
    pub locations: LocationService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, page_size: u64) -> Self {
        Self {
            categories: CategoryService::new(db.clone()),
            users: UserService::new(db.clone(), page_size),
            ads: AdService::new(db.clone(), page_size),
            locations: LocationService::new(db),
        }
    }
}
