pub mod ad_service;
pub mod category_service;
pub mod location_service;
pub mod user_service;

pub use ad_service::AdService;
pub use category_service::CategoryService;
pub use location_service::LocationService;
pub use user_service::UserService;
