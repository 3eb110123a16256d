use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct CategoryInputDoc { pub name: String }

#[derive(ToSchema)]
pub struct LocationDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub role: String,
    pub age: i32,
    pub location: Vec<String>,
}

#[derive(ToSchema)]
pub struct UserListItemDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub role: String,
    pub age: i32,
    pub location: Vec<String>,
    pub total_ads: u64,
}

#[derive(ToSchema)]
pub struct UserPageDoc { pub items: Vec<UserListItemDoc>, pub num_pages: u64, pub total: u64 }

#[derive(ToSchema)]
pub struct UserCreateDoc {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    /// One of `member`, `moderator`, `admin`; defaults to `member`.
    pub role: Option<String>,
    pub age: i32,
    /// Location names; missing ones are created.
    pub locations: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct UserUpdateDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub age: Option<i32>,
    /// Names of existing locations to add.
    pub locations: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct AdDoc {
    pub id: i32,
    pub name: String,
    /// Author username.
    pub author: Option<String>,
    pub price: i32,
    pub description: Option<String>,
    pub is_published: bool,
    pub image: Option<String>,
    /// Category name.
    pub category: Option<String>,
}

#[derive(ToSchema)]
pub struct AdPageDoc { pub items: Vec<AdDoc>, pub num_pages: u64, pub total: u64 }

#[derive(ToSchema)]
pub struct AdCreateDoc {
    pub name: String,
    pub author: String,
    pub price: i32,
    pub description: Option<String>,
    pub is_published: Option<bool>,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(ToSchema)]
pub struct AdUpdateDoc {
    pub name: Option<String>,
    pub author: Option<String>,
    pub price: Option<i32>,
    /// `null` clears the description.
    pub description: Option<String>,
    pub is_published: Option<bool>,
    /// `null` clears the image.
    pub image: Option<String>,
    /// `null` detaches the category.
    pub category: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::ads::list,
        crate::routes::ads::get,
        crate::routes::ads::create,
        crate::routes::ads::update,
        crate::routes::ads::delete,
        crate::routes::locations::list,
        crate::routes::locations::get,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            StatusDoc,
            CategoryDoc,
            CategoryInputDoc,
            LocationDoc,
            UserDoc,
            UserListItemDoc,
            UserPageDoc,
            UserCreateDoc,
            UserUpdateDoc,
            AdDoc,
            AdPageDoc,
            AdCreateDoc,
            AdUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "category"),
        (name = "user"),
        (name = "ad"),
        (name = "location")
    )
)]
pub struct ApiDoc;
