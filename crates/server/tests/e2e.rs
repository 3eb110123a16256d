use std::net::SocketAddr;

use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, state::AppState};

const PAGE_SIZE: u64 = 4;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn patch(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.patch(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    async fn create_user(&self, username: &str, locations: &[&str]) -> anyhow::Result<Value> {
        let (status, body) = self
            .post(
                "/user/create/",
                json!({
                    "first_name": "Test", "last_name": "User", "username": username,
                    "password": "pass1234", "role": "member", "age": 33, "locations": locations
                }),
            )
            .await?;
        assert_eq!(status, HttpStatusCode::CREATED, "{body}");
        Ok(body)
    }

    async fn create_ad(&self, author: &str, published: bool) -> anyhow::Result<Value> {
        let (status, body) = self
            .post("/ad/create/", json!({"name": "Bike", "author": author, "price": 500, "is_published": published}))
            .await?;
        assert_eq!(status, HttpStatusCode::CREATED, "{body}");
        Ok(body)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app: Router = routes::build_router(AppState::new(db, PAGE_SIZE), CorsLayer::new());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_category_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, created) = app.post("/cat/create/", json!({"name": "Electronics"})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.get(&format!("/cat/{id}/")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"id": id, "name": "Electronics"}));

    let (status, body) = app.patch(&format!("/cat/{id}/update/"), json!({"name": "Gadgets"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"id": id, "name": "Gadgets"}));
    Ok(())
}

#[tokio::test]
async fn e2e_category_delete_semantics() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.delete("/cat/999/delete/").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));

    let (_, created) = app.post("/cat/create/", json!({"name": "Toys"})).await?;
    let id = created["id"].as_i64().unwrap();
    let (status, body) = app.delete(&format!("/cat/{id}/delete/")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = app.get(&format!("/cat/{id}/")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_category_list_sorted() -> anyhow::Result<()> {
    let app = start_server().await?;
    for name in ["Zoo", "Apparel", "Music"] {
        app.post("/cat/create/", json!({"name": name})).await?;
    }
    let (status, body) = app.get("/cat/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Apparel", "Music", "Zoo"]);

    let (status, body) = app.post("/cat/create/", json!({"name": "Zoo"})).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn e2e_user_locations_get_or_create() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ivan = app.create_user("ivan", &["Moscow", "Kazan"]).await?;
    assert_eq!(ivan["location"], json!(["Kazan", "Moscow"]));
    assert!(ivan.get("password").is_none());
    assert!(ivan.get("total_ads").is_none());

    app.create_user("olga", &["Kazan", "Perm"]).await?;
    let (status, locations) = app.get("/location/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    let names: Vec<&str> = locations.as_array().unwrap().iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Kazan", "Moscow", "Perm"]);

    let id = ivan["id"].as_i64().unwrap();
    let (status, detail) = app.get(&format!("/user/{id}/")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(detail, ivan);
    Ok(())
}

#[tokio::test]
async fn e2e_user_list_only_published_authors() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.create_user("anna", &[]).await?;
    app.create_user("boris", &[]).await?;
    app.create_user("carl", &[]).await?;
    app.create_ad("anna", true).await?;
    app.create_ad("anna", false).await?;
    app.create_ad("anna", true).await?;
    app.create_ad("boris", false).await?;

    let (status, body) = app.get("/user/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["num_pages"], 1);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["username"], "anna");
    assert_eq!(items[0]["total_ads"], 3);
    Ok(())
}

#[tokio::test]
async fn e2e_user_update_unknown_location() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ivan = app.create_user("ivan", &["Moscow"]).await?;
    app.create_user("olga", &["Kazan"]).await?;
    let id = ivan["id"].as_i64().unwrap();

    let (status, body) = app
        .patch(&format!("/user/{id}/update/"), json!({"age": 50, "locations": ["Kazan", "Narnia"]}))
        .await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Location no found"}));

    let (_, detail) = app.get(&format!("/user/{id}/")).await?;
    assert_eq!(detail["location"], json!(["Moscow"]));
    assert_eq!(detail["age"], 33);

    let (status, body) = app.patch(&format!("/user/{id}/update/"), json!({"locations": ["Kazan"]})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["location"], json!(["Kazan", "Moscow"]));
    Ok(())
}

#[tokio::test]
async fn e2e_user_pagination() -> anyhow::Result<()> {
    let app = start_server().await?;
    for i in 1..=10 {
        let username = format!("user{:02}", i);
        app.create_user(&username, &[]).await?;
        app.create_ad(&username, true).await?;
    }

    let (status, body) = app.get("/user/?page=2").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["num_pages"], 3);
    assert_eq!(body["total"], 10);
    let names: Vec<&str> = body["items"].as_array().unwrap().iter().map(|u| u["username"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["user05", "user06", "user07", "user08"]);

    let (_, body) = app.get("/user/?page=junk").await?;
    assert_eq!(body["items"][0]["username"], "user01");

    let (status, body) = app.get("/user/?page=99999999999999999999").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["items"][0]["username"], "user09");
    Ok(())
}

#[tokio::test]
async fn e2e_repeated_page_parameter_uses_last() -> anyhow::Result<()> {
    let app = start_server().await?;
    for i in 1..=5 {
        let username = format!("user{:02}", i);
        app.create_user(&username, &[]).await?;
        app.create_ad(&username, true).await?;
    }

    let res = app.client.get(app.url("/user/?page=1&page=2")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let ct = res.headers().get(reqwest::header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_string();
    assert!(ct.starts_with("application/json"), "{ct}");
    let body: Value = res.json().await?;
    assert_eq!(body["num_pages"], 2);
    assert_eq!(body["items"][0]["username"], "user05");

    let (status, body) = app.get("/ad/?page=2&page=x").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["total"], 5);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_path_is_json_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/cat", "/nope/", "/user/1/extra/"] {
        let (status, body) = app.get(path).await?;
        assert_eq!(status, HttpStatusCode::NOT_FOUND, "{path}");
        assert_eq!(body, json!({"error": "Not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn e2e_user_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ivan = app.create_user("ivan", &[]).await?;
    let id = ivan["id"].as_i64().unwrap();

    let (status, body) = app.delete(&format!("/user/{id}/delete/")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = app.delete(&format!("/user/{id}/delete/")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_ad_slug_resolution() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.create_user("anna", &[]).await?;
    app.post("/cat/create/", json!({"name": "Sport"})).await?;

    let (status, ad) = app
        .post("/ad/create/", json!({"name": "Skis", "author": "anna", "price": 120, "category": "Sport"}))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(ad["author"], "anna");
    assert_eq!(ad["category"], "Sport");
    assert_eq!(ad["is_published"], false);

    let (status, body) = app.post("/ad/create/", json!({"name": "Skis", "author": "nobody", "price": 1})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Object with username=nobody does not exist.");

    let id = ad["id"].as_i64().unwrap();
    let (status, body) = app.patch(&format!("/ad/{id}/update/"), json!({"is_published": true})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["is_published"], true);
    assert_eq!(body["category"], "Sport");

    let (status, body) = app.patch(&format!("/ad/{id}/update/"), json!({"category": null})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["category"], Value::Null);
    assert_eq!(body["name"], "Skis");

    let (status, page) = app.get("/ad/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(page["total"], 1);
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_input() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .client
        .post(app.url("/cat/create/"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["error"].is_string());

    let res = app.client.post(app.url("/cat/create/")).body("name=Books").send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNSUPPORTED_MEDIA_TYPE);

    let (status, body) = app.post("/cat/create/", json!({"name": "   "})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = app.get("/cat/abc/").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(body["paths"]["/user/"].is_object());
    Ok(())
}
