use crate::e2e::helpers;

use helpers::{TestContext, ADMIN_KEY};
use hyper::StatusCode;
use pcore_backend::domain::catalog::{Category, CategoryItem, CoverItem, SellingLink};
use pcore_backend::infrastructure::config::Config;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_admin_requests_without_token(ctx: &TestContext) {
    let response = ctx.client.get("/admin/categories").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .client
        .get_with_auth("/admin/categories", "not-the-key")
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refresh_cached_catalog_after_admin_writes(ctx: &TestContext) {
    let client = ctx
        .spawn_with_config(Config {
            catalog_cache_ttl_secs: 300,
            ..ctx.config.clone()
        })
        .await;

    let category = ctx.fixtures.create_category("cucina").await.unwrap();
    let item = ctx
        .fixtures
        .create_item(Some(category.id), "moka")
        .await
        .unwrap();

    // warm the cache
    let response = client.get("/api/catalog/categories").await.unwrap();
    assert_eq!(response.body().as_array().unwrap().len(), 1);
    let response = client.get("/api/catalog/products/moka").await.unwrap();
    response.assert_status(StatusCode::OK);

    let response = client
        .post_with_auth("/admin/categories", &json!({ "name": "Casa" }), ADMIN_KEY)
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);

    let response = client.get("/api/catalog/categories").await.unwrap();
    let slugs: Vec<&str> = response
        .body()
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["cucina", "casa"]);

    let response = client
        .delete_with_auth(&format!("/admin/items/{}", item.id), ADMIN_KEY)
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = client.get("/api/catalog/products/moka").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_category_with_derived_slug(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_auth(
            "/admin/categories",
            &json!({ "name": "Cucina e Caffè", "description": "Tutto per la cucina" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let category: Category = response.json().unwrap();
    assert_eq!(category.slug, "cucina-e-caffe");
    assert_eq!(category.description.as_deref(), Some("Tutto per la cucina"));

    let response = ctx
        .client
        .get_with_auth("/admin/categories", ADMIN_KEY)
        .await
        .unwrap();
    let categories: Vec<Category> = response.json().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, category.id);

    // visible on the public side right away
    let response = ctx
        .client
        .get("/api/catalog/categories/cucina-e-caffe")
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_409_for_duplicate_slug(ctx: &TestContext) {
    ctx.fixtures.create_category("cucina").await.unwrap();

    let response = ctx
        .client
        .post_with_auth(
            "/admin/categories",
            &json!({ "name": "Cucina", "slug": "cucina" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CONFLICT);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_400_for_invalid_slug(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_auth(
            "/admin/categories",
            &json!({ "name": "Cucina", "slug": "Not A Slug!" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid slug");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_update_category(ctx: &TestContext) {
    let category = ctx.fixtures.create_category("cucina").await.unwrap();

    let response = ctx
        .client
        .put_with_auth(
            &format!("/admin/categories/{}", category.id),
            &json!({ "name": "Cucina moderna", "slug": "cucina-moderna" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let updated: Category = response.json().unwrap();
    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Cucina moderna");
    assert_eq!(updated.slug, "cucina-moderna");

    let response = ctx.client.get("/api/catalog/categories/cucina").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_when_updating_missing_category(ctx: &TestContext) {
    let response = ctx
        .client
        .put_with_auth(
            &format!("/admin/categories/{}", Uuid::new_v4()),
            &json!({ "name": "Fantasma" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Category not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_orphan_items_when_category_is_deleted(ctx: &TestContext) {
    let category = ctx.fixtures.create_category("cucina").await.unwrap();
    let item = ctx
        .fixtures
        .create_item(Some(category.id), "moka")
        .await
        .unwrap();

    let response = ctx
        .client
        .delete_with_auth(&format!("/admin/categories/{}", category.id), ADMIN_KEY)
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.get_with_auth("/admin/items", ADMIN_KEY).await.unwrap();
    let items: Vec<CategoryItem> = response.json().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);
    assert_eq!(items[0].category_id, None);

    let response = ctx.client.get("/api/catalog/sections").await.unwrap();
    assert_eq!(response.body().as_array().unwrap().len(), 0);

    // the item is still reachable by slug
    let response = ctx.client.get("/api/catalog/products/moka").await.unwrap();
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_items_for_unknown_category(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_auth(
            "/admin/items",
            &json!({ "name": "Moka", "category_id": Uuid::new_v4() }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unknown category_id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_and_filter_items(ctx: &TestContext) {
    let cucina = ctx.fixtures.create_category("cucina").await.unwrap();
    let casa = ctx.fixtures.create_category("casa").await.unwrap();
    ctx.fixtures
        .create_items(Some(casa.id), "lampada", 2)
        .await
        .unwrap();

    let response = ctx
        .client
        .post_with_auth(
            "/admin/items",
            &json!({
                "name": "Moka Express",
                "category_id": cucina.id,
                "link": "https://amzn.to/moka",
                "image_url": "https://cdn.example.com/moka.jpg"
            }),
            ADMIN_KEY,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let created: CategoryItem = response.json().unwrap();
    assert_eq!(created.slug.as_deref(), Some("moka-express"));
    assert_eq!(created.category_id, Some(cucina.id));

    let response = ctx
        .client
        .get_with_auth(&format!("/admin/items?category_id={}", cucina.id), ADMIN_KEY)
        .await
        .unwrap();
    let items: Vec<CategoryItem> = response.json().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, created.id);

    let response = ctx.client.get_with_auth("/admin/items", ADMIN_KEY).await.unwrap();
    let all: Vec<CategoryItem> = response.json().unwrap();
    assert_eq!(all.len(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_http_links(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_auth(
            "/admin/items",
            &json!({ "name": "Moka", "link": "ftp://example.com/moka" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid URL format for link");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_manage_cover_items(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_auth(
            "/admin/covers",
            &json!({ "name": "Saldi estivi", "image_url": "https://cdn.example.com/saldi.jpg" }),
            ADMIN_KEY,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let cover: CoverItem = response.json().unwrap();
    assert_eq!(cover.slug.as_deref(), Some("saldi-estivi"));

    let response = ctx.client.get_with_auth("/admin/covers", ADMIN_KEY).await.unwrap();
    let covers: Vec<CoverItem> = response.json().unwrap();
    assert_eq!(covers.len(), 1);

    let response = ctx
        .client
        .delete_with_auth(&format!("/admin/covers/{}", cover.id), ADMIN_KEY)
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx
        .client
        .delete_with_auth(&format!("/admin/covers/{}", cover.id), ADMIN_KEY)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_manage_selling_links(ctx: &TestContext) {
    let category = ctx.fixtures.create_category("cucina").await.unwrap();
    ctx.fixtures
        .create_items(Some(category.id), "prodotto", 2)
        .await
        .unwrap();

    let response = ctx
        .client
        .post_with_auth(
            "/admin/selling-links",
            &json!({
                "name": "Offerta lampo",
                "descrizione": "Solo oggi",
                "link": "https://amzn.to/lampo",
                "calltoaction": "Compra ora"
            }),
            ADMIN_KEY,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let link: SellingLink = response.json().unwrap();

    let response = ctx
        .client
        .get_with_auth("/admin/selling-links", ADMIN_KEY)
        .await
        .unwrap();
    let links: Vec<SellingLink> = response.json().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].calltoaction.as_deref(), Some("Compra ora"));

    let response = ctx.client.get("/api/catalog/categories/cucina").await.unwrap();
    let entries = response.body()["entries"].as_array().unwrap().clone();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2]["link"]["id"], link.id.to_string());

    let response = ctx
        .client
        .delete_with_auth(&format!("/admin/selling-links/{}", link.id), ADMIN_KEY)
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.get("/api/catalog/categories/cucina").await.unwrap();
    assert_eq!(response.body()["entries"].as_array().unwrap().len(), 2);
}
