use crate::e2e::helpers;

use helpers::{TestContext, REVALIDATE_SECRET};
use hyper::StatusCode;
use pcore_backend::controllers::revalidate::RevalidateResponse;
use pcore_backend::infrastructure::config::Config;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_secret(ctx: &TestContext) {
    let response = ctx.client.post_empty("/api/revalidate").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_wrong_secret(ctx: &TestContext) {
    let response = ctx
        .client
        .post_empty("/api/revalidate?secret=guess")
        .await
        .unwrap();
    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Invalid revalidation secret");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refresh_cached_catalog(ctx: &TestContext) {
    let client = ctx
        .spawn_with_config(Config {
            catalog_cache_ttl_secs: 300,
            ..ctx.config.clone()
        })
        .await;

    ctx.fixtures.create_category("cucina").await.unwrap();
    let response = client.get("/api/catalog/categories").await.unwrap();
    assert_eq!(response.body().as_array().unwrap().len(), 1);

    // seeded behind the cache's back
    ctx.fixtures.create_category("casa").await.unwrap();
    let response = client.get("/api/catalog/categories").await.unwrap();
    assert_eq!(response.body().as_array().unwrap().len(), 1);

    let response = client
        .post_empty(&format!("/api/revalidate?secret={}", REVALIDATE_SECRET))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    let body: RevalidateResponse = response.json().unwrap();
    assert!(body.revalidated);

    let response = client.get("/api/catalog/categories").await.unwrap();
    assert_eq!(response.body().as_array().unwrap().len(), 2);
}
