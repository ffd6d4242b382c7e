use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{
    admin::AdminController, catalog::CatalogController, contact::ContactController, health,
    revalidate::RevalidateController,
};
use crate::domain::{admin::AdminService, catalog::CatalogService, contact::ContactService};
use crate::error::AppResult;
use crate::infrastructure::auth::{admin_middleware, request_id_middleware};
use crate::infrastructure::config::Config;
use crate::infrastructure::contacts::BrevoContactClient;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::repositories::{
    CategoryItemRepository, CategoryRepository, CoverItemRepository, SellingLinkRepository,
};

/// Wire repositories, services and controllers and return the full router
pub fn build_app(pool: Arc<DbPool>, config: Arc<Config>) -> AppResult<Router> {
    // 1. Repositories
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let item_repo = Arc::new(CategoryItemRepository::new(pool.clone()));
    let cover_repo = Arc::new(CoverItemRepository::new(pool.clone()));
    let selling_link_repo = Arc::new(SellingLinkRepository::new(pool.clone()));

    // 2. Outbound clients
    let contact_gateway = Arc::new(BrevoContactClient::new(
        config.brevo_api_key.clone(),
        config.brevo_base_url.clone(),
        config.brevo_list_id,
    )?);

    // 3. Services
    let catalog_service = Arc::new(CatalogService::new(
        category_repo.clone(),
        item_repo.clone(),
        cover_repo.clone(),
        selling_link_repo.clone(),
        config.catalog_cache_ttl(),
    ));
    let admin_service = Arc::new(AdminService::new(
        category_repo,
        item_repo,
        cover_repo,
        selling_link_repo,
        catalog_service.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(contact_gateway));

    // 4. Controllers
    let catalog_controller = Arc::new(CatalogController::new(
        catalog_service.clone(),
        config.analytics_tag_id.clone(),
    ));
    let revalidate_controller = Arc::new(RevalidateController::new(
        catalog_service,
        config.revalidate_secret.clone(),
    ));
    let admin_controller = Arc::new(AdminController::new(admin_service));
    let contact_controller = Arc::new(ContactController::new(contact_service));

    let catalog_routes = Router::new()
        .route("/api/site", get(CatalogController::site))
        .route("/api/catalog/home", get(CatalogController::home))
        .route("/api/catalog/categories", get(CatalogController::list_categories))
        .route(
            "/api/catalog/categories/:slug",
            get(CatalogController::category_page),
        )
        .route("/api/catalog/sections", get(CatalogController::sections))
        .route("/api/catalog/products/:slug", get(CatalogController::product))
        .with_state(catalog_controller);

    let revalidate_routes = Router::new()
        .route("/api/revalidate", post(RevalidateController::revalidate))
        .with_state(revalidate_controller);

    let contact_routes = Router::new()
        .route("/api/contacts", post(ContactController::subscribe))
        .with_state(contact_controller);

    // Back-office routes (require the admin key)
    let admin_routes = Router::new()
        .route(
            "/admin/categories",
            get(AdminController::list_categories).post(AdminController::create_category),
        )
        .route(
            "/admin/categories/:id",
            put(AdminController::update_category).delete(AdminController::delete_category),
        )
        .route(
            "/admin/items",
            get(AdminController::list_items).post(AdminController::create_item),
        )
        .route(
            "/admin/items/:id",
            put(AdminController::update_item).delete(AdminController::delete_item),
        )
        .route(
            "/admin/covers",
            get(AdminController::list_covers).post(AdminController::create_cover),
        )
        .route(
            "/admin/covers/:id",
            axum::routing::delete(AdminController::delete_cover),
        )
        .route(
            "/admin/selling-links",
            get(AdminController::list_selling_links).post(AdminController::create_selling_link),
        )
        .route(
            "/admin/selling-links/:id",
            axum::routing::delete(AdminController::delete_selling_link),
        )
        .with_state(admin_controller)
        // Guard matched admin routes only; unknown paths fall through to 404
        .route_layer(middleware::from_fn_with_state(config.clone(), admin_middleware));

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(catalog_routes)
        .merge(revalidate_routes)
        .merge(contact_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer(&config)),
        );

    Ok(app)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match config.cors_allowed_origin.as_deref() {
        Some(origin) => HeaderValue::from_str(origin)
            .map(AllowOrigin::exact)
            .unwrap_or_else(|_| AllowOrigin::list(Vec::<HeaderValue>::new())),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(pool, config.clone())?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
