use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    serve, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::cart_manager::CartView;
use crate::application::session::ShopSession;
use crate::errors::AppError;
use shop_types::domain::catalog::FilterCriteria;
use shop_types::domain::order::OrderDetail;
use shop_types::domain::product::{Product, Sku};
use shop_types::ports::key_value_store::KeyValueStore;

type SharedSession<S> = Arc<Mutex<ShopSession<S>>>;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

#[derive(Clone)]
pub struct HttpServer<S>
where
    S: KeyValueStore,
{
    pub session: SharedSession<S>,
    pub config: HttpServerConfig,
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub sku: Sku,
}

#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Deserialize)]
pub struct PromotionRequest {
    pub code: String,
}

#[derive(Serialize)]
struct PromotionResponse {
    applied: bool,
    cart: CartView,
}

impl<S> HttpServer<S>
where
    S: KeyValueStore,
{
    pub async fn new(session: ShopSession<S>, config: HttpServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            config,
        })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        Router::new()
            .route("/health", get(health))
            .route("/products", get(list_products::<S>))
            .route("/products/brands", get(list_brands::<S>))
            .route(
                "/products/filters",
                put(set_filters::<S>).delete(reset_filters::<S>),
            )
            .route("/products/{sku}", get(get_product::<S>))
            .route("/cart", get(get_cart::<S>))
            .route("/cart/items", post(add_item::<S>))
            .route(
                "/cart/items/{sku}",
                axum::routing::patch(update_item::<S>).delete(remove_item::<S>),
            )
            .route("/cart/promotion", put(apply_promotion::<S>))
            .route("/checkout", post(checkout::<S>))
            .route(
                "/orders/{id}",
                get(get_order::<S>).delete(clear_order::<S>),
            )
            .layer(trace_layer)
            .with_state(self.session.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

async fn list_products<S>(State(session): State<SharedSession<S>>) -> Json<Vec<Product>>
where
    S: KeyValueStore,
{
    let session = session.lock().await;
    let products = session
        .catalog
        .filtered_products()
        .into_iter()
        .cloned()
        .collect();
    Json(products)
}

async fn list_brands<S>(State(session): State<SharedSession<S>>) -> Json<Vec<String>>
where
    S: KeyValueStore,
{
    Json(session.lock().await.catalog.available_brands())
}

async fn set_filters<S>(
    State(session): State<SharedSession<S>>,
    Json(criteria): Json<FilterCriteria>,
) -> Json<FilterCriteria>
where
    S: KeyValueStore,
{
    let mut session = session.lock().await;
    session.catalog.set_criteria(criteria);
    Json(session.catalog.criteria().clone())
}

async fn reset_filters<S>(State(session): State<SharedSession<S>>) -> Json<FilterCriteria>
where
    S: KeyValueStore,
{
    let mut session = session.lock().await;
    session.catalog.reset_filters();
    Json(session.catalog.criteria().clone())
}

async fn get_product<S>(
    State(session): State<SharedSession<S>>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, AppError>
where
    S: KeyValueStore,
{
    let sku = parse_sku(&sku)?;
    let session = session.lock().await;
    session
        .catalog
        .find_by_sku(sku)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {}", sku)))
}

async fn get_cart<S>(State(session): State<SharedSession<S>>) -> Json<CartView>
where
    S: KeyValueStore,
{
    Json(session.lock().await.cart.view())
}

async fn add_item<S>(
    State(session): State<SharedSession<S>>,
    Json(payload): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartView>), AppError>
where
    S: KeyValueStore,
{
    let mut session = session.lock().await;
    session.add_sku(payload.sku)?;
    Ok((StatusCode::CREATED, Json(session.cart.view())))
}

async fn update_item<S>(
    State(session): State<SharedSession<S>>,
    Path(sku): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Result<Json<CartView>, AppError>
where
    S: KeyValueStore,
{
    let sku = parse_sku(&sku)?;
    let mut session = session.lock().await;
    session.cart.update_quantity(sku, payload.quantity);
    Ok(Json(session.cart.view()))
}

async fn remove_item<S>(
    State(session): State<SharedSession<S>>,
    Path(sku): Path<String>,
) -> Result<Json<CartView>, AppError>
where
    S: KeyValueStore,
{
    let sku = parse_sku(&sku)?;
    let mut session = session.lock().await;
    session.cart.remove_from_cart(sku);
    Ok(Json(session.cart.view()))
}

async fn apply_promotion<S>(
    State(session): State<SharedSession<S>>,
    Json(payload): Json<PromotionRequest>,
) -> Json<PromotionResponse>
where
    S: KeyValueStore,
{
    let mut session = session.lock().await;
    session.cart.set_promotion_code(payload.code);
    let applied = session.cart.apply_promotion();
    Json(PromotionResponse {
        applied,
        cart: session.cart.view(),
    })
}

async fn checkout<S>(
    State(session): State<SharedSession<S>>,
) -> Result<(StatusCode, Json<OrderDetail>), AppError>
where
    S: KeyValueStore,
{
    let mut session = session.lock().await;
    let order = session.checkout().await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order<S>(
    State(session): State<SharedSession<S>>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>, AppError>
where
    S: KeyValueStore,
{
    let session = session.lock().await;
    let order = session.archiver.get_order_by_id(&id).await;
    order
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))
}

async fn clear_order<S>(
    State(session): State<SharedSession<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError>
where
    S: KeyValueStore,
{
    let mut session = session.lock().await;
    session.archiver.clear_order_from_storage(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_sku(raw: &str) -> Result<Sku, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid sku: {}", raw)))
}
