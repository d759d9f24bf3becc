use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use catalog_core::ProductId;
use catalog_infra::ServiceResult;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/ratings", post(rate_product))
        .route("/:id/rating", get(average_rating))
}

/// Run a service call on the blocking pool.
///
/// The file store writes its snapshot synchronously while the service holds
/// its write lock; neither may stall a runtime worker.
async fn run_blocking<T, F>(
    services: Arc<AppServices>,
    call: F,
) -> Result<T, axum::response::Response>
where
    T: Send + 'static,
    F: FnOnce(&AppServices) -> ServiceResult<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || call(&services)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(errors::service_error_to_response(e)),
        Err(e) => {
            tracing::error!(error = %e, "service task failed");
            Err(errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "service task failed",
            ))
        }
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match run_blocking(services, |s| s.list_products()).await {
        Ok(items) => (StatusCode::OK, Json(dto::ProductListResponse { items })).into_response(),
        Err(resp) => resp,
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::from(id);
    match run_blocking(services, move |s| s.get_product(&id)).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(resp) => resp,
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match run_blocking(services, move |s| s.add_product(body.into())).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(resp) => resp,
    }
}

pub async fn rate_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::RateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let id = ProductId::from(id);
    match run_blocking(services, move |s| s.rate_product(&id, body.rating)).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(resp) => resp,
    }
}

pub async fn average_rating(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::from(id);
    let lookup = id.clone();
    match run_blocking(services, move |s| s.average_rating(&lookup)).await {
        Ok(average) => {
            (StatusCode::OK, Json(dto::AverageRatingResponse { id, average })).into_response()
        }
        Err(resp) => resp,
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let id = ProductId::from(id);
    match run_blocking(services, move |s| s.update_product(&id, body.into())).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(resp) => resp,
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::from(id);
    match run_blocking(services, move |s| s.delete_product(&id)).await {
        Ok(removed) => (StatusCode::OK, Json(removed)).into_response(),
        Err(resp) => resp,
    }
}
