//! REST API handlers
//!
//! HTTP endpoints for performing statistics and retrieving stored results

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::{MathServerError, MathServerResult};
use crate::server_impl::MathServer;
use crate::stats;
use crate::traits::ResultStore;
use crate::types::{MathRequest, MathResponse, Operation};

/// Perform a statistic and store the result - `POST /math/`
///
/// Unknown operation names map to 400, computation failures to 500; both
/// carry a `detail` field via the error's `IntoResponse` impl.
pub async fn perform_operation<S>(
    State(server): State<MathServer<S>>,
    Json(request): Json<MathRequest>,
) -> MathServerResult<Json<MathResponse>>
where
    S: ResultStore + Clone + Send + Sync + 'static,
{
    let operation: Operation = request.operation.parse()?;

    let result = stats::compute(operation, &request.values)?;
    server.store().save(operation.as_str(), result).await?;

    info!(
        operation = %operation,
        count = request.values.len(),
        result,
        "Computed and stored result"
    );

    Ok(Json(MathResponse {
        operation: operation.as_str().to_string(),
        result,
    }))
}

/// Retrieve the last stored result - `GET /math/{operation}`
///
/// Lookup only: the path segment is used as the store key without
/// validation, so any never-computed name yields 404.
pub async fn get_result<S>(
    State(server): State<MathServer<S>>,
    Path(operation): Path<String>,
) -> MathServerResult<Json<MathResponse>>
where
    S: ResultStore + Clone + Send + Sync + 'static,
{
    let result = server
        .store()
        .retrieve(&operation)
        .await?
        .ok_or(MathServerError::ResultNotFound {
            operation: operation.clone(),
        })?;

    debug!(operation = %operation, result, "Returning stored result");

    Ok(Json(MathResponse { operation, result }))
}

/// Health check - `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "server_time": Utc::now().timestamp(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
