use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{MatchError, VendorMatcher};
use crate::models::{ErrorResponse, HealthResponse, MatchVendorsRequest, MatchVendorsResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: VendorMatcher,
}

/// Configure all matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(match_vendors));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank vendor candidates for an order
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "order": {
///     "orderId": "string",
///     "requiredSkills": ["AC Gas Filling"],
///     "customerLocation": { "lat": 17.4065, "lng": 78.4691 }
///   },
///   "candidates": [ ... ],
///   "config": { "maxResults": 6 }
/// }
/// ```
///
/// An empty `matches` array is a normal outcome (no vendors available),
/// not an error.
async fn match_vendors(
    state: web::Data<AppState>,
    req: web::Json<MatchVendorsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for match request: orderId={:?}, field_errors={:?}",
            req.order.order_id,
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Matching order {} against {} candidates",
        req.order.order_id,
        req.candidates.len()
    );

    let result = match &req.config {
        Some(config) => state
            .matcher
            .match_vendors_with(&req.order, &req.candidates, config),
        None => state.matcher.match_vendors(&req.order, &req.candidates),
    };

    match result {
        Ok(matches) => {
            tracing::info!(
                "Returning {} matches for order {} (from {} candidates)",
                matches.len(),
                req.order.order_id,
                req.candidates.len()
            );

            HttpResponse::Ok().json(MatchVendorsResponse {
                order_id: req.order.order_id.clone(),
                total_candidates: req.candidates.len(),
                matches,
            })
        }
        Err(e @ MatchError::InvalidInput(_)) => {
            tracing::info!("Rejected match request for order {}: {}", req.order.order_id, e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}
