use actix_web::http::StatusCode;
use actix_web::{error, web, HttpRequest, HttpResponse, Result};
use uuid::Uuid;
use validator::Validate;

use crate::error::CompareError;
use crate::models::{CompareRequest, CompareResponse, ErrorResponse};
use crate::AppState;

pub const BAD_PAYLOAD: &str = "Bad payload data - doc texts not specified";

pub async fn compare(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<CompareRequest>,
) -> Result<HttpResponse> {
    // Validate request
    if let Err(e) = req.validate() {
        tracing::warn!("Rejected compare request: {}", e);
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            BAD_PAYLOAD,
            format!("Validation error: {}", e),
        )));
    }
    let Some((text1, text2)) = req.texts() else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(BAD_PAYLOAD)));
    };

    let request_id = Uuid::new_v4();
    let service = &state.compare_service;

    match service.compare(text1, text2) {
        Ok(report) => {
            tracing::info!(%request_id, score = report.score, "Compared texts");
            let response =
                CompareResponse::from_report(request_id, service.algorithm().as_str(), report);
            respond_compare(&http_req, response)
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!(%request_id, "Compare request failed: {}", e);
            } else {
                tracing::error!(%request_id, "Compare error: {:?}", e);
            }
            Ok(error_response(&e))
        }
    }
}

fn respond_compare(http_req: &HttpRequest, response: CompareResponse) -> Result<HttpResponse> {
    let accept = http_req
        .headers()
        .get(actix_web::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if accept.contains("text/plain") {
        return Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(response.as_text()));
    }

    Ok(HttpResponse::Ok().json(response))
}

pub fn error_response(err: &CompareError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse::with_details(
        "Failed to compare texts",
        err.to_string(),
    ))
}

/// JSON extractor settings for compare payloads.
///
/// Any content type is accepted; malformed bodies become a 400 and bodies
/// over `limit` a 413, both with an [`ErrorResponse`] body.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, _req| {
            let response = match &err {
                error::JsonPayloadError::Overflow { .. }
                | error::JsonPayloadError::OverflowKnownLength { .. } => {
                    HttpResponse::PayloadTooLarge()
                        .json(ErrorResponse::with_details("Payload too large", err.to_string()))
                }
                _ => {
                    tracing::warn!("Malformed compare payload: {}", err);
                    HttpResponse::BadRequest()
                        .json(ErrorResponse::with_details(BAD_PAYLOAD, err.to_string()))
                }
            };
            error::InternalError::from_response(err, response).into()
        })
}
