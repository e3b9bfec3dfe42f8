use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::info;
use serde_json::json;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::errors::SiteError;
use crate::utils::date::format_date_regional;

pub const REVALIDATE_TOKEN_HEADER: &str = "x-revalidate-token";

// Same content as /about, dates already in display order
#[get("/api/about")]
pub async fn about_api_handler(store: web::Data<ContentStore>) -> Result<HttpResponse, SiteError> {
    let content = store.current().await?;
    Ok(HttpResponse::Ok().json(content.with_regional_dates()))
}

// Reloads right away instead of waiting out the interval
#[post("/api/revalidate")]
pub async fn revalidate_handler(
    req: HttpRequest,
    store: web::Data<ContentStore>,
    config: web::Data<SiteConfig>,
) -> Result<HttpResponse, SiteError> {
    let expected = config
        .revalidate_token
        .as_deref()
        .ok_or_else(|| SiteError::NotFound("Revalidation is disabled".to_string()))?;

    let provided = req
        .headers()
        .get(REVALIDATE_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if provided != Some(expected) {
        return Err(SiteError::Unauthorized(
            "Invalid revalidation token".to_string(),
        ));
    }

    let content = store.refresh().await?;
    info!("About content revalidated on demand");

    Ok(HttpResponse::Ok().json(json!({
        "revalidated": true,
        "updated_at": format_date_regional(&content.updated_at),
    })))
}
