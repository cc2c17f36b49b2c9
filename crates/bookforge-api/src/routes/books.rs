//! Routes for catalog generation and export.

use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde::Deserialize;

use bookforge_catalog::{CatalogQuery, Record, generate};
use bookforge_core::error::CatalogError;
use bookforge_core::locale::Locale;

use crate::error::ApiError;
use crate::export;

/// Query parameters shared by the listing and export endpoints.
///
/// Every field is optional on the wire; missing fields take the
/// defaults below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookParams {
    /// Raw locale tag; unknown tags fall back to English downstream.
    pub locale: String,
    /// Catalog seed.
    pub seed: u64,
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
    /// Target average likes per record.
    pub avg_likes: f64,
    /// Target average review count per record.
    pub avg_reviews: f64,
}

impl Default for BookParams {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
            seed: 0,
            page: 1,
            page_size: 20,
            avg_likes: 0.0,
            avg_reviews: 0.0,
        }
    }
}

/// Extra parameter accepted by the export endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportParams {
    /// Number of pages to export, starting from page 1.
    pub pages: u32,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self { pages: 1 }
    }
}

/// Enforce the request bounds and normalize into a `CatalogQuery`.
///
/// The generator itself assumes these bounds hold, so every HTTP entry
/// point funnels through here.
fn validate(params: &BookParams) -> Result<CatalogQuery, CatalogError> {
    if params.page < 1 {
        return Err(CatalogError::Validation(
            "page must be at least 1".to_owned(),
        ));
    }
    if !(1..=100).contains(&params.page_size) {
        return Err(CatalogError::Validation(
            "pageSize must be between 1 and 100".to_owned(),
        ));
    }
    if !(0.0..=10.0).contains(&params.avg_likes) {
        return Err(CatalogError::Validation(
            "avgLikes must be between 0 and 10".to_owned(),
        ));
    }
    if !(0.0..=100.0).contains(&params.avg_reviews) {
        return Err(CatalogError::Validation(
            "avgReviews must be between 0 and 100".to_owned(),
        ));
    }

    Ok(CatalogQuery {
        locale: Locale::parse(&params.locale),
        seed: params.seed,
        page: params.page,
        page_size: params.page_size,
        avg_likes: params.avg_likes,
        avg_reviews: params.avg_reviews,
    })
}

/// GET /api/books
async fn list_books(Query(params): Query<BookParams>) -> Result<Json<Vec<Record>>, ApiError> {
    let query = validate(&params)?;
    let records = generate(&query)?;
    tracing::debug!(count = records.len(), "generated catalog page");
    Ok(Json(records))
}

/// GET /api/books/export
///
/// Exports pages `1..=pages` as one CSV document. Each page is generated
/// with its own seeded source, so the export matches what the listing
/// endpoint returns page by page.
async fn export_books(
    Query(params): Query<BookParams>,
    Query(export): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let query = validate(&params)?;
    let pages = export.pages.clamp(1, 100);

    let mut records = Vec::new();
    for page in 1..=pages {
        let page_query = CatalogQuery {
            page,
            ..query.clone()
        };
        records.extend(generate(&page_query)?);
    }

    tracing::info!(pages, count = records.len(), "exporting catalog to CSV");
    let csv = export::to_csv(&records);

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"books.csv\"",
        ),
    ];
    Ok((headers, csv).into_response())
}

/// Returns the router for the catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/export", get(export_books))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> BookParams {
        BookParams::default()
    }

    #[test]
    fn test_defaults_validate() {
        let query = validate(&params()).unwrap();
        assert_eq!(query.locale, Locale::En);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 20);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let mut bad = params();
        bad.page = 0;
        assert!(matches!(
            validate(&bad),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_page_size_bounds_are_enforced() {
        let mut bad = params();
        bad.page_size = 0;
        assert!(validate(&bad).is_err());
        bad.page_size = 101;
        assert!(validate(&bad).is_err());
        bad.page_size = 100;
        assert!(validate(&bad).is_ok());
    }

    #[test]
    fn test_average_bounds_are_enforced() {
        let mut bad = params();
        bad.avg_likes = 10.1;
        assert!(validate(&bad).is_err());

        let mut bad = params();
        bad.avg_likes = -0.1;
        assert!(validate(&bad).is_err());

        let mut bad = params();
        bad.avg_reviews = 100.5;
        assert!(validate(&bad).is_err());

        let mut ok = params();
        ok.avg_likes = 10.0;
        ok.avg_reviews = 100.0;
        assert!(validate(&ok).is_ok());
    }

    #[test]
    fn test_nan_averages_are_rejected() {
        let mut bad = params();
        bad.avg_likes = f64::NAN;
        assert!(validate(&bad).is_err());
    }

    #[test]
    fn test_unknown_locale_normalizes_to_english() {
        let mut odd = params();
        odd.locale = "xx".to_owned();
        assert_eq!(validate(&odd).unwrap().locale, Locale::En);
    }
}
