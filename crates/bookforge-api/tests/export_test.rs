//! Integration tests for the CSV export endpoint.

mod common;

use axum::http::StatusCode;
use axum::http::header;

#[tokio::test]
async fn test_export_returns_csv_attachment() {
    let app = common::build_app();

    let (status, headers, body) =
        common::get_text(app, "/api/books/export?seed=42&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"books.csv\""
    );
    assert!(body.starts_with("index,isbn,title,author,publisher,likes,reviewCount\n"));
}

#[tokio::test]
async fn test_export_contains_one_row_per_record_across_pages() {
    let app = common::build_app();

    let (_, _, body) =
        common::get_text(app, "/api/books/export?seed=3&pageSize=10&pages=3").await;

    // Header plus 3 pages of 10 records each.
    assert_eq!(body.lines().count(), 31);

    let first_row = body.lines().nth(1).unwrap();
    assert!(first_row.starts_with("1,978-0"));
    let last_row = body.lines().last().unwrap();
    assert!(last_row.starts_with("30,978-0"));
}

#[tokio::test]
async fn test_export_rows_match_the_listing_endpoint() {
    let (_, json) =
        common::get_json(common::build_app(), "/api/books?seed=8&pageSize=5").await;
    let (_, _, csv) =
        common::get_text(common::build_app(), "/api/books/export?seed=8&pageSize=5").await;

    let first = &json.as_array().unwrap()[0];
    let first_row = csv.lines().nth(1).unwrap();
    assert!(first_row.contains(first["isbn"].as_str().unwrap()));
}

#[tokio::test]
async fn test_export_quotes_german_author_names() {
    let app = common::build_app();

    let (_, _, body) =
        common::get_text(app, "/api/books/export?locale=de&seed=1&pageSize=20").await;

    // German authors are rendered family-name-first with a comma, so
    // every data row carries a quoted author field.
    for row in body.lines().skip(1) {
        assert!(row.contains("\""), "expected a quoted field in {row:?}");
    }
}

#[tokio::test]
async fn test_export_is_deterministic() {
    let uri = "/api/books/export?locale=fr&seed=21&pageSize=15&avgLikes=2.5&avgReviews=1.5&pages=2";

    let (_, _, first) = common::get_text(common::build_app(), uri).await;
    let (_, _, second) = common::get_text(common::build_app(), uri).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_export_rejects_invalid_parameters() {
    let (status, _, _) =
        common::get_text(common::build_app(), "/api/books/export?pageSize=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
