//! Generation request and record models.

use bookforge_core::locale::Locale;
use serde::{Deserialize, Serialize};

/// One page's worth of generation parameters.
///
/// Bounds (`page >= 1`, `page_size` in `[1, 100]`, `avg_likes` in
/// `[0, 10]`, `avg_reviews` in `[0, 100]`) are the caller's contract; the
/// assembler only defends against an empty page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    /// Normalized locale (unknown tags already resolved to the fallback).
    pub locale: Locale,
    /// The user-chosen catalog seed.
    pub seed: u64,
    /// 1-based page number.
    pub page: u32,
    /// Number of records per page.
    pub page_size: u32,
    /// Target average likes per record.
    pub avg_likes: f64,
    /// Target average review count per record.
    pub avg_reviews: f64,
}

/// One generated catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 1-based position in the seed's page-independent catalog.
    pub index: u64,
    /// Checksum-valid ISBN-13 with the locale's prefix group.
    pub isbn: String,
    /// Rendered title, possibly with subtitle and tagline.
    pub title: String,
    /// Locale-formatted author name.
    pub author: String,
    /// Publisher imprint or house.
    pub publisher: String,
    /// Echo of the requested likes average, for traceability.
    pub average_likes: f64,
    /// Echo of the requested reviews average, for traceability.
    pub average_reviews: f64,
    /// Likes count derived from the requested average.
    pub actual_likes: u32,
    /// Review texts; same length as `reviewers`.
    pub reviews: Vec<String>,
    /// Reviewer names; `reviewers[i]` wrote `reviews[i]`.
    pub reviewers: Vec<String>,
    /// Opaque cover-image reference derived from the title.
    pub cover_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_to_camel_case() {
        let record = Record {
            index: 21,
            isbn: "978-0-12345678-6".to_owned(),
            title: "Lost Dragon".to_owned(),
            author: "James Smith".to_owned(),
            publisher: "Midnight Ink".to_owned(),
            average_likes: 3.5,
            average_reviews: 2.0,
            actual_likes: 4,
            reviews: vec!["Masterpiece.".to_owned()],
            reviewers: vec!["Mary Johnson".to_owned()],
            cover_image_url: "https://picsum.photos/seed/book_1/300/450".to_owned(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["index"], 21);
        assert_eq!(json["isbn"], "978-0-12345678-6");
        assert_eq!(json["averageLikes"], 3.5);
        assert_eq!(json["averageReviews"], 2.0);
        assert_eq!(json["actualLikes"], 4);
        assert_eq!(json["coverImageUrl"], "https://picsum.photos/seed/book_1/300/450");
        assert_eq!(json["reviews"].as_array().unwrap().len(), 1);
        assert_eq!(json["reviewers"][0], "Mary Johnson");
    }
}
