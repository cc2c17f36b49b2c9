//! CSV serialization of generated records.

use bookforge_catalog::Record;

/// Column header of the tabular export.
pub const CSV_HEADER: &str = "index,isbn,title,author,publisher,likes,reviewCount";

/// Serialize records as CSV: one header row, one row per record.
#[must_use]
pub fn to_csv(records: &[Record]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&record.index.to_string());
        for field in [
            &record.isbn,
            &record.title,
            &record.author,
            &record.publisher,
        ] {
            out.push(',');
            out.push_str(&escape(field));
        }
        out.push(',');
        out.push_str(&record.actual_likes.to_string());
        out.push(',');
        out.push_str(&record.reviews.len().to_string());
        out.push('\n');
    }
    out
}

/// Quote a field if it contains a comma, quote, or line break; embedded
/// quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            index: 1,
            isbn: "978-0-12345678-6".to_owned(),
            title: "Lost Dragon".to_owned(),
            author: "James Smith".to_owned(),
            publisher: "Midnight Ink".to_owned(),
            average_likes: 3.5,
            average_reviews: 2.0,
            actual_likes: 4,
            reviews: vec!["Masterpiece.".to_owned(), "Boring.".to_owned()],
            reviewers: vec!["Mary Johnson".to_owned(), "John Brown".to_owned()],
            cover_image_url: "https://picsum.photos/seed/book_1/300/450".to_owned(),
        }
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let csv = to_csv(&[sample_record(), sample_record()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "1,978-0-12345678-6,Lost Dragon,James Smith,Midnight Ink,4,2"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut record = sample_record();
        record.author = "Schneider, Greta".to_owned();
        let csv = to_csv(&[record]);
        assert!(csv.contains("\"Schneider, Greta\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut record = sample_record();
        record.title = "The \"Lost\" Dragon".to_owned();
        let csv = to_csv(&[record]);
        assert!(csv.contains("\"The \"\"Lost\"\" Dragon\""));
    }

    #[test]
    fn test_plain_fields_stay_unquoted() {
        let csv = to_csv(&[sample_record()]);
        assert!(!csv.lines().nth(1).unwrap().contains('"'));
    }

    #[test]
    fn test_empty_input_serializes_to_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }
}
