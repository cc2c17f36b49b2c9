//! Record assembly — one page of catalog records per call.

use bookforge_core::error::CatalogError;
use bookforge_core::rng::{DeterministicRng, PageRng};
use bookforge_grammar::{LocaleGrammar, grammar_for};

use crate::cover::cover_image_url;
use crate::isbn;
use crate::record::{CatalogQuery, Record};
use crate::rounding::probabilistic_count;

/// Generate one page of records.
///
/// The whole page draws from a single [`PageRng`] seeded from
/// `seed + page`, and each record's fields are produced in a fixed order,
/// so repeated calls with the same query are byte-identical and no page
/// depends on any other page having been generated.
///
/// # Errors
///
/// Returns [`CatalogError::Generation`] if `page_size` is zero. All other
/// bounds are enforced by the caller before this point.
pub fn generate(query: &CatalogQuery) -> Result<Vec<Record>, CatalogError> {
    if query.page_size == 0 {
        return Err(CatalogError::Generation(
            "page size must be at least 1".to_owned(),
        ));
    }

    tracing::debug!(
        locale = %query.locale,
        seed = query.seed,
        page = query.page,
        page_size = query.page_size,
        "generating catalog page"
    );

    let mut rng = PageRng::new(query.seed, query.page);
    let grammar = grammar_for(query.locale);

    let records = (0..query.page_size)
        .map(|slot| build_record(query, grammar, &mut rng, slot))
        .collect();
    Ok(records)
}

/// Build the record for one page slot.
///
/// Field order is the determinism contract: index (no draw), ISBN, title,
/// author, publisher, likes, review count then reviews then reviewers,
/// cover (no draw). Reordering any of these silently reshuffles every
/// later draw on the page.
fn build_record(
    query: &CatalogQuery,
    grammar: &dyn LocaleGrammar,
    rng: &mut dyn DeterministicRng,
    slot: u32,
) -> Record {
    let index = u64::from(query.page - 1) * u64::from(query.page_size) + u64::from(slot) + 1;

    let isbn = isbn::generate(query.locale, rng);
    let title = grammar.title(rng);
    let author = grammar.author_name(rng);
    let publisher = grammar.publisher(rng);

    let actual_likes = probabilistic_count(query.avg_likes, rng);

    // One count draw shared by both sequences keeps the pairing exact.
    let review_count = probabilistic_count(query.avg_reviews, rng) as usize;
    let reviews = grammar.reviews(rng, review_count);
    let reviewers: Vec<String> = (0..review_count)
        .map(|_| grammar.reviewer_name(rng))
        .collect();

    let cover_image_url = cover_image_url(&title, query.locale);

    Record {
        index,
        isbn,
        title,
        author,
        publisher,
        average_likes: query.avg_likes,
        average_reviews: query.avg_reviews,
        actual_likes,
        reviews,
        reviewers,
        cover_image_url,
    }
}
