//! Cover-image reference derivation.

use bookforge_core::locale::Locale;
use sha2::{Digest, Sha256};

/// Image identifiers are mapped into `[0, 1000)` to stay inside the
/// placeholder service's seed range.
const IMAGE_ID_RANGE: u64 = 1000;

/// Derive a stable cover-image URL from a record's rendered title.
///
/// Pure function of `(title, locale)` — consumes no random draws, so the
/// same book always resolves to the same cover.
#[must_use]
pub fn cover_image_url(title: &str, locale: Locale) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(locale.tag().as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    let image_id = u64::from_be_bytes(bytes) % IMAGE_ID_RANGE;

    format!("https://picsum.photos/seed/book_{image_id}/300/450")
}
