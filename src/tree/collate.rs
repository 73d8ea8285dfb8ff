//! Name collation for display order.
//!
//! Names are compared with the CLDR collation for English: accents and case are
//! secondary and tertiary differences, punctuation and symbols sort before digits and
//! letters, and names differing only in case put the lowercase form first. Names the
//! collator treats as equal fall back to byte order so the result is a total order.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;
use tracing::warn;

/// Display ordering for entry names, built once per render call.
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    /// English collation. Falls back to case-insensitive code point order if the
    /// collation data cannot be loaded.
    pub fn english() -> Self {
        match Collator::try_new(&locale!("en").into(), CollatorOptions::new()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                warn!("english collation unavailable, using code point order: {e}");
                Self { collator: None }
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        collated.then_with(|| a.cmp(b))
    }
}
