//! Free-text search over entity fields.
//!
//! Matching is a case-insensitive substring test over a fixed, ordered list
//! of fields; the first field that matches wins. There is no relevance
//! scoring. Query and field text are both NFC-normalized before case
//! folding, so "Cafe\u{301}" (decomposed) finds "Café" (precomposed) and
//! decomposed Hangul jamo find precomposed syllables.

use catalog::Entity;
use unicode_normalization::UnicodeNormalization;

/// Fields consulted by the matcher, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    /// Both the English and the Korean category label
    CategoryLabel,
    Address,
}

impl SearchField {
    pub const ORDER: [SearchField; 3] = [
        SearchField::Name,
        SearchField::CategoryLabel,
        SearchField::Address,
    ];
}

/// Normalize text for comparison: NFC, then lowercase
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// A compiled query.
///
/// The query is normalized once at construction; a blank query compiles to
/// a matcher that accepts everything.
#[derive(Debug, Clone, Default)]
pub struct SearchMatcher {
    needle: Option<String>,
}

impl SearchMatcher {
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(normalize(trimmed))
        };
        Self { needle }
    }

    /// True when the query is blank
    pub fn is_match_all(&self) -> bool {
        self.needle.is_none()
    }

    /// The first field containing the query, if any.
    ///
    /// Returns `None` for a blank query as well; use [`SearchMatcher::matches`]
    /// for the include/exclude decision.
    pub fn matched_field(&self, entity: &Entity) -> Option<SearchField> {
        let needle = self.needle.as_deref()?;
        SearchField::ORDER
            .into_iter()
            .find(|&field| field_contains(entity, field, needle))
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        self.is_match_all() || self.matched_field(entity).is_some()
    }
}

fn field_contains(entity: &Entity, field: SearchField, needle: &str) -> bool {
    match field {
        SearchField::Name => normalize(&entity.name).contains(needle),
        SearchField::CategoryLabel => {
            normalize(entity.category.label()).contains(needle)
                || normalize(entity.category.local_label()).contains(needle)
        }
        SearchField::Address => normalize(&entity.address).contains(needle),
    }
}

/// Evaluate a free-text query against one entity
pub fn search_matches(entity: &Entity, query: &str) -> bool {
    SearchMatcher::new(query).matches(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::restaurant;
    use catalog::Category;

    #[test]
    fn test_blank_query_matches_everything() {
        let entity = restaurant(1, "Tosokchon");
        assert!(search_matches(&entity, ""));
        assert!(search_matches(&entity, "   \t"));
        assert!(SearchMatcher::new(" ").is_match_all());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let entity = restaurant(1, "Tosokchon Samgyetang");
        assert!(search_matches(&entity, "samgye"));
        assert!(search_matches(&entity, "TOSOK"));
        assert!(search_matches(&entity, "  chon  "));
        assert!(!search_matches(&entity, "bibimbap"));
    }

    #[test]
    fn test_field_order_short_circuits() {
        let entity = restaurant(1, "Korean Table").with_address("Jongno-gu, Seoul");
        let matcher = SearchMatcher::new("korean");
        // Name and category label both contain "korean"; name comes first
        assert_eq!(matcher.matched_field(&entity), Some(SearchField::Name));

        let matcher = SearchMatcher::new("jongno");
        assert_eq!(matcher.matched_field(&entity), Some(SearchField::Address));
    }

    #[test]
    fn test_category_labels_are_searched() {
        let mut entity = restaurant(1, "Gusto Taco");
        entity.category = Category::FastFood;
        assert!(search_matches(&entity, "fast food"));
        assert!(search_matches(&entity, "패스트"));

        let matcher = SearchMatcher::new("fast");
        assert_eq!(matcher.matched_field(&entity), Some(SearchField::CategoryLabel));
    }

    #[test]
    fn test_description_is_not_searched() {
        let entity = restaurant(1, "Plain").with_description("famous for naengmyeon");
        assert!(!search_matches(&entity, "naengmyeon"));
    }

    #[test]
    fn test_unicode_normalization() {
        // Precomposed é in the data, decomposed e + U+0301 in the query
        let entity = restaurant(1, "Caf\u{e9} Onion");
        assert!(search_matches(&entity, "Cafe\u{301}"));

        // And the other way around
        let entity = restaurant(2, "Cafe\u{301} Layered");
        assert!(search_matches(&entity, "caf\u{e9}"));

        // Hangul: conjoining jamo (ᄒ ᅡ ᆫ) against the precomposed syllable 한
        let entity = restaurant(3, "한옥집");
        assert!(search_matches(&entity, "\u{1112}\u{1161}\u{11ab}"));
    }
}
