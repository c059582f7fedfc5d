//! Category recognition over the closed lemma dictionary.

use stezhka_core::models::Category;

use crate::morphology;

/// Match a word or short phrase against every known category lemma,
/// in lexicon scan order. First matching lemma's category wins.
pub fn match_category(phrase: &str) -> Option<Category> {
    for category in Category::KNOWN {
        for lemma in category.info().lemmas {
            if morphology::matches(phrase, lemma) {
                return Some(category);
            }
        }
    }
    None
}

/// Whether the phrase is recognizable as a bare category word.
pub fn is_category_word(phrase: &str) -> bool {
    match_category(phrase).is_some()
}
