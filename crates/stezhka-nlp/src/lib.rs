//! Stezhka NLP - Intent extraction for Ukrainian walk requests
//!
//! Deterministic rule/pattern parsing, no trained models. The morphology
//! module recognizes grammatical forms of known category words despite
//! case inflection; the parser turns free text into a structured
//! [`RouteRequest`](stezhka_core::models::RouteRequest).

pub mod lexicon;
pub mod morphology;
pub mod parser;

pub use lexicon::match_category;
pub use morphology::{matches, name_variants};
pub use parser::parse;
