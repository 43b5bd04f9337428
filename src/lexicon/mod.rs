mod example;
mod related;
mod source;
mod types;

pub use example::{best_example, normalize_headword, strip_markup};
pub use related::{ranked_relations, related_items};
pub use source::{LexicalSource, StaticLexicon};
pub use types::*;
