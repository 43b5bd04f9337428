//! Lexical source seam.
//!
//! The real dictionary/thesaurus client lives in the host (it owns the keys and
//! base URLs). Native hosts and tests plug in through [`LexicalSource`].

use std::collections::HashMap;

use super::types::WordEntry;
use crate::error::LookupError;

pub trait LexicalSource {
    fn lookup(&self, term: &str) -> Result<WordEntry, LookupError>;
}

/// In-memory source keyed by lowercase term.
#[derive(Debug, Clone, Default)]
pub struct StaticLexicon {
    entries: HashMap<String, WordEntry>,
}

impl StaticLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: &str, entry: WordEntry) {
        self.entries.insert(term.trim().to_lowercase(), entry);
    }

    pub fn with_entry(mut self, term: &str, entry: WordEntry) -> Self {
        self.insert(term, entry);
        self
    }
}

impl LexicalSource for StaticLexicon {
    fn lookup(&self, term: &str) -> Result<WordEntry, LookupError> {
        self.entries
            .get(&term.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| LookupError::NotFound(term.to_string()))
    }
}
