use serde::{Deserialize, Serialize};

/// One synonym or antonym as reported by the lexical source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub word: String,
    /// Closeness of the relation, 0..=1.
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub example: Option<String>,
}

impl Relation {
    pub fn new(word: impl Into<String>, strength: f64) -> Self {
        Self {
            word: word.into(),
            strength: Some(strength),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Dictionary + thesaurus data for one search term.
///
/// Field names follow the front-end's `WordData` shape so the page can hand
/// its fetched record over unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordEntry {
    /// Headword, possibly with syllable marks ("beau*ti*ful").
    pub word: String,
    pub definition: String,
    pub part_of_speech: Option<String>,
    pub pronunciation: Option<String>,
    /// Ordered, strongest first as delivered upstream.
    pub synonyms: Vec<Relation>,
    pub antonyms: Vec<Relation>,
    /// Raw usage sentences, may still carry `{...}` markup.
    pub usage_examples: Vec<String>,
}

/// Per-host caps on how many related words enter a galaxy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalaxyLimits {
    pub max_synonyms: usize,
    pub max_antonyms: usize,
}

impl Default for GalaxyLimits {
    fn default() -> Self {
        Self {
            max_synonyms: 8,
            max_antonyms: 5,
        }
    }
}
