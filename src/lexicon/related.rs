// Related-word list construction.
//
// The layout consumes one ordered list: synonyms first, then antonyms, each
// capped by the host's limits. Upstream order is kept as-is because the
// angular strategy assigns slots by position in this list.

use super::types::{GalaxyLimits, Relation, WordEntry};
use crate::layout::{RelatedItem, Role};

/// Floor for strengths derived from rank.
const MIN_RANKED_STRENGTH: f64 = 0.3;
/// Strength lost per rank step.
const RANK_STEP: f64 = 0.1;

/// Ordered related items for `entry`, capped by `limits`.
pub fn related_items(entry: &WordEntry, limits: &GalaxyLimits) -> Vec<RelatedItem> {
    let synonyms = entry.synonyms.iter().take(limits.max_synonyms);
    let antonyms = entry.antonyms.iter().take(limits.max_antonyms);

    synonyms
        .map(|r| to_item(r, Role::Synonym))
        .chain(antonyms.map(|r| to_item(r, Role::Antonym)))
        .filter(|item| !item.label.trim().is_empty())
        .collect()
}

fn to_item(relation: &Relation, role: Role) -> RelatedItem {
    RelatedItem {
        label: relation.word.trim().to_string(),
        role,
        relation_strength: relation.strength,
        example_text: relation.example.clone(),
    }
}

/// Build relations from a bare ranked word list (thesaurus style).
///
/// Strength falls by 0.1 per rank with a floor of 0.3; the example names the
/// relation to `term`.
pub fn ranked_relations<S: AsRef<str>>(words: &[S], term: &str, role: Role) -> Vec<Relation> {
    let example = match role {
        Role::Antonym => format!("Opposite of {term}"),
        _ => format!("Similar to {term}"),
    };
    words
        .iter()
        .enumerate()
        .map(|(rank, word)| {
            let strength = (1.0 - rank as f64 * RANK_STEP).max(MIN_RANKED_STRENGTH);
            Relation::new(word.as_ref(), strength).with_example(example.clone())
        })
        .collect()
}
