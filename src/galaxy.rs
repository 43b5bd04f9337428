//! Galaxy requests: lexicon data in, positioned word graph out.
//!
//! A missing entry or a failed lookup is not an error here. The galaxy then
//! consists of the center word alone.

use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;
use crate::layout::{LayoutConfig, compute_layout_seeded};
use crate::lexicon::{GalaxyLimits, LexicalSource, WordEntry, best_example, normalize_headword, related_items};
use crate::output::{EntrySummary, GalaxyOutput};

const NO_DEFINITION: &str = "No definition available";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub limits: GalaxyLimits,
    pub layout: LayoutConfig,
}

impl GalaxyConfig {
    pub fn validate(&self) -> Result<(), GalaxyError> {
        self.layout.validate()
    }
}

/// What the search page sends after its own fetch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalaxyRequest {
    pub term: String,
    /// None when the upstream lookup failed or found nothing.
    pub entry: Option<WordEntry>,
    pub config: GalaxyConfig,
}

pub fn build_galaxy(request: &GalaxyRequest) -> Result<GalaxyOutput, GalaxyError> {
    request.config.validate()?;

    let term = request.term.trim();
    let items = request
        .entry
        .as_ref()
        .map(|entry| related_items(entry, &request.config.limits))
        .unwrap_or_default();

    let layout = compute_layout_seeded(term, &items, &request.config.layout);
    let summary = request.entry.as_ref().map(|entry| summarize(term, entry));
    Ok(GalaxyOutput::from_layout(&layout, summary))
}

/// Look `term` up in `source` and build its galaxy.
pub fn explore(
    source: &dyn LexicalSource,
    term: &str,
    config: &GalaxyConfig,
) -> Result<GalaxyOutput, GalaxyError> {
    let entry = match source.lookup(term) {
        Ok(entry) => Some(entry),
        Err(err) => {
            log::warn!("lookup for '{}' failed: {}; showing the word alone", term, err);
            None
        }
    };
    build_galaxy(&GalaxyRequest {
        term: term.to_string(),
        entry,
        config: config.clone(),
    })
}

/// JSON in, JSON out. Never panics; failures come back in the `error` field.
pub fn compute_galaxy_json(request: &str) -> String {
    let output = serde_json::from_str::<GalaxyRequest>(request)
        .map_err(GalaxyError::from)
        .and_then(|req| build_galaxy(&req))
        .unwrap_or_else(|err| {
            log::error!("galaxy request rejected: {}", err);
            GalaxyOutput::from_error(&err)
        });
    serde_json::to_string(&output).unwrap_or_else(|_| "{\"error\":{\"kind\":\"output\",\"message\":\"serialization failed\"}}".to_string())
}

fn summarize(term: &str, entry: &WordEntry) -> EntrySummary {
    let word = normalize_headword(entry.word.trim());
    let definition = entry.definition.trim();
    EntrySummary {
        word: if word.is_empty() { term.to_string() } else { word },
        definition: if definition.is_empty() {
            NO_DEFINITION.to_string()
        } else {
            definition.to_string()
        },
        part_of_speech: entry.part_of_speech.clone().filter(|s| !s.is_empty()),
        pronunciation: entry.pronunciation.clone().filter(|s| !s.is_empty()),
        example: best_example(&entry.usage_examples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CENTER, Role, StrategyKind};
    use crate::lexicon::{Relation, StaticLexicon, ranked_relations};
    use serde_json::Value;

    fn beautiful() -> WordEntry {
        WordEntry {
            word: "beau*ti*ful".to_string(),
            definition: "pleasing the senses or mind aesthetically".to_string(),
            part_of_speech: Some("adjective".to_string()),
            pronunciation: Some("ˈbyü-ti-fəl".to_string()),
            synonyms: vec![
                Relation::new("attractive", 0.9).with_example("an attractive painting"),
                Relation::new("gorgeous", 0.95),
                Relation::new("stunning", 0.85),
            ],
            antonyms: vec![Relation::new("ugly", 0.9), Relation::new("hideous", 0.95)],
            usage_examples: vec!["a {it}beautiful{/it} woman".to_string()],
        }
    }

    fn seeded_config() -> GalaxyConfig {
        GalaxyConfig {
            layout: LayoutConfig {
                seed: Some(12),
                ..LayoutConfig::default()
            },
            ..GalaxyConfig::default()
        }
    }

    #[test]
    fn test_build_galaxy_from_entry() {
        let request = GalaxyRequest {
            term: " beautiful ".to_string(),
            entry: Some(beautiful()),
            config: seeded_config(),
        };
        let out = build_galaxy(&request).unwrap();

        assert_eq!(out.nodes.len(), 6);
        assert_eq!(out.nodes[0].word, "beautiful");
        assert_eq!(out.nodes[0].role, Role::Center);
        assert_eq!((out.nodes[0].x, out.nodes[0].y), (CENTER.x, CENTER.y));
        assert_eq!(out.edges.len(), 5);
        assert!(out.edges.iter().all(|e| e.from == 0));
        assert_eq!(out.edges[3].role, Role::Antonym);
        assert_eq!(out.nodes[1].example.as_deref(), Some("an attractive painting"));

        let entry = out.entry.unwrap();
        assert_eq!(entry.word, "beautiful");
        assert_eq!(entry.example.as_deref(), Some("a beautiful woman"));
    }

    #[test]
    fn test_limits_cap_related_words() {
        let mut config = seeded_config();
        config.limits = GalaxyLimits {
            max_synonyms: 1,
            max_antonyms: 1,
        };
        let request = GalaxyRequest {
            term: "beautiful".to_string(),
            entry: Some(beautiful()),
            config,
        };
        let out = build_galaxy(&request).unwrap();
        let words: Vec<&str> = out.nodes.iter().map(|n| n.word.as_str()).collect();
        assert_eq!(words, ["beautiful", "attractive", "ugly"]);
    }

    #[test]
    fn test_missing_entry_is_center_only() {
        let request = GalaxyRequest {
            term: "zzxq".to_string(),
            entry: None,
            config: seeded_config(),
        };
        let out = build_galaxy(&request).unwrap();
        assert_eq!(out.nodes.len(), 1);
        assert!(out.edges.is_empty());
        assert!(out.entry.is_none());
    }

    #[test]
    fn test_explore_treats_lookup_failure_as_empty() {
        let lexicon = StaticLexicon::new().with_entry("beautiful", beautiful());
        let found = explore(&lexicon, "beautiful", &seeded_config()).unwrap();
        assert_eq!(found.nodes.len(), 6);

        let missing = explore(&lexicon, "unknown", &seeded_config()).unwrap();
        assert_eq!(missing.nodes.len(), 1);
        assert!(missing.error.is_none());
    }

    #[test]
    fn test_ranked_relations_feed_the_galaxy() {
        let entry = WordEntry {
            word: "happy".to_string(),
            synonyms: ranked_relations(&["glad", "cheerful", "joyful"], "happy", Role::Synonym),
            antonyms: ranked_relations(&["sad"], "happy", Role::Antonym),
            ..WordEntry::default()
        };
        let out = build_galaxy(&GalaxyRequest {
            term: "happy".to_string(),
            entry: Some(entry),
            config: seeded_config(),
        })
        .unwrap();
        assert_eq!(out.nodes[4].strength, Some(1.0));
        assert_eq!(out.nodes[4].example.as_deref(), Some("Opposite of happy"));
        let summary = out.entry.unwrap();
        assert_eq!(summary.definition, NO_DEFINITION);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = seeded_config();
        config.layout.max_attempts = 0;
        let request = GalaxyRequest {
            term: "beautiful".to_string(),
            entry: None,
            config,
        };
        assert!(matches!(build_galaxy(&request), Err(GalaxyError::Config { .. })));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let request = r#"{
            "term": "beautiful",
            "entry": {
                "word": "beautiful",
                "definition": "pleasing the senses",
                "partOfSpeech": "adjective",
                "synonyms": [{"word": "lovely", "strength": 0.8, "example": "a lovely melody"}],
                "antonyms": [{"word": "ugly", "strength": 0.9}],
                "nuanceExamples": []
            },
            "config": {
                "limits": {"maxSynonyms": 4},
                "layout": {"strategy": "angular_orbit", "seed": 3}
            }
        }"#;
        let out: Value = serde_json::from_str(&compute_galaxy_json(request)).unwrap();

        let nodes = out["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0]["type"], "center");
        assert_eq!(nodes[0]["size"], 1.5);
        assert!(nodes[0].get("strength").is_none());
        assert_eq!(nodes[1]["type"], "synonym");
        assert_eq!(nodes[1]["example"], "a lovely melody");
        assert_eq!(nodes[2]["type"], "antonym");
        assert!(nodes[2].get("fallback").is_none());
        assert_eq!(out["edges"][1]["role"], "antonym");
        assert_eq!(out["entry"]["part_of_speech"], "adjective");
        assert!(out.get("error").is_none());
    }

    #[test]
    fn test_json_errors_are_reported() {
        let out: Value = serde_json::from_str(&compute_galaxy_json("not json")).unwrap();
        assert_eq!(out["error"]["kind"], "request");
        assert!(out.get("nodes").is_none());

        let bad = r#"{"term": "x", "config": {"layout": {"field_low": 95.0}}}"#;
        let out: Value = serde_json::from_str(&compute_galaxy_json(bad)).unwrap();
        assert_eq!(out["error"]["kind"], "config");
    }

    #[test]
    fn test_json_rejects_runaway_jitter() {
        let request = r#"{"term": "x", "config": {"layout": {"strategy": "angular_orbit", "angle_jitter": 1e308}}}"#;
        let out: Value = serde_json::from_str(&compute_galaxy_json(request)).unwrap();
        assert_eq!(out["error"]["kind"], "config");
        assert!(out["error"]["message"].as_str().unwrap().contains("angle_jitter"));

        let request = r#"{"term": "x", "config": {"layout": {"max_attempts": 100000000}}}"#;
        let out: Value = serde_json::from_str(&compute_galaxy_json(request)).unwrap();
        assert_eq!(out["error"]["kind"], "config");
    }

    #[test]
    fn test_strategy_choice_is_honoured() {
        let mut config = seeded_config();
        config.layout.strategy = StrategyKind::AngularOrbit;
        let out = build_galaxy(&GalaxyRequest {
            term: "beautiful".to_string(),
            entry: Some(beautiful()),
            config,
        })
        .unwrap();
        // First related word sits on the inner orbit, to the right of center.
        let first = &out.nodes[1];
        let r = ((first.x - CENTER.x).powi(2) + (first.y - CENTER.y).powi(2)).sqrt();
        assert!((r - 18.0).abs() <= 1.0 + 1e-9);
        assert!(first.x > CENTER.x);
    }
}
