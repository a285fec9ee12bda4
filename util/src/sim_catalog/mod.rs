//! Requirement catalog for task-based simulations.
//!
//! A catalog is the authored answer key for one simulation: an ordered list
//! of gradable requirements, each carrying a display label, a point value,
//! and a type-specific correct-answer payload. The catalog is produced by
//! content authors, persisted by the caller, and treated as read-only truth
//! by the grading engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The declared type of a requirement, driving comparator dispatch.
///
/// An unrecognized tag in authored content deserializes as [`Unknown`]
/// instead of failing the whole catalog; the grader scores such a
/// requirement as zero credit and moves on.
///
/// [`Unknown`]: RequirementKind::Unknown
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Numeric,
    Dropdown,
    JournalDebit,
    JournalCredit,
    FreeText,
    Citation,
    Unknown,
}

impl RequirementKind {
    /// Map an authored type tag to a kind; anything unrecognized is
    /// [`RequirementKind::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "numeric" => RequirementKind::Numeric,
            "dropdown" => RequirementKind::Dropdown,
            "journal_debit" => RequirementKind::JournalDebit,
            "journal_credit" => RequirementKind::JournalCredit,
            "free_text" => RequirementKind::FreeText,
            "citation" => RequirementKind::Citation,
            _ => RequirementKind::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for RequirementKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(RequirementKind::from_tag(&tag))
    }
}

/// One accepted alternative form of a citation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitationRef {
    pub source: String,
    pub topic_code: String,
}

/// The authored correct-answer payload for a requirement.
///
/// The payload shape is keyed by a `type` tag so catalogs remain plain JSON.
/// Journal debit and credit requirements share the `journal` payload; the
/// side of the entry is carried by [`RequirementKind`] on the requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerKey {
    Numeric {
        value: f64,
        #[serde(default)]
        tolerance: Option<f64>,
        #[serde(default)]
        tolerance_percent: Option<f64>,
        #[serde(default)]
        accept_negative: bool,
    },
    Dropdown {
        correct_option_id: String,
    },
    Journal {
        account_id: String,
        account_name: String,
        amount: f64,
        #[serde(default)]
        tolerance: Option<f64>,
    },
    FreeText {
        keywords: Vec<String>,
        #[serde(default)]
        case_sensitive: bool,
    },
    Citation {
        source: String,
        topic_code: String,
        #[serde(default)]
        alternative_citations: Vec<CitationRef>,
    },
}

/// One gradable requirement within a simulation.
///
/// `points` is expected to be non-negative and `answer_key` is expected to
/// match `kind`; neither is enforced here. The grader tolerates violations
/// by scoring the requirement as zero credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requirement {
    pub id: String,
    pub order: i64,
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    pub label: String,
    pub points: f64,
    #[serde(default)]
    pub answer_key: Option<AnswerKey>,
    /// Post-grading display text for the review screen; not consumed by the grader.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// The full authored catalog for one simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimCatalog {
    pub generated_at: DateTime<Utc>,
    pub requirements: Vec<Requirement>,
    pub total_points: f64,
}

impl SimCatalog {
    /// Recompute `total_points` from the requirement point values.
    /// Negative point values are treated as zero, matching the grader.
    pub fn recompute_total(&mut self) -> f64 {
        self.total_points = self.requirements.iter().map(|r| r.points.max(0.0)).sum();
        self.total_points
    }

    pub fn new_now(requirements: Vec<Requirement>) -> Self {
        let mut me = SimCatalog {
            generated_at: Utc::now(),
            total_points: 0.0,
            requirements,
        };
        me.recompute_total();
        me
    }

    /// Parse a catalog from its persisted JSON form.
    pub fn from_json(s: &str) -> Result<SimCatalog, String> {
        serde_json::from_str::<SimCatalog>(s)
            .map_err(|_| "Invalid catalog JSON (normalized expected)".to_string())
    }

    /// Serialize the catalog to the persisted JSON form.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|_| "Failed to serialize catalog".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_requirement(id: &str, points: f64) -> Requirement {
        Requirement {
            id: id.to_string(),
            order: 1,
            kind: RequirementKind::Numeric,
            label: format!("Requirement {id}"),
            points,
            answer_key: Some(AnswerKey::Numeric {
                value: 1000.0,
                tolerance: Some(5.0),
                tolerance_percent: None,
                accept_negative: false,
            }),
            explanation: None,
        }
    }

    #[test]
    fn test_recompute_total_sums_points() {
        let mut catalog = SimCatalog::new_now(vec![
            numeric_requirement("r1", 10.0),
            numeric_requirement("r2", 2.5),
        ]);
        assert_eq!(catalog.total_points, 12.5);
        catalog.requirements.push(numeric_requirement("r3", 4.0));
        assert_eq!(catalog.recompute_total(), 16.5);
    }

    #[test]
    fn test_recompute_total_ignores_negative_points() {
        let catalog = SimCatalog::new_now(vec![
            numeric_requirement("r1", 10.0),
            numeric_requirement("r2", -3.0),
        ]);
        assert_eq!(catalog.total_points, 10.0);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = SimCatalog::new_now(vec![Requirement {
            id: "req-1".to_string(),
            order: 1,
            kind: RequirementKind::Citation,
            label: "Cite the guidance".to_string(),
            points: 5.0,
            answer_key: Some(AnswerKey::Citation {
                source: "ASC".to_string(),
                topic_code: "605-10".to_string(),
                alternative_citations: vec![CitationRef {
                    source: "ASC".to_string(),
                    topic_code: "606-10".to_string(),
                }],
            }),
            explanation: Some("See revenue recognition guidance.".to_string()),
        }]);
        let json = catalog.to_json().expect("serialize catalog");
        let parsed = SimCatalog::from_json(&json).expect("parse catalog");
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_kind_tags_round_trip() {
        let kinds = [
            RequirementKind::Numeric,
            RequirementKind::Dropdown,
            RequirementKind::JournalDebit,
            RequirementKind::JournalCredit,
            RequirementKind::FreeText,
            RequirementKind::Citation,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            let parsed: RequirementKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unrecognized_type_tag_parses_as_unknown() {
        let json = r#"{
            "generated_at": "2026-01-15T08:30:00Z",
            "requirements": [
                {
                    "id": "r1",
                    "order": 1,
                    "type": "essay",
                    "label": "Mystery requirement",
                    "points": 5.0
                }
            ],
            "total_points": 5.0
        }"#;
        let catalog = SimCatalog::from_json(json).expect("catalog should still parse");
        assert_eq!(catalog.requirements[0].kind, RequirementKind::Unknown);
        assert!(catalog.requirements[0].answer_key.is_none());
    }

    #[test]
    fn test_mismatched_answer_key_is_tolerated_at_parse_time() {
        // A dropdown requirement carrying a numeric payload is an authoring
        // bug, but the catalog still loads; the grader degrades it later.
        let json = r#"{
            "generated_at": "2026-01-15T08:30:00Z",
            "requirements": [
                {
                    "id": "r1",
                    "order": 1,
                    "type": "dropdown",
                    "label": "Pick one",
                    "points": 2.0,
                    "answer_key": { "type": "numeric", "value": 7.0 }
                }
            ],
            "total_points": 2.0
        }"#;
        let catalog = SimCatalog::from_json(json).expect("catalog should still parse");
        assert_eq!(catalog.requirements[0].kind, RequirementKind::Dropdown);
        assert!(matches!(
            catalog.requirements[0].answer_key,
            Some(AnswerKey::Numeric { .. })
        ));
    }

    #[test]
    fn test_invalid_json_gives_short_error() {
        let err = SimCatalog::from_json("{ not json").unwrap_err();
        assert_eq!(err, "Invalid catalog JSON (normalized expected)");
    }

    #[test]
    fn test_optional_payload_fields_default() {
        let json = r#"{
            "generated_at": "2026-01-15T08:30:00Z",
            "requirements": [
                {
                    "id": "r1",
                    "order": 1,
                    "type": "numeric",
                    "label": "Net income",
                    "points": 10.0,
                    "answer_key": { "type": "numeric", "value": 1500.0 }
                }
            ],
            "total_points": 10.0
        }"#;
        let catalog = SimCatalog::from_json(json).expect("parse catalog");
        match &catalog.requirements[0].answer_key {
            Some(AnswerKey::Numeric {
                value,
                tolerance,
                tolerance_percent,
                accept_negative,
            }) => {
                assert_eq!(*value, 1500.0);
                assert!(tolerance.is_none());
                assert!(tolerance_percent.is_none());
                assert!(!accept_negative);
            }
            other => panic!("expected numeric answer key, got {other:?}"),
        }
    }
}
