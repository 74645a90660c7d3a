//! Scored combinations: a candidate schedule paired with the scorer's verdict.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ScheduleError;
use crate::section::{Section, SectionRecord};

/// The scorer's record for one combination.
///
/// Only `score` is interpreted (lower is better); every other field is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ScoreInfo {
    score: f64,
    details: Map<String, Value>,
}

impl ScoreInfo {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            details: Map::new(),
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Scorer-supplied fields other than `score`.
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }
}

impl TryFrom<Map<String, Value>> for ScoreInfo {
    type Error = ScheduleError;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let score = match fields.remove("score") {
            Some(value) => value.as_f64().ok_or_else(|| {
                ScheduleError::Precondition(format!("score is not a number: {}", value))
            })?,
            None => {
                return Err(ScheduleError::Precondition(
                    "score info has no 'score' field".to_string(),
                ))
            }
        };
        Ok(Self {
            score,
            details: fields,
        })
    }
}

/// A candidate schedule and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCombination {
    pub sections: Vec<Section>,
    pub score_info: ScoreInfo,
}

impl ScoredCombination {
    pub fn new(sections: Vec<Section>, score_info: ScoreInfo) -> Self {
        Self {
            sections,
            score_info,
        }
    }
}

/// A scored combination as read from JSON, before its sections are parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredCombinationRecord {
    pub sections: Vec<SectionRecord>,
    pub score_info: ScoreInfo,
}

impl TryFrom<ScoredCombinationRecord> for ScoredCombination {
    type Error = ScheduleError;

    fn try_from(record: ScoredCombinationRecord) -> Result<Self, Self::Error> {
        let sections = record
            .sections
            .into_iter()
            .map(Section::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(sections, record.score_info))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
