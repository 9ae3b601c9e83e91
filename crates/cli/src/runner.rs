use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use advisor_scorer::{explain, Category, Explanation, KeywordTable, ResponseRecord, TrackDecision};
use anyhow::{Context as AnyhowContext, Result};
use serde_json::{json, Map, Value};

/// Where the response record comes from.
#[derive(Debug, Clone)]
pub enum RecordSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

impl RecordSource {
    fn read_text(&self) -> Result<String> {
        match self {
            RecordSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read user data from {}", path.display())),
            RecordSource::Inline(text) => Ok(text.clone()),
            RecordSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read user data from stdin")?;
                Ok(buf)
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            RecordSource::File(path) => path.display().to_string(),
            RecordSource::Inline(_) => "--json".to_string(),
            RecordSource::Stdin => "stdin".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RecommendOutcome {
    Scored(Explanation),
    /// The record could not be obtained; carries the reason.
    Fallback(String),
}

impl RecommendOutcome {
    #[must_use]
    pub fn decision(&self) -> TrackDecision {
        match self {
            RecommendOutcome::Scored(explanation) => explanation.decision,
            RecommendOutcome::Fallback(_) => TrackDecision::fallback(),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, RecommendOutcome::Fallback(_))
    }

    /// Wire JSON, optionally with an `analysis` object describing the scoring.
    pub fn to_json(&self, with_analysis: bool) -> Result<Value> {
        let mut value = serde_json::to_value(self.decision())?;
        if with_analysis {
            if let Value::Object(map) = &mut value {
                map.insert("analysis".to_string(), self.analysis());
            }
        }
        Ok(value)
    }

    fn analysis(&self) -> Value {
        let RecommendOutcome::Scored(explanation) = self else {
            return Value::Null;
        };
        let mut categories = Map::new();
        for category in Category::ALL {
            let tally = explanation.breakdown.tally(category);
            categories.insert(
                category.as_str().to_string(),
                json!({
                    "score": tally.score(),
                    "sum": tally.sum,
                    "count": tally.count,
                }),
            );
        }
        json!({
            "categories": categories,
            "branch": explanation.branch,
            "consistent": explanation.decision.is_consistent(),
        })
    }
}

pub fn load_record(source: &RecordSource) -> Result<ResponseRecord> {
    let text = source.read_text()?;
    let record: ResponseRecord = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON object in {}", source.describe()))?;
    log::debug!(
        "User data loaded from {} ({} fields)",
        source.describe(),
        record.len()
    );
    for (question, answer) in record.iter() {
        log::trace!("  {question:?}: {answer}");
    }
    Ok(record)
}

/// Score the record from `source`, substituting the fallback decision when the
/// record cannot be read or decoded.
pub fn recommend_from_source(source: &RecordSource, table: &KeywordTable) -> RecommendOutcome {
    match load_record(source) {
        Ok(record) => RecommendOutcome::Scored(explain(&record, table)),
        Err(err) => {
            log::warn!("Using fallback recommendation: {err:#}");
            RecommendOutcome::Fallback(format!("{err:#}"))
        }
    }
}
