use crate::analysis::{analyze, CategoryBreakdown};
use crate::keywords::KeywordTable;
use crate::policy::{select_track, specialization_for, Branch};
use crate::record::ResponseRecord;
use crate::types::TrackDecision;

/// A decision together with the intermediate values that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explanation {
    pub breakdown: CategoryBreakdown,
    pub branch: Branch,
    pub decision: TrackDecision,
}

pub struct TrackClassifier;

impl TrackClassifier {
    /// Recommend a track using the built-in keyword table.
    ///
    /// Total over its input: records with no recognizable questions or with
    /// unparseable answers land on BSIT through the general rule.
    #[must_use]
    pub fn classify(record: &ResponseRecord) -> TrackDecision {
        Self::classify_with(record, &KeywordTable::default())
    }

    #[must_use]
    pub fn classify_with(record: &ResponseRecord, table: &KeywordTable) -> TrackDecision {
        Self::explain(record, table).decision
    }

    #[must_use]
    pub fn explain(record: &ResponseRecord, table: &KeywordTable) -> Explanation {
        let breakdown = analyze(record, table);
        let scores = breakdown.scores();
        let selection = select_track(&scores);
        // The rule only shapes the score map; the best score names the track.
        let label = selection.scores.argmax();
        let decision = TrackDecision {
            label,
            scores: selection.scores,
            specialization: specialization_for(label, &scores),
        };
        log::debug!(
            "recommended {} ({}) via {:?}",
            decision.label,
            decision.specialization,
            selection.branch
        );
        Explanation {
            breakdown,
            branch: selection.branch,
            decision,
        }
    }
}

#[must_use]
pub fn classify(record: &ResponseRecord) -> TrackDecision {
    TrackClassifier::classify(record)
}

#[must_use]
pub fn classify_with(record: &ResponseRecord, table: &KeywordTable) -> TrackDecision {
    TrackClassifier::classify_with(record, table)
}

#[must_use]
pub fn explain(record: &ResponseRecord, table: &KeywordTable) -> Explanation {
    TrackClassifier::explain(record, table)
}
