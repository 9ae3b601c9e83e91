use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScorerError;

/// Questionnaire section a prompt is attributed to by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Creative,
    Analytical,
    Networking,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creative,
        Category::Analytical,
        Category::Networking,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Creative => "creative",
            Category::Analytical => "analytical",
            Category::Networking => "networking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic program a decision recommends.
///
/// Declaration order is the enumeration order used to break score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "BSCS")]
    Bscs,
    #[serde(rename = "BSIT")]
    Bsit,
    #[serde(rename = "BSCPE")]
    Bscpe,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Bscs, Track::Bsit, Track::Bscpe];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Track::Bscs => "BSCS",
            Track::Bsit => "BSIT",
            Track::Bscpe => "BSCPE",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Track::ALL
            .into_iter()
            .find(|track| track.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ScorerError::UnknownTrack(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[serde(rename = "Multimedia")]
    Multimedia,
    #[serde(rename = "Networking")]
    Networking,
}

impl Specialization {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Specialization::DataAnalytics => "Data Analytics",
            Specialization::Multimedia => "Multimedia",
            Specialization::Networking => "Networking",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-track scores reported alongside a decision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackScores {
    #[serde(rename = "BSCS")]
    pub bscs: f64,
    #[serde(rename = "BSIT")]
    pub bsit: f64,
    #[serde(rename = "BSCPE")]
    pub bscpe: f64,
}

impl TrackScores {
    #[must_use]
    pub const fn new(bscs: f64, bsit: f64, bscpe: f64) -> Self {
        Self { bscs, bsit, bscpe }
    }

    #[must_use]
    pub const fn get(&self, track: Track) -> f64 {
        match track {
            Track::Bscs => self.bscs,
            Track::Bsit => self.bsit,
            Track::Bscpe => self.bscpe,
        }
    }

    /// Highest-scoring track; ties go to the earliest track in [`Track::ALL`].
    #[must_use]
    pub fn argmax(&self) -> Track {
        let mut best = Track::ALL[0];
        for track in &Track::ALL[1..] {
            if self.get(*track) > self.get(best) {
                best = *track;
            }
        }
        best
    }
}

/// Value of [`TrackDecision::fallback`].
pub const FALLBACK_DECISION: TrackDecision = TrackDecision {
    label: Track::Bsit,
    scores: TrackScores::new(0.0, 1.0, 0.0),
    specialization: Specialization::DataAnalytics,
};

/// Recommendation produced for one response record.
///
/// Serializes to the runner's wire shape:
/// `{"recommended_track": .., "scores": {..}, "track_specialization": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackDecision {
    #[serde(rename = "recommended_track")]
    pub label: Track,
    pub scores: TrackScores,
    #[serde(rename = "track_specialization")]
    pub specialization: Specialization,
}

impl TrackDecision {
    /// Decision substituted by callers that could not obtain a record to score.
    #[must_use]
    pub const fn fallback() -> Self {
        FALLBACK_DECISION
    }

    /// Whether the label agrees with the argmax of the reported scores.
    ///
    /// Always true for classifier output; a decision read back from the wire
    /// may not satisfy it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.scores.argmax() == self.label
    }
}
