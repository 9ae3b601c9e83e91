use serde::Serialize;

use crate::analysis::CategoryScores;
use crate::types::{Specialization, Track, TrackScores};

/// Which rule of the ordered track policy fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Networking dominates and is at least 3.5.
    NetworkingFocus,
    /// Strong analytical backed by at least moderate creative.
    AnalyticalCreative,
    /// Very strong analytical, well clear of the other categories.
    AnalyticalOnly,
    General,
}

impl Branch {
    #[must_use]
    pub const fn track(self) -> Track {
        match self {
            Branch::NetworkingFocus => Track::Bscpe,
            Branch::AnalyticalCreative | Branch::AnalyticalOnly => Track::Bscs,
            Branch::General => Track::Bsit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub branch: Branch,
    /// Track the rule is aimed at. With ratings outside 1..=5 the score map can
    /// rank another track higher.
    pub track: Track,
    pub scores: TrackScores,
}

/// Run the ordered policy. The first rule that holds computes the score map,
/// which is returned as-is.
#[must_use]
pub fn select_track(scores: &CategoryScores) -> Selection {
    let CategoryScores {
        creative: c,
        analytical: a,
        networking: n,
    } = *scores;

    let (branch, track_scores) = if n >= 3.5 && n > c.max(a) {
        (
            Branch::NetworkingFocus,
            TrackScores {
                bscpe: n,
                bscs: a * 0.7,
                bsit: c.max(a) * 0.8,
            },
        )
    } else if a >= 4.5 && c >= 3.0 && a > n {
        (
            Branch::AnalyticalCreative,
            TrackScores {
                bscs: a * 1.1 + c * 0.4,
                bsit: c.max(a) * 0.85,
                bscpe: n * 0.7,
            },
        )
    } else if a >= 4.8 && a > c.max(n) * 1.3 {
        (
            Branch::AnalyticalOnly,
            TrackScores {
                bscs: a * 1.05,
                bsit: c.max(a) * 0.9,
                bscpe: n * 0.7,
            },
        )
    } else {
        (
            Branch::General,
            TrackScores {
                bsit: c.max(a).max(3.0),
                bscs: a * 0.8,
                bscpe: n * 0.8,
            },
        )
    };

    log::debug!(
        "track policy: {branch:?} -> BSCS {:.2}, BSIT {:.2}, BSCPE {:.2}",
        track_scores.bscs,
        track_scores.bsit,
        track_scores.bscpe
    );

    Selection {
        branch,
        track: branch.track(),
        scores: track_scores,
    }
}

#[must_use]
pub fn specialization_for(track: Track, scores: &CategoryScores) -> Specialization {
    match track {
        Track::Bsit if scores.creative > scores.analytical => Specialization::Multimedia,
        Track::Bsit | Track::Bscs => Specialization::DataAnalytics,
        Track::Bscpe => Specialization::Networking,
    }
}
