//! Questionnaire-driven academic track recommendation.
//!
//! Answers are attributed to creative, analytical and networking categories by
//! keyword matching on the question text, averaged per category, and run
//! through an ordered policy that picks BSCS, BSIT or BSCPE.

mod analysis;
mod classifier;
mod error;
mod keywords;
mod policy;
mod record;
mod types;

pub use analysis::{analyze, CategoryBreakdown, CategoryScores, CategoryTally};
pub use classifier::{classify, classify_with, explain, Explanation, TrackClassifier};
pub use error::{Result, ScorerError};
pub use keywords::KeywordTable;
pub use policy::{select_track, specialization_for, Branch, Selection};
pub use record::{parse_rating, ResponseRecord};
pub use types::{
    Category, Specialization, Track, TrackDecision, TrackScores, FALLBACK_DECISION,
};
