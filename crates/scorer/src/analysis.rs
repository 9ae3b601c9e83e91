use serde::Serialize;

use crate::keywords::KeywordTable;
use crate::record::{parse_rating, ResponseRecord};
use crate::types::Category;

/// Running total for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub sum: u64,
    pub count: usize,
}

impl CategoryTally {
    fn add(&mut self, rating: u64) {
        self.sum = self.sum.saturating_add(rating);
        self.count += 1;
    }

    /// Mean rating of the matched questions, 0 when nothing matched.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// Affinity score per category, as consumed by the track policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryScores {
    pub creative: f64,
    pub analytical: f64,
    pub networking: f64,
}

impl CategoryScores {
    #[must_use]
    pub const fn new(creative: f64, analytical: f64, networking: f64) -> Self {
        Self {
            creative,
            analytical,
            networking,
        }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Creative => self.creative,
            Category::Analytical => self.analytical,
            Category::Networking => self.networking,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub creative: CategoryTally,
    pub analytical: CategoryTally,
    pub networking: CategoryTally,
}

impl CategoryBreakdown {
    #[must_use]
    pub const fn tally(&self, category: Category) -> &CategoryTally {
        match category {
            Category::Creative => &self.creative,
            Category::Analytical => &self.analytical,
            Category::Networking => &self.networking,
        }
    }

    fn tally_mut(&mut self, category: Category) -> &mut CategoryTally {
        match category {
            Category::Creative => &mut self.creative,
            Category::Analytical => &mut self.analytical,
            Category::Networking => &mut self.networking,
        }
    }

    #[must_use]
    pub fn scores(&self) -> CategoryScores {
        CategoryScores::new(
            self.creative.score(),
            self.analytical.score(),
            self.networking.score(),
        )
    }
}

/// Tally every answer into each category its question matches.
///
/// Answers that do not parse as a rating still count as a match and pull the
/// category mean down.
#[must_use]
pub fn analyze(record: &ResponseRecord, table: &KeywordTable) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    for (question, answer) in record.iter() {
        let categories = table.categories_for(question);
        if categories.is_empty() {
            continue;
        }
        let rating = parse_rating(answer);
        for category in categories {
            breakdown.tally_mut(category).add(rating);
        }
    }

    for category in Category::ALL {
        let tally = breakdown.tally(category);
        log::debug!(
            "{category} score: {:.2} (from {} questions)",
            tally.score(),
            tally.count
        );
    }
    breakdown
}
