use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScorerError};
use crate::types::Category;

const CREATIVE: &[&str] = &[
    "designing",
    "editing",
    "creating",
    "visual",
    "graphics",
    "animation",
    "colors",
    "drawing",
    "creative",
];

const ANALYTICAL: &[&str] = &[
    "numbers",
    "statistics",
    "data",
    "analytics",
    "patterns",
    "logical",
    "math",
    "programming",
    "algorithms",
];

const NETWORKING: &[&str] = &[
    "computers",
    "connect",
    "internet",
    "network",
    "hardware",
    "routers",
    "servers",
    "technical",
    "cables",
];

/// Category -> keyword set used to attribute questionnaire prompts.
///
/// A prompt matches a category when its lowercased text contains any of that
/// category's keywords. Categories are not exclusive: one prompt can feed
/// several of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordTable {
    creative: Vec<String>,
    analytical: Vec<String>,
    networking: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKeywordTable {
    creative: Option<Vec<String>>,
    analytical: Option<Vec<String>>,
    networking: Option<Vec<String>>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> {
            words.iter().map(|w| (*w).to_string()).collect()
        };
        Self {
            creative: owned(CREATIVE),
            analytical: owned(ANALYTICAL),
            networking: owned(NETWORKING),
        }
    }
}

impl KeywordTable {
    /// Build a table from explicit sets. Keywords are trimmed and lowercased.
    pub fn new(
        creative: Vec<String>,
        analytical: Vec<String>,
        networking: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            creative: normalize(Category::Creative, creative)?,
            analytical: normalize(Category::Analytical, analytical)?,
            networking: normalize(Category::Networking, networking)?,
        })
    }

    /// Parse a TOML table. Categories left out keep their built-in keywords.
    ///
    /// ```toml
    /// creative = ["designing", "drawing"]
    /// networking = ["network", "routers"]
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawKeywordTable = toml::from_str(text)?;
        let defaults = Self::default();
        Self::new(
            raw.creative.unwrap_or(defaults.creative),
            raw.analytical.unwrap_or(defaults.analytical),
            raw.networking.unwrap_or(defaults.networking),
        )
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScorerError::KeywordTableIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        match category {
            Category::Creative => &self.creative,
            Category::Analytical => &self.analytical,
            Category::Networking => &self.networking,
        }
    }

    /// Every category whose keyword set hits `question`, in [`Category::ALL`] order.
    #[must_use]
    pub fn categories_for(&self, question: &str) -> Vec<Category> {
        let lowered = question.to_lowercase();
        Category::ALL
            .into_iter()
            .filter(|category| {
                self.keywords(*category)
                    .iter()
                    .any(|needle| lowered.contains(needle.as_str()))
            })
            .collect()
    }
}

fn normalize(category: Category, words: Vec<String>) -> Result<Vec<String>> {
    if words.is_empty() {
        return Err(ScorerError::EmptyKeywordSet(category));
    }
    words
        .into_iter()
        .map(|word| {
            let word = word.trim().to_lowercase();
            if word.is_empty() {
                Err(ScorerError::BlankKeyword(category))
            } else {
                Ok(word)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matching_is_case_insensitive_substring() {
        let table = KeywordTable::default();
        assert_eq!(
            table.categories_for("I enjoy setting up NETWORKS at home."),
            vec![Category::Networking]
        );
        assert_eq!(
            table.categories_for("I like solving Logical problems."),
            vec![Category::Analytical]
        );
        assert!(table.categories_for("Full Name").is_empty());
    }

    #[test]
    fn one_question_can_hit_several_categories() {
        let table = KeywordTable::default();
        assert_eq!(
            table.categories_for("I enjoy data visual design"),
            vec![Category::Creative, Category::Analytical]
        );
        assert_eq!(
            table.categories_for("Creative programming on servers"),
            vec![
                Category::Creative,
                Category::Analytical,
                Category::Networking
            ]
        );
    }

    #[test]
    fn toml_override_keeps_missing_categories() {
        let table = KeywordTable::from_toml_str(
            r#"
            creative = ["Sketching", " painting "]
            "#,
        )
        .unwrap();
        assert_eq!(
            table.keywords(Category::Creative),
            &["sketching".to_string(), "painting".to_string()]
        );
        assert_eq!(
            table.keywords(Category::Analytical),
            KeywordTable::default().keywords(Category::Analytical)
        );
    }

    #[test]
    fn toml_rejects_unknown_fields_and_empty_sets() {
        assert!(matches!(
            KeywordTable::from_toml_str("design = [\"x\"]"),
            Err(ScorerError::KeywordTableParse(_))
        ));
        assert!(matches!(
            KeywordTable::from_toml_str("networking = []"),
            Err(ScorerError::EmptyKeywordSet(Category::Networking))
        ));
        assert!(matches!(
            KeywordTable::from_toml_str("analytical = [\"math\", \"  \"]"),
            Err(ScorerError::BlankKeyword(Category::Analytical))
        ));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = KeywordTable::from_path(&missing).unwrap_err();
        assert!(matches!(err, ScorerError::KeywordTableIo { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }
}
