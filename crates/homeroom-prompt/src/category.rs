use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{PromptError, PromptResult};

/// The fixed set of mentoring topics students pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SchoolLife,
    Environment,
    FutureTech,
    HomeSafety,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::SchoolLife,
        Category::Environment,
        Category::FutureTech,
        Category::HomeSafety,
    ];

    /// Label shown in the topic picker and embedded into the persona.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SchoolLife => "🏫 학교 생활 개선",
            Category::Environment => "🌍 환경 보호",
            Category::FutureTech => "🤖 미래 기술 활용",
            Category::HomeSafety => "🏠 안전한 우리 집",
        }
    }

    /// The next topic in picker order, wrapping around.
    pub fn next(&self) -> Category {
        match self {
            Category::SchoolLife => Category::Environment,
            Category::Environment => Category::FutureTech,
            Category::FutureTech => Category::HomeSafety,
            Category::HomeSafety => Category::SchoolLife,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::SchoolLife
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PromptError;

    fn from_str(s: &str) -> PromptResult<Self> {
        match s {
            "school_life" => Ok(Category::SchoolLife),
            "environment" => Ok(Category::Environment),
            "future_tech" => Ok(Category::FutureTech),
            "home_safety" => Ok(Category::HomeSafety),
            other => Err(PromptError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }

    #[test]
    fn next_cycles_through_every_topic() {
        let mut seen = vec![Category::default()];
        let mut current = Category::default();
        for _ in 0..3 {
            current = current.next();
            assert!(!seen.contains(&current));
            seen.push(current);
        }
        assert_eq!(current.next(), Category::default());
    }
}
