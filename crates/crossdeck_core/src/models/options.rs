//! Difficulty levels and decoration layouts.

use crate::constants::DEFAULT_DECORATION_BLOCK;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level controlling how many letters are pre-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Percentage of each word's letters revealed before play.
    pub fn reveal_percent(self) -> u8 {
        match self {
            Self::Easy => 40,
            Self::Medium => 25,
            Self::Hard => 10,
            Self::Expert => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    /// Case-insensitive parse of a difficulty name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" | "normal" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a decorative placeholder block is reserved in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum DecorationLayout {
    #[default]
    None,
    /// Block centered in the scratch grid before any word is placed.
    Centered { rows: usize, cols: usize },
    /// Block appended to the top-right after trimming.
    TopRight { rows: usize, cols: usize },
}

impl DecorationLayout {
    /// Case-insensitive parse; sized layouts use the default block size.
    pub fn parse(value: &str) -> Option<Self> {
        let size = DEFAULT_DECORATION_BLOCK;
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Some(Self::None),
            "center" | "centered" => Some(Self::Centered {
                rows: size,
                cols: size,
            }),
            "top-right" | "topright" | "top_right" => Some(Self::TopRight {
                rows: size,
                cols: size,
            }),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Centered { .. } => "Centered",
            Self::TopRight { .. } => "Top right",
        }
    }
}
