//! Deck catalog: named lists of answer sources.

use crate::config::Config;
use crate::error::PuzzleError;
use crate::models::AnswerSource;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// A named, ordered list of answer sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub items: Vec<AnswerSource>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { decks: Vec<Deck> },
    Bare(Vec<Deck>),
}

/// Collection of decks addressable by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckCatalog {
    decks: Vec<Deck>,
}

fn item(text: &str, clue: &str, group_id: &str) -> AnswerSource {
    AnswerSource::new(text, clue, group_id)
}

impl DeckCatalog {
    pub fn new(decks: Vec<Deck>) -> Self {
        Self { decks }
    }

    /// Sample decks bundled with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            Deck {
                id: "kihon".to_string(),
                name: "Kihon techniques".to_string(),
                items: vec![
                    item("Seiken Oi Tsuki (Jodan, Chudan, Gedan)", "Lunge punch with the fore-fist", "oi-tsuki"),
                    item("Seiken Gyaku Tsuki (Jodan, Chudan, Gedan)", "Reverse punch with the fore-fist", "gyaku-tsuki"),
                    item("Zenkutsu Dachi Gedan Barai", "Downward block in front stance", "gedan-barai"),
                    item("Zenkutsu Dachi Jodan Uke", "Rising block in front stance", "jodan-uke"),
                    item("Zenkutsu Dachi Shuto Uchi", "Knife-hand strike in front stance", "shuto-uchi"),
                    item("Kokutsu Dachi", "Back stance", "kokutsu"),
                    item("Kiba Dachi (Horse stance)", "Straddle stance", "kiba"),
                    item("Mae Geri (Chusoku, Josokutei)", "Front kick", "mae-geri"),
                    item("Mawashi Geri", "Roundhouse kick", "mawashi-geri"),
                    item("Ushiro Geri", "Back kick", "ushiro-geri"),
                    item("Kake Dameshi", "Sparring with hooked hands", "kake-dameshi"),
                ],
            },
            Deck {
                id: "lifts".to_string(),
                name: "Gym lifts".to_string(),
                items: vec![
                    item("Squat", "Knee-dominant lower-body lift", "squat"),
                    item("Bench Press", "Horizontal push from a bench", "bench"),
                    item("Deadlift", "Hip hinge from the floor", "deadlift"),
                    item("Overhead Press", "Standing vertical push", "ohp"),
                    item("Barbell Row", "Horizontal pull", "row"),
                    item("Pull Up (Pronated grip)", "Bodyweight vertical pull", "pull-up"),
                    item("Romanian Deadlift", "Stiff-legged hinge", "rdl"),
                    item("Hip Thrust", "Glute bridge with a barbell", "hip-thrust"),
                ],
            },
        ])
    }

    /// Parse a catalog from JSON: either `{"decks": [...]}` or a bare array.
    pub fn from_json_str(json: &str) -> Result<Self, PuzzleError> {
        let decks = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Wrapped { decks } | CatalogFile::Bare(decks) => decks,
        };
        Ok(Self::new(decks))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Catalog from `config.decks_path`, falling back to the built-in decks.
    pub fn from_config(config: &Config) -> Self {
        let Some(path) = config.decks_path.as_deref() else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(catalog) if !catalog.decks.is_empty() => catalog,
            Ok(_) => {
                warn!(path, "deck file has no decks; using built-in decks");
                Self::builtin()
            }
            Err(err) => {
                warn!(path, error = %err, "failed to load deck file; using built-in decks");
                Self::builtin()
            }
        }
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn get(&self, id: &str) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    /// Answer sources for `id`.
    ///
    /// # Errors
    /// Returns [`PuzzleError::DeckNotFound`] for unknown ids.
    pub fn resolve(&self, id: &str) -> Result<&[AnswerSource], PuzzleError> {
        self.get(id)
            .map(|deck| deck.items.as_slice())
            .ok_or_else(|| PuzzleError::DeckNotFound(id.to_string()))
    }
}
