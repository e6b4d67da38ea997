use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::roulette::{ProgressionRecord, RouletteSession};

/// Durable storage key for the autosaved run.
pub const STORAGE_KEY: &str = "makerboard.roulette";

/// Suggested file name for exported runs.
pub const EXPORT_FILE_NAME: &str = "makerboard_roulette.json";

/// The one wire shape shared by autosave, export and import. The given-up
/// flag is deliberately not part of it: a saved or exported run always
/// represents current standing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRun {
    #[serde(default)]
    pub levels: Vec<CatalogEntry>,
    #[serde(default)]
    pub progression: Vec<ProgressionRecord>,
}

/// Import mirror of [`SavedRun`] with no field defaults, so a file missing
/// either key is rejected outright. Empty sequences are still fine.
#[derive(Deserialize)]
struct ImportedRun {
    levels: Vec<CatalogEntry>,
    progression: Vec<ProgressionRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("not a JSON file")]
    NotJson,
    #[error("malformed roulette file: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SavedRun {
    #[must_use]
    pub fn from_session(session: &RouletteSession) -> Self {
        Self {
            levels: session.levels().to_vec(),
            progression: session.progression().to_vec(),
        }
    }

    #[must_use]
    pub fn into_session(self) -> RouletteSession {
        RouletteSession::from_parts(self.levels, self.progression)
    }

    /// Serialize for autosave or export.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Lenient parse for the autosave payload: a malformed value reads as
    /// "no saved run", and either field may be absent.
    #[must_use]
    pub fn from_autosave(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Strict parse for imported files: both fields must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Malformed`] for unparsable JSON or a missing
    /// `levels`/`progression` field.
    pub fn from_import(text: &str) -> Result<Self, ImportError> {
        let imported: ImportedRun = serde_json::from_str(text)?;
        Ok(Self {
            levels: imported.levels,
            progression: imported.progression,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn run_with_progress() -> RouletteSession {
        let mut session = RouletteSession::start(fixtures::catalog(8));
        session.complete_current().unwrap();
        session.complete_current().unwrap();
        session
    }

    #[test]
    fn export_import_round_trips_levels_and_progression() {
        let session = run_with_progress();
        let text = SavedRun::from_session(&session).to_json().unwrap();
        let restored = SavedRun::from_import(&text).unwrap().into_session();
        assert_eq!(restored.levels(), session.levels());
        assert_eq!(restored.progression(), session.progression());
    }

    #[test]
    fn import_requires_both_fields() {
        let missing_progression = r#"{"levels": []}"#;
        assert!(SavedRun::from_import(missing_progression).is_err());

        let missing_levels = r#"{"progression": []}"#;
        assert!(SavedRun::from_import(missing_levels).is_err());

        let both_empty = r#"{"levels": [], "progression": []}"#;
        let run = SavedRun::from_import(both_empty).unwrap();
        assert!(run.levels.is_empty());
        assert!(run.progression.is_empty());
    }

    #[test]
    fn import_rejects_null_levels() {
        assert!(SavedRun::from_import(r#"{"levels": null, "progression": []}"#).is_err());
        assert!(SavedRun::from_import("not json at all").is_err());
    }

    #[test]
    fn autosave_parse_is_lenient() {
        assert_eq!(
            SavedRun::from_autosave(r#"{"levels": []}"#),
            Some(SavedRun::default())
        );
        assert_eq!(SavedRun::from_autosave("{}"), Some(SavedRun::default()));
        assert!(SavedRun::from_autosave("garbage").is_none());
    }

    #[test]
    fn given_up_is_not_round_tripped() {
        let mut session = run_with_progress();
        session.give_up().unwrap();
        let text = SavedRun::from_session(&session).to_json().unwrap();
        let restored = SavedRun::from_import(&text).unwrap().into_session();
        assert!(!restored.given_up());
    }

    #[test]
    fn wire_format_uses_original_field_names() {
        let session = run_with_progress();
        let text = SavedRun::from_session(&session).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let level = &value["levels"][0];
        for key in ["rank", "id", "name", "video"] {
            assert!(level.get(key).is_some(), "levels[0] missing {key}");
        }
        let record = &value["progression"][0];
        for key in ["rank", "id", "name"] {
            assert!(record.get(key).is_some(), "progression[0] missing {key}");
        }
        assert!(record.get("video").is_none());
    }
}
