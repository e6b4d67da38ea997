use serde::{Deserialize, Serialize};
use std::fmt;

/// Id reported by the list data for a level that has been taken down.
pub const DELETED_ID: &str = "Deleted";

/// Number of ranks in the main pool.
pub const MAIN_POOL_LEN: usize = 75;
/// Number of ranks that accept records (main + extended pools).
pub const RANKED_POOL_LEN: usize = 150;

/// A single clear submitted for a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub user: String,
    pub link: String,
    pub time: String,
    pub hz: u32,
    #[serde(default)]
    pub mobile: bool,
}

/// Full per-level metadata as published by the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub creators: Vec<String>,
    pub verifier: String,
    /// Verification video URL.
    pub verification: String,
    #[serde(default)]
    pub showcase: Option<String>,
    #[serde(default)]
    pub records: Vec<LevelRecord>,
}

impl Level {
    /// Parse a level file.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid level.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorRole {
    Owner,
    Admin,
    Helper,
    Dev,
    Trial,
}

impl EditorRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Helper => "helper",
            Self::Dev => "dev",
            Self::Trial => "trial",
        }
    }
}

impl fmt::Display for EditorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of the list staff roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub name: String,
    pub role: EditorRole,
    #[serde(default)]
    pub link: Option<String>,
}

/// One position of the fetched ranked list: either the level data or the
/// file stem of a record that failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Loaded(Level),
    Failed(String),
}

impl ListEntry {
    #[must_use]
    pub const fn level(&self) -> Option<&Level> {
        match self {
            Self::Loaded(level) => Some(level),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn error_tag(&self) -> Option<&String> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(tag) => Some(tag),
        }
    }
}

/// A flattened catalog row: the slice of level data the roulette needs,
/// snapshotted together with its rank at flattening time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub rank: u32,
    pub id: String,
    pub name: String,
    pub video: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.id == DELETED_ID
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to load level data ({0}.json)")]
    EntryUnavailable(String),
}

/// Flatten the fetched list into catalog rows, assigning ranks by position.
/// Any entry that failed to load makes the whole catalog unusable for a
/// roulette run.
///
/// # Errors
///
/// Returns [`CatalogError::EntryUnavailable`] with the failing entry's tag.
pub fn flatten_list(entries: &[ListEntry]) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut catalog = Vec::with_capacity(entries.len());
    for (rank, entry) in (1u32..).zip(entries.iter()) {
        match entry {
            ListEntry::Loaded(level) => catalog.push(CatalogEntry {
                rank,
                id: level.id.clone(),
                name: level.name.clone(),
                video: level.verification.clone(),
            }),
            ListEntry::Failed(tag) => return Err(CatalogError::EntryUnavailable(tag.clone())),
        }
    }
    Ok(catalog)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{CatalogEntry, DELETED_ID};

    pub fn entry(rank: u32, id: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            rank,
            id: id.to_string(),
            name: name.to_string(),
            video: format!("https://www.youtube.com/watch?v=video{rank}"),
        }
    }

    pub fn deleted(rank: u32) -> CatalogEntry {
        entry(rank, DELETED_ID, "Deleted")
    }

    pub fn catalog(len: usize) -> Vec<CatalogEntry> {
        (1..=len)
            .map(|rank| {
                let rank = u32::try_from(rank).expect("fixture rank fits in u32");
                entry(rank, &format!("CRS-{rank:03}"), &format!("Level {rank}"))
            })
            .collect()
    }
}
