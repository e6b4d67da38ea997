use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, MAIN_POOL_LEN, RANKED_POOL_LEN};

/// Number of cleared levels that counts as a won run.
pub const TARGET_CLEARS: usize = 25;
/// Upper bound on the size of a sampled run.
pub const MAX_RUN_LEVELS: usize = 100;

/// Which rank pools feed the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolSelection {
    pub main: bool,
    pub extended: bool,
}

impl PoolSelection {
    #[must_use]
    pub const fn both() -> Self {
        Self {
            main: true,
            extended: true,
        }
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.main || self.extended
    }
}

/// Snapshot of a cleared level. Copied out of the catalog entry so a saved
/// or exported run stays meaningful even after the list changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    pub rank: u32,
    pub id: String,
    pub name: String,
}

impl ProgressionRecord {
    #[must_use]
    pub fn snapshot(entry: &CatalogEntry) -> Self {
        Self {
            rank: entry.rank,
            id: entry.id.clone(),
            name: entry.name.clone(),
        }
    }
}

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    TargetReached,
    ListExhausted,
}

/// Derived position of the run state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Active,
    GivenUp,
    Completed(Completion),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouletteError {
    #[error("no pool selected")]
    NothingSelected,
    #[error("{0}")]
    CatalogUnavailable(#[from] crate::catalog::CatalogError),
    #[error("a run is already in progress")]
    RunInProgress,
    #[error("no run is active")]
    RunNotActive,
}

/// One roulette run: the sampled level order plus the log of cleared levels.
///
/// `levels` is fixed for the lifetime of the run and `progression` only ever
/// grows; everything else (current level, completion, active flag) is
/// recomputed from those two on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouletteSession {
    levels: Vec<CatalogEntry>,
    progression: Vec<ProgressionRecord>,
    given_up: bool,
}

impl RouletteSession {
    /// Begin a fresh run over an already-sampled level order.
    #[must_use]
    pub const fn start(levels: Vec<CatalogEntry>) -> Self {
        Self {
            levels,
            progression: Vec::new(),
            given_up: false,
        }
    }

    /// Rebuild a run from persisted parts.
    #[must_use]
    pub const fn from_parts(
        levels: Vec<CatalogEntry>,
        progression: Vec<ProgressionRecord>,
    ) -> Self {
        Self {
            levels,
            progression,
            given_up: false,
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[CatalogEntry] {
        &self.levels
    }

    #[must_use]
    pub fn progression(&self) -> &[ProgressionRecord] {
        &self.progression
    }

    #[must_use]
    pub const fn given_up(&self) -> bool {
        self.given_up
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.progression.len()
    }

    /// The first unresolved level, if the list has one.
    #[must_use]
    pub fn current(&self) -> Option<&CatalogEntry> {
        self.levels.get(self.progression.len())
    }

    /// Levels not yet resolved, current one included.
    #[must_use]
    pub fn remaining(&self) -> &[CatalogEntry] {
        self.levels.get(self.progression.len()..).unwrap_or(&[])
    }

    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        if self.levels.is_empty() {
            None
        } else if self.progression.len() >= TARGET_CLEARS {
            Some(Completion::TargetReached)
        } else if self.progression.len() == self.levels.len() {
            Some(Completion::ListExhausted)
        } else {
            None
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        if self.levels.is_empty() {
            Stage::Idle
        } else if self.given_up {
            Stage::GivenUp
        } else if let Some(done) = self.completion() {
            Stage::Completed(done)
        } else {
            Stage::Active
        }
    }

    /// Whether a run is underway: levels loaded, not given up, not finished.
    /// Gates the overwrite confirmation for Start and Import.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.levels.is_empty() && !self.given_up && self.completion().is_none()
    }

    #[must_use]
    pub fn completion_message(&self) -> Option<String> {
        match self.completion()? {
            Completion::TargetReached => Some(format!(
                "Target reached — you completed {} levels!",
                self.progression.len()
            )),
            Completion::ListExhausted => Some(format!(
                "List finished — you completed all {} levels!",
                self.levels.len()
            )),
        }
    }

    /// Record a clear of the current level.
    ///
    /// # Errors
    ///
    /// Returns [`RouletteError::RunNotActive`] when no run is underway.
    pub fn complete_current(&mut self) -> Result<&ProgressionRecord, RouletteError> {
        if !self.is_active() {
            return Err(RouletteError::RunNotActive);
        }
        let record = self
            .current()
            .map(ProgressionRecord::snapshot)
            .ok_or(RouletteError::RunNotActive)?;
        self.progression.push(record);
        Ok(self.progression.last().expect("record was just pushed"))
    }

    /// Abandon the run. Terminal: no progression mutation can follow.
    ///
    /// # Errors
    ///
    /// Returns [`RouletteError::RunNotActive`] when no run is underway.
    pub fn give_up(&mut self) -> Result<(), RouletteError> {
        if !self.is_active() {
            return Err(RouletteError::RunNotActive);
        }
        self.given_up = true;
        Ok(())
    }

    /// Resolve consecutive taken-down levels at the head of the unresolved
    /// tail. Each one is recorded like a clear. Stops as soon as the current
    /// level is a real one or the run leaves the active stage; calling it
    /// again with nothing to do is a no-op.
    pub fn resolve_deleted(&mut self) -> usize {
        let mut resolved = 0;
        while self.is_active() {
            let Some(current) = self.current() else {
                break;
            };
            if !current.is_deleted() {
                break;
            }
            let record = ProgressionRecord::snapshot(current);
            self.progression.push(record);
            resolved += 1;
        }
        resolved
    }
}

/// Sample the working set for a new run: union of the selected rank pools in
/// catalog order, uniformly shuffled, capped at [`MAX_RUN_LEVELS`].
///
/// # Errors
///
/// Returns [`RouletteError::NothingSelected`] when no pool is selected.
pub fn sample_levels(
    catalog: &[CatalogEntry],
    pools: PoolSelection,
    rng: &mut impl Rng,
) -> Result<Vec<CatalogEntry>, RouletteError> {
    if !pools.any() {
        return Err(RouletteError::NothingSelected);
    }
    let mut picks: Vec<CatalogEntry> = Vec::new();
    if pools.main {
        picks.extend_from_slice(&catalog[..catalog.len().min(MAIN_POOL_LEN)]);
    }
    if pools.extended && catalog.len() > MAIN_POOL_LEN {
        let upper = catalog.len().min(RANKED_POOL_LEN);
        picks.extend_from_slice(&catalog[MAIN_POOL_LEN..upper]);
    }
    picks.shuffle(rng);
    picks.truncate(MAX_RUN_LEVELS);
    Ok(picks)
}
