//! Makerboard core
//!
//! Platform-agnostic logic for the Makerboard leaderboard site: the catalog
//! data model shared by the list viewer, and the roulette engine with its
//! sampling, progression, persistence and notification rules. No UI and no
//! browser dependencies live here.

pub mod catalog;
pub mod roulette;
pub mod save;
pub mod toast;

pub use catalog::{
    CatalogEntry, CatalogError, DELETED_ID, Editor, EditorRole, Level, LevelRecord, ListEntry,
    MAIN_POOL_LEN, RANKED_POOL_LEN, flatten_list,
};
pub use roulette::{
    Completion, MAX_RUN_LEVELS, PoolSelection, ProgressionRecord, RouletteError, RouletteSession,
    Stage, TARGET_CLEARS, sample_levels,
};
pub use save::{EXPORT_FILE_NAME, ImportError, STORAGE_KEY, SavedRun};
pub use toast::{TOAST_TTL_MS, ToastQueue};

use rand::Rng;

/// Message shown when Start is pressed while a run is underway.
pub const MSG_RUN_IN_PROGRESS: &str = "Give up before starting a new roulette.";
/// Message shown when any list entry failed to load.
pub const MSG_LIST_BROKEN: &str =
    "List is currently broken. Wait until it's fixed to start a roulette.";
const MSG_NO_LEVELS: &str = "No levels available to start.";
const MSG_NO_CURRENT_LEVEL: &str = "No current level to complete.";

/// Message shown when import is refused, whatever the reason.
pub const MSG_INVALID_FILE: &str = "Invalid file.";

fn auto_resolved_message(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Auto-completed {count} deleted level{plural}.")
}

/// Trait for the durable single-slot run store.
/// Platform-specific implementations should provide this.
pub trait RouletteStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the run, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the run cannot be written.
    fn save_run(&self, run: &SavedRun) -> Result<(), Self::Error>;

    /// Read the saved run. A missing or malformed value is `None`, never an
    /// error the caller has to distinguish.
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself cannot be reached.
    fn load_run(&self) -> Result<Option<SavedRun>, Self::Error>;

    /// Delete the saved run.
    ///
    /// # Errors
    ///
    /// Returns an error if the run cannot be deleted.
    fn delete_run(&self) -> Result<(), Self::Error>;
}

/// The roulette engine: one session, its durable store and the toast queue,
/// with every mutation funneled through the same post-mutation hook
/// (auto-resolve deleted levels, then persist).
#[derive(Clone)]
pub struct RouletteEngine<S: RouletteStorage> {
    storage: S,
    session: RouletteSession,
    toasts: ToastQueue,
}

impl<S: RouletteStorage> RouletteEngine<S> {
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            session: RouletteSession::start(Vec::new()),
            toasts: ToastQueue::new(),
        }
    }

    /// Restore the autosaved run, if any, and immediately resolve any
    /// taken-down levels sitting at its cursor.
    pub fn load_saved(&mut self) {
        let Ok(Some(run)) = self.storage.load_run() else {
            return;
        };
        self.session = run.into_session();
        let resolved = self.session.resolve_deleted();
        if resolved > 0 {
            self.toasts.push(auto_resolved_message(resolved));
            self.persist();
        }
    }

    #[must_use]
    pub const fn session(&self) -> &RouletteSession {
        &self.session
    }

    #[must_use]
    pub const fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Enqueue a free-text notification.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.toasts.push(message);
    }

    /// Drop the oldest notification; hosts call this when its timer fires.
    pub fn expire_toast(&mut self) {
        self.toasts.expire_oldest();
    }

    /// Start a fresh run over the fetched list. Nothing is touched until the
    /// pool selection and every list entry have been validated.
    ///
    /// # Errors
    ///
    /// Returns the same taxonomy the toasts describe: an active run, an
    /// empty pool selection, or a broken catalog.
    pub fn start_run(
        &mut self,
        list: &[ListEntry],
        pools: PoolSelection,
        rng: &mut impl Rng,
    ) -> Result<(), RouletteError> {
        if self.session.is_active() {
            self.toasts.push(MSG_RUN_IN_PROGRESS);
            return Err(RouletteError::RunInProgress);
        }
        if !pools.any() {
            // Nothing selected is a silent no-op.
            return Err(RouletteError::NothingSelected);
        }
        let catalog = match flatten_list(list) {
            Ok(catalog) => catalog,
            Err(err) => {
                self.toasts.push(MSG_LIST_BROKEN);
                return Err(err.into());
            }
        };
        let levels = sample_levels(&catalog, pools, rng)?;
        if levels.is_empty() {
            self.toasts.push(MSG_NO_LEVELS);
        }
        self.session = RouletteSession::start(levels);
        self.after_mutation();
        Ok(())
    }

    /// Record a clear of the current level.
    ///
    /// # Errors
    ///
    /// Returns [`RouletteError::RunNotActive`] when no run is underway.
    pub fn complete_current(&mut self) -> Result<(), RouletteError> {
        if let Err(err) = self.session.complete_current() {
            self.toasts.push(MSG_NO_CURRENT_LEVEL);
            return Err(err);
        }
        self.after_mutation();
        Ok(())
    }

    /// Abandon the run and delete the autosave; a given-up run is only
    /// recoverable from a previously exported file.
    ///
    /// # Errors
    ///
    /// Returns [`RouletteError::RunNotActive`] when no run is underway.
    pub fn give_up(&mut self) -> Result<(), RouletteError> {
        self.session.give_up()?;
        let _ = self.storage.delete_run();
        Ok(())
    }

    /// Replace the session wholesale from an exported file's text.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] for unparsable or incomplete files; the
    /// running session is left untouched.
    pub fn import(&mut self, text: &str) -> Result<(), ImportError> {
        match SavedRun::from_import(text) {
            Ok(run) => {
                self.session = run.into_session();
                self.after_mutation();
                Ok(())
            }
            Err(err) => {
                self.toasts.push(MSG_INVALID_FILE);
                Err(err)
            }
        }
    }

    /// Refuse an import before its content is even read (wrong file type).
    pub fn reject_import(&mut self) -> ImportError {
        self.toasts.push(MSG_INVALID_FILE);
        ImportError::NotJson
    }

    /// Serialized `{levels, progression}` of the current standing.
    #[must_use]
    pub fn export_json(&self) -> Option<String> {
        SavedRun::from_session(&self.session).to_json().ok()
    }

    /// Post-mutation hook: auto-resolve, then persist. Every mutator that can
    /// move the resolved count ends here, so resolution never depends on an
    /// external observer noticing the change.
    fn after_mutation(&mut self) {
        let resolved = self.session.resolve_deleted();
        if resolved > 0 {
            self.toasts.push(auto_resolved_message(resolved));
        }
        self.persist();
    }

    fn persist(&self) {
        // A storage write failure is the host's problem to surface.
        let _ = self.storage.save_run(&SavedRun::from_session(&self.session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        slot: Rc<RefCell<Option<SavedRun>>>,
    }

    impl RouletteStorage for MemoryStorage {
        type Error = Infallible;

        fn save_run(&self, run: &SavedRun) -> Result<(), Self::Error> {
            *self.slot.borrow_mut() = Some(run.clone());
            Ok(())
        }

        fn load_run(&self) -> Result<Option<SavedRun>, Self::Error> {
            Ok(self.slot.borrow().clone())
        }

        fn delete_run(&self) -> Result<(), Self::Error> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }

    fn fetched_list(len: usize) -> Vec<ListEntry> {
        (1..=len)
            .map(|i| {
                ListEntry::Loaded(Level {
                    id: format!("CRS-{i:03}"),
                    name: format!("Level {i}"),
                    author: "maker".to_string(),
                    creators: vec![],
                    verifier: "verifier".to_string(),
                    verification: format!("https://youtu.be/video{i}"),
                    showcase: None,
                    records: vec![],
                })
            })
            .collect()
    }

    #[test]
    fn start_samples_and_persists() {
        let storage = MemoryStorage::default();
        let mut engine = RouletteEngine::new(storage.clone());
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        engine
            .start_run(&fetched_list(150), PoolSelection::both(), &mut rng)
            .unwrap();
        assert_eq!(engine.session().levels().len(), MAX_RUN_LEVELS);
        assert!(engine.session().is_active());

        let saved = storage.load_run().unwrap().unwrap();
        assert_eq!(saved.levels, engine.session().levels());
        assert!(saved.progression.is_empty());
    }

    #[test]
    fn start_with_nothing_selected_is_silent() {
        let mut engine = RouletteEngine::new(MemoryStorage::default());
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let err = engine
            .start_run(&fetched_list(10), PoolSelection::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err, RouletteError::NothingSelected);
        assert!(engine.toasts().is_empty());
        assert_eq!(engine.session().stage(), Stage::Idle);
    }

    #[test]
    fn start_aborts_on_broken_catalog_without_touching_session() {
        let storage = MemoryStorage::default();
        let mut engine = RouletteEngine::new(storage.clone());
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        engine
            .start_run(&fetched_list(30), PoolSelection::both(), &mut rng)
            .unwrap();
        let levels_before = engine.session().levels().to_vec();

        // Finished runs may be restarted; a broken list still blocks it.
        for _ in 0..TARGET_CLEARS {
            engine.complete_current().unwrap();
        }
        let mut broken = fetched_list(30);
        broken[4] = ListEntry::Failed("missing-level".to_string());
        let err = engine
            .start_run(&broken, PoolSelection::both(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, RouletteError::CatalogUnavailable(_)));
        assert_eq!(engine.session().levels(), levels_before);
        assert!(
            engine
                .toasts()
                .iter()
                .any(|msg| msg.starts_with("List is currently broken"))
        );
    }

    #[test]
    fn start_while_active_is_refused() {
        let mut engine = RouletteEngine::new(MemoryStorage::default());
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        engine
            .start_run(&fetched_list(50), PoolSelection::both(), &mut rng)
            .unwrap();
        let err = engine
            .start_run(&fetched_list(50), PoolSelection::both(), &mut rng)
            .unwrap_err();
        assert_eq!(err, RouletteError::RunInProgress);
        assert_eq!(
            engine.toasts().iter().next(),
            Some("Give up before starting a new roulette.")
        );
    }

    #[test]
    fn give_up_deletes_the_autosave_and_reload_is_idle() {
        let storage = MemoryStorage::default();
        let mut engine = RouletteEngine::new(storage.clone());
        let mut rng = ChaCha20Rng::seed_from_u64(15);
        engine
            .start_run(&fetched_list(50), PoolSelection::both(), &mut rng)
            .unwrap();
        for _ in 0..5 {
            engine.complete_current().unwrap();
        }
        engine.give_up().unwrap();

        assert_eq!(engine.session().stage(), Stage::GivenUp);
        assert_eq!(engine.session().remaining().len(), 45);
        assert!(storage.load_run().unwrap().is_none());

        let mut reloaded = RouletteEngine::new(storage);
        reloaded.load_saved();
        assert_eq!(reloaded.session().stage(), Stage::Idle);
    }

    #[test]
    fn load_saved_resolves_deleted_head_and_notifies_once() {
        let storage = MemoryStorage::default();
        storage
            .save_run(&SavedRun {
                levels: vec![
                    fixtures::deleted(1),
                    fixtures::deleted(2),
                    fixtures::entry(3, "abc", "Survivor"),
                ],
                progression: vec![],
            })
            .unwrap();

        let mut engine = RouletteEngine::new(storage.clone());
        engine.load_saved();

        assert_eq!(engine.session().resolved_count(), 2);
        assert_eq!(engine.session().current().unwrap().rank, 3);
        let toasts: Vec<&str> = engine.toasts().iter().collect();
        assert_eq!(toasts, vec!["Auto-completed 2 deleted levels."]);
        // The resolved records were persisted back.
        assert_eq!(storage.load_run().unwrap().unwrap().progression.len(), 2);
    }

    #[test]
    fn singular_auto_resolve_message() {
        let storage = MemoryStorage::default();
        storage
            .save_run(&SavedRun {
                levels: vec![fixtures::deleted(1), fixtures::entry(2, "abc", "Real")],
                progression: vec![],
            })
            .unwrap();
        let mut engine = RouletteEngine::new(storage);
        engine.load_saved();
        assert_eq!(
            engine.toasts().iter().next(),
            Some("Auto-completed 1 deleted level.")
        );
    }

    #[test]
    fn load_saved_treats_missing_as_idle() {
        let mut engine = RouletteEngine::new(MemoryStorage::default());
        engine.load_saved();
        assert_eq!(engine.session().stage(), Stage::Idle);
        assert!(engine.toasts().is_empty());
    }

    #[test]
    fn import_replaces_session_and_persists() {
        let storage = MemoryStorage::default();
        let mut engine = RouletteEngine::new(storage.clone());
        let text = SavedRun {
            levels: fixtures::catalog(6),
            progression: vec![],
        }
        .to_json()
        .unwrap();

        engine.import(&text).unwrap();
        assert_eq!(engine.session().levels().len(), 6);
        assert!(engine.session().is_active());
        assert!(storage.load_run().unwrap().is_some());
    }

    #[test]
    fn import_missing_progression_is_rejected_and_session_unchanged() {
        let mut engine = RouletteEngine::new(MemoryStorage::default());
        let mut rng = ChaCha20Rng::seed_from_u64(16);
        engine
            .start_run(&fetched_list(20), PoolSelection::both(), &mut rng)
            .unwrap();
        let before = engine.session().clone();

        let err = engine.import(r#"{"levels": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
        assert_eq!(engine.session(), &before);
        assert_eq!(engine.toasts().iter().next(), Some("Invalid file."));
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut engine = RouletteEngine::new(MemoryStorage::default());
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        engine
            .start_run(&fetched_list(40), PoolSelection::both(), &mut rng)
            .unwrap();
        for _ in 0..3 {
            engine.complete_current().unwrap();
        }
        let exported = engine.export_json().unwrap();
        let before = engine.session().clone();

        let mut other = RouletteEngine::new(MemoryStorage::default());
        other.import(&exported).unwrap();
        assert_eq!(other.session().levels(), before.levels());
        assert_eq!(other.session().progression(), before.progression());
    }

    #[test]
    fn complete_without_a_run_notifies() {
        let mut engine = RouletteEngine::new(MemoryStorage::default());
        let err = engine.complete_current().unwrap_err();
        assert_eq!(err, RouletteError::RunNotActive);
        assert_eq!(
            engine.toasts().iter().next(),
            Some("No current level to complete.")
        );
    }
}
