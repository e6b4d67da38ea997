//! Reducer around the roulette engine. Every user gesture becomes an action
//! so late-firing timers always apply to the state of the moment, not to a
//! snapshot captured when the timer was armed.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::rc::Rc;
use yew::prelude::*;

use crate::storage::LocalRouletteStorage;
use makerboard_core::{ListEntry, PoolSelection, RouletteEngine};

pub type Engine = RouletteEngine<LocalRouletteStorage>;

pub enum RouletteAction {
    /// Fetched list arrived; sample and begin a run.
    Start {
        list: Vec<ListEntry>,
        pools: PoolSelection,
        seed: u64,
    },
    Complete,
    GiveUp,
    Import(String),
    /// Import refused before reading the file (wrong type, unreadable).
    RejectImport,
    Notify(String),
    ExpireToast,
    RevealRemaining,
}

#[derive(Clone)]
pub struct RouletteState {
    pub engine: Engine,
    /// Whether the not-yet-cleared tail is shown after the run ended.
    pub show_remaining: bool,
}

impl RouletteState {
    /// Fresh page state: restore the autosave and resolve its head.
    #[must_use]
    pub fn restored() -> Self {
        let mut engine = Engine::new(LocalRouletteStorage::new());
        engine.load_saved();
        Self {
            engine,
            show_remaining: false,
        }
    }
}

impl Reducible for RouletteState {
    type Action = RouletteAction;

    fn reduce(self: Rc<Self>, action: RouletteAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RouletteAction::Start { list, pools, seed } => {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                if next.engine.start_run(&list, pools, &mut rng).is_ok() {
                    next.show_remaining = false;
                }
            }
            RouletteAction::Complete => {
                let _ = next.engine.complete_current();
            }
            RouletteAction::GiveUp => {
                let _ = next.engine.give_up();
            }
            RouletteAction::Import(text) => {
                if next.engine.import(&text).is_ok() {
                    next.show_remaining = false;
                }
            }
            RouletteAction::RejectImport => {
                let _ = next.engine.reject_import();
            }
            RouletteAction::Notify(message) => next.engine.notify(message),
            RouletteAction::ExpireToast => next.engine.expire_toast(),
            RouletteAction::RevealRemaining => next.show_remaining = true,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use makerboard_core::{Level, MSG_INVALID_FILE, Stage, TARGET_CLEARS};

    fn ranked_list(len: usize) -> Vec<ListEntry> {
        (1..=len)
            .map(|i| {
                ListEntry::Loaded(Level {
                    id: format!("CRS-{i:03}"),
                    name: format!("Level {i}"),
                    author: "maker".to_string(),
                    creators: vec![],
                    verifier: "verifier".to_string(),
                    verification: format!("https://youtu.be/clip{i}"),
                    showcase: None,
                    records: vec![],
                })
            })
            .collect()
    }

    fn dispatch(state: Rc<RouletteState>, action: RouletteAction) -> Rc<RouletteState> {
        state.reduce(action)
    }

    #[test]
    fn start_action_begins_a_run_and_clears_the_reveal_flag() {
        let mut state = Rc::new(RouletteState {
            show_remaining: true,
            ..RouletteState::restored()
        });
        state = dispatch(
            state,
            RouletteAction::Start {
                list: ranked_list(40),
                pools: PoolSelection::both(),
                seed: 99,
            },
        );
        assert!(state.engine.session().is_active());
        assert!(!state.show_remaining);
        assert_eq!(state.engine.session().levels().len(), 40);
    }

    #[test]
    fn complete_give_up_and_reveal_flow() {
        let mut state = dispatch(
            Rc::new(RouletteState::restored()),
            RouletteAction::Start {
                list: ranked_list(40),
                pools: PoolSelection::both(),
                seed: 7,
            },
        );
        for _ in 0..3 {
            state = dispatch(state, RouletteAction::Complete);
        }
        assert_eq!(state.engine.session().resolved_count(), 3);

        state = dispatch(state, RouletteAction::GiveUp);
        assert_eq!(state.engine.session().stage(), Stage::GivenUp);
        assert!(state.engine.session().resolved_count() < TARGET_CLEARS);
        assert!(!state.show_remaining);

        state = dispatch(state, RouletteAction::RevealRemaining);
        assert!(state.show_remaining);
    }

    #[test]
    fn rejected_import_only_adds_a_toast() {
        let started = dispatch(
            Rc::new(RouletteState::restored()),
            RouletteAction::Start {
                list: ranked_list(10),
                pools: PoolSelection::both(),
                seed: 3,
            },
        );
        let before = started.engine.session().clone();

        let state = dispatch(started, RouletteAction::RejectImport);
        assert_eq!(state.engine.session(), &before);
        assert_eq!(state.engine.toasts().iter().next(), Some(MSG_INVALID_FILE));

        let state = dispatch(state, RouletteAction::ExpireToast);
        assert!(state.engine.toasts().is_empty());
    }

    #[test]
    fn import_action_replaces_the_run() {
        let started = dispatch(
            Rc::new(RouletteState::restored()),
            RouletteAction::Start {
                list: ranked_list(30),
                pools: PoolSelection::both(),
                seed: 5,
            },
        );
        let exported = started.engine.export_json().unwrap();

        let mut other = Rc::new(RouletteState {
            show_remaining: true,
            ..RouletteState::restored()
        });
        other = dispatch(other, RouletteAction::Import(exported));
        assert_eq!(
            other.engine.session().levels(),
            started.engine.session().levels()
        );
        assert!(!other.show_remaining);
    }
}
