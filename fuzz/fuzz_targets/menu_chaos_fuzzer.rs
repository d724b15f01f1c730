//! Fuzz target for menu navigation under store failures
//!
//! Drives a menu with arbitrary player outcomes while the custom server store
//! fails at a fuzzer-chosen rate.
//!
//! # Invariants
//!
//! - The menu NEVER panics, whatever the player sends
//! - Store failures surface as `MenuError`, never as a half-rendered screen
//! - Each handled outcome yields at most one action
//! - After connect or disconnect the menu stays finished and silent

#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waypoint_core::{ChaoticStore, MemoryStore, PlayerId, ServerCategory, ServerEntry, StaticDirectory};
use waypoint_lang::MessageCatalog;
use waypoint_menu::{Features, FieldValue, Menu, MenuAction, Outcome};

#[derive(Debug, Clone, Arbitrary)]
struct Scenario {
    /// Seed for ChaoticStore RNG (deterministic failures)
    chaos_seed: u64,
    /// Failure rate 0-9 maps to 0%-90%
    failure_rate_tenth: u8,
    custom_servers: bool,
    outcomes: Vec<FuzzOutcome>,
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzOutcome {
    Selected(u8),
    Submitted { address: String, port: String, online: bool, bedrock: bool, leading_label: bool },
    Garbage(Vec<Option<bool>>),
    Closed,
    Invalid,
}

impl FuzzOutcome {
    fn into_outcome(self) -> Outcome {
        match self {
            Self::Selected(i) => Outcome::Selected(usize::from(i)),
            Self::Submitted { address, port, online, bedrock, leading_label } => {
                let mut values = Vec::new();
                if leading_label {
                    values.push(FieldValue::Empty);
                }
                values.extend([
                    FieldValue::Text(address),
                    FieldValue::Text(port),
                    FieldValue::Toggle(online),
                    FieldValue::Toggle(bedrock),
                ]);
                Outcome::Submitted(values)
            },
            Self::Garbage(values) => Outcome::Submitted(
                values.into_iter().map(|v| v.map_or(FieldValue::Empty, FieldValue::Toggle)).collect(),
            ),
            Self::Closed => Outcome::Closed,
            Self::Invalid => Outcome::Invalid,
        }
    }
}

fuzz_target!(|scenario: Scenario| {
    let rate = f64::from(scenario.failure_rate_tenth % 10) / 10.0;
    let store = ChaoticStore::with_seed(MemoryStore::new(), rate, scenario.chaos_seed);
    let directory = StaticDirectory::new(vec![
        ServerEntry::new("A", "a.example", 19132, ServerCategory::Official),
        ServerEntry::new("B", "b.example", 19132, ServerCategory::Geyser),
    ]);
    let mut menu = Menu::new(
        PlayerId::new("fuzz"),
        Arc::new(MessageCatalog::in_memory()),
        directory,
        store,
        Features::new(scenario.custom_servers),
    );

    if menu.start().is_err() {
        return;
    }

    for outcome in scenario.outcomes {
        let finished = menu.is_finished();
        match menu.handle(outcome.into_outcome()) {
            Ok(actions) => {
                assert!(actions.len() <= 1);
                if finished {
                    assert!(actions.is_empty());
                }
                if let Some(MenuAction::Connect(_) | MenuAction::Disconnect { .. }) = actions.first() {
                    assert!(menu.is_finished());
                }
            },
            // The runtime ends the session here
            Err(_) => return,
        }
    }
});
