// Host-side tests for DOM-facing names.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn data_attribute_lives_in_namespace() {
    assert!(DATA_ID_ATTR.starts_with("data-"));
    assert!(DATA_ID_ATTR.contains(DATA_NAMESPACE));
}

#[test]
fn pointer_events_are_distinct() {
    for (i, a) in POINTER_EVENTS.iter().enumerate() {
        for b in &POINTER_EVENTS[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(POINTER_EVENTS.contains(&EVENT_MOVE));
}
