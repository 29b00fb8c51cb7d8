use super::*;
use crate::net::types::GardenType;

fn garden(id: &str, name: &str) -> Garden {
    Garden {
        id: id.to_owned(),
        name: name.to_owned(),
        garden_type: GardenType::Outdoor,
        is_hydroponic: false,
        location: None,
        light_source: None,
        hydro_system_type: None,
        description: None,
    }
}

#[test]
fn default_state_is_empty_and_idle() {
    let state = GardensState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.pending_delete, None);
}

#[test]
fn set_items_clears_loading_and_error() {
    let mut state = GardensState {
        loading: true,
        error: Some("garden list failed: 500".to_owned()),
        ..GardensState::default()
    };
    state.set_items(vec![garden("g-1", "Back porch")]);
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn set_error_keeps_previous_items() {
    let mut state = GardensState::default();
    state.set_items(vec![garden("g-1", "Back porch")]);
    state.loading = true;
    state.set_error("garden list failed: 502".to_owned());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("garden list failed: 502"));
}

#[test]
fn remove_drops_only_the_matching_garden() {
    let mut state = GardensState::default();
    state.set_items(vec![garden("g-1", "Back porch"), garden("g-2", "Window herbs")]);
    state.pending_delete = Some("g-1".to_owned());
    state.remove("g-1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "g-2");
    assert_eq!(state.pending_delete, None);
}

#[test]
fn remove_with_unknown_id_is_a_noop_on_items() {
    let mut state = GardensState::default();
    state.set_items(vec![garden("g-1", "Back porch")]);
    state.remove("g-404");
    assert_eq!(state.items.len(), 1);
}
