use crate::api::models::{SortDir, SortField};
use crate::controller::state::PageState;

#[test]
fn fresh_state_defaults() {
    let state = PageState::new();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.sort_field, SortField::Date);
    assert_eq!(state.sort_dir, SortDir::Desc);
    assert!(!state.loading);
}

#[test]
fn begin_load_gates_reentry() {
    let mut state = PageState::new();

    assert!(state.begin_load());
    // Second trigger while in flight is refused; caller drops it.
    assert!(!state.begin_load());

    state.finish_load(1, 3);
    assert!(state.begin_load());
}

#[test]
fn clicks_are_rejected_while_loading() {
    let mut state = PageState::new();
    state.finish_load(1, 5);

    assert!(state.can_click(2));
    state.begin_load();
    assert!(!state.can_click(2));
}

#[test]
fn clicks_outside_range_or_on_current_page_are_rejected() {
    let mut state = PageState::new();
    state.finish_load(2, 5);

    assert!(!state.can_click(0));
    assert!(!state.can_click(6));
    assert!(!state.can_click(2), "clicking the shown page is a no-op");
    assert!(state.can_click(5));
}

#[test]
fn finish_load_clamps_current_page() {
    let mut state = PageState::new();

    state.begin_load();
    // Backend shrank the listing under us: requested page 8 of now-3.
    state.finish_load(8, 3);
    assert_eq!(state.current_page, 3);
    assert_eq!(state.total_pages, 3);
    assert!(!state.loading);

    state.begin_load();
    // A zero total_page from the wire still leaves at least one page.
    state.finish_load(1, 0);
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.current_page, 1);
}

#[test]
fn fail_load_only_clears_the_flag() {
    let mut state = PageState::new();
    state.finish_load(3, 7);

    state.begin_load();
    state.fail_load();

    assert!(!state.loading);
    assert_eq!(state.current_page, 3);
    assert_eq!(state.total_pages, 7);
}

#[test]
fn sort_change_resets_to_page_one() {
    let mut state = PageState::new();
    state.finish_load(4, 9);

    state.apply_sort(SortField::Price, SortDir::Asc);

    assert_eq!(state.sort_field, SortField::Price);
    assert_eq!(state.sort_dir, SortDir::Asc);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 9);
}
