mod common;

use common::FakeDocument;
use pretty_assertions::assert_eq;
use portfolio::navigation::{NavigationState, Section};

const LOOKAHEAD: f64 = 100.0;

#[test]
fn scroll_inside_each_section_activates_it() {
    let doc = FakeDocument::stacked(1000.0);
    let mut state = NavigationState::default();

    for (i, section) in Section::ALL.into_iter().enumerate() {
        // probe lands mid-section
        doc.scroll_to(i as f64 * 1000.0 + 400.0);
        state.highlight(&doc, LOOKAHEAD);
        assert_eq!(state.active, section);
    }
}

#[test]
fn lookahead_switches_before_the_top_reaches_the_viewport() {
    let doc = FakeDocument::stacked(1000.0);
    let mut state = NavigationState::default();

    doc.scroll_to(899.0);
    assert!(!state.highlight(&doc, LOOKAHEAD));
    assert_eq!(state.active, Section::Home);

    doc.scroll_to(900.0);
    assert!(state.highlight(&doc, LOOKAHEAD));
    assert_eq!(state.active, Section::About);
}

#[test]
fn scroll_past_every_section_keeps_last_active() {
    let doc = FakeDocument::stacked(1000.0);
    let mut state = NavigationState::default();

    doc.scroll_to(4500.0);
    state.highlight(&doc, LOOKAHEAD);
    assert_eq!(state.active, Section::Contact);

    doc.scroll_to(20_000.0);
    assert!(!state.highlight(&doc, LOOKAHEAD));
    assert_eq!(state.active, Section::Contact);
}

#[test]
fn missing_sections_are_skipped_when_highlighting() {
    let doc = FakeDocument::stacked(1000.0).without(Section::Skills);
    let mut state = NavigationState {
        active: Section::About,
        menu_open: false,
    };

    doc.scroll_to(2400.0);
    assert!(!state.highlight(&doc, LOOKAHEAD));
    assert_eq!(state.active, Section::About);
}

#[test]
fn unreadable_scroll_offset_leaves_state_alone() {
    let doc = FakeDocument {
        broken: true,
        ..FakeDocument::stacked(1000.0)
    };
    let mut state = NavigationState::default();
    assert!(!state.highlight(&doc, LOOKAHEAD));
    assert_eq!(state, NavigationState::default());
}

#[test]
fn navigating_closes_the_menu_from_either_state() {
    let doc = FakeDocument::stacked(1000.0);

    for menu_open in [true, false] {
        let mut state = NavigationState {
            active: Section::Home,
            menu_open,
        };
        assert!(state.navigate(&doc, Section::Projects));
        assert!(!state.menu_open);
    }
    assert_eq!(*doc.scrolled_to.borrow(), vec![Section::Projects, Section::Projects]);
}

#[test]
fn navigating_to_a_missing_section_is_a_no_op() {
    let doc = FakeDocument::stacked(1000.0).without(Section::Contact);
    let mut state = NavigationState {
        active: Section::Skills,
        menu_open: true,
    };

    assert!(!state.navigate(&doc, Section::Contact));
    assert_eq!(state.active, Section::Skills);
    assert!(!state.menu_open);
    assert!(doc.scrolled_to.borrow().is_empty());
}

#[test]
fn navigating_does_not_set_the_active_section() {
    let doc = FakeDocument::stacked(1000.0);
    let mut state = NavigationState::default();

    state.navigate(&doc, Section::Contact);
    assert_eq!(state.active, Section::Home);

    // the smooth scroll's events are what move the highlight
    doc.scroll_to(4000.0);
    state.highlight(&doc, LOOKAHEAD);
    assert_eq!(state.active, Section::Contact);
}

#[test]
fn host_failure_during_navigation_still_closes_menu() {
    let doc = FakeDocument {
        broken: true,
        ..FakeDocument::stacked(1000.0)
    };
    let mut state = NavigationState {
        active: Section::About,
        menu_open: true,
    };

    assert!(!state.navigate(&doc, Section::Home));
    assert_eq!(
        state,
        NavigationState {
            active: Section::About,
            menu_open: false,
        }
    );
}
