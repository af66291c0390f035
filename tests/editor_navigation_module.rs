use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use platemate::editor::navigation::{
    editor_action_from_key, editor_screen_item_count, editor_transition, parse_scripted_edit_keys,
    EditorAction, EditorItemCounts, EditorNavEffect, EditorScreen, NavState,
};

const COUNTS: EditorItemCounts = EditorItemCounts {
    root: 5,
    fields: 3,
    cuisines: 8,
};

fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn editor_navigation_module_maps_escape_by_screen() {
    assert_eq!(
        editor_action_from_key(EditorScreen::Root, key_event(KeyCode::Esc)),
        Some(EditorAction::Cancel)
    );
    assert_eq!(
        editor_action_from_key(EditorScreen::Fields, key_event(KeyCode::Esc)),
        Some(EditorAction::Back)
    );
    assert_eq!(
        editor_action_from_key(EditorScreen::Cuisines, key_event(KeyCode::Esc)),
        Some(EditorAction::Back)
    );
}

#[test]
fn editor_navigation_module_maps_ctrl_c_to_cancel_everywhere() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(
        editor_action_from_key(EditorScreen::Image, ctrl_c),
        Some(EditorAction::Cancel)
    );
}

#[test]
fn editor_navigation_module_routes_root_enter_to_cuisines() {
    let mut nav = NavState::root();
    nav.selected = 1;

    let transition =
        editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("root enter transition");

    assert_eq!(
        transition.effect,
        EditorNavEffect::OpenScreen(EditorScreen::Cuisines)
    );
    assert_eq!(nav.screen, EditorScreen::Cuisines);
    assert_eq!(editor_screen_item_count(nav.screen, COUNTS), 8);
}

#[test]
fn editor_navigation_module_routes_root_save_slot_to_submit() {
    let mut nav = NavState::root();
    nav.selected = 3;
    let transition =
        editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("root enter transition");
    assert_eq!(transition.effect, EditorNavEffect::SubmitProfile);

    let mut nav = NavState::root();
    nav.selected = 4;
    let transition =
        editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("root enter transition");
    assert_eq!(transition.effect, EditorNavEffect::CancelEdit);
}

#[test]
fn editor_navigation_module_accepts_save_shortcut_on_root_only() {
    let mut nav = NavState::root();
    let transition =
        editor_transition(&mut nav, EditorAction::Save, COUNTS).expect("root save transition");
    assert_eq!(transition.effect, EditorNavEffect::SubmitProfile);

    let mut nav = NavState::root();
    nav.selected = 0;
    editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("open fields");
    let err = editor_transition(&mut nav, EditorAction::Save, COUNTS).expect_err("save in fields");
    assert!(err.to_string().contains("screen=fields"));
}

#[test]
fn editor_navigation_module_enter_edits_and_toggles_by_screen() {
    let mut nav = NavState::root();
    editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("open fields");
    let transition =
        editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("fields enter");
    assert_eq!(transition.effect, EditorNavEffect::EditSelectedField);

    let mut nav = NavState::root();
    nav.selected = 1;
    editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("open cuisines");
    nav.selected = 4;
    let transition =
        editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("cuisines enter");
    assert_eq!(transition.effect, EditorNavEffect::ToggleSelectedCuisine);

    let mut nav = NavState::root();
    nav.selected = 2;
    editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("open image");
    let transition = editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("image enter");
    assert_eq!(transition.effect, EditorNavEffect::PickImage);
}

#[test]
fn editor_navigation_module_back_returns_to_root() {
    let mut nav = NavState::root();
    nav.selected = 1;
    editor_transition(&mut nav, EditorAction::Enter, COUNTS).expect("open cuisines");
    let transition = editor_transition(&mut nav, EditorAction::Back, COUNTS).expect("back");
    assert_eq!(transition.effect, EditorNavEffect::None);
    assert_eq!(transition.feedback.as_deref(), Some("Closed Cuisines."));
    assert_eq!(nav.screen, EditorScreen::Root);
    assert_eq!(nav.selected, 0);
}

#[test]
fn editor_navigation_module_clamps_moves_at_list_bounds() {
    let mut nav = NavState::root();
    editor_transition(&mut nav, EditorAction::MovePrev, COUNTS).expect("move prev");
    assert_eq!(nav.selected, 0);
    for _ in 0..10 {
        editor_transition(&mut nav, EditorAction::MoveNext, COUNTS).expect("move next");
    }
    assert_eq!(nav.selected, COUNTS.root - 1);
}

#[test]
fn editor_navigation_module_reconciles_stale_selection() {
    let mut nav = NavState::root();
    nav.selected = 9;
    let transition = editor_transition(&mut nav, EditorAction::ReconcileSelection(5), COUNTS)
        .expect("reconcile");
    assert_eq!(nav.selected, 4);
    assert_eq!(transition.feedback.as_deref(), Some("selection adjusted"));
}

#[test]
fn editor_navigation_module_parses_scripted_keys() {
    let keys = parse_scripted_edit_keys("down,enter,enter,esc,s").expect("parse scripted keys");
    let mapped = keys
        .iter()
        .map(|key| editor_action_from_key(EditorScreen::Root, *key))
        .collect::<Vec<_>>();
    assert_eq!(
        mapped,
        vec![
            Some(EditorAction::MoveNext),
            Some(EditorAction::Enter),
            Some(EditorAction::Enter),
            Some(EditorAction::Cancel),
            Some(EditorAction::Save),
        ]
    );
    assert!(parse_scripted_edit_keys("down,bogus").is_err());
}
