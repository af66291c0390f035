use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

const ROOT_STATUS_TEXT: &str = "Enter opens a section. Esc cancels editing.";
const ROOT_HINT_TEXT: &str = "Up/Down move | Enter open | s save | Esc cancel";
const FIELDS_STATUS_TEXT: &str = "Enter to edit the selected field. Esc back.";
const FIELDS_HINT_TEXT: &str = "Up/Down move | Enter edit | Esc back";
const CUISINES_STATUS_TEXT: &str = "Enter toggles or sets the selected cuisine. Esc back.";
const CUISINES_HINT_TEXT: &str = "Up/Down move | Enter select | Esc back";
const IMAGE_STATUS_TEXT: &str = "Enter to pick an image file. Esc back.";
const IMAGE_HINT_TEXT: &str = "Enter pick | Esc back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorScreen {
    Root,
    Fields,
    Cuisines,
    Image,
}

pub const ALL_EDITOR_SCREENS: [EditorScreen; 4] = [
    EditorScreen::Root,
    EditorScreen::Fields,
    EditorScreen::Cuisines,
    EditorScreen::Image,
];

impl EditorScreen {
    fn as_str(self) -> &'static str {
        match self {
            EditorScreen::Root => "root",
            EditorScreen::Fields => "fields",
            EditorScreen::Cuisines => "cuisines",
            EditorScreen::Image => "image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    MovePrev,
    MoveNext,
    Enter,
    Back,
    Save,
    Cancel,
    ReconcileSelection(usize),
}

impl EditorAction {
    fn as_str(self) -> &'static str {
        match self {
            EditorAction::MovePrev => "move_prev",
            EditorAction::MoveNext => "move_next",
            EditorAction::Enter => "enter",
            EditorAction::Back => "back",
            EditorAction::Save => "save",
            EditorAction::Cancel => "cancel",
            EditorAction::ReconcileSelection(_) => "reconcile_selection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub screen: EditorScreen,
    pub selected: usize,
    pub status_text: String,
    pub hint_text: String,
}

impl NavState {
    pub fn root() -> Self {
        Self {
            screen: EditorScreen::Root,
            selected: 0,
            status_text: ROOT_STATUS_TEXT.to_string(),
            hint_text: ROOT_HINT_TEXT.to_string(),
        }
    }

    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = clamp_selection(self.selected, len);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorNavEffect {
    None,
    OpenScreen(EditorScreen),
    EditSelectedField,
    ToggleSelectedCuisine,
    PickImage,
    SubmitProfile,
    CancelEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTransition {
    pub effect: EditorNavEffect,
    pub feedback: Option<String>,
}

impl EditorTransition {
    fn no_op(feedback: Option<String>) -> Self {
        Self {
            effect: EditorNavEffect::None,
            feedback,
        }
    }

    fn with_effect(effect: EditorNavEffect) -> Self {
        Self {
            effect,
            feedback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorNavError {
    InvalidTransition {
        screen: EditorScreen,
        action: EditorAction,
    },
}

impl std::fmt::Display for EditorNavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorNavError::InvalidTransition { screen, action } => {
                write!(
                    f,
                    "invalid editor transition: screen={} action={}",
                    screen.as_str(),
                    action.as_str()
                )
            }
        }
    }
}

/// Per-screen list lengths for the current session; fields and cuisines
/// depend on the loaded draft and catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorItemCounts {
    pub root: usize,
    pub fields: usize,
    pub cuisines: usize,
}

pub fn editor_screen_item_count(screen: EditorScreen, counts: EditorItemCounts) -> usize {
    match screen {
        EditorScreen::Root => counts.root,
        EditorScreen::Fields => counts.fields,
        EditorScreen::Cuisines => counts.cuisines,
        EditorScreen::Image => 1,
    }
}

pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.min(len - 1)
}

pub fn editor_action_from_key(
    screen: EditorScreen,
    key: crossterm::event::KeyEvent,
) -> Option<EditorAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(EditorAction::Cancel);
    }
    match key.code {
        KeyCode::Up => Some(EditorAction::MovePrev),
        KeyCode::Down => Some(EditorAction::MoveNext),
        KeyCode::Esc => Some(if screen == EditorScreen::Root {
            EditorAction::Cancel
        } else {
            EditorAction::Back
        }),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(EditorAction::Enter),
        KeyCode::Char('s') => Some(EditorAction::Save),
        _ => None,
    }
}

pub fn parse_scripted_edit_keys(raw: &str) -> Result<Vec<crossterm::event::KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let normalized = token.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            continue;
        }
        let key = match normalized.as_str() {
            "up" => crossterm::event::KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => crossterm::event::KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "enter" => crossterm::event::KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => crossterm::event::KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "ctrl-c" => crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "s" => crossterm::event::KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            other => {
                return Err(format!(
                    "invalid PLATEMATE_EDIT_SCRIPT_KEYS token `{other}`; valid tokens: up,down,enter,esc,ctrl-c,s"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

pub fn editor_transition(
    state: &mut NavState,
    action: EditorAction,
    counts: EditorItemCounts,
) -> Result<EditorTransition, EditorNavError> {
    if let EditorAction::ReconcileSelection(len) = action {
        let previous = state.selected;
        state.clamp_selection(len);
        if previous != state.selected {
            return Ok(EditorTransition::no_op(Some(
                "selection adjusted".to_string(),
            )));
        }
        return Ok(EditorTransition::no_op(None));
    }

    match state.screen {
        EditorScreen::Root => match action {
            EditorAction::MovePrev => {
                state.selected = state.selected.saturating_sub(1);
                Ok(EditorTransition::no_op(None))
            }
            EditorAction::MoveNext => {
                let max_index = counts.root.saturating_sub(1);
                state.selected = std::cmp::min(state.selected + 1, max_index);
                Ok(EditorTransition::no_op(None))
            }
            EditorAction::Enter => {
                let effect = match state.selected {
                    0 => {
                        state.screen = EditorScreen::Fields;
                        state.selected = 0;
                        state.status_text = FIELDS_STATUS_TEXT.to_string();
                        state.hint_text = FIELDS_HINT_TEXT.to_string();
                        EditorNavEffect::OpenScreen(EditorScreen::Fields)
                    }
                    1 => {
                        state.screen = EditorScreen::Cuisines;
                        state.selected = 0;
                        state.status_text = CUISINES_STATUS_TEXT.to_string();
                        state.hint_text = CUISINES_HINT_TEXT.to_string();
                        EditorNavEffect::OpenScreen(EditorScreen::Cuisines)
                    }
                    2 => {
                        state.screen = EditorScreen::Image;
                        state.selected = 0;
                        state.status_text = IMAGE_STATUS_TEXT.to_string();
                        state.hint_text = IMAGE_HINT_TEXT.to_string();
                        EditorNavEffect::OpenScreen(EditorScreen::Image)
                    }
                    3 => EditorNavEffect::SubmitProfile,
                    _ => EditorNavEffect::CancelEdit,
                };
                Ok(EditorTransition::with_effect(effect))
            }
            EditorAction::Back | EditorAction::Cancel => {
                Ok(EditorTransition::with_effect(EditorNavEffect::CancelEdit))
            }
            EditorAction::Save => {
                Ok(EditorTransition::with_effect(EditorNavEffect::SubmitProfile))
            }
            EditorAction::ReconcileSelection(_) => unreachable!(),
        },
        EditorScreen::Fields => match action {
            EditorAction::MovePrev => {
                state.selected = state.selected.saturating_sub(1);
                Ok(EditorTransition::no_op(None))
            }
            EditorAction::MoveNext => {
                let max_index = counts.fields.saturating_sub(1);
                state.selected = std::cmp::min(state.selected + 1, max_index);
                Ok(EditorTransition::no_op(None))
            }
            EditorAction::Enter => Ok(EditorTransition::with_effect(
                EditorNavEffect::EditSelectedField,
            )),
            EditorAction::Back => {
                back_to_root(state);
                Ok(EditorTransition::no_op(Some(
                    "Closed Profile Fields.".to_string(),
                )))
            }
            EditorAction::Cancel => Ok(EditorTransition::with_effect(EditorNavEffect::CancelEdit)),
            EditorAction::Save => Err(EditorNavError::InvalidTransition {
                screen: state.screen,
                action,
            }),
            EditorAction::ReconcileSelection(_) => unreachable!(),
        },
        EditorScreen::Cuisines => match action {
            EditorAction::MovePrev => {
                state.selected = state.selected.saturating_sub(1);
                Ok(EditorTransition::no_op(None))
            }
            EditorAction::MoveNext => {
                let max_index = counts.cuisines.saturating_sub(1);
                state.selected = std::cmp::min(state.selected + 1, max_index);
                Ok(EditorTransition::no_op(None))
            }
            EditorAction::Enter => Ok(EditorTransition::with_effect(
                EditorNavEffect::ToggleSelectedCuisine,
            )),
            EditorAction::Back => {
                back_to_root(state);
                Ok(EditorTransition::no_op(Some("Closed Cuisines.".to_string())))
            }
            EditorAction::Cancel => Ok(EditorTransition::with_effect(EditorNavEffect::CancelEdit)),
            EditorAction::Save => Err(EditorNavError::InvalidTransition {
                screen: state.screen,
                action,
            }),
            EditorAction::ReconcileSelection(_) => unreachable!(),
        },
        EditorScreen::Image => match action {
            EditorAction::MovePrev | EditorAction::MoveNext => Ok(EditorTransition::no_op(None)),
            EditorAction::Enter => Ok(EditorTransition::with_effect(EditorNavEffect::PickImage)),
            EditorAction::Back => {
                back_to_root(state);
                Ok(EditorTransition::no_op(Some(
                    "Closed Profile Image.".to_string(),
                )))
            }
            EditorAction::Cancel => Ok(EditorTransition::with_effect(EditorNavEffect::CancelEdit)),
            EditorAction::Save => Err(EditorNavError::InvalidTransition {
                screen: state.screen,
                action,
            }),
            EditorAction::ReconcileSelection(_) => unreachable!(),
        },
    }
}

fn back_to_root(state: &mut NavState) {
    state.screen = EditorScreen::Root;
    state.selected = 0;
    state.status_text = ROOT_STATUS_TEXT.to_string();
    state.hint_text = ROOT_HINT_TEXT.to_string();
}
