use crate::catalog::CuisineCatalog;
use crate::editor::navigation::{
    editor_action_from_key, editor_screen_item_count, editor_transition, EditorAction,
    EditorItemCounts, EditorNavEffect, EditorScreen, NavState,
};
use crate::editor::screens::{
    centered_rect, cuisine_rows, draw_editor_menu, draw_field_screen, draw_list_screen, field_rows,
    image_rows, project_editor_menu_view_model, root_menu_items, tail_for_display,
};
use crate::form::{EditDraft, ProfileUpdate, ValidationErrors};
use crate::profile::{ImageRef, ProfileRole};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Terminal;
use std::io;
use std::time::Duration;

/// How one edit session ends: exactly one exit per session, and a saved exit
/// always carries the assembled payload with it.
#[derive(Debug, Clone, PartialEq)]
pub enum EditExit {
    Save(ProfileUpdate),
    Cancel,
}

pub fn run_editor_tui(
    draft: &mut EditDraft,
    catalog: &CuisineCatalog,
) -> Result<EditExit, String> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter editor screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create editor terminal: {e}"))?;
    let result = run_editor_tui_loop(draft, catalog, &mut terminal);
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave editor screen: {e}"))?;
    result
}

fn item_counts(draft: &EditDraft, catalog: &CuisineCatalog) -> EditorItemCounts {
    EditorItemCounts {
        root: root_menu_items(draft.role()).len(),
        fields: draft.fields().len(),
        cuisines: catalog.len(),
    }
}

fn run_editor_tui_loop(
    draft: &mut EditDraft,
    catalog: &CuisineCatalog,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<EditExit, String> {
    let mut nav = NavState::root();
    let mut violations = ValidationErrors::default();
    loop {
        let counts = item_counts(draft, catalog);
        let item_count = editor_screen_item_count(nav.screen, counts);
        let transition = editor_transition(
            &mut nav,
            EditorAction::ReconcileSelection(item_count),
            counts,
        )
        .map_err(|err| err.to_string())?;
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        draw_active_editor_screen(terminal, &nav, draft, catalog, &violations)?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll editor input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read editor input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = editor_action_from_key(nav.screen, key) else {
            continue;
        };
        let transition = match editor_transition(&mut nav, action, counts) {
            Ok(transition) => transition,
            Err(err) => {
                nav.status_text = err.to_string();
                continue;
            }
        };
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        if let Some(exit) = apply_editor_effect_tui(
            terminal,
            draft,
            catalog,
            &mut nav,
            &mut violations,
            transition.effect,
        )? {
            return Ok(exit);
        }
    }
}

fn draw_active_editor_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    nav: &NavState,
    draft: &EditDraft,
    catalog: &CuisineCatalog,
    violations: &ValidationErrors,
) -> Result<(), String> {
    let role_line = format!("Role: {}", draft.role().as_str());
    match nav.screen {
        EditorScreen::Root => {
            let view_model = project_editor_menu_view_model(draft, nav);
            terminal
                .draw(|frame| draw_editor_menu(frame, &view_model))
                .map_err(|e| format!("failed to render editor menu: {e}"))?;
        }
        EditorScreen::Fields => {
            let rows = field_rows(draft, violations);
            draw_field_screen(
                terminal,
                "Edit Profile > Fields",
                &role_line,
                &rows,
                nav.selected,
                &nav.status_text,
                &nav.hint_text,
            )?;
        }
        EditorScreen::Cuisines => {
            let title = match draft.role() {
                ProfileRole::Member => "Edit Profile > Favorite Cuisines",
                ProfileRole::Chef => "Edit Profile > Chef Cuisine",
            };
            let items = cuisine_rows(draft, catalog);
            draw_list_screen(
                terminal,
                title,
                &role_line,
                &items,
                nav.selected,
                &nav.status_text,
                &nav.hint_text,
            )?;
        }
        EditorScreen::Image => {
            let items = image_rows(draft);
            draw_list_screen(
                terminal,
                "Edit Profile > Profile Image",
                &role_line,
                &items,
                0,
                &nav.status_text,
                &nav.hint_text,
            )?;
        }
    }
    Ok(())
}

fn apply_editor_effect_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    draft: &mut EditDraft,
    catalog: &CuisineCatalog,
    nav: &mut NavState,
    violations: &mut ValidationErrors,
    effect: EditorNavEffect,
) -> Result<Option<EditExit>, String> {
    match effect {
        EditorNavEffect::None | EditorNavEffect::OpenScreen(_) => Ok(None),
        EditorNavEffect::EditSelectedField => {
            let Some(field) = draft.fields().get(nav.selected).cloned() else {
                return Ok(None);
            };
            if let Some(value) = prompt_line_tui(
                terminal,
                &field.label,
                &format!("Enter {}:", field.label),
                draft.field_value(&field.name),
            )? {
                match draft.set_field(&field.name, value) {
                    Ok(()) => {
                        nav.status_text = format!("{} updated", field.label);
                        // re-validate on change once a submit has failed
                        if !violations.is_empty() {
                            *violations = draft.validate();
                        }
                    }
                    Err(err) => nav.status_text = err,
                }
            }
            Ok(None)
        }
        EditorNavEffect::ToggleSelectedCuisine => {
            nav.status_text = toggle_selected_cuisine(draft, catalog, nav.selected)?;
            Ok(None)
        }
        EditorNavEffect::PickImage => {
            let current = draft
                .image()
                .map(|image| image.as_str().to_string())
                .unwrap_or_default();
            if let Some(value) =
                prompt_line_tui(terminal, "Profile Image", "Enter image file path:", &current)?
            {
                if value.trim().is_empty() {
                    nav.status_text = "image path must be non-empty".to_string();
                } else {
                    let path = value.trim().to_string();
                    draft.attach_image(ImageRef::new(path.clone()));
                    draft.set_preview(path);
                    nav.status_text = "profile image selected".to_string();
                }
            }
            Ok(None)
        }
        EditorNavEffect::SubmitProfile => match draft.submit() {
            Ok(update) => Ok(Some(EditExit::Save(update))),
            Err(errors) => {
                nav.status_text = format!("cannot save profile: {errors}");
                *violations = errors;
                Ok(None)
            }
        },
        EditorNavEffect::CancelEdit => Ok(Some(EditExit::Cancel)),
    }
}

fn toggle_selected_cuisine(
    draft: &mut EditDraft,
    catalog: &CuisineCatalog,
    selected: usize,
) -> Result<String, String> {
    let Some(option) = catalog.options().get(selected) else {
        return Ok("no cuisine selected".to_string());
    };
    match draft.role() {
        ProfileRole::Member => {
            let now_selected = draft.toggle_favorite(option.id)?;
            if now_selected {
                Ok(format!("added {} to favorites", option.name))
            } else {
                Ok(format!("removed {} from favorites", option.name))
            }
        }
        ProfileRole::Chef => {
            draft.choose_chef_cuisine(option.name.clone())?;
            Ok(format!("chef cuisine set to {}", option.name))
        }
    }
}

pub fn run_editor_scripted(
    draft: &mut EditDraft,
    catalog: &CuisineCatalog,
    scripted_keys: Vec<crossterm::event::KeyEvent>,
) -> Result<EditExit, String> {
    let mut nav = NavState::root();
    for key in scripted_keys {
        let counts = item_counts(draft, catalog);
        let item_count = editor_screen_item_count(nav.screen, counts);
        let reconcile = editor_transition(
            &mut nav,
            EditorAction::ReconcileSelection(item_count),
            counts,
        )
        .map_err(|err| err.to_string())?;
        if let Some(feedback) = reconcile.feedback {
            nav.status_text = feedback;
        }
        let Some(action) = editor_action_from_key(nav.screen, key) else {
            continue;
        };
        let transition = editor_transition(&mut nav, action, counts).map_err(|e| e.to_string())?;
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        if let Some(exit) = apply_editor_effect_scripted(draft, catalog, &mut nav, transition.effect)?
        {
            return Ok(exit);
        }
    }
    Err("scripted edit did not terminate; include save or cancel key".to_string())
}

fn apply_editor_effect_scripted(
    draft: &mut EditDraft,
    catalog: &CuisineCatalog,
    nav: &mut NavState,
    effect: EditorNavEffect,
) -> Result<Option<EditExit>, String> {
    match effect {
        EditorNavEffect::None | EditorNavEffect::OpenScreen(_) => Ok(None),
        EditorNavEffect::EditSelectedField => {
            Err("scripted edit does not support field prompt actions".to_string())
        }
        EditorNavEffect::PickImage => {
            Err("scripted edit does not support image prompt actions".to_string())
        }
        EditorNavEffect::ToggleSelectedCuisine => {
            nav.status_text = toggle_selected_cuisine(draft, catalog, nav.selected)?;
            Ok(None)
        }
        EditorNavEffect::SubmitProfile => match draft.submit() {
            Ok(update) => Ok(Some(EditExit::Save(update))),
            Err(errors) => Err(format!("cannot save profile: {errors}")),
        },
        EditorNavEffect::CancelEdit => Ok(Some(EditExit::Cancel)),
    }
}

fn prompt_line_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    prompt: &str,
    initial: &str,
) -> Result<Option<String>, String> {
    let mut value = initial.to_string();
    loop {
        terminal
            .draw(|frame| {
                let area = centered_rect(70, 30, frame.area());
                let block = Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::new(2, 2, 1, 1));
                frame.render_widget(block.clone(), area);
                let inner = block.inner(area);
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Min(1),
                    ])
                    .split(inner);
                let max_input_width = rows[3].width.saturating_sub(2) as usize;
                let display_value = tail_for_display(&value, max_input_width);

                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        title.to_string(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))),
                    rows[0],
                );
                frame.render_widget(Paragraph::new(prompt.to_string()), rows[2]);
                frame.render_widget(
                    Paragraph::new(Line::from(format!("> {display_value}"))),
                    rows[3],
                );
                frame.render_widget(Paragraph::new("Enter apply, Esc cancel"), rows[4]);
                frame.set_cursor_position((
                    rows[3].x + 2 + display_value.chars().count() as u16,
                    rows[3].y,
                ));
            })
            .map_err(|e| format!("failed to render prompt: {e}"))?;
        let ev = event::read().map_err(|e| format!("failed to read prompt input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => return Ok(Some(value)),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(ch),
            _ => {}
        }
    }
}
