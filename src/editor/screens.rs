use crate::catalog::CuisineCatalog;
use crate::editor::navigation::{clamp_selection, NavState, ALL_EDITOR_SCREENS};
use crate::form::{EditDraft, ValidationErrors};
use crate::profile::ProfileRole;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Padding, Paragraph, Row, Table};
use ratatui::{Frame, Terminal};
use std::io;

pub fn root_menu_items(role: ProfileRole) -> Vec<String> {
    let cuisine_item = match role {
        ProfileRole::Chef => "Chef Cuisine",
        ProfileRole::Member => "Favorite Cuisines",
    };
    vec![
        "Profile Fields".to_string(),
        cuisine_item.to_string(),
        "Profile Image".to_string(),
        "Save Profile".to_string(),
        "Cancel".to_string(),
    ]
}

pub struct EditorMenuViewModel {
    pub role_line: String,
    pub items: Vec<String>,
    pub selected: usize,
    pub status_text: String,
    pub hint_text: String,
}

pub fn project_editor_menu_view_model(draft: &EditDraft, state: &NavState) -> EditorMenuViewModel {
    debug_assert!(ALL_EDITOR_SCREENS.contains(&state.screen));
    let items = root_menu_items(draft.role());
    EditorMenuViewModel {
        role_line: format!("Role: {}", draft.role().as_str()),
        selected: clamp_selection(state.selected, items.len()),
        items,
        status_text: state.status_text.clone(),
        hint_text: state.hint_text.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
    pub error: Option<String>,
}

pub fn field_rows(draft: &EditDraft, errors: &ValidationErrors) -> Vec<FieldRow> {
    draft
        .fields()
        .iter()
        .map(|field| {
            let messages: Vec<&str> = errors
                .for_field(&field.name)
                .map(|violation| violation.message.as_str())
                .collect();
            FieldRow {
                label: field.label.clone(),
                value: draft.field_value(&field.name).to_string(),
                error: if messages.is_empty() {
                    None
                } else {
                    Some(messages.join(" "))
                },
            }
        })
        .collect()
}

pub fn cuisine_rows(draft: &EditDraft, catalog: &CuisineCatalog) -> Vec<String> {
    catalog
        .options()
        .iter()
        .map(|option| {
            let marker = match draft.role() {
                ProfileRole::Member => {
                    if draft.is_favorite(option.id) {
                        "[x]"
                    } else {
                        "[ ]"
                    }
                }
                ProfileRole::Chef => {
                    if draft.chef_cuisine() == Some(&option.name) {
                        "(x)"
                    } else {
                        "( )"
                    }
                }
            };
            format!("{marker} {}", option.name)
        })
        .collect()
}

pub fn image_rows(draft: &EditDraft) -> Vec<String> {
    vec![
        format!(
            "Avatar Source: {}",
            draft.avatar_source().unwrap_or("none")
        ),
        format!(
            "Selected Image: {}",
            draft
                .image()
                .map(|image| image.as_str().to_string())
                .unwrap_or_else(|| "unchanged".to_string())
        ),
    ]
}

pub fn tail_for_display(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_chars {
        return value.to_string();
    }
    chars[chars.len() - max_chars..].iter().collect()
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub(crate) fn draw_field_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    role_line: &str,
    rows: &[FieldRow],
    selected: usize,
    status: &str,
    hint: &str,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let chunks = screen_chunks(frame);
            frame.render_widget(header_widget(title, role_line), chunks[0]);

            let mut table_rows = Vec::new();
            for (idx, row) in rows.iter().enumerate() {
                let style = if idx == selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                table_rows.push(
                    Row::new(vec![
                        Cell::from(row.label.clone()),
                        Cell::from(row.value.clone()),
                    ])
                    .style(style),
                );
                if let Some(error) = &row.error {
                    table_rows.push(
                        Row::new(vec![Cell::from(""), Cell::from(error.clone())])
                            .style(Style::default().fg(Color::Red)),
                    );
                }
            }
            let table = Table::new(
                table_rows,
                [Constraint::Percentage(35), Constraint::Percentage(65)],
            )
            .column_spacing(2)
            .block(main_panel_block());
            frame.render_widget(table, chunks[1]);

            frame.render_widget(footer_widget(status, hint), chunks[2]);
        })
        .map_err(|e| format!("failed to render field screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_list_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    role_line: &str,
    items: &[String],
    selected: usize,
    status: &str,
    hint: &str,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let chunks = screen_chunks(frame);
            frame.render_widget(header_widget(title, role_line), chunks[0]);

            let mut list_items = Vec::with_capacity(items.len());
            for (idx, line) in items.iter().enumerate() {
                let mut item = ListItem::new(Line::from(Span::raw(line.clone())));
                if idx == selected {
                    item = item.style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                list_items.push(item);
            }
            frame.render_widget(List::new(list_items).block(main_panel_block()), chunks[1]);

            frame.render_widget(footer_widget(status, hint), chunks[2]);
        })
        .map_err(|e| format!("failed to render list screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_editor_menu(frame: &mut Frame<'_>, view_model: &EditorMenuViewModel) {
    let chunks = screen_chunks(frame);
    frame.render_widget(
        header_widget("PlateMate Profile Editor", &view_model.role_line),
        chunks[0],
    );

    let mut items = Vec::with_capacity(view_model.items.len());
    for (idx, label) in view_model.items.iter().enumerate() {
        let mut item = ListItem::new(Line::from(Span::raw(label.clone())));
        if idx == view_model.selected {
            item = item.style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }
        items.push(item);
    }
    frame.render_widget(List::new(items).block(main_panel_block()), chunks[1]);

    frame.render_widget(
        footer_widget(&view_model.status_text, &view_model.hint_text),
        chunks[2],
    );
}

fn screen_chunks(frame: &Frame<'_>) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(frame.area())
}

fn header_widget(title: &str, role_line: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(role_line.to_string()),
    ])
    .block(Block::default().borders(Borders::ALL))
}

fn footer_widget(status: &str, hint: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(hint.to_string()),
        Line::from(format!("Status: {status}")),
    ])
    .block(Block::default().borders(Borders::ALL))
}

fn main_panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .padding(Padding::new(3, 3, 2, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::profile::UserRecord;

    #[test]
    fn root_menu_swaps_cuisine_item_by_role() {
        assert_eq!(root_menu_items(ProfileRole::Member)[1], "Favorite Cuisines");
        assert_eq!(root_menu_items(ProfileRole::Chef)[1], "Chef Cuisine");
    }

    #[test]
    fn cuisine_rows_mark_current_selection() {
        let mut draft = EditDraft::from_record(UserRecord::default());
        let catalog = default_catalog();
        let first = catalog.options()[0].id;
        draft.toggle_favorite(first).expect("toggle");
        let rows = cuisine_rows(&draft, &catalog);
        assert!(rows[0].starts_with("[x] "));
        assert!(rows[1].starts_with("[ ] "));
    }

    #[test]
    fn tail_for_display_keeps_trailing_characters() {
        assert_eq!(tail_for_display("abcdef", 3), "def");
        assert_eq!(tail_for_display("abc", 6), "abc");
        assert_eq!(tail_for_display("abc", 0), "");
    }
}
