use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    model::SongSummary,
    nav::NavigationState,
    ui::{
        components::Spinner,
        traits::{Action, View},
    },
    util::colors,
};

#[derive(Default)]
pub struct SongList {
    list_state: ListState,
}

impl SongList {
    fn song_under_cursor<'a>(&self, state: &'a NavigationState) -> Option<&'a SongSummary> {
        self.list_state.selected().and_then(|i| state.songs.get(i))
    }

    /// Keeps the cursor inside the list; on first sight of a catalog it
    /// starts on the sticky selection.
    fn clamp_cursor(&mut self, state: &NavigationState) {
        let len = state.songs.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => {
                let sticky = state
                    .selected_song_id
                    .as_deref()
                    .and_then(|id| state.songs.iter().position(|s| s.id() == id));
                self.list_state.select(Some(sticky.unwrap_or(0)));
            }
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}

impl View for SongList {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &NavigationState) {
        self.clamp_cursor(state);

        if state.songs.is_empty() {
            if state.is_loading {
                f.render_widget(
                    Spinner::default()
                        .with_style(Style::default().fg(colors::ACCENT))
                        .with_label("Loading songs"),
                    area,
                );
            } else {
                f.render_widget(
                    Paragraph::new("No songs")
                        .style(Style::default().fg(colors::MUTED))
                        .alignment(Alignment::Center),
                    area,
                );
            }
            return;
        }

        let items: Vec<ListItem> = state
            .songs
            .iter()
            .map(|song| {
                let is_selected = state.is_selected(song);
                let marker = if is_selected { "♪ " } else { "  " };
                let title_style = if is_selected {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(colors::ACCENT)),
                    Span::styled(song.name(), title_style),
                    Span::raw("  "),
                    Span::styled(song.author(), Style::default().fg(colors::MUTED)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(colors::SURFACE))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_input(&mut self, key: KeyEvent, state: &NavigationState) -> Option<Action> {
        let len = state.songs.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| (i + 1).min(len - 1));
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
                None
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                None
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self
                .song_under_cursor(state)
                .map(|song| Action::Select(song.id().to_string())),
            KeyCode::Char('r') => Some(Action::Reload),
            _ => None,
        }
    }
}
