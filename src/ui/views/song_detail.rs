use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    model::SongDetail,
    nav::NavigationState,
    ui::traits::{Action, View},
    util::colors,
};

const DETAIL_FIELDS: [(&str, &str); 4] = [
    ("Musical note", "music_note"),
    ("Song path", "path_song"),
    ("Video path", "path_video"),
    ("PDF path", "path_pdf"),
];

const METADATA_FIELDS: [(&str, &str); 6] = [
    ("Status", "id_status"),
    ("Organization", "id_organization"),
    ("Created by", "created_by"),
    ("Updated by", "updated_by"),
    ("Created at", "created_at"),
    ("Updated at", "updated_at"),
];

#[derive(Default)]
pub struct SongDetailView {
    scroll: u16,
}

impl SongDetailView {
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn lines(detail: &SongDetail) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(
                detail.display("name"),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                detail.display("author"),
                Style::default().fg(colors::MUTED),
            )),
            Line::default(),
        ];

        lines.push(section("Details"));
        lines.extend(fields(detail, &DETAIL_FIELDS));
        lines.push(Line::default());

        lines.push(section("Lyrics"));
        let lyrics = detail.display("letter");
        lines.extend(lyrics.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::default());

        lines.push(section("Metadata"));
        lines.extend(fields(detail, &METADATA_FIELDS));
        lines
    }
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
}

fn fields<'a>(
    detail: &'a SongDetail,
    labels: &'a [(&'a str, &'a str)],
) -> impl Iterator<Item = Line<'a>> {
    labels.iter().map(|(label, key)| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(colors::MUTED)),
            Span::raw(detail.display(key)),
        ])
    })
}

impl View for SongDetailView {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &NavigationState) {
        let Some(detail) = &state.current_detail else {
            f.render_widget(
                Paragraph::new("No song selected").style(Style::default().fg(colors::MUTED)),
                area,
            );
            return;
        };

        let paragraph = Paragraph::new(Self::lines(detail))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &NavigationState) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                Some(Action::Back)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Char('g') => {
                self.scroll = 0;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Route;
    use ratatui::{Terminal, backend::TestBackend, crossterm::event::KeyModifiers};
    use serde_json::json;

    fn render(view: &mut SongDetailView, state: &NavigationState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn showing(detail: serde_json::Value) -> NavigationState {
        NavigationState {
            route: Route::Detail,
            selected_song_id: Some("1".to_string()),
            current_detail: Some(SongDetail::new(detail.as_object().cloned().unwrap())),
            ..NavigationState::default()
        }
    }

    #[test]
    fn renders_known_fields_and_sentinel() {
        let state = showing(json!({
            "name": "Song1",
            "author": "X",
            "music_note": "G",
            "letter": "line one\nline two",
            "created_by": 4,
        }));
        let screen = render(&mut SongDetailView::default(), &state);

        assert!(screen.contains("Song1"));
        assert!(screen.contains("Musical note: G"));
        assert!(screen.contains("PDF path: N/A"));
        assert!(screen.contains("line two"));
        assert!(screen.contains("Created by: 4"));
    }

    #[test]
    fn renders_placeholder_without_detail() {
        let screen = render(&mut SongDetailView::default(), &NavigationState::default());
        assert!(screen.contains("No song selected"));
    }

    #[test]
    fn escape_goes_back() {
        let state = showing(json!({"name": "Song1"}));
        let mut view = SongDetailView::default();

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(view.handle_input(esc, &state), Some(Action::Back));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(view.handle_input(down, &state), None);
        assert_eq!(view.scroll, 1);
        view.reset_scroll();
        assert_eq!(view.scroll, 0);
    }
}
