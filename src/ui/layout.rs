use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    nav::Route,
    ui::{app::App, components::Notice, traits::View},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let main_area = chunks[0];
        let hints_area = chunks[1];

        let state = self.app.controller.state();
        let title = match state.route {
            Route::List => " Songs ".to_string(),
            Route::Detail => match state.selected_song() {
                Some(song) => format!(" {} ", song.name()),
                None => " Song details ".to_string(),
            },
        };

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title_top(Line::from(" songdeck ").alignment(Alignment::Center))
            .title_top(Line::from(title).alignment(Alignment::Left));
        let content_area = content_block.inner(main_area);
        f.render_widget(content_block, main_area);

        match state.route {
            Route::List => self.app.song_list.render(f, content_area, state),
            Route::Detail => self.app.song_detail.render(f, content_area, state),
        }

        if let Some(message) = state.last_error.as_deref() {
            f.render_widget(Notice::new(message), Notice::area(main_area));
        }

        f.render_widget(Paragraph::new(hints(state.route)), hints_area);
    }
}

fn hints(route: Route) -> Line<'static> {
    let keys: &[(&str, &str)] = match route {
        Route::List => &[("↑/↓", "move"), ("enter", "open"), ("r", "reload"), ("q", "quit")],
        Route::Detail => &[("esc", "back"), ("↑/↓", "scroll"), ("q", "quit")],
    };

    let spans = keys.iter().flat_map(|(key, label)| {
        [
            Span::styled(format!(" {key} "), Style::default().fg(colors::ACCENT)),
            Span::styled(format!("{label} "), Style::default().fg(colors::MUTED)),
        ]
    });
    Line::from(spans.collect::<Vec<_>>())
}
