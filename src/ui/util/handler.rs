use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    nav::Route,
    ui::{
        app::App,
        input::InputHandler,
        traits::{Action, View},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for one terminal event, then applies every fetch result that
    /// arrived meanwhile.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.controller.apply(evt);
        }
        app.expire_notice();

        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init | TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
        }

        Ok(())
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let state = app.controller.state();
        let action = match state.route {
            Route::List => app.song_list.handle_input(key, state),
            Route::Detail => app.song_detail.handle_input(key, state),
        }
        .or_else(|| InputHandler::handle_key(key));

        if let Some(action) = action {
            Self::dispatch_action(app, action);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        debug!("Dispatching {:?}", action);
        match action {
            Action::Quit => app.should_quit = true,
            Action::Select(song_id) => {
                app.controller.select(&song_id);
            }
            Action::Back => {
                if app.controller.back() {
                    app.song_detail.reset_scroll();
                }
            }
            Action::Reload => app.controller.load_catalog(),
            Action::DismissNotice => app.controller.dismiss_error(),
        }
    }
}
