use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use flume::Receiver;
use tracing::info;

use crate::{
    config::Config,
    event::events::Event,
    http::{ApiService, SongApi},
    nav::NavigationController,
};

use super::{
    components::NoticeTimer,
    layout::AppLayout,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::{SongDetailView, SongList},
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub controller: NavigationController,
    pub song_list: SongList,
    pub song_detail: SongDetailView,
    pub notice_timer: NoticeTimer,
    pub config: Config,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api: Arc<dyn SongApi> = Arc::new(ApiService::new(&config.api)?);
        info!(
            "Using catalog {} from {}",
            config.api.list_id, config.api.base_url
        );

        Ok(Self {
            event_rx,
            controller: NavigationController::new(api, event_tx),
            song_list: SongList::default(),
            song_detail: SongDetailView::default(),
            notice_timer: NoticeTimer::new(Duration::from_millis(config.ui.notice_duration_ms)),
            config,
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui =
            tui::Tui::new()?.tick_rate(Duration::from_millis(self.config.ui.tick_rate_ms));
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| {
                    let area = f.area();
                    AppLayout::new(self).render(f, area);
                })?;
            }

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    /// Drops the error notice once it has been visible long enough.
    pub fn expire_notice(&mut self) {
        let state = self.controller.state();
        let shown = state.last_error.as_ref().map(|_| state.error_serial);
        if self.notice_timer.expired(shown, Instant::now()) {
            self.controller.dismiss_error();
        }
    }
}
