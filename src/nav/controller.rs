use std::sync::Arc;

use flume::Sender;
use tracing::{debug, info, warn};

use super::state::{NavigationState, Route};
use crate::{
    event::events::Event,
    http::{FetchError, SongApi},
    model::{SongDetail, SongSummary},
    util::task::TaskManager,
};

const CATALOG_TASK: &str = "catalog_fetch";
const DETAIL_TASK: &str = "detail_fetch";

/// Owns the navigation state and is the only thing that changes it.
///
/// Fetches run on spawned tasks and report back through `event_tx`; whoever
/// drains the matching receiver hands each [`Event`] to [`apply`].
///
/// [`apply`]: NavigationController::apply
pub struct NavigationController {
    state: NavigationState,
    api: Arc<dyn SongApi>,
    event_tx: Sender<Event>,
    tasks: TaskManager,
    catalog_pending: bool,
    detail_pending: bool,
    catalog_generation: u64,
    detail_generation: u64,
}

impl NavigationController {
    /// Starts loading the catalog right away, so this must run inside a
    /// tokio runtime.
    pub fn new(api: Arc<dyn SongApi>, event_tx: Sender<Event>) -> Self {
        let mut controller = Self {
            state: NavigationState::default(),
            api,
            event_tx,
            tasks: TaskManager::new(),
            catalog_pending: false,
            detail_pending: false,
            catalog_generation: 0,
            detail_generation: 0,
        };
        controller.load_catalog();
        controller
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn load_catalog(&mut self) {
        info!("Loading catalog");
        self.catalog_pending = true;
        self.catalog_generation += 1;
        self.sync_loading();

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        let generation = self.catalog_generation;
        self.tasks.spawn(
            CATALOG_TASK,
            tokio::spawn(async move {
                let result = api.fetch_catalog().await;
                let _ = tx.send(Event::CatalogFetched { generation, result });
            }),
        );
    }

    /// Returns `false` without touching anything unless the list is showing
    /// and `song_id` is in it.
    pub fn select(&mut self, song_id: &str) -> bool {
        if self.state.route != Route::List {
            debug!("Ignoring selection of {} outside the list", song_id);
            return false;
        }
        if self.state.song(song_id).is_none() {
            debug!("Ignoring selection of unknown song {}", song_id);
            return false;
        }

        info!("Selected song {}", song_id);
        self.state.selected_song_id = Some(song_id.to_string());
        self.state.current_detail = None;
        self.detail_pending = true;
        self.detail_generation += 1;
        self.sync_loading();

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        let song_id = song_id.to_string();
        let generation = self.detail_generation;
        self.tasks.spawn(
            DETAIL_TASK,
            tokio::spawn(async move {
                let result = api.fetch_detail(&song_id).await;
                let _ = tx.send(Event::DetailFetched {
                    generation,
                    song_id,
                    result,
                });
            }),
        );
        true
    }

    pub fn back(&mut self) -> bool {
        match self.state.route {
            Route::List => false,
            Route::Detail => {
                self.state.route = Route::List;
                self.state.current_detail = None;
                true
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.state.last_error = None;
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::CatalogFetched { generation, result } => {
                self.apply_catalog(generation, result)
            }
            Event::DetailFetched {
                generation,
                song_id,
                result,
            } => self.apply_detail(generation, song_id, result),
        }
    }

    /// A task that already finished cannot be aborted, so a superseded
    /// result may still be queued when its replacement is spawned.
    fn apply_catalog(&mut self, generation: u64, result: Result<Vec<SongSummary>, FetchError>) {
        if !self.catalog_pending || generation != self.catalog_generation {
            debug!("Discarding superseded catalog result {}", generation);
            return;
        }

        self.catalog_pending = false;
        match result {
            Ok(songs) => {
                info!("Catalog loaded with {} songs", songs.len());
                self.state.songs = songs;
                self.state.last_error = None;
            }
            Err(e) => {
                warn!("Failed to load catalog: {}", e);
                self.set_error(format!("Failed to load songs: {e}"));
            }
        }
        self.sync_loading();
    }

    fn apply_detail(
        &mut self,
        generation: u64,
        song_id: String,
        result: Result<SongDetail, FetchError>,
    ) {
        let still_wanted = self.detail_pending
            && generation == self.detail_generation
            && self.state.route == Route::List
            && self.state.selected_song_id.as_deref() == Some(song_id.as_str());
        if !still_wanted {
            debug!("Discarding stale detail for song {}", song_id);
            return;
        }

        self.detail_pending = false;
        match result {
            Ok(detail) => {
                self.state.route = Route::Detail;
                self.state.current_detail = Some(detail);
                self.state.last_error = None;
            }
            Err(e) => {
                warn!("Failed to load detail for song {}: {}", song_id, e);
                self.set_error(format!("Failed to load song details: {e}"));
            }
        }
        self.sync_loading();
    }

    fn set_error(&mut self, message: String) {
        self.state.last_error = Some(message);
        self.state.error_serial += 1;
    }

    fn sync_loading(&mut self) {
        self.state.is_loading = self.catalog_pending || self.detail_pending;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
