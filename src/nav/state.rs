use crate::model::{SongDetail, SongSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    List,
    Detail,
}

/// Everything the views render from. Only [`NavigationController`] mutates it.
///
/// [`NavigationController`]: super::NavigationController
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub route: Route,
    /// Sticks after going back so the list keeps the row marked.
    pub selected_song_id: Option<String>,
    pub songs: Vec<SongSummary>,
    /// Set only while `route` is [`Route::Detail`].
    pub current_detail: Option<SongDetail>,
    pub last_error: Option<String>,
    /// Bumped every time `last_error` is set, even to the same text.
    pub error_serial: u64,
    pub is_loading: bool,
}

impl NavigationState {
    pub fn song(&self, song_id: &str) -> Option<&SongSummary> {
        self.songs.iter().find(|song| song.id() == song_id)
    }

    pub fn selected_song(&self) -> Option<&SongSummary> {
        self.selected_song_id.as_deref().and_then(|id| self.song(id))
    }

    pub fn is_selected(&self, song: &SongSummary) -> bool {
        self.selected_song_id.as_deref() == Some(song.id())
    }
}
