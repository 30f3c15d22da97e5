use crate::{
    http::FetchError,
    model::{SongDetail, SongSummary},
};

/// Results of background fetches, applied by the navigation controller.
///
/// `generation` names the request that produced the result; only the most
/// recent request of each kind is ever applied.
#[derive(Debug, Clone)]
pub enum Event {
    CatalogFetched {
        generation: u64,
        result: Result<Vec<SongSummary>, FetchError>,
    },
    DetailFetched {
        generation: u64,
        song_id: String,
        result: Result<SongDetail, FetchError>,
    },
}
