pub mod song_detail;
pub mod song_list;

pub use song_detail::SongDetailView;
pub use song_list::SongList;
