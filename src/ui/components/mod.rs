pub mod notice;
pub mod spinner;

pub use notice::{Notice, NoticeTimer};
pub use spinner::Spinner;
