pub mod config;
pub mod event;
pub mod http;
pub mod model;
pub mod nav;
pub mod ui;
pub mod util;
