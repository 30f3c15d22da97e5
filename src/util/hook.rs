use std::{any::Any, panic::PanicHookInfo};

use tracing::{error, warn};

use crate::{
    ui::tui::Tui,
    util::log::{LOG_FILE, get_data_dir},
};

/// Records the panic in the log file, then hands the terminal back before the
/// default hook prints, otherwise the message is drawn on the alternate screen
/// and lost with it.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        report(panic_info);
        if let Err(e) = Tui::restore() {
            warn!("Could not restore the terminal after a panic: {}", e);
        }
        hook(panic_info);
        eprintln!(
            "songdeck crashed; details in {}",
            get_data_dir().join(LOG_FILE.as_str()).display()
        );
    }));
}

fn report(panic_info: &PanicHookInfo<'_>) {
    let location = panic_info
        .location()
        .map(|l| format!("{}:{}", l.file(), l.line()))
        .unwrap_or_else(|| "unknown".to_string());
    let thread = std::thread::current();
    error!(
        location = %location,
        thread = thread.name().unwrap_or("<unnamed>"),
        "Panicked: {}",
        panic_message(panic_info.payload())
    );
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string payload"
    }
}
