use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::util::colors;

/// Bottom bar showing the last error.
pub struct Notice<'a> {
    message: &'a str,
}

impl<'a> Notice<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Strip along the bottom edge of `area`, inset by one cell.
    pub fn area(area: Rect) -> Rect {
        let height = 3.min(area.height);
        Rect {
            x: area.x + 1.min(area.width),
            y: area.y + area.height.saturating_sub(height + 1),
            width: area.width.saturating_sub(2),
            height,
        }
    }
}

impl Widget for Notice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::ERROR))
            .title(" Error · x to dismiss ");

        Paragraph::new(self.message)
            .style(Style::default().fg(colors::ERROR))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Decides when a notice has been on screen long enough.
///
/// Notices are told apart by the state's error serial rather than their text,
/// so the same failure twice in a row gets its full duration again.
#[derive(Debug)]
pub struct NoticeTimer {
    shown: Option<(u64, Instant)>,
    duration: Duration,
}

impl NoticeTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            shown: None,
            duration,
        }
    }

    /// `serial` is `None` while no notice is showing. A different serial
    /// restarts the clock.
    pub fn expired(&mut self, serial: Option<u64>, now: Instant) -> bool {
        let Some(serial) = serial else {
            self.shown = None;
            return false;
        };

        match self.shown {
            Some((shown, since)) if shown == serial => {
                now.saturating_duration_since(since) >= self.duration
            }
            _ => {
                self.shown = Some((serial, now));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavigationState;

    #[test]
    fn expires_after_duration() {
        let mut timer = NoticeTimer::new(Duration::from_secs(3));
        let start = Instant::now();

        assert!(!timer.expired(Some(1), start));
        assert!(!timer.expired(Some(1), start + Duration::from_secs(2)));
        assert!(timer.expired(Some(1), start + Duration::from_secs(3)));
    }

    #[test]
    fn new_serial_restarts_clock() {
        let mut timer = NoticeTimer::new(Duration::from_secs(3));
        let start = Instant::now();

        timer.expired(Some(1), start);
        assert!(!timer.expired(Some(2), start + Duration::from_secs(2)));
        assert!(!timer.expired(Some(2), start + Duration::from_secs(4)));
        assert!(timer.expired(Some(2), start + Duration::from_secs(5)));
    }

    #[test]
    fn repeated_failure_gets_full_duration() {
        let mut state = NavigationState {
            last_error: Some("Failed to load song details: timed out".to_string()),
            error_serial: 1,
            ..NavigationState::default()
        };
        let serial = |state: &NavigationState| {
            state.last_error.as_ref().map(|_| state.error_serial)
        };
        let mut timer = NoticeTimer::new(Duration::from_secs(3));
        let start = Instant::now();

        assert!(!timer.expired(serial(&state), start));

        // Same text again, two seconds into the first notice.
        state.error_serial = 2;
        assert!(!timer.expired(serial(&state), start + Duration::from_secs(2)));
        assert!(!timer.expired(serial(&state), start + Duration::from_secs(4)));
        assert!(timer.expired(serial(&state), start + Duration::from_secs(5)));
    }

    #[test]
    fn cleared_notice_resets() {
        let mut timer = NoticeTimer::new(Duration::from_secs(1));
        let start = Instant::now();

        timer.expired(Some(1), start);
        assert!(!timer.expired(None, start + Duration::from_secs(5)));
        assert!(!timer.expired(Some(1), start + Duration::from_secs(6)));
    }

    #[test]
    fn notice_area_sits_at_bottom() {
        let area = Notice::area(Rect::new(0, 0, 40, 20));
        assert_eq!(area, Rect::new(1, 16, 38, 3));
    }
}
