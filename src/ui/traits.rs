use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::nav::NavigationState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Select(String),
    Back,
    Reload,
    DismissNotice,
}

pub trait View {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &NavigationState);
    fn handle_input(&mut self, key: KeyEvent, state: &NavigationState) -> Option<Action>;
}
