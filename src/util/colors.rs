use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x005c6bc0);
pub const ACCENT: Color = Color::from_u32(0x007986cb);
pub const MUTED: Color = Color::from_u32(0x00bdbdbd);
pub const SURFACE: Color = Color::from_u32(0x00262a3a);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d12);
pub const ERROR: Color = Color::from_u32(0x00e57373);
