use ratatui::style::Color;

pub const PHOSPHOR: Color = Color::from_u32(0x0033ff66);
pub const PHOSPHOR_DIM: Color = Color::from_u32(0x00127a33);
pub const WARNING: Color = Color::from_u32(0x00ffb000);
pub const BACKGROUND: Color = Color::from_u32(0x00050a05);
pub const LINK: Color = Color::from_u32(0x0099ffcc);
