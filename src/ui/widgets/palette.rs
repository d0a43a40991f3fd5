use egui::Color32;

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(0xFF, 0x7F, 0x50);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x1E, 0x90, 0xFF);
pub const HIGHLIGHT_BG: Color32 = Color32::from_rgb(0xE8, 0xF5, 0xE9);
