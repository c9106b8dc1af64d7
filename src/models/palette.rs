//! Google Calendar event colors a course can be tagged with.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

pub static PALETTE: [PaletteColor; 11] = [
    PaletteColor { id: "1", name: "Lavender", hex: "#7986cb" },
    PaletteColor { id: "2", name: "Sage", hex: "#33b679" },
    PaletteColor { id: "3", name: "Grape", hex: "#8e24aa" },
    PaletteColor { id: "4", name: "Flamingo", hex: "#e67c73" },
    PaletteColor { id: "5", name: "Banana", hex: "#f09300" },
    PaletteColor { id: "6", name: "Tangerine", hex: "#f4511e" },
    PaletteColor { id: "7", name: "Peacock", hex: "#039be5" },
    PaletteColor { id: "8", name: "Graphite", hex: "#616161" },
    PaletteColor { id: "9", name: "Blueberry", hex: "#3f51b5" },
    PaletteColor { id: "10", name: "Basil", hex: "#0b8043" },
    PaletteColor { id: "11", name: "Tomato", hex: "#d50000" },
];

/// Color given to courses created from an uploaded document.
pub const DEFAULT_UPLOAD_COLOR: &str = "9";

/// Color given to courses added by hand.
pub const DEFAULT_MANUAL_COLOR: &str = "1";

pub fn find(id: &str) -> Option<&'static PaletteColor> {
    PALETTE.iter().find(|c| c.id == id)
}

/// Like [`find`], but unknown ids fall back to the upload default so there is
/// always something to draw.
pub fn display(id: &str) -> &'static PaletteColor {
    find(id).unwrap_or(&PALETTE[8])
}
