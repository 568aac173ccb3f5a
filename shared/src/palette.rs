use serde::{Deserialize, Serialize};

use crate::day::Day;

/// Background tone of an unlocked day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Rose200,
    Pink200,
    Red200,
    Rose300,
    Pink300,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Rose200 => "tone-rose-200",
            Tone::Pink200 => "tone-pink-200",
            Tone::Red200 => "tone-red-200",
            Tone::Rose300 => "tone-rose-300",
            Tone::Pink300 => "tone-pink-300",
        }
    }
}

/// Tones cycled over unlocked cells by grid position
pub const PALETTE: [Tone; 5] = [
    Tone::Rose200,
    Tone::Pink200,
    Tone::Red200,
    Tone::Rose300,
    Tone::Pink300,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    Available(Tone),
    Locked,
}

impl CellStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            CellStyle::Available(tone) => tone.css_class(),
            CellStyle::Locked => "locked",
        }
    }
}

/// Style of the cell at grid position `index`. Locked days never take a tone.
pub fn cell_style(day: &Day, index: usize) -> CellStyle {
    if day.is_available {
        CellStyle::Available(PALETTE[index % PALETTE.len()])
    } else {
        CellStyle::Locked
    }
}
