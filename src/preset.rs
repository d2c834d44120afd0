use std::fmt::Display;

use clap::ValueEnum;

use crate::{grid::Grid, Error};

static BEST_CASE: [&str; 3] = ["XXXX", "XSEX", "XXXX"];

static COMMON_CASE: [&str; 10] = [
    "XXXXXXXXXX",
    "X  X X X X",
    "XX X   X X",
    "XX XXX   X",
    "X    X XXX",
    "XX X X XEX",
    "X  X   X X",
    "XX XXX X X",
    "XS   X   X",
    "XXXXXXXXXX",
];

static WORST_CASE: [&str; 10] = [
    "XXXXXXXXXX",
    "X        X",
    "X        X",
    "X        X",
    "X        X",
    "X        X",
    "X        X",
    "XX XXXXXXX",
    "XES      X",
    "XXXXXXXXXX",
];

static UNREACHABLE_CASE: [&str; 10] = [
    "XXXXXXXXXX",
    "X  X X X X",
    "XX X   X X",
    "XX XXX   X",
    "X    X XXX",
    "XX X X XEX",
    "X  X   XXX",
    "XX XXX X X",
    "XS   X   X",
    "XXXXXXXXXX",
];

/// Built-in mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Preset {
    Best,
    Common,
    Worst,
    Unreachable,
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self {
            Preset::Best => "Best Case",
            Preset::Common => "Common Case",
            Preset::Worst => "Worst Case",
            Preset::Unreachable => "Worst Case (Unreachable Destination)",
        };

        write!(f, "{}", title)
    }
}

impl Preset {
    pub fn all_presets() -> &'static [Preset] {
        static ALL_PRESETS: [Preset; 4] = [
            Preset::Best,
            Preset::Common,
            Preset::Worst,
            Preset::Unreachable,
        ];

        &ALL_PRESETS
    }

    /// Preset listed under `id` in the menu, ids start from 1.
    pub fn from_menu_id(id: i32) -> Option<Preset> {
        usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|ind| Self::all_presets().get(ind))
            .copied()
    }

    pub fn menu_id(&self) -> i32 {
        match self {
            Preset::Best => 1,
            Preset::Common => 2,
            Preset::Worst => 3,
            Preset::Unreachable => 4,
        }
    }

    pub fn layout(&self) -> &'static [&'static str] {
        match self {
            Preset::Best => &BEST_CASE,
            Preset::Common => &COMMON_CASE,
            Preset::Worst => &WORST_CASE,
            Preset::Unreachable => &UNREACHABLE_CASE,
        }
    }

    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::from_rows(self.layout())
    }
}
