//! Built-in marker tables.

use std::fmt;
use std::str::FromStr;

use super::{Marker, MarkerSpec};
use crate::error::PatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Bot and crown icons plus five colored circles.
    #[default]
    Classic,
    /// `Classic` plus a question-mark icon on badge_17.
    Extended,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Extended];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Extended => "extended",
        }
    }

    pub fn markers(self) -> MarkerSpec {
        let mut table = vec![
            ("badge_10", Marker::icon("bot.png")),
            ("badge_11", Marker::rgba(241, 0, 0, 255)),
            ("badge_12", Marker::rgba(0, 193, 0, 255)),
            ("badge_13", Marker::rgba(102, 170, 255, 255)),
            ("badge_14", Marker::rgba(204, 68, 255, 255)),
            ("badge_15", Marker::rgba(255, 215, 0, 255)),
            ("badge_16", Marker::icon("crown.png")),
        ];
        if self == Preset::Extended {
            table.push(("badge_17", Marker::icon("question.png")));
        }
        MarkerSpec { entries: table.into_iter().map(|(n, m)| (n.to_string(), m)).collect() }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Preset {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatchError::Config(format!("unknown preset `{s}` (expected classic or extended)")))
    }
}
