use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms a game can be played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GamePlatform {
    Pc,
    Ps5,
    Xsx,
}

impl GamePlatform {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Ps5 => "PS5",
            Self::Xsx => "XSX",
        }
    }
}

impl fmt::Display for GamePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
