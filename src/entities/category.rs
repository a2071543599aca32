use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine category. Fixes which videogames a machine can host and which
/// accessories ship with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineCategory {
    /// Dance Revolution
    Dance,
    /// Classical Arcade
    Classical,
    /// Shooting Machine
    Shooter,
    /// Racing Machine
    Races,
    /// Virtual Reality
    Vr,
}

impl fmt::Display for MachineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MachineCategory {
    /// All categories, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Dance,
        Self::Classical,
        Self::Shooter,
        Self::Races,
        Self::Vr,
    ];

    /// Convert from the category tag
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dance" => Some(Self::Dance),
            "classical" => Some(Self::Classical),
            "shooter" => Some(Self::Shooter),
            "races" => Some(Self::Races),
            "vr" => Some(Self::Vr),
            _ => None,
        }
    }

    /// Convert to the category tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dance => "dance",
            Self::Classical => "classical",
            Self::Shooter => "shooter",
            Self::Races => "races",
            Self::Vr => "vr",
        }
    }

    /// Human-readable machine name used in menus
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dance => "Dance Revolution",
            Self::Classical => "Classical Arcade",
            Self::Shooter => "Shooting Machine",
            Self::Races => "Racing Machine",
            Self::Vr => "Virtual Reality",
        }
    }

    /// Category for a 1-based menu option
    pub fn from_menu_option(option: u32) -> Option<Self> {
        let index = usize::try_from(option).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Numbered menu listing every category
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}.{}", i + 1, c.display_name()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
