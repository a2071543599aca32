use serde::{Deserialize, Serialize};
use std::fmt;

/// Construction material of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Wood,
    Aluminum,
    CarbonFiber,
}

/// Percentage deltas a material applies to a machine.
///
/// Each field is a fraction: `0.10` means +10%, `-0.05` means -5%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialAdjustment {
    pub weight: f64,
    pub price: f64,
    pub power: f64,
}

impl MaterialAdjustment {
    /// Scale `value` by `delta`, the same way every adjusted field is scaled.
    #[must_use]
    pub fn apply(value: f64, delta: f64) -> f64 {
        value + value * delta
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Material {
    pub const ALL: [Self; 3] = [Self::Wood, Self::Aluminum, Self::CarbonFiber];

    /// Convert from a material tag. Accepts the British `aluminium` spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "wood" => Some(Self::Wood),
            "aluminum" | "aluminium" => Some(Self::Aluminum),
            "carbon_fiber" | "carbon_fibre" => Some(Self::CarbonFiber),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Aluminum => "aluminum",
            Self::CarbonFiber => "carbon_fiber",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Aluminum => "Aluminum",
            Self::CarbonFiber => "Carbon Fiber",
        }
    }

    /// Material for a 1-based menu option
    pub fn from_menu_option(option: u32) -> Option<Self> {
        let index = usize::try_from(option).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Fixed weight/price/power deltas for this material
    pub const fn adjustment(&self) -> MaterialAdjustment {
        match self {
            Self::Wood => MaterialAdjustment {
                weight: 0.10,
                price: -0.05,
                power: 0.15,
            },
            Self::Aluminum => MaterialAdjustment {
                weight: -0.05,
                price: 0.10,
                power: 0.0,
            },
            Self::CarbonFiber => MaterialAdjustment {
                weight: -0.15,
                price: 0.20,
                power: -0.10,
            },
        }
    }
}
