use serde::{Deserialize, Serialize};
use std::fmt;

use super::MachineCategory;

/// Surcharge applied to a videogame installed in high definition.
pub const HD_SURCHARGE: f64 = 0.10;

/// A catalog entry.
///
/// Numeric fields are not validated here; the input layer enforces
/// `price >= 0` and a plausible release year before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoGame {
    code: u32,
    name: String,
    description: String,
    storytelling_creator: String,
    graphics_creator: String,
    category: MachineCategory,
    price: f64,
    year: i32,
}

impl VideoGame {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        storytelling_creator: impl Into<String>,
        graphics_creator: impl Into<String>,
        category: MachineCategory,
        price: f64,
        year: i32,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            description: description.into(),
            storytelling_creator: storytelling_creator.into(),
            graphics_creator: graphics_creator.into(),
            category,
            price,
            year,
        }
    }

    pub const fn code(&self) -> u32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn category(&self) -> MachineCategory {
        self.category
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Apply the high-definition surcharge when `enabled`.
    ///
    /// Every call with `true` raises the current price by another 10%, so
    /// callers apply it to the copy being installed, once.
    pub fn high_definition(&mut self, enabled: bool) {
        if enabled {
            self.price += self.price * HD_SURCHARGE;
        }
    }
}

impl fmt::Display for VideoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(10);
        writeln!(f, "{rule}")?;
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Storytelling Creator: {}", self.storytelling_creator)?;
        writeln!(f, "Graphics Creator: {}", self.graphics_creator)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        writeln!(f, "Year: {}", self.year)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VideoGame {
        VideoGame::new(
            7,
            "Pump It Up",
            "Step on the arrows",
            "Andamiro",
            "Andamiro Art",
            MachineCategory::Dance,
            50.0,
            1999,
        )
    }

    #[test]
    fn test_high_definition_adds_ten_percent() {
        let mut game = sample();
        game.high_definition(true);
        assert!((game.price() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_definition_compounds() {
        let mut game = sample();
        game.high_definition(true);
        game.high_definition(true);
        assert!((game.price() - 60.5).abs() < 1e-9);
    }

    #[test]
    fn test_high_definition_off_is_noop() {
        let mut game = sample();
        game.high_definition(false);
        game.high_definition(false);
        assert!((game.price() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_description() {
        let mut game = sample();
        game.set_description("Remastered");
        assert_eq!(game.description(), "Remastered");
    }

    #[test]
    fn test_display_lists_fields() {
        let rendered = sample().to_string();
        assert!(rendered.contains("Code: 7"));
        assert!(rendered.contains("Category: dance"));
        assert!(rendered.contains("Price: $50.00"));
        assert!(rendered.contains("Year: 1999"));
    }
}
