use serde::{Deserialize, Serialize};

use super::Material;
use crate::error::AppError;

/// Flat material prices of the quick purchase flow.
pub const MATERIAL_PRICES: [(Material, f64); 3] = [
    (Material::Wood, 150.0),
    (Material::Aluminum, 250.0),
    (Material::CarbonFiber, 350.0),
];

/// Fixed game list of the quick purchase flow, in menu order.
pub const GAME_PRICES: [(&str, f64); 9] = [
    ("Space Invaders", 50.0),
    ("Pac-Man", 60.0),
    ("Donkey Kong", 55.0),
    ("Street Fighter", 70.0),
    ("Galaga", 65.0),
    ("Tetris", 45.0),
    ("Frogger", 50.0),
    ("Asteroids", 55.0),
    ("Centipede", 60.0),
];

pub fn material_price(material: Material) -> f64 {
    MATERIAL_PRICES
        .iter()
        .find(|(m, _)| *m == material)
        .map_or(0.0, |(_, price)| *price)
}

pub fn game_price(name: &str) -> Option<f64> {
    GAME_PRICES
        .iter()
        .find(|(game, _)| *game == name)
        .map(|(_, price)| *price)
}

/// A machine assembled from the fixed material and game tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickOrder {
    pub client_name: String,
    pub client_address: String,
    pub material: Material,
    games: Vec<String>,
}

impl QuickOrder {
    pub fn new(
        client_name: impl Into<String>,
        client_address: impl Into<String>,
        material: Material,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            client_address: client_address.into(),
            material,
            games: Vec::new(),
        }
    }

    /// Add a game from the fixed list.
    ///
    /// # Errors
    ///
    /// `GameNotOffered` for names outside the list, `GameAlreadySelected`
    /// when the game is already part of the order.
    pub fn add_game(&mut self, name: &str) -> Result<(), AppError> {
        if game_price(name).is_none() {
            return Err(AppError::GameNotOffered(name.to_string()));
        }
        if self.games.iter().any(|g| g == name) {
            return Err(AppError::GameAlreadySelected(name.to_string()));
        }
        self.games.push(name.to_string());
        Ok(())
    }

    pub fn games(&self) -> &[String] {
        &self.games
    }

    pub fn material_price(&self) -> f64 {
        material_price(self.material)
    }

    pub fn games_price(&self) -> f64 {
        self.games.iter().filter_map(|g| game_price(g)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.material_price() + self.games_price()
    }
}
