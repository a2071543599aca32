use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MachineCategory, Material, MaterialAdjustment, VideoGame};
use crate::error::AppError;

/// Baseline hardware figures shared by every machine category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSpec {
    /// Width, depth and height in centimetres
    pub dimensions: [u32; 3],
    /// Kilograms
    pub weight: f64,
    /// Watts
    pub power_consumption: f64,
    /// Megabytes
    pub memory: u32,
    pub processor: String,
    pub base_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DanceRevolution {
    pub difficulties: Vec<String>,
    pub arrow_directions: Vec<String>,
    pub controls_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalArcade {
    pub vibration: bool,
    pub sound_record_alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingMachine {
    pub number_of_guns: u32,
    pub gun_type: String,
    /// Percent
    pub gun_accuracy: f64,
    pub reload_mechanism: String,
    pub safety_lock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacingMachine {
    pub wheel_type: String,
    /// Percent
    pub pedal_sensitivity: f64,
    pub seat_type: String,
    pub vibration: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualReality {
    pub glasses_type: String,
    pub glasses_resolution: String,
    pub glasses_price: f64,
}

/// Category-specific part of a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum MachineKind {
    Dance(DanceRevolution),
    Classical(ClassicalArcade),
    Shooter(ShootingMachine),
    Races(RacingMachine),
    Vr(VirtualReality),
}

impl MachineKind {
    pub const fn category(&self) -> MachineCategory {
        match self {
            Self::Dance(_) => MachineCategory::Dance,
            Self::Classical(_) => MachineCategory::Classical,
            Self::Shooter(_) => MachineCategory::Shooter,
            Self::Races(_) => MachineCategory::Races,
            Self::Vr(_) => MachineCategory::Vr,
        }
    }

    /// Price of the accessory that ships with the machine, if any.
    pub const fn accessory_price(&self) -> f64 {
        match self {
            Self::Dance(dance) => dance.controls_price,
            Self::Vr(vr) => vr.glasses_price,
            Self::Classical(_) | Self::Shooter(_) | Self::Races(_) => 0.0,
        }
    }

    fn write_features(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dance(dance) => {
                writeln!(f, "Difficulties: {}", dance.difficulties.join(", "))?;
                writeln!(
                    f,
                    "Arrow Cardinalities: {}",
                    dance.arrow_directions.join(", ")
                )?;
                writeln!(f, "Controls Price: ${:.2}", dance.controls_price)
            }
            Self::Classical(classical) => {
                writeln!(f, "Vibration: {}", yes_no(classical.vibration))?;
                writeln!(
                    f,
                    "Sound Record Alert: {}",
                    yes_no(classical.sound_record_alert)
                )
            }
            Self::Shooter(shooter) => {
                writeln!(f, "Number of Guns: {}", shooter.number_of_guns)?;
                writeln!(f, "Gun Type: {}", shooter.gun_type)?;
                writeln!(f, "Gun Accuracy: {}%", shooter.gun_accuracy)?;
                writeln!(f, "Reload Mechanism: {}", shooter.reload_mechanism)?;
                writeln!(f, "Safety Lock: {}", yes_no(shooter.safety_lock))
            }
            Self::Races(races) => {
                writeln!(f, "Wheel Type: {}", races.wheel_type)?;
                writeln!(f, "Pedal Sensitivity: {}%", races.pedal_sensitivity)?;
                writeln!(f, "Seat Type: {}", races.seat_type)?;
                writeln!(f, "Has Vibration: {}", yes_no(races.vibration))
            }
            Self::Vr(vr) => {
                writeln!(f, "Glasses Type: {}", vr.glasses_type)?;
                writeln!(f, "Glasses Resolution: {}", vr.glasses_resolution)?;
                writeln!(f, "Glasses Price: ${:.2}", vr.glasses_price)
            }
        }
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// An arcade machine of one category, with its installed videogames.
///
/// The material adjustment scales the base price only; the accessory is
/// added on top, see [`Machine::price`]. Installed games are priced
/// separately, see [`Machine::total_price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    kind: MachineKind,
    material: Material,
    color: String,
    spec: MachineSpec,
    weight: f64,
    power_consumption: f64,
    adjusted_price: f64,
    videogames: Vec<VideoGame>,
}

impl Machine {
    /// Assemble a machine without any material adjustment.
    pub fn new(
        kind: MachineKind,
        spec: MachineSpec,
        color: impl Into<String>,
        material: Material,
    ) -> Self {
        Self {
            weight: spec.weight,
            power_consumption: spec.power_consumption,
            adjusted_price: spec.base_price,
            kind,
            material,
            color: color.into(),
            spec,
            videogames: Vec::new(),
        }
    }

    /// Scale weight, base price and power by the material deltas.
    ///
    /// The factory calls this once. Every further call compounds the deltas
    /// again on top of the already adjusted values.
    pub fn apply_material_adjustment(&mut self) {
        let delta = self.material.adjustment();
        self.weight = MaterialAdjustment::apply(self.weight, delta.weight);
        self.adjusted_price = MaterialAdjustment::apply(self.adjusted_price, delta.price);
        self.power_consumption =
            MaterialAdjustment::apply(self.power_consumption, delta.power);
    }

    /// Whether this machine can host `videogame`.
    pub fn accepts(&self, videogame: &VideoGame) -> bool {
        videogame.category() == self.category()
    }

    /// Install a videogame. Games of another category are rejected and the
    /// machine is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AppError::CategoryMismatch` when the categories differ.
    pub fn add_videogame(&mut self, videogame: VideoGame) -> Result<(), AppError> {
        if !self.accepts(&videogame) {
            tracing::warn!(
                code = videogame.code(),
                game_category = %videogame.category(),
                machine_category = %self.category(),
                "Rejected videogame for machine"
            );
            return Err(AppError::CategoryMismatch {
                game: videogame.category(),
                machine: self.category(),
            });
        }
        self.videogames.push(videogame);
        Ok(())
    }

    /// Uninstall the first videogame with `code`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::VideoGameNotFound` when no installed game has that
    /// code; the game list is left unchanged.
    pub fn remove_videogame(&mut self, code: u32) -> Result<VideoGame, AppError> {
        let Some(index) = self.videogames.iter().position(|vg| vg.code() == code) else {
            tracing::warn!(code, "Videogame not installed on machine");
            return Err(AppError::VideoGameNotFound(code, "machine"));
        };
        Ok(self.videogames.remove(index))
    }

    pub fn has_videogame(&self, code: u32) -> bool {
        self.videogames.iter().any(|vg| vg.code() == code)
    }

    pub const fn category(&self) -> MachineCategory {
        self.kind.category()
    }

    pub const fn material(&self) -> Material {
        self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub const fn dimensions(&self) -> [u32; 3] {
        self.spec.dimensions
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn power_consumption(&self) -> f64 {
        self.power_consumption
    }

    pub const fn memory(&self) -> u32 {
        self.spec.memory
    }

    pub fn processor(&self) -> &str {
        &self.spec.processor
    }

    pub const fn base_price(&self) -> f64 {
        self.spec.base_price
    }

    /// Base price after the material adjustment, without the accessory
    pub const fn adjusted_price(&self) -> f64 {
        self.adjusted_price
    }

    /// Machine price: adjusted base price plus the accessory price
    pub fn price(&self) -> f64 {
        self.adjusted_price + self.kind.accessory_price()
    }

    pub fn videogames(&self) -> &[VideoGame] {
        &self.videogames
    }

    pub fn videogames_price(&self) -> f64 {
        self.videogames.iter().map(VideoGame::price).sum()
    }

    /// Machine price plus every installed videogame
    pub fn total_price(&self) -> f64 {
        self.price() + self.videogames_price()
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [width, depth, height] = self.spec.dimensions;
        writeln!(f, "{}", "*".repeat(15))?;
        writeln!(f, "Machine: {}", self.category().display_name())?;
        writeln!(f, "Material: {}", self.material)?;
        writeln!(f, "Color: {}", self.color)?;
        writeln!(f, "Dimensions: {width} x {depth} x {height} cm")?;
        writeln!(f, "Weight: {:.2} kg", self.weight)?;
        writeln!(f, "Power Consumption: {:.2} W", self.power_consumption)?;
        writeln!(f, "Memory: {} MB", self.spec.memory)?;
        writeln!(f, "Processors: {}", self.spec.processor)?;
        self.kind.write_features(f)?;
        writeln!(f, "Base Price: ${:.2}", self.spec.base_price)?;
        let accessory = self.kind.accessory_price();
        if accessory > 0.0 {
            writeln!(f, "Accessory Price: ${accessory:.2}")?;
        }
        writeln!(f, "Price: ${:.2}", self.price())?;
        write!(f, "Videogames:")?;
        if self.videogames.is_empty() {
            write!(f, "\nNo videogames installed")?;
        }
        for vg in &self.videogames {
            write!(f, "\n{vg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classical(material: Material) -> Machine {
        Machine::new(
            MachineKind::Classical(ClassicalArcade {
                vibration: true,
                sound_record_alert: false,
            }),
            MachineSpec {
                dimensions: [65, 50, 170],
                weight: 100.0,
                power_consumption: 200.0,
                memory: 16,
                processor: "SH-2".to_string(),
                base_price: 500.0,
            },
            "blue",
            material,
        )
    }

    fn game(code: u32, category: MachineCategory, price: f64) -> VideoGame {
        VideoGame::new(code, "Game", "", "Writer", "Artist", category, price, 1990)
    }

    #[test]
    fn test_new_has_unadjusted_figures() {
        let machine = classical(Material::Wood);
        assert!((machine.price() - 500.0).abs() < 1e-9);
        assert!((machine.weight() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_accessory_price_is_part_of_price() {
        let machine = Machine::new(
            MachineKind::Vr(VirtualReality {
                glasses_type: "Oculus Rift S".to_string(),
                glasses_resolution: "2560 x 1440".to_string(),
                glasses_price: 600.0,
            }),
            MachineSpec {
                dimensions: [150, 200, 250],
                weight: 250.0,
                power_consumption: 1200.0,
                memory: 512,
                processor: "Intel Core i7".to_string(),
                base_price: 7500.0,
            },
            "black",
            Material::Aluminum,
        );
        assert!((machine.price() - 8100.0).abs() < 1e-9);
    }

    #[test]
    fn test_material_adjustment_leaves_accessory_untouched() {
        let mut machine = Machine::new(
            MachineKind::Dance(DanceRevolution {
                difficulties: vec!["easy".to_string()],
                arrow_directions: vec!["up".to_string()],
                controls_price: 400.0,
            }),
            MachineSpec {
                dimensions: [270, 245, 250],
                weight: 370.0,
                power_consumption: 750.0,
                memory: 512,
                processor: "PowerPC".to_string(),
                base_price: 3000.0,
            },
            "red",
            Material::Wood,
        );
        machine.apply_material_adjustment();
        assert!((machine.adjusted_price() - 2850.0).abs() < 1e-9);
        assert!((machine.price() - 3250.0).abs() < 1e-9);
    }

    #[test]
    fn test_carbon_fiber_adjustment() {
        let mut machine = classical(Material::CarbonFiber);
        machine.apply_material_adjustment();
        assert!((machine.weight() - 85.0).abs() < 1e-9);
        assert!((machine.price() - 600.0).abs() < 1e-9);
        assert!((machine.power_consumption() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_adjustment_compounds() {
        let mut machine = classical(Material::Aluminum);
        machine.apply_material_adjustment();
        machine.apply_material_adjustment();
        assert!((machine.price() - 605.0).abs() < 1e-9);
        assert!((machine.weight() - 90.25).abs() < 1e-9);
        assert!((machine.power_consumption() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_matching_category() {
        let mut machine = classical(Material::Wood);
        assert!(machine.add_videogame(game(1, MachineCategory::Classical, 10.0)).is_ok());
        assert_eq!(machine.videogames().len(), 1);
    }

    #[test]
    fn test_add_rejects_other_category() {
        let mut machine = classical(Material::Wood);
        let result = machine.add_videogame(game(1, MachineCategory::Vr, 10.0));
        assert!(matches!(
            result,
            Err(AppError::CategoryMismatch {
                game: MachineCategory::Vr,
                machine: MachineCategory::Classical
            })
        ));
        assert!(machine.videogames().is_empty());
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut machine = classical(Material::Wood);
        let _ = machine.add_videogame(game(1, MachineCategory::Classical, 10.0));
        let _ = machine.add_videogame(game(2, MachineCategory::Classical, 20.0));

        assert!(matches!(
            machine.remove_videogame(9),
            Err(AppError::VideoGameNotFound(9, _))
        ));
        assert_eq!(machine.videogames().len(), 2);

        let removed = machine.remove_videogame(1).map(|vg| vg.code());
        assert_eq!(removed.ok(), Some(1));
        assert_eq!(machine.videogames().len(), 1);
        assert!(!machine.has_videogame(1));
    }

    #[test]
    fn test_total_price() {
        let mut machine = classical(Material::Wood);
        let _ = machine.add_videogame(game(1, MachineCategory::Classical, 10.0));
        let _ = machine.add_videogame(game(2, MachineCategory::Classical, 20.0));
        assert!((machine.total_price() - 530.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let rendered = classical(Material::Wood).to_string();
        assert!(rendered.contains("Machine: Classical Arcade"));
        assert!(rendered.contains("Vibration: Yes"));
        assert!(rendered.contains("Sound Record Alert: No"));
        assert!(rendered.ends_with("No videogames installed"));
    }
}
