use crate::entities::{
    ClassicalArcade, DanceRevolution, Machine, MachineCategory, MachineKind, MachineSpec,
    Material, RacingMachine, ShootingMachine, VirtualReality,
};
use crate::error::AppError;

/// Builds machines from category and material tags.
pub trait MachineFactory {
    /// Build a machine of `category`, painted `color`, made of `material`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownCategory` or `AppError::UnknownMaterial`
    /// for tags the factory does not know.
    fn create_machine(&self, category: &str, color: &str, material: &str)
    -> Result<Machine, AppError>;
}

/// Factory with one fixed spec sheet per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredefinedMachines;

impl PredefinedMachines {
    /// Build a machine from already parsed tags. The material adjustment is
    /// applied before the machine is returned.
    pub fn build(category: MachineCategory, color: &str, material: Material) -> Machine {
        let (kind, spec) = Self::spec_sheet(category);
        let mut machine = Machine::new(kind, spec, color, material);
        machine.apply_material_adjustment();

        tracing::debug!(
            %category,
            %material,
            color,
            price = machine.price(),
            "Machine built"
        );
        machine
    }

    /// Baseline figures and accessories for `category`
    pub fn spec_sheet(category: MachineCategory) -> (MachineKind, MachineSpec) {
        match category {
            MachineCategory::Dance => (
                MachineKind::Dance(DanceRevolution {
                    difficulties: strings(&["easy", "medium", "hard"]),
                    arrow_directions: strings(&["up", "right", "down", "left"]),
                    controls_price: 400.0,
                }),
                spec([270, 245, 250], 370.0, 750.0, 512, "PowerPC", 3000.0),
            ),
            MachineCategory::Classical => (
                MachineKind::Classical(ClassicalArcade {
                    vibration: true,
                    sound_record_alert: true,
                }),
                spec([65, 50, 170], 70.0, 200.0, 16, "SH-2", 500.0),
            ),
            MachineCategory::Shooter => (
                MachineKind::Shooter(ShootingMachine {
                    number_of_guns: 2,
                    gun_type: "rifle".to_string(),
                    gun_accuracy: 1.0,
                    reload_mechanism: "automatic".to_string(),
                    safety_lock: true,
                }),
                spec([75, 100, 200], 100.0, 300.0, 512, "ARM Cortex", 3000.0),
            ),
            MachineCategory::Races => (
                MachineKind::Races(RacingMachine {
                    wheel_type: "high pressure".to_string(),
                    pedal_sensitivity: 85.0,
                    seat_type: "Sports seat".to_string(),
                    vibration: true,
                }),
                spec(
                    [120, 150, 180],
                    150.0,
                    250.0,
                    1024,
                    "MIPS R3000/R4000",
                    3000.0,
                ),
            ),
            MachineCategory::Vr => (
                MachineKind::Vr(VirtualReality {
                    glasses_type: "Oculus Rift S".to_string(),
                    glasses_resolution: "2560 x 1440".to_string(),
                    glasses_price: 600.0,
                }),
                spec([150, 200, 250], 250.0, 1200.0, 512, "Intel Core i7", 7500.0),
            ),
        }
    }
}

impl MachineFactory for PredefinedMachines {
    fn create_machine(
        &self,
        category: &str,
        color: &str,
        material: &str,
    ) -> Result<Machine, AppError> {
        let category = MachineCategory::from_str(category)
            .ok_or_else(|| AppError::UnknownCategory(category.to_string()))?;
        let material = Material::from_str(material)
            .ok_or_else(|| AppError::UnknownMaterial(material.to_string()))?;
        Ok(Self::build(category, color, material))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn spec(
    dimensions: [u32; 3],
    weight: f64,
    power_consumption: f64,
    memory: u32,
    processor: &str,
    base_price: f64,
) -> MachineSpec {
    MachineSpec {
        dimensions,
        weight,
        power_consumption,
        memory,
        processor: processor.to_string(),
        base_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_dance_wood_red() -> anyhow::Result<()> {
        let machine = PredefinedMachines.create_machine("dance", "red", "wood")?;

        assert_eq!(machine.category(), MachineCategory::Dance);
        assert_eq!(machine.color(), "red");
        assert_eq!(machine.dimensions(), [270, 245, 250]);
        assert_eq!(machine.memory(), 512);
        assert_eq!(machine.processor(), "PowerPC");
        assert!(close(machine.base_price(), 3000.0));
        assert!(close(machine.weight(), 407.0));
        assert!(close(machine.power_consumption(), 862.5));
        assert!(close(machine.price(), 3250.0));
        Ok(())
    }

    #[test]
    fn test_every_category_builds() -> anyhow::Result<()> {
        for category in MachineCategory::ALL {
            let machine =
                PredefinedMachines.create_machine(category.as_str(), "black", "aluminium")?;
            assert_eq!(machine.category(), category);
            assert_eq!(machine.material(), Material::Aluminum);
        }
        Ok(())
    }

    #[test]
    fn test_vr_carbon_fiber_includes_glasses() -> anyhow::Result<()> {
        let machine = PredefinedMachines.create_machine("vr", "white", "carbon_fiber")?;
        assert!(close(machine.price(), 9600.0));
        assert!(close(machine.weight(), 212.5));
        assert!(close(machine.power_consumption(), 1080.0));
        Ok(())
    }

    #[test]
    fn test_classical_has_no_accessory() -> anyhow::Result<()> {
        let machine = PredefinedMachines.create_machine("classical", "green", "aluminum")?;
        assert!(close(machine.price(), 550.0));
        Ok(())
    }

    #[test]
    fn test_unknown_category() {
        let result = PredefinedMachines.create_machine("pinball", "red", "wood");
        assert!(matches!(result, Err(AppError::UnknownCategory(tag)) if tag == "pinball"));
    }

    #[test]
    fn test_unknown_material() {
        let result = PredefinedMachines.create_machine("dance", "red", "plastic");
        assert!(matches!(result, Err(AppError::UnknownMaterial(_))));
    }
}
