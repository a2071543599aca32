pub mod category;
pub mod delivery;
pub mod machine;
pub mod material;
pub mod quick_order;
pub mod user;
pub mod videogame;

pub use category::MachineCategory;
pub use delivery::Delivery;
pub use machine::{
    ClassicalArcade, DanceRevolution, Machine, MachineKind, MachineSpec, RacingMachine,
    ShootingMachine, VirtualReality,
};
pub use material::{Material, MaterialAdjustment};
pub use quick_order::QuickOrder;
pub use user::{Address, Client, Manager, Profile, Role, User};
pub use videogame::VideoGame;
