pub mod catalog_service;
pub mod machine_factory;
pub mod purchase_service;
pub mod quick_purchase_service;

pub use catalog_service::CatalogService;
pub use machine_factory::{MachineFactory, PredefinedMachines};
pub use purchase_service::{PurchaseService, Receipt};
pub use quick_purchase_service::{PurchaseDecision, QuickPurchaseService};
