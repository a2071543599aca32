use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Address, Client, Machine};

/// A purchased machine on its way to one of the client's addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub client: Client,
    pub address: Address,
    pub machine: Machine,
    pub total_price: f64,
    pub created_at: DateTime<Local>,
}

impl Delivery {
    pub fn new(client: Client, address: Address, machine: Machine) -> Self {
        let total_price = machine.total_price();
        Self {
            client,
            address,
            machine,
            total_price,
            created_at: Local::now(),
        }
    }

    /// File name of the persisted record, down to the microsecond.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }

    /// Alternative name for the `attempt`-th try when the plain name is taken.
    pub fn numbered_file_name(&self, attempt: u32) -> String {
        format!("{}_{attempt}.json", self.file_stem())
    }

    fn file_stem(&self) -> String {
        format!(
            "delivery_{}_{}",
            self.created_at.format("%Y-%m-%d_%H%M%S_%6f"),
            self.client.profile.id
        )
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(10))?;
        writeln!(f, "Client: {}", self.client)?;
        writeln!(f, "Address: {}", self.address)?;
        write!(f, "Machine: {}", self.machine)
    }
}
