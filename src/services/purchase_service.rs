use std::path::PathBuf;

use crate::entities::{Client, Delivery, Machine, MachineCategory, Material, User, VideoGame};
use crate::error::AppError;
use crate::records::RegistryEntry;
use crate::services::MachineFactory;
use crate::state::AppState;

/// Outcome of a completed store purchase.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub entry: RegistryEntry,
    pub delivery: Delivery,
    pub delivery_path: PathBuf,
}

impl Receipt {
    pub const fn total_price(&self) -> f64 {
        self.delivery.total_price
    }
}

/// Client side of the store: build a machine, install games, check out.
pub struct PurchaseService;

impl PurchaseService {
    /// Build a machine for `user` and make it the machine under construction.
    /// Any previously unfinished machine is dropped.
    pub fn build_machine<'a>(
        state: &'a mut AppState,
        user: &User,
        factory: &impl MachineFactory,
        category: MachineCategory,
        color: &str,
        material: Material,
    ) -> Result<&'a Machine, AppError> {
        if !user.role().can_purchase() {
            return Err(AppError::Forbidden("buy a machine"));
        }

        let machine = factory.create_machine(category.as_str(), color, material.as_str())?;
        if state.machine.is_some() {
            tracing::debug!("Discarding unfinished machine");
        }

        tracing::info!(
            client = user.id(),
            %category,
            %material,
            price = machine.price(),
            "Machine under construction"
        );
        Ok(state.machine.insert(machine))
    }

    /// Catalog games that fit the machine under construction
    pub fn available_videogames(state: &AppState) -> Result<Vec<&VideoGame>, AppError> {
        let machine = state.machine.as_ref().ok_or(AppError::NoMachine)?;
        Ok(state.catalog.by_category(machine.category()).collect())
    }

    /// Install a copy of catalog game `code` on the machine under
    /// construction, with the HD surcharge applied to that copy only.
    ///
    /// Failures leave the machine unchanged. Rejected requests are only
    /// traced; internal faults are also written to the error log.
    pub fn attach_videogame(
        state: &mut AppState,
        code: u32,
        high_definition: bool,
    ) -> Result<VideoGame, AppError> {
        Self::try_attach(state, code, high_definition).inspect_err(|e| {
            if e.is_fault() {
                state.records.errors.append(e);
            } else {
                tracing::warn!(code, "Videogame not installed: {e}");
            }
        })
    }

    fn try_attach(
        state: &mut AppState,
        code: u32,
        high_definition: bool,
    ) -> Result<VideoGame, AppError> {
        let machine = state.machine.as_mut().ok_or(AppError::NoMachine)?;
        let mut videogame = state
            .catalog
            .get(code)
            .cloned()
            .ok_or(AppError::VideoGameNotFound(code, "catalog"))?;

        if machine.has_videogame(code) {
            return Err(AppError::GameAlreadySelected(videogame.name().to_string()));
        }

        videogame.high_definition(high_definition);
        machine.add_videogame(videogame.clone())?;

        tracing::info!(code, high_definition, price = videogame.price(), "Videogame installed");
        Ok(videogame)
    }

    /// Uninstall game `code` from the machine under construction
    pub fn detach_videogame(state: &mut AppState, code: u32) -> Result<VideoGame, AppError> {
        let machine = state.machine.as_mut().ok_or(AppError::NoMachine)?;
        machine.remove_videogame(code)
    }

    /// Drop the machine under construction, if any
    pub fn discard_machine(state: &mut AppState) -> Option<Machine> {
        let discarded = state.machine.take();
        if discarded.is_some() {
            tracing::info!("Machine purchase cancelled");
        }
        discarded
    }

    /// Sell the machine under construction to `client`, shipping to the
    /// address at 1-based `address_option`.
    ///
    /// Appends the registry line, then writes the delivery record. The
    /// machine under construction is consumed only once the address is valid
    /// and the registry line is written.
    pub fn checkout(
        state: &mut AppState,
        client: &Client,
        address_option: usize,
    ) -> Result<Receipt, AppError> {
        if state.machine.is_none() {
            return Err(AppError::NoMachine);
        }
        let address = client
            .address(address_option)
            .cloned()
            .ok_or(AppError::InvalidAddress(address_option))?;
        let machine = state.machine.as_ref().ok_or(AppError::NoMachine)?;
        let entry = RegistryEntry::from_machine(machine);
        state.records.machines.register(&entry)?;

        let machine = state.machine.take().ok_or(AppError::NoMachine)?;

        let delivery = Delivery::new(client.clone(), address, machine);
        let delivery_path = state.records.deliveries.save(&delivery)?;

        tracing::info!(
            client = client.profile.id,
            total = delivery.total_price,
            "Machine sold"
        );
        Ok(Receipt {
            entry,
            delivery,
            delivery_path,
        })
    }
}
