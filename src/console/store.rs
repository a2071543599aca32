use std::io::{BufRead, Write};

use super::Prompt;
use crate::entities::{
    Address, Client, MachineCategory, Manager, Material, Role, User, VideoGame,
};
use crate::error::AppError;
use crate::records::RegistryFilter;
use crate::services::{CatalogService, PredefinedMachines, PurchaseDecision, PurchaseService};
use crate::state::AppState;
use crate::utils::validation;

const USER_MENU: &str = "Select the type of user:\n1.Manager\n2.Client\n3.Exit";
const MANAGER_MENU: &str = "1.Add Videogame\n2.Remove Videogame\n3.Edit Videogame Description\n4.Show Videogames\n5.Exit";
const CLIENT_MENU: &str = "1.Buy Machine\n2.Show Registered Machines\n3.Show Videogames\n4.Add Address\n5.Add Phone\n6.Exit";
const MATERIAL_MENU: &str = "Select the material:\n1.Wood\n2.Aluminum\n3.Carbon Fiber";
const MACHINE_MENU: &str = "1.Add videogame to the machine\n2.Remove videogame from the machine\n3.Continue to checkout\n4.Cancel purchase";
const HD_MENU: &str = "Do you want the videogame in high definition?\n1.Yes\n2.No";

/// Catalog and machine store. Loops over user sessions until Exit.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    while let Some(mut user) = select_user(state, prompt)? {
        tracing::info!(user = user.id(), role = ?user.role(), "Session started");
        match user.role() {
            Role::Manager => manager_session(state, prompt, &user)?,
            Role::Client => client_session(state, prompt, &mut user)?,
        }
        tracing::info!(user = user.id(), "Session ended");
    }
    Ok(())
}

fn select_user<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<User>, AppError> {
    match prompt.choose(USER_MENU, 3)? {
        1 => read_manager(prompt).map(|m| Some(User::Manager(m))),
        2 => read_client(state, prompt).map(|c| Some(User::Client(c))),
        _ => Ok(None),
    }
}

fn read_manager<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Manager, AppError> {
    let id = prompt.ask("ID:", |s| validation::non_negative(s, "ID"))?;
    let name = prompt.ask("Name:", validation::person_name)?;
    let email = prompt.ask("Email:", validation::email)?;
    Ok(Manager::new(id, name, email))
}

fn read_client<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<Client, AppError> {
    let id = prompt.ask("ID:", |s| validation::non_negative(s, "ID"))?;
    let name = prompt.ask("Name:", validation::person_name)?;
    let email = prompt.ask("Email:", validation::email)?;
    let phone = prompt.ask("Phone number:", validation::phone)?;
    prompt.say("Address:")?;
    let address = read_address(state, prompt)?;
    Ok(Client::new(id, name, email, phone, address))
}

fn read_address<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<Address, AppError> {
    let street = prompt.ask("Street:", validation::street)?;
    let zip_code = prompt.ask("Zip code:", |s| validation::non_negative(s, "Zip code"))?;
    let city = prompt.ask("City:", |s| validation::place(s, "City"))?;
    let default_country = state.config.default_country.as_str();
    let country = prompt.ask(
        &format!("Country (leave blank for {default_country}):"),
        |s| {
            if s.trim().is_empty() {
                Ok(default_country.to_string())
            } else {
                validation::place(s, "Country")
            }
        },
    )?;
    Ok(Address::new(street, zip_code, city, country))
}

// Manager

fn manager_session<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &User,
) -> Result<(), AppError> {
    prompt.say(format!("Welcome, {}", user.name()))?;
    loop {
        let result = match prompt.choose(MANAGER_MENU, 5)? {
            1 => add_videogame(state, prompt, user),
            2 => remove_videogame(state, prompt, user),
            3 => edit_description(state, prompt, user),
            4 => show_videogames(state, prompt),
            _ => return Ok(()),
        };
        if let Err(e) = result {
            prompt.report(e)?;
        }
    }
}

fn add_videogame<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &User,
) -> Result<(), AppError> {
    let category = choose_category(prompt)?;
    let code = loop {
        let code = prompt.ask("Code:", |s| validation::non_negative(s, "Code"))?;
        if !state.catalog.contains(code) {
            break code;
        }
        prompt.say("The code already exists, please insert a new one.")?;
    };
    let name = prompt.ask("Name:", |s| validation::required(s, "Name"))?;
    let description = prompt.line("Description:")?;
    let storytelling = prompt.ask("Storytelling creator:", |s| {
        validation::creator(s, "Storytelling creator")
    })?;
    let graphics = prompt.ask("Graphics creator:", |s| {
        validation::creator(s, "Graphics creator")
    })?;
    let price = prompt.ask("Price:", validation::price)?;
    let year = prompt.ask("Year:", validation::year)?;

    let videogame = VideoGame::new(
        code,
        name,
        description,
        storytelling,
        graphics,
        category,
        price,
        year,
    );
    CatalogService::add_videogame(state, user, videogame)?;
    prompt.say("Videogame added successfully.")
}

fn remove_videogame<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &User,
) -> Result<(), AppError> {
    let code = prompt.ask("Code of the videogame to remove:", |s| {
        validation::non_negative(s, "Code")
    })?;
    CatalogService::remove_videogame(state, user, code)?;
    prompt.say("Videogame removed successfully.")
}

fn edit_description<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &User,
) -> Result<(), AppError> {
    let code = prompt.ask("Code of the videogame to edit:", |s| {
        validation::non_negative(s, "Code")
    })?;
    if !state.catalog.contains(code) {
        return Err(AppError::VideoGameNotFound(code, "catalog"));
    }
    let description = prompt.line("New description:")?;
    CatalogService::update_description(state, user, code, &description)?;
    prompt.say("Description updated successfully.")
}

fn choose_category<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<MachineCategory, AppError> {
    let menu = format!("Select the category:\n{}", MachineCategory::menu());
    #[allow(clippy::cast_possible_truncation)]
    let option = prompt.choose(&menu, MachineCategory::ALL.len() as u32)?;
    MachineCategory::from_menu_option(option).ok_or_else(|| AppError::UnknownCategory(option.to_string()))
}

fn show_videogames<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    let category = prompt.ask(
        "Enter a category to filter (dance, classical, shooter, races, vr) or leave blank for all:",
        |s| {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                MachineCategory::from_str(s)
                    .map(Some)
                    .ok_or_else(|| format!("Unknown category: {}", s.trim()))
            }
        },
    )?;

    let videogames = CatalogService::list(state, category);
    if videogames.is_empty() {
        return prompt.say("No videogames available.");
    }
    for videogame in videogames {
        prompt.say(videogame)?;
    }
    Ok(())
}

// Client

fn client_session<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &mut User,
) -> Result<(), AppError> {
    prompt.say(format!("Welcome, {}", user.name()))?;
    loop {
        let result = match prompt.choose(CLIENT_MENU, 6)? {
            1 => buy_machine(state, prompt, user),
            2 => show_registered_machines(state, prompt),
            3 => show_videogames(state, prompt),
            4 => add_address(state, prompt, user),
            5 => add_phone(prompt, user),
            _ => return Ok(()),
        };
        if let Err(e) = result {
            prompt.report(e)?;
        }
    }
}

fn buy_machine<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &User,
) -> Result<(), AppError> {
    let category = choose_category(prompt)?;
    let material_option = prompt.choose(MATERIAL_MENU, 3)?;
    let material = Material::from_menu_option(material_option)
        .ok_or_else(|| AppError::UnknownMaterial(material_option.to_string()))?;
    let color = prompt.ask("Color:", |s| validation::place(s, "Color"))?;

    let machine =
        PurchaseService::build_machine(state, user, &PredefinedMachines, category, &color, material)?;
    prompt.say(machine)?;

    loop {
        let result = match prompt.choose(MACHINE_MENU, 4)? {
            1 => attach_videogame(state, prompt),
            2 => detach_videogame(state, prompt),
            3 => return checkout(state, prompt, user),
            _ => {
                PurchaseService::discard_machine(state);
                return prompt.say("Purchase canceled.");
            }
        };
        if let Err(e) = result {
            prompt.report(e)?;
        }
    }
}

fn attach_videogame<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    let available = PurchaseService::available_videogames(state)?;
    if available.is_empty() {
        return prompt.say("There are no videogames for this machine category.");
    }
    prompt.say("Available videogames:")?;
    let listing: Vec<String> = available
        .iter()
        .map(|vg| {
            format!(
                "{} - {} {} (${:.2})",
                vg.code(),
                vg.name(),
                vg.year(),
                vg.price()
            )
        })
        .collect();
    for line in listing {
        prompt.say(line)?;
    }

    let code = prompt.ask("Code of the videogame to add:", |s| {
        validation::non_negative(s, "Code")
    })?;
    let high_definition = prompt.choose(HD_MENU, 2)? == 1;
    let videogame = PurchaseService::attach_videogame(state, code, high_definition)?;
    prompt.say(format!(
        "The videogame {} has been added to the machine (${:.2}).",
        videogame.name(),
        videogame.price()
    ))
}

fn detach_videogame<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    let code = prompt.ask("Code of the videogame to remove:", |s| {
        validation::non_negative(s, "Code")
    })?;
    let videogame = PurchaseService::detach_videogame(state, code)?;
    prompt.say(format!(
        "The videogame {} has been removed from the machine.",
        videogame.name()
    ))
}

fn checkout<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
    user: &User,
) -> Result<(), AppError> {
    let client = user.as_client().ok_or(AppError::Forbidden("buy a machine"))?;
    let machine = state.machine.as_ref().ok_or(AppError::NoMachine)?;
    let summary = format!("{machine}\nTotal Price: ${:.2}", machine.total_price());
    prompt.say(summary)?;

    let decision = prompt.ask("Type 'buy' to confirm or 'cancel' to discard the machine:", |s| {
        PurchaseDecision::from_str(s)
            .ok_or_else(|| "Invalid option. Please type 'buy' or 'cancel'.".to_string())
    })?;
    if decision == PurchaseDecision::Cancel {
        PurchaseService::discard_machine(state);
        return prompt.say("Purchase canceled.");
    }

    let menu = address_menu(client);
    let option = prompt.choose(&menu, u32::try_from(client.addresses().len()).unwrap_or(u32::MAX))?;
    let receipt = PurchaseService::checkout(state, client, option as usize)?;
    prompt.say(format!("Machine registered: {}", receipt.entry))?;
    prompt.say(format!("Delivery will be sent to: {}", receipt.delivery.address))?;
    prompt.say(format!(
        "Delivery record: {}",
        receipt.delivery_path.display()
    ))?;
    prompt.say(format!("Total Price: ${:.2}", receipt.total_price()))
}

fn address_menu(client: &Client) -> String {
    let mut menu = "Select the delivery address:".to_string();
    for (i, address) in client.addresses().iter().enumerate() {
        menu.push_str(&format!("\n{}.{address}", i + 1));
    }
    menu
}

fn show_registered_machines<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    let mut filter = RegistryFilter::default();
    if prompt.confirm("Do you want to search the registered machines? (yes/no)")? {
        filter.price_range = prompt.ask(
            "Price range as min,max (leave blank to skip):",
            |s| {
                if s.trim().is_empty() {
                    Ok(None)
                } else {
                    RegistryFilter::parse_price_range(s).map(Some)
                }
            },
        )?;
        let material = prompt.line("Material (leave blank to skip):")?;
        filter.material = (!material.is_empty()).then_some(material);
    }

    match state.records.machines.search(&filter)? {
        None => prompt.say("No registered machines yet."),
        Some(entries) if entries.is_empty() => {
            prompt.say("No machines match your search criteria.")
        }
        Some(entries) => {
            prompt.say("Registered machines:")?;
            for entry in entries {
                prompt.say(entry)?;
            }
            Ok(())
        }
    }
}

fn add_address<R: BufRead, W: Write>(
    state: &AppState,
    prompt: &mut Prompt<R, W>,
    user: &mut User,
) -> Result<(), AppError> {
    let client = user.as_client_mut().ok_or(AppError::Forbidden("add an address"))?;
    let address = read_address(state, prompt)?;
    client.add_address(address.street, address.zip_code, address.city, address.country);
    prompt.say(format!(
        "Address added. You now have {} addresses.",
        client.addresses().len()
    ))
}

fn add_phone<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    user: &mut User,
) -> Result<(), AppError> {
    let client = user.as_client_mut().ok_or(AppError::Forbidden("add a phone"))?;
    let phone = prompt.ask("Phone number:", validation::phone)?;
    client.add_phone(phone);
    prompt.say(format!("Phones: {}", client.phones().join(" --- ")))
}
