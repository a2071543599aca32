use std::io::{BufRead, Write};

use super::Prompt;
use crate::entities::quick_order::{GAME_PRICES, MATERIAL_PRICES, game_price};
use crate::entities::{Material, QuickOrder};
use crate::error::AppError;
use crate::records::Records;
use crate::services::{PurchaseDecision, QuickPurchaseService};
use crate::utils::validation;

const MENU: &str = "1. Buy\n2. Purchase History\n3. Exit";

/// Fixed-catalog purchase flow. Returns when the user picks Exit.
pub fn run<R: BufRead, W: Write>(
    records: &Records,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    prompt.say("Welcome, here you can buy the arcade video game machine of your choice")?;
    loop {
        let option = prompt.line(MENU)?;
        let result = match option.as_str() {
            "1" => buy(records, prompt),
            "2" => show_history(records, prompt),
            "3" => return Ok(()),
            _ => prompt.say("Please, choose a valid option."),
        };
        if let Err(e) = result {
            prompt.report(e)?;
        }
    }
}

fn material_menu() -> String {
    let mut menu = "Please choose the material for the arcade machine:".to_string();
    for (i, (material, price)) in MATERIAL_PRICES.iter().enumerate() {
        menu.push_str(&format!("\n{}. {} (${price})", i + 1, material.display_name()));
    }
    menu
}

fn games_menu() -> String {
    let mut menu = "Please choose the games that you want in your machine.\nGame Catalog:".to_string();
    for (i, (name, price)) in GAME_PRICES.iter().enumerate() {
        menu.push_str(&format!("\n{}. {name} (${price})", i + 1));
    }
    menu.push_str(&format!("\n{}. Finish Game Selection", GAME_PRICES.len() + 1));
    menu
}

fn buy<R: BufRead, W: Write>(records: &Records, prompt: &mut Prompt<R, W>) -> Result<(), AppError> {
    prompt.say("Please enter your details below:")?;
    let name = prompt.ask("Name:", |s| validation::required(s, "Name"))?;
    let address = prompt.ask("Address:", |s| validation::required(s, "Address"))?;

    #[allow(clippy::cast_possible_truncation)]
    let material_option = prompt.choose(&material_menu(), MATERIAL_PRICES.len() as u32)?;
    let material = Material::from_menu_option(material_option)
        .ok_or_else(|| AppError::UnknownMaterial(material_option.to_string()))?;
    prompt.say(format!(
        "You have selected a {} arcade machine.",
        material.display_name().to_lowercase()
    ))?;

    let mut order = QuickOrder::new(name, address, material);
    let finish = GAME_PRICES.len() + 1;
    let menu = games_menu();
    loop {
        #[allow(clippy::cast_possible_truncation)]
        let option = prompt.choose(&menu, finish as u32)? as usize;
        if option == finish {
            break;
        }
        let Some(&(game, _)) = option.checked_sub(1).and_then(|i| GAME_PRICES.get(i)) else {
            return Err(AppError::GameNotOffered(option.to_string()));
        };
        match QuickPurchaseService::add_game(records, &mut order, game) {
            Ok(()) => prompt.say(format!(
                "The game {game} has been added to the list of games. :D"
            ))?,
            Err(e @ AppError::GameAlreadySelected(_)) => {
                prompt.say(format!("{e}. Please choose another."))?;
            }
            Err(e) => prompt.report(e)?,
        }
    }

    show_summary(prompt, &order)?;
    let decision = prompt.ask(
        "Would you like to buy or cancel? (Type 'buy' to purchase or 'cancel' to return to the menu):",
        |s| {
            PurchaseDecision::from_str(s).ok_or_else(|| {
                "Invalid option. Please type 'buy' to purchase or 'cancel' to return to the menu."
                    .to_string()
            })
        },
    )?;

    QuickPurchaseService::finish(records, &order, decision)?;
    match decision {
        PurchaseDecision::Buy => prompt.say("Purchase recorded. Returning to main menu."),
        PurchaseDecision::Cancel => prompt.say("Purchase canceled. Returning to main menu."),
    }
}

fn show_summary<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    order: &QuickOrder,
) -> Result<(), AppError> {
    prompt.say("\nPurchase Summary:")?;
    prompt.say(format!("Client Name: {}", order.client_name))?;
    prompt.say(format!("Client Address: {}", order.client_address))?;
    prompt.say(format!(
        "Arcade Machine Material: {}",
        order.material.display_name()
    ))?;
    prompt.say(format!("Material Cost: ${:.2}", order.material_price()))?;
    prompt.say("Games in the Arcade Machine:")?;
    if order.games().is_empty() {
        prompt.say("No games selected.")?;
    }
    for game in order.games() {
        let price = game_price(game).unwrap_or_default();
        prompt.say(format!("- {game} (${price:.2})"))?;
    }
    prompt.say(format!("Total Cost of Games: ${:.2}", order.games_price()))?;
    prompt.say(format!("Total Cost: ${:.2}", order.total_price()))
}

fn show_history<R: BufRead, W: Write>(
    records: &Records,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    match records.purchases.entries()? {
        None => prompt.say("No purchase history file found."),
        Some(lines) if lines.is_empty() => prompt.say("No purchase history found."),
        Some(lines) => {
            prompt.say("\nPurchase History:")?;
            for line in lines {
                prompt.say(line)?;
            }
            Ok(())
        }
    }
}
