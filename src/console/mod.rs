//! Interactive text menus on top of the services.
//!
//! Everything here is generic over the reader and writer so the flows can be
//! driven by scripted input in tests.

pub mod prompt;
pub mod quick_purchase;
pub mod store;

use std::io::{BufRead, Write};

pub use prompt::Prompt;

use crate::error::AppError;
use crate::state::AppState;

const MAIN_MENU: &str = "Welcome to the arcade machine shop\n1. Quick purchase\n2. Arcade store\n3. Exit";

/// Top-level loop. Closing the input ends the program normally.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    match main_menu(state, prompt) {
        Err(AppError::InputClosed) => {
            tracing::debug!("Input closed");
            Ok(())
        }
        other => other,
    }
}

fn main_menu<R: BufRead, W: Write>(
    state: &mut AppState,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    loop {
        match prompt.choose(MAIN_MENU, 3)? {
            1 => quick_purchase::run(&state.records, prompt)?,
            2 => store::run(state, prompt)?,
            _ => return prompt.say("Goodbye!"),
        }
    }
}
