use std::io::Cursor;
use std::path::Path;

use arcade_sales::config::Config;
use arcade_sales::console::{self, Prompt};
use arcade_sales::entities::{MachineCategory, VideoGame};
use arcade_sales::state::AppState;

/// Test helper: fresh state whose records live in `dir`.
pub fn test_state(dir: &Path) -> AppState {
    AppState::new(Config::with_data_dir(dir))
}

/// Test helper: state with a small catalog already loaded.
pub fn stocked_state(dir: &Path) -> AppState {
    let mut state = test_state(dir);
    let games = [
        VideoGame::new(1, "Step Up", "Dance hits", "Konami", "Konami", MachineCategory::Dance, 50.0, 2001),
        VideoGame::new(2, "Kart Rush", "Go karts", "Nintendo", "Nintendo", MachineCategory::Races, 40.0, 1998),
        VideoGame::new(3, "Moon Walk", "Retro moves", "Sega", "Sega", MachineCategory::Dance, 30.0, 1995),
    ];
    for game in games {
        state.catalog.insert(game).unwrap_or_default();
    }
    state
}

/// Test helper: feed `lines` to the console and return everything it printed.
pub fn run_script(state: &mut AppState, lines: &[&str]) -> anyhow::Result<String> {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut prompt = Prompt::new(Cursor::new(script.into_bytes()), Vec::new());
    console::run(state, &mut prompt)?;
    Ok(String::from_utf8(prompt.into_output())?)
}

/// Test helper: read a record file, empty if it does not exist.
pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}
