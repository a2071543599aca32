use crate::config::Config;
use crate::entities::{Machine, MachineCategory, VideoGame};
use crate::error::AppError;
use crate::records::Records;

/// Videogames on sale, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<VideoGame>,
}

impl Catalog {
    #[must_use]
    pub const fn new() -> Self {
        Self { games: Vec::new() }
    }

    /// Insert a videogame unless its code is taken.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateVideoGame` if the code already exists.
    pub fn insert(&mut self, videogame: VideoGame) -> Result<(), AppError> {
        if self.contains(videogame.code()) {
            return Err(AppError::DuplicateVideoGame(videogame.code()));
        }
        self.games.push(videogame);
        Ok(())
    }

    /// Remove the videogame with `code`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::VideoGameNotFound` if no entry has that code.
    pub fn remove(&mut self, code: u32) -> Result<VideoGame, AppError> {
        let index = self
            .games
            .iter()
            .position(|vg| vg.code() == code)
            .ok_or(AppError::VideoGameNotFound(code, "catalog"))?;
        Ok(self.games.remove(index))
    }

    pub fn contains(&self, code: u32) -> bool {
        self.get(code).is_some()
    }

    pub fn get(&self, code: u32) -> Option<&VideoGame> {
        self.games.iter().find(|vg| vg.code() == code)
    }

    pub fn get_mut(&mut self, code: u32) -> Option<&mut VideoGame> {
        self.games.iter_mut().find(|vg| vg.code() == code)
    }

    pub fn by_category(&self, category: MachineCategory) -> impl Iterator<Item = &VideoGame> {
        self.games.iter().filter(move |vg| vg.category() == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoGame> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Application context passed to every workflow.
///
/// Holds the catalog for the whole program run and the machine currently
/// being assembled by a client, if any.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub machine: Option<Machine>,
    pub records: Records,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let records = Records::new(&config.data_dir);
        Self {
            config,
            catalog: Catalog::new(),
            machine: None,
            records,
        }
    }
}
