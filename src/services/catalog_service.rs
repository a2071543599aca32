use crate::entities::{MachineCategory, User, VideoGame};
use crate::error::AppError;
use crate::state::AppState;

pub struct CatalogService;

impl CatalogService {
    /// Add a videogame to the catalog (manager only)
    pub fn add_videogame(
        state: &mut AppState,
        user: &User,
        videogame: VideoGame,
    ) -> Result<(), AppError> {
        Self::require_manager(user)?;

        let code = videogame.code();
        let category = videogame.category();
        state.catalog.insert(videogame).inspect_err(|e| {
            tracing::warn!(code, "Catalog insert rejected: {e}");
        })?;

        tracing::info!(code, %category, manager = user.id(), "Videogame added to catalog");
        Ok(())
    }

    /// Remove a videogame from the catalog by code (manager only)
    pub fn remove_videogame(
        state: &mut AppState,
        user: &User,
        code: u32,
    ) -> Result<VideoGame, AppError> {
        Self::require_manager(user)?;

        let removed = state.catalog.remove(code).inspect_err(|e| {
            tracing::warn!(code, "Catalog removal rejected: {e}");
        })?;

        tracing::info!(code, manager = user.id(), "Videogame removed from catalog");
        Ok(removed)
    }

    /// Replace the description of a catalog entry (manager only)
    pub fn update_description(
        state: &mut AppState,
        user: &User,
        code: u32,
        description: &str,
    ) -> Result<(), AppError> {
        Self::require_manager(user)?;

        let videogame = state
            .catalog
            .get_mut(code)
            .ok_or(AppError::VideoGameNotFound(code, "catalog"))?;
        videogame.set_description(description);

        tracing::info!(code, "Videogame description updated");
        Ok(())
    }

    /// Catalog entries, optionally restricted to one category
    pub fn list(state: &AppState, category: Option<MachineCategory>) -> Vec<&VideoGame> {
        match category {
            Some(category) => state.catalog.by_category(category).collect(),
            None => state.catalog.iter().collect(),
        }
    }

    fn require_manager(user: &User) -> Result<(), AppError> {
        if user.role().can_manage_catalog() {
            Ok(())
        } else {
            Err(AppError::Forbidden("manage the catalog"))
        }
    }
}
