use thiserror::Error;

use crate::entities::MachineCategory;

/// Unified application error type.
///
/// Domain variants and record file failures are reported to the user and
/// end only the current operation; console `Io` and `InputClosed` end the
/// session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Machine category tag not in the factory table
    #[error("The category '{0}' doesn't exist")]
    UnknownCategory(String),
    /// Material tag not recognized
    #[error("The material '{0}' doesn't exist")]
    UnknownMaterial(String),
    /// Catalog already holds this code
    #[error("The code {0} already exists, please insert a new one")]
    DuplicateVideoGame(u32),
    /// No videogame with this code
    #[error("Videogame with code {0} is not in the {1}")]
    VideoGameNotFound(u32, &'static str),
    /// Videogame category does not match the machine
    #[error(
        "The videogame can not be added because its category ({game}) is not compatible with a {machine} machine"
    )]
    CategoryMismatch {
        game: MachineCategory,
        machine: MachineCategory,
    },
    /// Game name outside the quick-purchase price table
    #[error("The game {0} is not offered")]
    GameNotOffered(String),
    /// Game picked twice in the same quick purchase
    #[error("The game {0} is already selected")]
    GameAlreadySelected(String),
    /// Delivery address index out of range
    #[error("Address option {0} does not exist")]
    InvalidAddress(usize),
    /// Role lacks the capability for this operation
    #[error("You do not have permission to {0}")]
    Forbidden(&'static str),
    /// Checkout or attach without a machine under construction
    #[error("You must build a machine first")]
    NoMachine,
    /// Console input reached end of file
    #[error("Input closed")]
    InputClosed,
    /// Console input or output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A record file in the data directory could not be read or written
    #[error("Record file error: {0}")]
    Record(#[source] std::io::Error),
    /// Delivery record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the session can carry on after reporting this error.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::InputClosed)
    }

    /// Whether this is an internal fault rather than a rejected request.
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Record(_) | Self::Serialization(_)
        )
    }
}
