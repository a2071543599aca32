pub mod text;
pub mod validation;

pub use text::capitalize;
