//! Use cases - user story orchestration over the ports.

pub mod characters;

pub use characters::{CharacterError, CharacterService};
