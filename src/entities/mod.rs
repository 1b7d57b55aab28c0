// Entity Models
// A closed animal taxonomy: the species tag drives habitat and group-label text.
//
// Each entity has:
// - A species tag from a fixed set (no open-ended subclassing)
// - Shared attributes, identical for every species
// - Per-species static text looked up from the tag

pub mod animal;
pub mod species;

pub use animal::Animal;
pub use species::Species;
