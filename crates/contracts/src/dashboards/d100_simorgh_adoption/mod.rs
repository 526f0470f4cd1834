pub mod dto;

pub use dto::AdoptionEntry;
