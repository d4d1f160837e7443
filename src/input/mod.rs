// src/input/mod.rs

pub mod assembly;
pub mod input_deck;
pub mod parser;

pub use assembly::{parse_assembly_records, read_assembly_records, AssemblyRecord};
pub use input_deck::InputDeck;
pub use parser::parse_input_deck;
