// src/utils/mod.rs

pub mod quadrature;
pub mod special;

// Re-export specific functions for easier access
pub use quadrature::adaptive_simpson;
pub use special::{erf, erfc};
