// src/fit/mod.rs

pub mod least_squares;
pub mod polynomial;

pub use least_squares::fit_polynomial;
pub use polynomial::SourcePolynomial;
