// src/temperature/mod.rs

pub mod kernels;

pub use kernels::GeometryQuery;
