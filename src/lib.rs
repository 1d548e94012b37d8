// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod normalize;

pub mod csv;
pub mod facets;
pub mod fetch;
pub mod file;
pub mod params;
pub mod progress;
pub mod record;
pub mod runner;
pub mod store;
