// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod error;
pub mod params;
pub mod specs;

pub mod aggregate;
pub mod extract;
pub mod growth;
pub mod report;
pub mod resolve;
pub mod stats;
pub mod wiki;
