// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod consts;
pub mod core;

pub mod emit;
pub mod file;
pub mod generate;
pub mod merge;
pub mod progress;
pub mod scrape;
pub mod sources;
