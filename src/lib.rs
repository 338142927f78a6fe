// src/lib.rs

pub mod macros;

pub mod log;

pub mod config;
pub mod core;

pub mod csv;
pub mod file;
pub mod net;
pub mod record;

pub mod extract;
pub mod scrape;
pub mod bid;

pub mod cli;
