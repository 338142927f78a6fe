// src/config/mod.rs

pub mod consts;
pub mod session;

pub use session::Session;
