//! Command-line front-end for the anesthesiologist schedule lookup.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod table;
