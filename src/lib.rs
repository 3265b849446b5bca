pub mod config;
pub mod database;
pub mod dto;
pub mod errors;
pub mod logging;
pub mod services;
