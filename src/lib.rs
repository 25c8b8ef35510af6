pub mod config;
pub mod dictionary;
pub mod models;
pub mod server;
pub mod translation;
