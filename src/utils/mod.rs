/// TOML and environment configuration.
pub mod config;
