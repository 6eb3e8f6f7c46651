/// TOML site configuration.
pub mod config;
