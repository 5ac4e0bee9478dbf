pub mod config;
pub mod props;
pub mod terrain;
