pub mod build;
pub mod config_loader;
pub mod scan;
