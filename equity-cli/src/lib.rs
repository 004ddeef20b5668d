pub mod app;
pub mod config;
pub mod csv_loader;
pub mod export;
pub mod inquiry;
pub mod logging;
pub mod report;
pub mod session;
pub mod sweep;
pub mod utils;
