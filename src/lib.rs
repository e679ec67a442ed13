pub mod browser;
pub mod config;
pub mod output;
pub mod session;
pub mod wikipedia;
