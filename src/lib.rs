pub mod config;
pub mod core;
pub mod loader;
pub mod models;
pub mod report;
#[cfg(test)]
pub mod test_helpers;
