pub mod app;
pub mod config;
pub mod model;
pub mod sim;
pub mod ui;
pub mod util;

pub use app::{DashboardApp, run};
