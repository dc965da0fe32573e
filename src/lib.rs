pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod meals;
pub mod state;
pub mod telemetry;
