pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod extraction;
pub mod ids;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
