pub mod checkout;
pub mod config;
pub mod currency;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
