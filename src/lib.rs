pub mod analytics;
pub mod app_state;
pub mod config;
pub mod data;
pub mod entities;
pub mod filters;
pub mod health;
pub mod routes;
pub mod source;
pub mod view;
