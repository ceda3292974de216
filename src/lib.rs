#[macro_use]
extern crate rocket;

pub mod config;
pub mod models;
pub mod routes;
pub mod split;
pub mod store;
