pub mod api;
pub mod blob;
pub mod config;
pub mod docs;
pub mod errors;
pub mod export;
pub mod model;
pub mod routes;
pub mod store;
