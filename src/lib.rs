pub mod browser;
pub mod config;
pub mod constants;
pub mod converters;
pub mod dtos;
pub mod entities;
pub mod errors;
pub mod persistence;
pub mod query;
pub mod rest_api;
