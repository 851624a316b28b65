pub mod app;
pub mod offers_client;
pub mod view;
