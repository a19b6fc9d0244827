pub mod contacts;
pub mod migrate;
pub mod server;
