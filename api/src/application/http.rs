pub mod company;
pub mod health;
pub mod query_extractor;
pub mod query_params;
pub mod server;
