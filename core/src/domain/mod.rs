pub mod authentication;
pub mod common;
pub mod company;
pub mod tenant;
