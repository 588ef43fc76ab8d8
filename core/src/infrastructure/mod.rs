pub mod authentication;
pub mod company;
pub mod db;
pub mod tenant;
