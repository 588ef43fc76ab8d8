pub mod jwt_session_provider;

pub use jwt_session_provider::JwtSessionProvider;
