use std::future::Future;

use crate::domain::{
    authentication::value_objects::{Session, User},
    common::entities::app_errors::CoreError,
};

/// Resolves the user behind a request session.
#[cfg_attr(test, mockall::automock)]
pub trait SessionProvider: Send + Sync {
    /// Returns `None` when the session carries no valid user.
    fn get_current_user(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
