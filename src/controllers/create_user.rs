use super::Controller;
use crate::error::HttpError;
use crate::request::HttpRequest;
use crate::response::Response;
use crate::store::{AccountStore, User};
use std::sync::Arc;
use tracing::info;

/// Registers a new account from the submitted form and redirects to the
/// landing page. A duplicate id propagates as
/// [`HttpError::AccountConflict`].
pub struct CreateUserController {
    store: Arc<dyn AccountStore>,
}

impl CreateUserController {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

impl Controller for CreateUserController {
    fn execute(&self, request: &HttpRequest) -> Result<Response, HttpError> {
        let fields = request.form_body()?;
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();
        let user = User {
            user_id: field("userId"),
            password: field("password"),
            name: field("name"),
            email: field("email"),
        };
        info!(user_id = %user.user_id, "creating account");
        self.store.add(user)?;
        Ok(Response::redirect("/index.html"))
    }
}
