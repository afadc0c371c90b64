use super::Controller;
use crate::error::HttpError;
use crate::request::HttpRequest;
use crate::response::Response;
use crate::store::AccountStore;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Shows the account list to logged-in sessions.
///
/// Session state is just the `logined` cookie being `true` — no expiry or
/// signature checks at this layer. Anyone else is redirected to the login
/// page.
pub struct UserListController {
    store: Arc<dyn AccountStore>,
}

impl UserListController {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

impl Controller for UserListController {
    fn execute(&self, request: &HttpRequest) -> Result<Response, HttpError> {
        let logged_in = request
            .cookie("logined")
            .is_some_and(|value| value == "true");
        if !logged_in {
            debug!("user list requested without session, redirecting to login");
            return Ok(Response::redirect("/user/login.html"));
        }
        let users = self.store.all();
        Ok(Response::view("user/list", json!({ "users": users })))
    }
}
