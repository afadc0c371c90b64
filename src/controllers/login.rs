use super::Controller;
use crate::error::HttpError;
use crate::request::HttpRequest;
use crate::response::Response;
use crate::store::AccountStore;
use std::sync::Arc;
use tracing::info;

/// Checks submitted credentials against the account store.
///
/// The decision is binary: matching id and password set the session
/// cookie true and redirect to the landing page; anything else (unknown
/// id included) sets it false and redirects to the failure page. Wrong
/// credentials are an expected outcome, not an error.
pub struct LoginController {
    store: Arc<dyn AccountStore>,
}

impl LoginController {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

impl Controller for LoginController {
    fn execute(&self, request: &HttpRequest) -> Result<Response, HttpError> {
        let fields = request.form_body()?;
        let user_id = fields.get("userId").map(String::as_str).unwrap_or("");
        let password = fields.get("password").map(String::as_str).unwrap_or("");

        let authenticated = self
            .store
            .find_by_user_id(user_id)
            .is_some_and(|user| user.password == password);
        info!(user_id = %user_id, authenticated, "login attempt");

        let mut response = Response::new();
        response.set_status(302);
        if authenticated {
            response.add_header("Set-Cookie: logined=true; Path=/");
            response.add_header("Location: /index.html");
        } else {
            response.add_header("Set-Cookie: logined=false; Path=/");
            response.add_header("Location: /user/login_failed.html");
        }
        Ok(response)
    }
}
