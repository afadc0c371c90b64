//! Request handlers, one per routed path.
//!
//! A [`Controller`] maps one parsed request to one response. Failures from
//! body decoding or the account store propagate out of `execute`; the
//! dispatch layer turns them into error responses. Only the login flow
//! treats a semantic failure (wrong credentials) as a normal branch.

mod create_user;
mod login;
mod user_list;

pub use create_user::CreateUserController;
pub use login::LoginController;
pub use user_list::UserListController;

use crate::dispatcher::Dispatcher;
use crate::error::HttpError;
use crate::request::HttpRequest;
use crate::response::Response;
use crate::store::AccountStore;
use std::sync::Arc;

pub trait Controller: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<Response, HttpError>;
}

/// Register every controller under its path.
pub fn register_all(dispatcher: &mut Dispatcher, store: Arc<dyn AccountStore>) {
    dispatcher.register("/user/create", Arc::new(CreateUserController::new(store.clone())));
    dispatcher.register("/user/login", Arc::new(LoginController::new(store.clone())));
    dispatcher.register("/user/list", Arc::new(UserListController::new(store)));
}
