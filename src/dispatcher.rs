//! Path-to-controller dispatch.

use crate::controllers::Controller;
use crate::error::HttpError;
use crate::request::HttpRequest;
use crate::response::Response;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Routes requests to registered controllers by exact path.
///
/// The table is built once at startup; dispatch is a synchronous lookup
/// and call. Registering a path twice replaces the earlier controller.
#[derive(Clone, Default)]
pub struct Dispatcher {
    controllers: HashMap<String, Arc<dyn Controller>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }

    pub fn register(&mut self, path: &str, controller: Arc<dyn Controller>) {
        self.controllers.insert(path.to_string(), controller);
    }

    /// Execute the controller registered for the request's path.
    ///
    /// `None` means no controller owns this path (the server falls back
    /// to static content). Controller failures come back as the inner
    /// `Err`; the caller maps them to error responses.
    pub fn dispatch(&self, request: &HttpRequest) -> Option<Result<Response, HttpError>> {
        let controller = match self.controllers.get(request.path()) {
            Some(controller) => controller,
            None => {
                debug!(path = %request.path(), "no controller registered");
                return None;
            }
        };
        info!(method = %request.method(), path = %request.path(), "dispatching request");
        Some(controller.execute(request))
    }
}
