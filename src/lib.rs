//! # portico
//!
//! A small path-routed HTTP server toolkit. Raw requests are parsed into
//! an immutable [`HttpRequest`] (method, path, decoded query parameters,
//! lowercase-keyed headers, body), dispatched by exact path to a
//! [`controllers::Controller`], and the resulting [`Response`] (status,
//! ordered header lines, body) is serialized back onto the wire. Requests
//! no controller owns fall back to static file serving with suffix-based
//! MIME resolution.
//!
//! The pieces compose as:
//!
//! - [`request`] / [`response`] - the request and response models
//! - [`content_type`] / [`form`] - body classification and form decoding
//! - [`mime`] - file-name suffix to content-type resolution
//! - [`controllers`] - the handler contract plus the account flows
//!   (registration, login, user list)
//! - [`dispatcher`] - the path-to-controller table
//! - [`store`] - the account store seam and its in-memory implementation
//! - [`static_files`] - asset loading and view template rendering
//! - [`server`] - the `may_minihttp` embedding
//!
//! The server runs on the `may` coroutine runtime; everything in the
//! core is synchronous and per-request, with the account store as the
//! only shared state.

pub mod content_type;
pub mod controllers;
pub mod dispatcher;
pub mod error;
pub mod form;
pub mod mime;
pub mod request;
pub mod response;
pub mod server;
pub mod static_files;
pub mod store;

pub use content_type::ContentType;
pub use dispatcher::Dispatcher;
pub use error::HttpError;
pub use mime::MimeType;
pub use request::HttpRequest;
pub use response::{Response, ResponseBody};
pub use server::{AppService, HttpServer};
pub use static_files::StaticFiles;
pub use store::{AccountStore, MemoryAccountStore, User};
