//! Wire embedding: raw request parsing, response serialization and the
//! `may_minihttp` service glue.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request};
pub use service::AppService;
