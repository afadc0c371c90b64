use super::request::parse_request;
use super::response::{write_json_error, write_response};
use crate::dispatcher::Dispatcher;
use crate::response::ResponseBody;
use crate::static_files::StaticFiles;
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use tracing::{error, warn};

/// The HTTP service: parse, dispatch, fall back to static content.
///
/// Controller errors become JSON error responses with the status the
/// error kind maps to; unrouted GET requests are tried against the static
/// directory; everything else is a 404.
#[derive(Clone)]
pub struct AppService {
    pub dispatcher: Arc<Dispatcher>,
    pub static_files: Option<StaticFiles>,
    pub templates: Option<StaticFiles>,
}

impl AppService {
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            static_files: None,
            templates: None,
        }
    }

    #[must_use]
    pub fn with_static_files(mut self, dir: StaticFiles) -> Self {
        self.static_files = Some(dir);
        self
    }

    #[must_use]
    pub fn with_templates(mut self, dir: StaticFiles) -> Self {
        self.templates = Some(dir);
        self
    }

    fn write_controller_response(
        &self,
        res: &mut Response,
        response: &crate::response::Response,
    ) {
        match response.body() {
            ResponseBody::Empty => {
                write_response(res, response.status(), response.headers(), Vec::new());
            }
            ResponseBody::Bytes(bytes) => {
                write_response(res, response.status(), response.headers(), bytes.clone());
            }
            ResponseBody::View { name, model } => {
                let templates = match &self.templates {
                    Some(templates) => templates,
                    None => {
                        error!(view = %name, "no templates directory configured");
                        write_json_error(res, 500, "view rendering unavailable");
                        return;
                    }
                };
                match templates.render(name, model) {
                    Ok(bytes) => {
                        let mut headers = response.headers().to_vec();
                        headers.push("Content-Type: text/html".to_string());
                        write_response(res, response.status(), &headers, bytes);
                    }
                    Err(e) => {
                        error!(view = %name, error = %e, "view rendering failed");
                        write_json_error(res, 500, "view rendering failed");
                    }
                }
            }
        }
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let request = match parse_request(req) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "request rejected");
                write_json_error(res, 400, "malformed request");
                return Ok(());
            }
        };

        if let Some(outcome) = self.dispatcher.dispatch(&request) {
            match outcome {
                Ok(response) => self.write_controller_response(res, &response),
                Err(err) => {
                    warn!(path = %request.path(), error = %err, "controller failed");
                    write_json_error(res, err.status(), &err.to_string());
                }
            }
            return Ok(());
        }

        if *request.method() == Method::GET {
            if let Some(static_files) = &self.static_files {
                let path = if request.path() == "/" {
                    "/index.html"
                } else {
                    request.path()
                };
                if let Ok((bytes, mime)) = static_files.load(path) {
                    let headers = vec![format!("Content-Type: {}", mime.value())];
                    write_response(res, 200, &headers, bytes);
                    return Ok(());
                }
            }
        }

        write_json_error(res, 404, "Not Found");
        Ok(())
    }
}
