use crate::request::HttpRequest;
use http::Method;
use may_minihttp::Request;
use std::collections::HashMap;
use std::io::{self, Read};
use tracing::debug;

/// Split the query string off a raw path and decode its parameters.
///
/// Decoding here is the lenient kind query strings get; strict
/// error-reporting decoding is reserved for form bodies.
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    if let Some(pos) = path.find('?') {
        let query_str = &path[pos + 1..];
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        HashMap::new()
    }
}

/// Assemble an [`HttpRequest`] from a raw `may_minihttp` request.
///
/// Header keys are lowercased, the query string is split off the path and
/// decoded, and the body is read to a string. An unparseable method or a
/// non-UTF-8 body is an `InvalidData` error the service answers with 400.
pub fn parse_request(req: Request) -> io::Result<HttpRequest> {
    let method: Method = req
        .method()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "unrecognized method"))?;
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();
    let params = parse_query_params(&raw_path);

    let mut body = String::new();
    req.body()
        .read_to_string(&mut body)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "body is not valid UTF-8"))?;

    debug!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        param_count = params.len(),
        body_bytes = body.len(),
        "request parsed"
    );

    Ok(HttpRequest::new(method, path, params, headers, body))
}
