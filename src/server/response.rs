use may_minihttp::Response;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        400 => "Bad Request",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Write status, header lines and body bytes onto the wire response.
///
/// Header lines are emitted in insertion order. `may_minihttp` only
/// accepts `&'static str` header lines, so dynamic ones are leaked for
/// the life of the process.
pub fn write_response(res: &mut Response, status: u16, headers: &[String], body: Vec<u8>) {
    res.status_code(status as usize, status_reason(status));
    for line in headers {
        res.header(Box::leak(line.clone().into_boxed_str()));
    }
    res.body_vec(body);
}

/// JSON error body, the shape every failure path answers with.
pub fn write_json_error(res: &mut Response, status: u16, message: &str) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    let body = serde_json::json!({ "error": message });
    res.body_vec(body.to_string().into_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(302), "Found");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(409), "Conflict");
    }
}
