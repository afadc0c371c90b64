//! End-to-end tests over a real socket.

use portico::controllers::register_all;
use portico::{
    AccountStore, AppService, Dispatcher, HttpServer, MemoryAccountStore, StaticFiles, User,
};
use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

const ADDR: &str = "127.0.0.1:18472";

fn send(request: &str) -> String {
    let mut stream = TcpStream::connect(ADDR).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    stream.write_all(request.as_bytes()).unwrap();

    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                // Head is all these tests assert on.
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[test]
fn test_server_round_trips() {
    may::config().set_stack_size(0x10000);

    let store = Arc::new(MemoryAccountStore::new());
    store
        .add(User {
            user_id: "blue".to_string(),
            password: "1234".to_string(),
            name: "Blue".to_string(),
            email: "blue@example.com".to_string(),
        })
        .unwrap();

    let mut dispatcher = Dispatcher::new();
    register_all(&mut dispatcher, store.clone());
    let service = AppService::new(Arc::new(dispatcher))
        .with_static_files(StaticFiles::new("tests/staticdata"))
        .with_templates(StaticFiles::new("tests/staticdata"));

    let handle = HttpServer(service).start(ADDR).unwrap();
    handle.wait_ready().unwrap();

    // Static asset with suffix-resolved content type.
    let head = send("GET /site.css HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    assert!(head.starts_with("HTTP/1.1 200"), "got: {head}");
    assert!(head.contains("Content-Type: text/css"), "got: {head}");

    // Successful login sets the session cookie then redirects.
    let body = "userId=blue&password=1234";
    let head = send(&format!(
        "POST /user/login HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    assert!(head.starts_with("HTTP/1.1 302"), "got: {head}");
    assert!(head.contains("Set-Cookie: logined=true; Path=/"), "got: {head}");
    assert!(head.contains("Location: /index.html"), "got: {head}");

    // Wrong password lands on the failure page.
    let body = "userId=blue&password=0000";
    let head = send(&format!(
        "POST /user/login HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    assert!(head.contains("Set-Cookie: logined=false; Path=/"), "got: {head}");
    assert!(head.contains("Location: /user/login_failed.html"), "got: {head}");

    // Logged-in user list renders the view.
    let head = send(
        "GET /user/list HTTP/1.1\r\nHost: localhost\r\nCookie: logined=true\r\nConnection: close\r\n\r\n",
    );
    assert!(head.starts_with("HTTP/1.1 200"), "got: {head}");
    assert!(head.contains("Content-Type: text/html"), "got: {head}");

    // Nothing routed, nothing on disk.
    let head = send("GET /absent.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    assert!(head.starts_with("HTTP/1.1 404"), "got: {head}");

    handle.stop();
}
