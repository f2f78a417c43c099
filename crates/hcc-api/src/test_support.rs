//! Shared helpers for the HTTP contract tests: one-shot `tiny_http` mock
//! servers bound to an ephemeral local port.

use std::sync::mpsc;

/// Everything a test needs to assert about one received request.
pub struct CapturedRequest {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Build an [`hcc_config::ApiConfig`] pointing at `base`.
pub fn config(base: &str) -> hcc_config::ApiConfig {
    hcc_config::ApiConfig {
        base_url: base.to_string(),
        username: "hcc_advisor".to_string(),
        password: "ords-secret".to_string(),
        timeout_secs: 5,
        verify_tls: false,
    }
}

/// Serve exactly one request with the given status and body.
///
/// Returns the server's base URL. The server thread exits after answering.
pub fn serve(status: u16, body: &'static str) -> String {
    let (base, _captured) = serve_capture(status, body);
    base
}

/// Like [`serve`], but also hands back what the server received.
pub fn serve_capture(status: u16, body: &'static str) -> (String, mpsc::Receiver<CapturedRequest>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("mock server should bind");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("mock server should have an IP address");
    let base = format!("http://{addr}");
    let (sender, receiver) = mpsc::channel();

    std::thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            let mut received_body = String::new();
            let _ = std::io::Read::read_to_string(request.as_reader(), &mut received_body);

            let captured = CapturedRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                authorization,
                body: received_body,
            };
            let _ = sender.send(captured);

            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });

    (base, receiver)
}
