#![allow(dead_code)]

use fcsapi_rs::{FcsClient, FcsConfig};
use httpmock::{Method::POST, Mock, MockServer};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn client_for(server: &MockServer, config: FcsConfig) -> FcsClient {
    FcsClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .config(config)
        .build()
        .unwrap()
}

pub fn ok_body(response: &str) -> String {
    format!(r#"{{"status":true,"code":200,"msg":"Successfully","response":{response}}}"#)
}

/// Form POST to `path` accepting JSON, with exactly `body`, answered with a successful envelope around `response`.
pub fn mock_post<'a>(server: &'a MockServer, path: &str, body: &str, response: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(path)
            .header("accept", "application/json")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body);
        then.status(200)
            .header("content-type", "application/json")
            .body(ok_body(response));
    })
}
