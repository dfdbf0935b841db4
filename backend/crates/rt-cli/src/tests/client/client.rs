use crate::Client;

use std::time::Duration;

fn client(base_url: &str) -> Client {
    Client::with_timeout(base_url, None, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    assert_eq!(client("http://localhost:8080/api/").base_url, "http://localhost:8080/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    assert_eq!(client("http://localhost:8080/api").base_url, "http://localhost:8080/api");
}

#[test]
fn test_base_url_repeated_trailing_slashes_trimmed() {
    assert_eq!(client("http://localhost:8080/api//").base_url, "http://localhost:8080/api");
}
