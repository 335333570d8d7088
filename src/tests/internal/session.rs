use std::time::Duration;

use crate::config::ClientConfig;
use crate::session::{SessionError, TransferSession};

const TIMEOUT: Duration = Duration::from_secs(1);

#[test]
fn trailing_slash_is_trimmed() {
    let session = TransferSession::new("http://localhost:8080/", TIMEOUT, 2).unwrap();
    assert_eq!(&*session.server_url, "http://localhost:8080");
    assert_eq!(session.timeout, TIMEOUT);
    assert_eq!(session.retries, 2);
}

#[test]
fn empty_url_is_rejected() {
    let err = TransferSession::new("   ", TIMEOUT, 0).unwrap_err();
    assert!(matches!(err, SessionError::EmptyServerUrl));
}

#[test]
fn malformed_url_is_rejected() {
    let err = TransferSession::new("not a url", TIMEOUT, 0).unwrap_err();
    assert!(matches!(err, SessionError::InvalidServerUrl { .. }));
}

#[test]
fn only_http_schemes_are_supported() {
    let err = TransferSession::new("ftp://files.example.com", TIMEOUT, 0).unwrap_err();
    assert!(matches!(err, SessionError::UnsupportedScheme(ref s) if s == "ftp"));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = TransferSession::new("http://localhost:8080", Duration::ZERO, 0).unwrap_err();
    assert!(matches!(err, SessionError::ZeroTimeout));
}

#[test]
fn default_config_builds_a_session() {
    let session = TransferSession::from_config(&ClientConfig::default()).unwrap();
    assert_eq!(&*session.server_url, "http://localhost:8080");
    assert_eq!(session.timeout, Duration::from_millis(60_000));
    assert_eq!(session.retries, 3);

    // Debug 输出不含客户端内部状态
    let debug = format!("{:?}", session);
    assert!(debug.contains("server_url"));
    assert!(!debug.contains("client"));
}
