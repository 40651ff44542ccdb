use azsign_azure_storage::{canonicalized_resource, Credential, RequestSigner};
use azsign_core::{ErrorKind, SigningRequest};
use http::header::{AUTHORIZATION, DATE};
use http::Method;
use pretty_assertions::assert_eq;

use crate::{init_logger, test_credential, test_time, ACCOUNT_KEY, ACCOUNT_NAME, DATE_VALUE};

const LIST_AUTHORIZATION: &str =
    "SharedKeyLite myaccount:IEZWw1XD53CVYsqUeIUGe5ROS8GfqXr7u2esoWl32Gg=";

#[test]
fn test_list_blobs_golden() {
    init_logger();

    let req = SigningRequest::new(Method::GET)
        .with_header("x-ms-version", "2009-09-19")
        .unwrap()
        .with_canonicalized_resource(canonicalized_resource(
            ACCOUNT_NAME,
            "/mycontainer",
            Some("list"),
        ));

    let signed = RequestSigner::new()
        .with_time(test_time())
        .sign(&req, &test_credential())
        .unwrap();

    assert_eq!(signed.authorization, LIST_AUTHORIZATION);
    assert_eq!(signed.date.unwrap(), DATE_VALUE);
}

#[test]
fn test_put_blob_golden() {
    init_logger();

    let req = SigningRequest::new(Method::PUT)
        .with_header("Content-Type", "text/plain; charset=UTF-8")
        .unwrap()
        .with_header("Date", DATE_VALUE)
        .unwrap()
        .with_header("x-ms-version", "2009-09-19")
        .unwrap()
        .with_header("x-ms-meta-m1", "v1")
        .unwrap()
        .with_header("x-ms-date", DATE_VALUE)
        .unwrap()
        .with_canonicalized_resource("/myaccount/mycontainer/myblob");

    let signer = RequestSigner::new();
    assert_eq!(
        signer.string_to_sign(&req, DATE_VALUE).unwrap(),
        "PUT\n\ntext/plain; charset=UTF-8\nSun, 11 Oct 2009 21:49:13 GMT\n\
         x-ms-date:Sun, 11 Oct 2009 21:49:13 GMT\n\
         x-ms-meta-m1:v1\n\
         x-ms-version:2009-09-19\n\
         /myaccount/mycontainer/myblob"
    );

    let signed = signer.sign(&req, &test_credential()).unwrap();
    assert!(signed.date.is_none());
    assert_eq!(
        signed.authorization,
        "SharedKeyLite myaccount:JfUlTE84VaQ1F3S7dIvWnDG91bwweVax5Y652tcwwRQ="
    );
}

#[test]
fn test_sign_parts() {
    init_logger();

    let (mut parts, _) = http::Request::get(
        "https://myaccount.blob.core.windows.net/mycontainer?restype=container&comp=list",
    )
    .header("x-ms-version", "2009-09-19")
    .body(())
    .unwrap()
    .into_parts();

    RequestSigner::new()
        .with_time(test_time())
        .sign_parts(&mut parts, &test_credential())
        .unwrap();

    assert_eq!(parts.headers.get(DATE).unwrap(), DATE_VALUE);
    assert_eq!(parts.headers.get(AUTHORIZATION).unwrap(), LIST_AUTHORIZATION);
    assert_eq!(parts.headers.get("x-ms-version").unwrap(), "2009-09-19");
    assert_eq!(
        parts.uri,
        "https://myaccount.blob.core.windows.net/mycontainer?restype=container&comp=list"
    );
}

#[test]
fn test_method_is_not_normalized() {
    let cred = test_credential();
    let signer = RequestSigner::new().with_time(test_time());
    let lower = Method::from_bytes(b"get").unwrap();

    let req = SigningRequest::new(lower).with_canonicalized_resource("/myaccount/mycontainer");
    assert!(signer
        .string_to_sign(&req, DATE_VALUE)
        .unwrap()
        .starts_with("get\n"));

    let upper = SigningRequest::new(Method::GET).with_canonicalized_resource("/myaccount/mycontainer");
    assert_ne!(
        signer.sign(&req, &cred).unwrap().authorization,
        signer.sign(&upper, &cred).unwrap().authorization
    );
}

#[test]
fn test_content_md5_is_signed() {
    let cred = test_credential();
    let signer = RequestSigner::new().with_time(test_time());

    let plain = SigningRequest::new(Method::PUT).with_canonicalized_resource("/myaccount/c/b");
    let with_md5 = plain
        .clone()
        .with_header("Content-MD5", "Q2hlY2sgSW50ZWdyaXR5IQ==")
        .unwrap();

    assert_eq!(
        signer.string_to_sign(&with_md5, DATE_VALUE).unwrap(),
        "PUT\nQ2hlY2sgSW50ZWdyaXR5IQ==\n\nSun, 11 Oct 2009 21:49:13 GMT\n/myaccount/c/b"
    );
    assert_ne!(
        signer.sign(&plain, &cred).unwrap().authorization,
        signer.sign(&with_md5, &cred).unwrap().authorization
    );
}

#[test]
fn test_empty_date_header_is_replaced() {
    let req = SigningRequest::new(Method::GET)
        .with_header("Date", "")
        .unwrap()
        .with_canonicalized_resource("/myaccount/mycontainer");

    let signed = RequestSigner::new()
        .with_time(test_time())
        .sign(&req, &test_credential())
        .unwrap();

    assert_eq!(signed.date.unwrap(), DATE_VALUE);
}

#[test]
fn test_malformed_key_is_a_signing_error() {
    let err = Credential::new(ACCOUNT_NAME, "!!not base64!!").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(err.is_signing_error());
    assert!(!err.is_retryable());

    assert!(Credential::new(ACCOUNT_NAME, ACCOUNT_KEY).is_ok());
}
