use azsign_azure_storage::RequestSigner;
use azsign_core::hash::{base64_decode, base64_hmac_sha256};
use azsign_core::SigningRequest;
use http::header::DATE;
use http::Method;
use pretty_assertions::assert_eq;

use crate::{test_credential, test_time, ACCOUNT_KEY, DATE_VALUE};

fn request_with(headers: &[(&str, &str)]) -> SigningRequest {
    headers
        .iter()
        .fold(SigningRequest::new(Method::GET), |req, (k, v)| {
            req.with_header(k, v).unwrap()
        })
        .with_canonicalized_resource("/myaccount/mycontainer")
}

#[test]
fn test_no_ms_headers_yield_empty_canonicalized_headers() {
    let req = request_with(&[("Content-Type", "application/xml"), ("Accept", "*/*")]);

    let s = RequestSigner::new().string_to_sign(&req, DATE_VALUE).unwrap();

    assert_eq!(
        s,
        "GET\n\napplication/xml\nSun, 11 Oct 2009 21:49:13 GMT\n/myaccount/mycontainer"
    );
}

#[test]
fn test_header_order_does_not_matter() {
    let cred = test_credential();
    let signer = RequestSigner::new().with_time(test_time());

    let a = request_with(&[
        ("x-ms-version", "2009-09-19"),
        ("x-ms-meta-b", "2"),
        ("x-ms-meta-a", "1"),
        ("x-ms-blob-type", "BlockBlob"),
    ]);
    let b = request_with(&[
        ("x-ms-blob-type", "BlockBlob"),
        ("x-ms-meta-a", "1"),
        ("x-ms-version", "2009-09-19"),
        ("x-ms-meta-b", "2"),
    ]);

    assert_eq!(
        signer.string_to_sign(&a, DATE_VALUE).unwrap(),
        "GET\n\n\nSun, 11 Oct 2009 21:49:13 GMT\n\
         x-ms-blob-type:BlockBlob\n\
         x-ms-meta-a:1\n\
         x-ms-meta-b:2\n\
         x-ms-version:2009-09-19\n\
         /myaccount/mycontainer"
    );
    assert_eq!(
        signer.sign(&a, &cred).unwrap().authorization,
        signer.sign(&b, &cred).unwrap().authorization
    );
}

#[test]
fn test_header_names_are_lowercased() {
    let signer = RequestSigner::new();

    let upper = request_with(&[("X-MS-Version", "2009-09-19")]);
    let lower = request_with(&[("x-ms-version", "2009-09-19")]);

    let s = signer.string_to_sign(&upper, DATE_VALUE).unwrap();
    assert!(s.contains("\nx-ms-version:2009-09-19\n"));
    assert_eq!(s, signer.string_to_sign(&lower, DATE_VALUE).unwrap());
}

#[test]
fn test_sign_is_deterministic() {
    let cred = test_credential();
    let signer = RequestSigner::new();
    let req = request_with(&[("Date", DATE_VALUE), ("x-ms-version", "2009-09-19")]);

    let first = signer.sign(&req, &cred).unwrap().authorization;
    for _ in 0..3 {
        assert_eq!(signer.sign(&req, &cred).unwrap().authorization, first);
    }
}

#[test]
fn test_injected_date_is_the_signed_date() {
    let cred = test_credential();
    let req = request_with(&[("x-ms-version", "2009-09-19")]);

    // Without a pinned time the wall clock is used.
    let signed = RequestSigner::new().sign(&req, &cred).unwrap();
    let date = signed.date.expect("date must be injected");
    let date = date.to_str().unwrap();

    let expected = base64_hmac_sha256(
        &base64_decode(ACCOUNT_KEY).unwrap(),
        RequestSigner::new()
            .string_to_sign(&req, date)
            .unwrap()
            .as_bytes(),
    );
    assert_eq!(
        signed.authorization,
        format!("SharedKeyLite myaccount:{expected}").as_str()
    );

    // Sending the injected date back must reproduce the same signature.
    let mut resent = req.clone();
    resent.headers.insert(DATE, date.parse().unwrap());
    let again = RequestSigner::new().sign(&resent, &cred).unwrap();
    assert!(again.date.is_none());
    assert_eq!(again.authorization, signed.authorization);
}

#[test]
fn test_missing_resource_is_empty() {
    let req = SigningRequest::new(Method::HEAD);

    let s = RequestSigner::new().string_to_sign(&req, DATE_VALUE).unwrap();

    assert_eq!(s, "HEAD\n\n\nSun, 11 Oct 2009 21:49:13 GMT\n");
}
