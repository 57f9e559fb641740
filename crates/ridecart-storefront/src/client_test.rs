use super::*;

fn endpoint(store_url: &str, api_version: &str) -> Result<String, StorefrontError> {
    StorefrontClient::resolve_endpoint(store_url, api_version).map(|(endpoint, _)| endpoint)
}

#[test]
fn endpoint_from_bare_domain() {
    assert_eq!(
        endpoint("https://rides.example.com", "2024-10").unwrap(),
        "https://rides.example.com/api/2024-10/graphql.json"
    );
}

#[test]
fn endpoint_replaces_collection_path() {
    assert_eq!(
        endpoint("https://rides.example.com/collections/fleet", "2024-10").unwrap(),
        "https://rides.example.com/api/2024-10/graphql.json"
    );
}

#[test]
fn endpoint_drops_query_and_trailing_slash() {
    assert_eq!(
        endpoint("https://rides.example.com/?ref=home", "2025-01").unwrap(),
        "https://rides.example.com/api/2025-01/graphql.json"
    );
}

#[test]
fn endpoint_keeps_port() {
    assert_eq!(
        endpoint("http://127.0.0.1:8080", "2024-10").unwrap(),
        "http://127.0.0.1:8080/api/2024-10/graphql.json"
    );
}

#[test]
fn domain_is_the_host_without_port() {
    let (_, domain) =
        StorefrontClient::resolve_endpoint("http://127.0.0.1:8080/fleet", "2024-10").unwrap();
    assert_eq!(domain, "127.0.0.1");
}

#[test]
fn rejects_relative_store_url() {
    let err = endpoint("rides.example.com", "2024-10").unwrap_err();
    assert!(
        matches!(err, StorefrontError::InvalidStoreUrl { .. }),
        "expected InvalidStoreUrl, got: {err:?}"
    );
}

#[test]
fn rejects_non_http_scheme() {
    let err = endpoint("ftp://rides.example.com", "2024-10").unwrap_err();
    match err {
        StorefrontError::InvalidStoreUrl { reason, .. } => {
            assert!(reason.contains("ftp"), "reason: {reason}");
        }
        other => panic!("expected InvalidStoreUrl, got: {other:?}"),
    }
}

#[test]
fn rejects_blank_version() {
    let err = endpoint("https://rides.example.com", "  ").unwrap_err();
    assert!(matches!(err, StorefrontError::InvalidStoreUrl { .. }));
}

#[test]
fn with_page_size_clamps_to_one() {
    let client = StorefrontClient::new(
        "https://rides.example.com",
        "2024-10",
        "token",
        5,
        "ridecart-test/0.1",
        0,
        0,
    )
    .unwrap()
    .with_page_size(0);
    assert_eq!(client.page_size, 1);
    assert_eq!(
        client.endpoint(),
        "https://rides.example.com/api/2024-10/graphql.json"
    );
}
