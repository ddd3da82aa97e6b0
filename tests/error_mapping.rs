//! Integration tests for failure classification and the boundary mapping.
//!
//! Each failing fetch must surface exactly one taxonomy variant, and each
//! variant must carry its machine code and HTTP status for the API boundary.

use httptest::{matchers::*, responders::*, Expectation, Server};

use page_audit::{run_audit, AuditContext, AuditRequest, Config, FetchError, FetchErrorKind};

fn test_context() -> AuditContext {
    AuditContext::from_config(&Config::default()).expect("context should build")
}

/// Registers tolerant expectations for every auxiliary path so failing-page
/// tests don't trip the mock server's verification.
fn expect_aux_probes(server: &Server) {
    for path in ["/robots.txt", "/sitemap.xml", "/sitemap_index.xml"] {
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .times(0..)
                .respond_with(status_code(404)),
        );
    }
}

async fn audit_status(server: &Server, path: &str) -> FetchError {
    let request = AuditRequest::for_url(server.url(path).to_string());
    run_audit(&request, &test_context())
        .await
        .expect_err("audit should fail")
}

#[tokio::test]
async fn test_http_404_maps_to_page_not_found() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .times(1..)
            .respond_with(status_code(404)),
    );
    expect_aux_probes(&server);

    let error = audit_status(&server, "/missing").await;
    assert_eq!(error.kind(), FetchErrorKind::PageNotFound);
    assert_eq!(error.kind().error_type(), "PAGE_NOT_FOUND");
    assert_eq!(error.kind().http_status(), 404);
}

#[tokio::test]
async fn test_http_403_maps_to_access_forbidden() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/blocked"))
            .times(1..)
            .respond_with(status_code(403)),
    );
    expect_aux_probes(&server);

    let error = audit_status(&server, "/blocked").await;
    assert_eq!(error.kind(), FetchErrorKind::AccessForbidden);
    assert_eq!(error.kind().http_status(), 403);
}

#[tokio::test]
async fn test_http_500_maps_to_server_error_and_502() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/broken"))
            .times(1..)
            .respond_with(status_code(500)),
    );
    expect_aux_probes(&server);

    let error = audit_status(&server, "/broken").await;
    assert_eq!(error.kind(), FetchErrorKind::ServerError);
    assert_eq!(error.kind().error_type(), "SERVER_ERROR");
    assert_eq!(error.kind().http_status(), 502);
}

#[tokio::test]
async fn test_http_410_maps_to_client_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .times(1..)
            .respond_with(status_code(410)),
    );
    expect_aux_probes(&server);

    let error = audit_status(&server, "/gone").await;
    assert_eq!(error.kind(), FetchErrorKind::ClientError);
}

#[tokio::test]
async fn test_invalid_url_fails_without_any_network_call() {
    let request = AuditRequest::for_url("definitely not a url");
    let error = run_audit(&request, &test_context())
        .await
        .expect_err("audit should fail");
    assert_eq!(error.kind(), FetchErrorKind::InvalidUrl);
    assert_eq!(error.kind().error_type(), "INVALID_URL");
    assert_eq!(error.kind().http_status(), 400);
}

#[tokio::test]
async fn test_connection_refused_classification() {
    // Bind a port to learn a free one, then drop the listener so nothing is
    // listening when the audit connects.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let request = AuditRequest::for_url(format!("http://127.0.0.1:{port}/"));
    let error = run_audit(&request, &test_context())
        .await
        .expect_err("audit should fail");
    assert_eq!(error.kind(), FetchErrorKind::ConnectionRefused);
    assert_eq!(error.kind().http_status(), 503);
}

/// Requires a working DNS resolver; run with `cargo test -- --ignored`.
#[tokio::test]
#[ignore]
async fn test_unresolvable_hostname_maps_to_url_not_found() {
    let request = AuditRequest::for_url("https://page-audit-does-not-exist.invalid/");
    let error = run_audit(&request, &test_context())
        .await
        .expect_err("audit should fail");
    assert_eq!(error.kind(), FetchErrorKind::DnsNotResolved);
    assert_eq!(error.kind().error_type(), "URL_NOT_FOUND");
    assert_eq!(error.kind().http_status(), 404);
}

#[tokio::test]
async fn test_auxiliary_failures_never_fail_the_audit() {
    // The page itself is healthy; both probes answer 500. Soft failure means
    // the audit still succeeds with negative signals.
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(1..)
            .respond_with(status_code(200).body("<html><title>ok</title></html>")),
    );
    for path in ["/robots.txt", "/sitemap.xml", "/sitemap_index.xml"] {
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .times(0..)
                .respond_with(status_code(500)),
        );
    }

    let request = AuditRequest::for_url(server.url("/").to_string());
    let report = run_audit(&request, &test_context())
        .await
        .expect("audit should succeed despite probe failures");

    assert!(!report.on_page.robots_txt.exists);
    assert_eq!(report.on_page.robots_txt.score, 0);
    assert!(report.on_page.robots_txt.issue.is_some());
    assert!(!report.on_page.sitemap.exists);
    assert_eq!(report.on_page.sitemap.score, 0);
}

#[tokio::test]
async fn test_malformed_json_ld_is_a_signal_not_an_error() {
    let html = r#"<html><head><title>Broken JSON-LD page</title>
        <script type="application/ld+json">{oops</script>
        </head><body><h1>Still audited</h1></body></html>"#;
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(1..)
            .respond_with(status_code(200).body(html)),
    );
    expect_aux_probes(&server);

    let request = AuditRequest::for_url(server.url("/").to_string());
    let report = run_audit(&request, &test_context())
        .await
        .expect("audit should succeed");

    assert_eq!(report.on_page.structured_data.json_ld_blocks, 1);
    assert!(!report.on_page.structured_data.json_ld_valid);
}
