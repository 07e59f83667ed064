// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use internlink::presentation::routes;

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::new(routes::routes()).expect("test server");

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_version_endpoint() {
    let server = TestServer::new(routes::routes()).expect("test server");

    let response = server.get("/v1/version").await;

    response.assert_status_ok();
    assert!(!response.text().is_empty());
}
