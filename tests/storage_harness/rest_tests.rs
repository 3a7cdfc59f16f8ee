//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! a `PropertyRepository` through full REST round-trips:
//! JSON → HTTP request → handler → service → repository → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce a fresh, empty `impl PropertyRepository + 'static`.
///
/// # Generated Tests
///
/// ## CRUD
/// - `test_rest_create` - POST 200 + assigned id
/// - `test_rest_get` - GET 200 + stored property
/// - `test_rest_update` - PUT 200 + replaced fields
/// - `test_rest_delete` - DELETE 204, then GET 404
///
/// ## Listing
/// - `test_rest_list_filters_and_pages`
/// - `test_rest_list_filters_by_size`
/// - `test_rest_list_sort`
/// - `test_rest_list_normalizes_paging`
///
/// ## Business rules
/// - `test_rest_create_with_id_is_rejected`
/// - `test_rest_update_id_mismatch_is_rejected`
/// - `test_rest_update_missing_is_not_found`
/// - `test_rest_delete_missing_is_not_found`
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use estate::server::ServerBuilder;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let repository = $factory;
                let router = ServerBuilder::new()
                    .with_repository(repository)
                    .build()
                    .unwrap();
                TestServer::new(router).unwrap()
            }

            async fn create(server: &TestServer, body: Value) -> Value {
                let response = server.post("/properties").json(&body).await;
                response.assert_status(StatusCode::OK);
                response.json()
            }

            async fn seed_over_http(server: &TestServer) -> Vec<i64> {
                let mut ids = Vec::new();
                for property in sample_properties() {
                    let created = create(server, serde_json::to_value(&property).unwrap()).await;
                    ids.push(created["id"].as_i64().unwrap());
                }
                ids
            }

            fn content_ids(page: &Value) -> Vec<i64> {
                page["content"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|p| p["id"].as_i64().unwrap())
                    .collect()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let body = create(
                    &server,
                    json!({
                        "address": "Test Location",
                        "price": 100000,
                        "size": 150,
                        "description": "Test Description"
                    }),
                )
                .await;

                assert!(body["id"].as_i64().is_some());
                assert_eq!(body["address"], "Test Location");
                assert_eq!(body["price"], 100000.0);
                assert_eq!(body["size"], 150.0);
                assert_eq!(body["description"], "Test Description");
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({"address": "7 Usaquen", "price": 180000, "size": 65}),
                )
                .await;
                let id = created["id"].as_i64().unwrap();

                let response = server.get(&format!("/properties/{}", id)).await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(body, created);
                assert!(body["description"].is_null());
            }

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({"address": "Old", "price": 1, "size": 1, "description": "before"}),
                )
                .await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/properties/{}", id))
                    .json(&json!({"address": "New", "price": 2, "size": 3}))
                    .await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(body["id"], id);
                assert_eq!(body["address"], "New");
                assert!(body["description"].is_null());

                let fetched: Value = server.get(&format!("/properties/{}", id)).await.json();
                assert_eq!(fetched, body);
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({"address": "Gone", "price": 1, "size": 1}),
                )
                .await;
                let id = created["id"].as_i64().unwrap();

                server
                    .delete(&format!("/properties/{}", id))
                    .await
                    .assert_status(StatusCode::NO_CONTENT);

                let response = server.get(&format!("/properties/{}", id)).await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["detail"], format!("Property not found with id {}", id));
            }

            // ==============================================================
            // Listing
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_filters_and_pages() {
                let server = make_server().await;
                let ids = seed_over_http(&server).await;

                let response = server
                    .get("/properties")
                    .add_query_param("location", "chapinero")
                    .add_query_param("price", 150000)
                    .add_query_param("page", 0)
                    .add_query_param("size", 1)
                    .await;
                response.assert_status(StatusCode::OK);

                let page: Value = response.json();
                assert_eq!(content_ids(&page), vec![ids[0]]);
                assert_eq!(page["totalElements"], 2);
                assert_eq!(page["totalPages"], 2);
                assert_eq!(page["number"], 0);
                assert_eq!(page["size"], 1);
                assert_eq!(page["first"], true);
                assert_eq!(page["last"], false);

                let page: Value = server
                    .get("/properties")
                    .add_query_param("location", "chapinero")
                    .add_query_param("price", 150000)
                    .add_query_param("page", 1)
                    .add_query_param("size", 1)
                    .await
                    .json();
                assert_eq!(content_ids(&page), vec![ids[4]]);
                assert_eq!(page["last"], true);
            }

            #[tokio::test]
            async fn test_rest_list_filters_by_size() {
                let server = make_server().await;
                let ids = seed_over_http(&server).await;

                let page: Value = server
                    .get("/properties")
                    .add_query_param("sizeProperty", 95)
                    .await
                    .json();
                assert_eq!(content_ids(&page), vec![ids[3], ids[4]]);
            }

            #[tokio::test]
            async fn test_rest_list_sort() {
                let server = make_server().await;
                let ids = seed_over_http(&server).await;

                let page: Value = server
                    .get("/properties")
                    .add_query_param("sort", "size,desc")
                    .await
                    .json();
                assert_eq!(content_ids(&page), vec![ids[3], ids[4], ids[0], ids[1], ids[2]]);

                let page: Value = server
                    .get("/properties")
                    .add_query_param("sort", "price:asc")
                    .await
                    .json();
                assert_eq!(content_ids(&page), vec![ids[2], ids[1], ids[4], ids[0], ids[3]]);
            }

            #[tokio::test]
            async fn test_rest_list_normalizes_paging() {
                let server = make_server().await;
                seed_over_http(&server).await;

                let page: Value = server
                    .get("/properties")
                    .add_query_param("page", -3)
                    .add_query_param("size", 0)
                    .await
                    .json();
                assert_eq!(page["number"], 0);
                assert_eq!(page["size"], 20);
                assert_eq!(page["numberOfElements"], 5);

                let page: Value = server
                    .get("/properties")
                    .add_query_param("size", 1000)
                    .await
                    .json();
                assert_eq!(page["size"], 100);
            }

            // ==============================================================
            // Business rules
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_with_id_is_rejected() {
                let server = make_server().await;

                let response = server
                    .post("/properties")
                    .json(&json!({"id": 42, "address": "A", "price": 1, "size": 1}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["detail"], "Cannot create property with id 42");
                assert_eq!(body["code"], "BAD_REQUEST");

                let page: Value = server.get("/properties").await.json();
                assert_eq!(page["totalElements"], 0);
            }

            #[tokio::test]
            async fn test_rest_update_id_mismatch_is_rejected() {
                let server = make_server().await;
                let created = create(&server, json!({"address": "A", "price": 1, "size": 1})).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/properties/{}", id))
                    .json(&json!({"id": id + 1, "address": "B", "price": 1, "size": 1}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["detail"], "The id property is not equals to param id");
            }

            #[tokio::test]
            async fn test_rest_update_missing_is_not_found() {
                let server = make_server().await;

                let response = server
                    .put("/properties/999")
                    .json(&json!({"address": "B", "price": 1, "size": 1}))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                assert_eq!(body["code"], "NOT_FOUND");
                assert_eq!(body["detail"], "Property not found with id 999");
            }

            #[tokio::test]
            async fn test_rest_delete_missing_is_not_found() {
                let server = make_server().await;
                server
                    .delete("/properties/999")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}
