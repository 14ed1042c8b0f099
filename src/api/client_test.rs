#[cfg(test)]
mod tests {
    use crate::api::test_support::{
        CLIENTS_JSON, FakeTransport, PROGRAMS_JSON, fake_client,
    };
    use crate::api::{API_KEY_HEADER, ApiError, Method, NewClient};
    use serde_json::json;

    #[test]
    fn test_issue_request_sends_headers_and_body() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Post,
            "/programs",
            201,
            r#"{"id": 5, "name": "HIV"}"#,
        ));

        let value = client
            .issue_request("/programs", Method::Post, Some(&json!({"name": "HIV"})))
            .unwrap();
        assert_eq!(value, json!({"id": 5, "name": "HIV"}));

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.as_str(), "http://registry.test/api/programs");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header(API_KEY_HEADER), Some("test-key"));
        let sent: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "HIV"}));
    }

    #[test]
    fn test_get_has_no_body() {
        let client =
            fake_client(FakeTransport::new().respond(Method::Get, "/programs", 200, "[]"));
        client.list_programs().unwrap();
        assert_eq!(client.transport().requests()[0].body, None);
    }

    #[test]
    fn test_status_error_carries_server_message() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Post,
            "/programs",
            409,
            r#"{"error": "Program already exists"}"#,
        ));

        let err = client.create_program("TB").unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: "Program already exists".to_string()
            }
        );
    }

    #[test]
    fn test_unauthorized_surfaces_server_text() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Get,
            "/clients",
            401,
            r#"{"error": "Unauthorized"}"#,
        ));
        let err = client.list_clients().unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[test]
    fn test_network_error_propagates() {
        let client = fake_client(FakeTransport::new().fail(
            Method::Get,
            "/programs",
            ApiError::Network("connection refused".to_string()),
        ));
        let err = client.list_programs().unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".to_string()));
    }

    #[test]
    fn test_invalid_json_on_success_is_decode_error() {
        let client =
            fake_client(FakeTransport::new().respond(Method::Get, "/programs", 200, "not json"));
        assert!(matches!(
            client.list_programs().unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_delete_uses_id_path() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Delete,
            "/clients/8",
            200,
            r#"{"message": "Client deleted"}"#,
        ));
        client.delete_client(8).unwrap();
        assert_eq!(client.transport().count(Method::Delete, "/clients/8"), 1);
    }

    #[test]
    fn test_create_client_body() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Post,
            "/clients",
            201,
            r#"{"id": 9, "name": "Cy", "email": "cy@example.com", "programs": [{"id": 2, "name": "Malaria"}]}"#,
        ));

        let created = client
            .create_client(&NewClient {
                name: "Cy".to_string(),
                email: "cy@example.com".to_string(),
                programs: vec![2],
            })
            .unwrap();
        assert_eq!(created.programs.len(), 1);

        let body = client.transport().requests()[0].body.clone().unwrap();
        let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            sent,
            json!({"name": "Cy", "email": "cy@example.com", "programs": [2]})
        );
    }

    #[test]
    fn test_search_encodes_query() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Get,
            "/clients/search",
            200,
            CLIENTS_JSON,
        ));

        let results = client.search_clients("ann & co").unwrap();
        assert_eq!(results.len(), 2);

        let request = &client.transport().requests()[0];
        let pairs: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("query".to_string(), "ann & co".to_string())]);
        assert!(!request.url.as_str().contains("ann & co"));
    }

    #[test]
    fn test_search_sends_empty_query() {
        let client = fake_client(FakeTransport::new().respond(
            Method::Get,
            "/clients/search",
            200,
            "[]",
        ));
        assert!(client.search_clients("").unwrap().is_empty());
        assert_eq!(client.transport().requests()[0].url.query(), Some("query="));
    }

    #[test]
    fn test_load_all_returns_both_collections() {
        let client = fake_client(
            FakeTransport::new()
                .respond(Method::Get, "/programs", 200, PROGRAMS_JSON)
                .respond(Method::Get, "/clients", 200, CLIENTS_JSON),
        );

        let (programs, clients) = client.load_all().unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(clients.len(), 2);
        assert_eq!(client.transport().count(Method::Get, "/programs"), 1);
        assert_eq!(client.transport().count(Method::Get, "/clients"), 1);
    }

    #[test]
    fn test_load_all_fails_when_either_fails() {
        let client = fake_client(
            FakeTransport::new()
                .respond(Method::Get, "/programs", 200, PROGRAMS_JSON)
                .respond(Method::Get, "/clients", 500, r#"{"error": "boom"}"#),
        );

        let err = client.load_all().unwrap_err();
        assert_eq!(err.to_string(), "boom");
        // Both requests were still issued.
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let mut config = crate::api::test_support::test_config();
        config.base_url = "http://registry.test/api/".to_string();
        let client = crate::api::ApiClient::with_transport(
            config,
            FakeTransport::new().respond(Method::Get, "/programs", 200, "[]"),
        );
        client.list_programs().unwrap();
        assert_eq!(
            client.transport().requests()[0].url.as_str(),
            "http://registry.test/api/programs"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = crate::api::test_support::test_config();
        config.base_url = "not a url".to_string();
        let client = crate::api::ApiClient::with_transport(config, FakeTransport::new());
        assert!(matches!(
            client.list_programs().unwrap_err(),
            ApiError::InvalidUrl(_)
        ));
        assert!(client.transport().requests().is_empty());
    }
}
