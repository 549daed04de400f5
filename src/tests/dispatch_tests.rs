//! tests/dispatch_tests.rs
//! Despacho en dos pasos contra un EmailJS simulado.

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::logger::init_test_logger;
    use crate::services::dispatch_service::{DispatchService, DispatchStep};
    use crate::services::emailjs_client::EmailJsClient;
    use crate::services::form_collector::collect_service_request;
    use crate::tests::{
        asha_form_body, form_pairs, test_emailjs_config, ADMIN_TEMPLATE, AUTOREPLY_TEMPLATE, SEND_FORM_PATH,
        SEND_PATH,
    };

    fn dispatcher_for(server: &MockServer) -> DispatchService {
        DispatchService::new(EmailJsClient::new(test_emailjs_config(server.base_url())))
    }

    #[actix_rt::test]
    async fn test_asha_scenario_sends_both_notifications() {
        init_test_logger();
        let server = MockServer::start_async().await;

        let admin_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(SEND_FORM_PATH)
                    .body_contains("service_test")
                    .body_contains(ADMIN_TEMPLATE)
                    .body_contains("public_key_test")
                    .body_contains("Asha Rao")
                    .body_contains("asha@example.com")
                    .body_contains("+91 9876543210")
                    .body_contains("GST (Goods and Services Tax), Advance Tax")
                    .body_contains("Need quarterly filing help");
                then.status(200).body("OK");
            })
            .await;

        let autoreply_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_PATH).json_body(json!({
                    "service_id": "service_test",
                    "template_id": AUTOREPLY_TEMPLATE,
                    "user_id": "public_key_test",
                    "template_params": {
                        "user_name": "Asha Rao",
                        "user_email": "asha@example.com",
                        "whatsapp": "+91 9876543210",
                        "services": "GST (Goods and Services Tax), Advance Tax",
                        "message": "Need quarterly filing help"
                    }
                }));
                then.status(200).body("OK");
            })
            .await;

        let req = collect_service_request(form_pairs(&asha_form_body()));
        let result = dispatcher_for(&server).dispatch("req-1", &req).await;

        assert!(result.is_ok(), "Despacho falló: {:?}", result.err());
        admin_mock.assert_hits_async(1).await;
        autoreply_mock.assert_hits_async(1).await;
    }

    #[actix_rt::test]
    async fn test_admin_failure_skips_autoreply() {
        init_test_logger();
        let server = MockServer::start_async().await;

        let admin_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_FORM_PATH);
                then.status(400).body("The template ID is invalid");
            })
            .await;
        let autoreply_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_PATH);
                then.status(200).body("OK");
            })
            .await;

        let req = collect_service_request(form_pairs(&asha_form_body()));
        let failure = dispatcher_for(&server)
            .dispatch("req-2", &req)
            .await
            .unwrap_err();

        assert_eq!(failure.step, DispatchStep::AdminNotification);
        assert!(failure.to_string().contains("The template ID is invalid"));
        admin_mock.assert_hits_async(1).await;
        autoreply_mock.assert_hits_async(0).await;
    }

    #[actix_rt::test]
    async fn test_autoreply_failure_is_reported_as_failure() {
        init_test_logger();
        let server = MockServer::start_async().await;

        let admin_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_FORM_PATH);
                then.status(200).body("OK");
            })
            .await;
        let autoreply_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_PATH);
                then.status(500).body("Internal error");
            })
            .await;

        let req = collect_service_request(form_pairs(&asha_form_body()));
        let failure = dispatcher_for(&server)
            .dispatch("req-3", &req)
            .await
            .unwrap_err();

        assert_eq!(failure.step, DispatchStep::AutoReply);
        admin_mock.assert_hits_async(1).await;
        autoreply_mock.assert_hits_async(1).await;
    }

    #[actix_rt::test]
    async fn test_unreachable_provider_fails_without_retry() {
        init_test_logger();
        // Puerto 1 en localhost: conexión rechazada.
        let dispatcher = DispatchService::new(EmailJsClient::new(test_emailjs_config(
            "http://127.0.0.1:1".to_string(),
        )));

        let req = collect_service_request(form_pairs(&asha_form_body()));
        let failure = dispatcher.dispatch("req-4", &req).await.unwrap_err();

        assert_eq!(failure.step, DispatchStep::AdminNotification);
    }

    #[actix_rt::test]
    async fn test_private_key_sent_as_access_token() {
        init_test_logger();
        let server = MockServer::start_async().await;

        let admin_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(SEND_FORM_PATH)
                    .body_contains("accessToken")
                    .body_contains("private_test");
                then.status(200).body("OK");
            })
            .await;
        let autoreply_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(SEND_PATH)
                    .json_body_partial(r#"{ "accessToken": "private_test" }"#);
                then.status(200).body("OK");
            })
            .await;

        let mut config = test_emailjs_config(server.base_url());
        config.private_key = Some("private_test".to_string());
        let dispatcher = DispatchService::new(EmailJsClient::new(config));

        let req = collect_service_request(form_pairs("user_name=A&user_email=a%40b.c&whatsapp=1"));
        dispatcher.dispatch("req-5", &req).await.unwrap();

        admin_mock.assert_hits_async(1).await;
        autoreply_mock.assert_hits_async(1).await;
    }

    #[actix_rt::test]
    async fn test_empty_services_sent_as_empty_string() {
        init_test_logger();
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_FORM_PATH);
                then.status(200).body("OK");
            })
            .await;
        let autoreply_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(SEND_PATH)
                    .json_body_partial(r#"{ "template_params": { "services": "" } }"#);
                then.status(200).body("OK");
            })
            .await;

        let req = collect_service_request(form_pairs("user_name=A&user_email=a%40b.c&whatsapp=1"));
        dispatcher_for(&server).dispatch("req-6", &req).await.unwrap();

        autoreply_mock.assert_hits_async(1).await;
    }
}
