use crate::helper::{spawn_app, spawn_demo_app, valid_contact};
use portfolio::api_client::ApiError;
use portfolio::contact_form::{ContactFormController, Field, SubmitStatus};
use portfolio::mail_dispatch::ACKNOWLEDGEMENT;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn contact_returns_a_200_for_minimum_length_data_in_demo_mode() {
    let app = spawn_demo_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // No request may reach the relay in demo mode.
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], ACKNOWLEDGEMENT);
}

#[tokio::test]
async fn contact_sends_an_email_through_the_relay_when_configured() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], ACKNOWLEDGEMENT);
}

#[tokio::test]
async fn the_relayed_email_is_addressed_to_the_site_owner() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_contact(&valid_contact()).await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["From"], "portfolio@example.com");
    assert_eq!(body["To"], "divyamailz19999@gmail.com");
    assert_eq!(body["Subject"], "Portfolio Contact: Hi there");
    assert_eq!(body["ReplyTo"], "a@b.com");
}

#[tokio::test]
async fn relay_and_demo_acknowledgements_are_identical() {
    let relay = spawn_app().await;
    let demo = spawn_demo_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&relay.email_server)
        .await;

    let relay_body = relay.post_contact(&valid_contact()).await.text().await.unwrap();
    let demo_body = demo.post_contact(&valid_contact()).await.text().await.unwrap();

    assert_eq!(relay_body, demo_body);
}

#[tokio::test]
async fn contact_returns_a_500_without_relay_details_when_the_relay_fails() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid server token xyz"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(500, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert_eq!(
        body,
        r#"{"message":"Failed to send message. Please try again later."}"#
    );
    assert!(!body.contains("401"));
    assert!(!body.contains("xyz"));
}

#[tokio::test]
async fn contact_returns_a_500_when_the_relay_times_out() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(30)))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_a_400_when_name_is_too_short() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let mut body = valid_contact();
    body["name"] = "J".into();

    let response = app.post_contact(&body).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("\"name\""));
    assert!(details.contains("at least 2 characters"));
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // The validation gate must stop every one of these before dispatch.
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("name", "n".repeat(51), "\"name\""),
        ("email", "not-an-email".to_string(), "\"email\""),
        ("email", "a@".to_string(), "\"email\""),
        ("email", "a@b".to_string(), "\"email\""),
        ("email", "a@localhost".to_string(), "\"email\""),
        ("subject", "Hey".to_string(), "\"subject\""),
        ("subject", "s".repeat(101), "\"subject\""),
        ("message", "too short".to_string(), "\"message\""),
        ("message", "m".repeat(1001), "\"message\""),
        ("message", "          ".to_string(), "\"message\""),
    ];

    for (field, value, expected_field) in test_cases {
        let mut body = valid_contact();
        body[field] = value.clone().into();

        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when {} was {:?}.",
            field,
            value
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Validation error");
        assert!(body["details"].as_str().unwrap().contains(expected_field));
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_data_is_missing() {
    let app = spawn_demo_app().await;

    let test_cases = vec![
        ("name", "missing the name"),
        ("email", "missing the email"),
        ("subject", "missing the subject"),
        ("message", "missing the message"),
    ];

    for (field, error_message) in test_cases {
        let mut body = valid_contact();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["details"], format!("\"{}\" is required", field));
    }
}

#[tokio::test]
async fn contact_returns_a_400_for_malformed_json() {
    let app = spawn_demo_app().await;

    let response = app.post_contact_raw("{\"name\": ").await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
}

#[tokio::test]
async fn submitting_the_same_payload_twice_dispatches_twice() {
    let app = spawn_app().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        // No deduplication: each submission is an independent dispatch.
        .expect(2)
        .mount(&app.email_server)
        .await;

    let first = app.post_contact(&valid_contact()).await;
    let second = app.post_contact(&valid_contact()).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[tokio::test]
async fn the_api_client_surfaces_the_server_acknowledgement() {
    let app = spawn_demo_app().await;
    let client = app.portfolio_client();
    let payload = serde_json::from_value(valid_contact()).unwrap();

    let ack = client.submit_contact(&payload).await.unwrap();

    assert_eq!(ack.message, ACKNOWLEDGEMENT);
}

#[tokio::test]
async fn the_api_client_surfaces_validation_failures() {
    let app = spawn_demo_app().await;
    let client = app.portfolio_client();
    let mut payload: portfolio::api_client::ContactPayload =
        serde_json::from_value(valid_contact()).unwrap();
    payload.name = "J".into();

    let error = client.submit_contact(&payload).await.unwrap_err();

    match error {
        ApiError::Http {
            status,
            message,
            details,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Validation error");
            assert!(details.unwrap().contains("at least 2 characters"));
        }
        other => panic!("Expected an HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn the_form_controller_round_trips_against_the_running_app() {
    let app = spawn_demo_app().await;
    let form = ContactFormController::new(app.portfolio_client());
    form.set_field(Field::Name, "Ursula Le Guin");
    form.set_field(Field::Email, "ursula@example.com");
    form.set_field(Field::Subject, "Earthsea");
    form.set_field(Field::Message, "A wizard of Earthsea.\nChapter one.");

    let status = form.submit().await.unwrap();

    assert_eq!(status, SubmitStatus::Success(ACKNOWLEDGEMENT.into()));
    assert_eq!(form.fields().name, "");
}
