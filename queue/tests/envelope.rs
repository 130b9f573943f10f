mod common;

use common::domain::{self, Heartbeat, PasswordReset, ProfileUpdated, WelcomeEmail};
use queue::message::{
    Create, InvalidMessageBody, Kind, Kinded, Message, MessageError, Params, Registry,
};
use queue::{wrap, Envelope, OwnerId};
use rstest::rstest;
use serde_json::{json, Value};

mod account {
    use queue::message;

    #[message]
    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    pub struct AccountClosed {
        pub reason: String,
    }
}

fn params(value: Value) -> Params {
    match value {
        Value::Object(params) => params,
        _ => unreachable!(),
    }
}

#[test]
fn wrap_should_envelope_message_kind_and_params() {
    // arrange
    let message = WelcomeEmail::new(42, "v1");

    // act
    let envelope = wrap(&message).unwrap();

    // assert
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({"type": "WelcomeEmail", "payload": {"template": "v1"}})
    );
}

#[test]
fn wrap_should_use_kind_from_attribute() {
    // arrange
    let message = ProfileUpdated::new(42, vec!["email".into()], None);

    // act
    let envelope = wrap(&message).unwrap();

    // assert
    assert_eq!(envelope.kind(), &Kind::new("urn:profile:updated"));
    assert_eq!(envelope.kind(), &message.kind());
}

#[test]
fn wrap_should_not_include_owner_in_payload() {
    // arrange
    let message = PasswordReset::new(42, "secret", 3600);

    // act
    let envelope = wrap(&message).unwrap();

    // assert
    assert_eq!(
        envelope.payload(),
        &params(json!({"token": "secret", "expires_in": 3600}))
    );
}

#[test]
fn wrap_should_be_deterministic() {
    // arrange
    let message = PasswordReset::new(7, "secret", 60);

    // act
    let first = wrap(&message).unwrap();
    let second = wrap(&message).unwrap();

    // assert
    assert_eq!(first, second);
}

#[test]
fn wrap_should_use_kind_of_hand_written_message() {
    // arrange
    let message = Heartbeat::new(42, 1);

    // act
    let envelope = wrap(&message).unwrap();

    // assert
    assert_eq!(envelope.kind(), &Kind::new("urn:profile:heartbeat"));
    assert_eq!(envelope.kind(), &message.kind());
}

#[test]
fn unwrap_should_roundtrip_hand_written_message() {
    // arrange
    let mut registry = Registry::new();
    let expected = Heartbeat::new(42, 9);

    registry.register::<Heartbeat>().unwrap();

    let envelope = wrap(&expected).unwrap();

    // act
    let message = registry.unwrap(OwnerId::from(42), envelope).unwrap();

    // assert
    assert_eq!(message.kind(), domain::heartbeat_kind());
    assert_eq!(message.as_any().downcast_ref::<Heartbeat>(), Some(&expected));
}

#[test]
fn message_should_be_constructed_outside_its_module() {
    // arrange
    let message = account::AccountClosed {
        reason: "requested".into(),
        owner: OwnerId::from(42),
    };

    // act
    let envelope = wrap(&message).unwrap();

    // assert
    assert_eq!(message.owner(), &OwnerId::from(42));
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({"type": "AccountClosed", "payload": {"reason": "requested"}})
    );
}

#[test]
fn unwrap_should_roundtrip_message() {
    // arrange
    let registry = domain::registry();
    let expected = WelcomeEmail::new(42, "v1");
    let envelope = wrap(&expected).unwrap();

    // act
    let message = registry.unwrap(OwnerId::from(42), envelope).unwrap();

    // assert
    let actual = message.as_any().downcast_ref::<WelcomeEmail>().unwrap();
    assert_eq!(*actual, expected);
}

#[test]
fn unwrap_should_use_supplied_owner() {
    // arrange
    let registry = domain::registry();
    let envelope = wrap(&WelcomeEmail::new(1, "v1")).unwrap();

    // act
    let message = envelope.unwrap(OwnerId::from("user-2"), &registry).unwrap();

    // assert
    assert_eq!(message.owner(), &OwnerId::from("user-2"));
}

#[test]
fn unwrap_should_create_message_from_example_envelope() {
    // arrange
    let registry = domain::registry();
    let envelope: Envelope =
        serde_json::from_value(json!({"type": "WelcomeEmail", "payload": {"template": "v1"}}))
            .unwrap();

    // act
    let message = registry.unwrap(OwnerId::from(42), envelope).unwrap();

    // assert
    let expected = WelcomeEmail::create(OwnerId::from(42), params(json!({"template": "v1"}))).unwrap();
    assert_eq!(message.as_any().downcast_ref::<WelcomeEmail>(), Some(&expected));
}

#[test]
fn unwrap_should_apply_serde_defaults() {
    // arrange
    let registry = domain::registry();
    let envelope = Envelope::new("urn:profile:updated", Params::new());

    // act
    let message = registry.unwrap(OwnerId::from(42), envelope).unwrap();

    // assert
    let message = message.as_any().downcast_ref::<ProfileUpdated>().unwrap();
    assert!(message.fields.is_empty());
    assert_eq!(message.display_name, None);
}

#[rstest]
#[case::empty(json!({}))]
#[case::matching_payload(json!({"template": "v1"}))]
#[case::nested_payload(json!({"profile": {"id": 42}}))]
fn unwrap_should_reject_unknown_type(#[case] payload: Value) {
    // arrange
    let registry = domain::registry();
    let envelope = Envelope::new("Nonexistent", params(payload));

    // act
    let result = registry.unwrap(OwnerId::from(42), envelope);

    // assert
    assert_eq!(
        result.err(),
        Some(MessageError::UnknownType(Kind::new("Nonexistent")))
    );
}

#[rstest]
#[case::missing_key("WelcomeEmail", json!({}))]
#[case::wrong_type("WelcomeEmail", json!({"template": 42}))]
#[case::partial("PasswordReset", json!({"token": "secret"}))]
fn unwrap_should_reject_malformed_payload(#[case] kind: &str, #[case] payload: Value) {
    // arrange
    let registry = domain::registry();
    let envelope = Envelope::new(kind, params(payload));

    // act
    let result = registry.unwrap(OwnerId::from(42), envelope);

    // assert
    match result {
        Err(MessageError::InvalidBody { kind: actual, .. }) => assert_eq!(actual, kind),
        _ => panic!("expected an invalid message body"),
    }
}

#[test]
fn unwrap_should_report_missing_key_from_hand_written_factory() {
    // arrange
    let mut registry = Registry::new();
    let envelope = Envelope::new(domain::heartbeat_kind(), Params::new());

    registry.register::<Heartbeat>().unwrap();

    // act
    let result = registry.unwrap(OwnerId::from(42), envelope);

    // assert
    assert_eq!(
        result.err(),
        Some(MessageError::InvalidBody {
            kind: domain::heartbeat_kind(),
            source: InvalidMessageBody::missing("sequence"),
        })
    );
}

#[test]
fn unwrap_should_accept_legacy_kind_when_registered() {
    // arrange
    let mut registry = domain::registry();
    let envelope: Envelope = serde_json::from_str(
        r#"{"className": "App\\Message\\WelcomeEmail", "message": {"template": "v2"}}"#,
    )
    .unwrap();

    registry
        .register_as::<WelcomeEmail>("App\\Message\\WelcomeEmail")
        .unwrap();

    // act
    let message = registry.unwrap(OwnerId::from(42), envelope).unwrap();

    // assert
    let message = message.as_any().downcast_ref::<WelcomeEmail>().unwrap();
    assert_eq!(message.template, "v2");
}

#[test]
fn unwrap_as_should_accept_legacy_kind_when_registered() {
    // arrange
    let mut registry = domain::registry();
    let envelope: Envelope = serde_json::from_str(
        r#"{"className": "App\\Message\\WelcomeEmail", "message": {"template": "v2"}}"#,
    )
    .unwrap();

    registry
        .register_as::<WelcomeEmail>("App\\Message\\WelcomeEmail")
        .unwrap();

    // act
    let message = registry
        .unwrap_as::<WelcomeEmail>(OwnerId::from(42), envelope)
        .unwrap();

    // assert
    assert_eq!(message, WelcomeEmail::new(42, "v2"));
}

#[test]
fn unwrap_as_should_return_typed_message() {
    // arrange
    let registry = Registry::new();
    let envelope = wrap(&PasswordReset::new(42, "secret", 60)).unwrap();

    // act
    let message = registry
        .unwrap_as::<PasswordReset>(OwnerId::from(42), envelope)
        .unwrap();

    // assert
    assert_eq!(message, PasswordReset::new(42, "secret", 60));
}

#[test]
fn registry_should_contain_all_messages() {
    // arrange

    // act
    let registry = domain::registry();

    // assert
    assert_eq!(registry.len(), 3);
    assert!(registry.contains("WelcomeEmail"));
    assert!(registry.contains("urn:profile:updated"));
    assert!(registry.contains("PasswordReset"));
}
