use parcel_core::{Parcel, ParcelStatus, ParcelStatusParseError};

#[test]
fn parcel_new_sets_defaults() {
    let parcel = Parcel::new(1000, "test");

    assert_eq!(parcel.number, 0);
    assert!(!parcel.is_persisted());
    assert_eq!(parcel.client, 1000);
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert_eq!(parcel.address, "test");
    assert!(parcel.validate().is_ok());
}

#[test]
fn parcel_serialization_uses_lowercase_status() {
    let parcel = Parcel {
        number: 7,
        client: 42,
        status: ParcelStatus::Sent,
        address: "Main st. 1".to_string(),
        created_at: "2024-05-01T10:15:00Z".to_string(),
    };

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 7);
    assert_eq!(json["client"], 42);
    assert_eq!(json["status"], "sent");
    assert_eq!(json["created_at"], "2024-05-01T10:15:00Z");

    let decoded: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, parcel);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "number": 1,
        "client": 1,
        "status": "lost",
        "address": "x",
        "created_at": "2024-05-01T10:15:00Z"
    });

    assert!(serde_json::from_value::<Parcel>(value).is_err());
}

#[test]
fn status_parse_error_names_the_token() {
    let err = "returned".parse::<ParcelStatus>().unwrap_err();
    assert_eq!(err, ParcelStatusParseError("returned".to_string()));
    assert!(err.to_string().contains("`returned`"));
}
