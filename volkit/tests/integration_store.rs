//! End-to-end tests for credential resolution and volume metadata
//! persistence, including the hand-off into message sanitization.

use std::collections::BTreeMap;
use std::fs;

use volkit::{
    CredentialError, CredentialResolver, MemoryCredentialResolver, MetadataError, SANITIZED_MARKER,
    SecretFields, SecretReference, VOLUME_DATA_FILE, load_volume_data, sanitize, save_volume_data,
    volume_device_data_dir,
};

#[test]
fn metadata_round_trip_under_device_data_dir() {
    let base = tempfile::tempdir().unwrap();
    let data_dir = volume_device_data_dir(base.path(), "example.storage.dev/vol-123");
    fs::create_dir_all(&data_dir).unwrap();

    let data = BTreeMap::from([
        ("driverName".to_string(), "example.storage.dev".to_string()),
        ("volumeHandle".to_string(), "vol-123".to_string()),
        ("attachmentID".to_string(), "att-9".to_string()),
    ]);

    save_volume_data(&data_dir, VOLUME_DATA_FILE, &data).unwrap();
    assert_eq!(load_volume_data(&data_dir, VOLUME_DATA_FILE).unwrap(), data);

    // The identifier's separator never leaks into the directory layout.
    assert!(data_dir.to_str().unwrap().contains("example.storage.dev~vol-123"));
}

#[test]
fn loading_from_an_unused_directory_is_not_found() {
    let base = tempfile::tempdir().unwrap();
    let err = load_volume_data(base.path(), VOLUME_DATA_FILE).unwrap_err();
    assert!(matches!(err, MetadataError::NotFound { .. }));
}

#[test]
fn corrupt_metadata_is_reported_as_malformed() {
    let base = tempfile::tempdir().unwrap();
    fs::write(base.path().join(VOLUME_DATA_FILE), "{\"volumeHandle\": [1, 2]}").unwrap();

    let err = load_volume_data(base.path(), VOLUME_DATA_FILE).unwrap_err();
    assert!(matches!(err, MetadataError::Malformed { .. }));
}

#[test]
fn resolved_credentials_flow_into_a_sanitized_request() {
    #[derive(Clone, Debug, SecretFields)]
    struct NodeStageRequest {
        volume_id: String,
        #[secret]
        secrets: BTreeMap<String, String>,
    }

    let secret_ref = SecretReference::new("stage-secret", "storage");
    let mut resolver = MemoryCredentialResolver::new();
    resolver.insert(
        secret_ref.clone(),
        BTreeMap::from([("token".to_string(), "sk_live_abc123".to_string())]),
    );

    let request = NodeStageRequest {
        volume_id: "vol-123".to_string(),
        secrets: resolver.resolve(&secret_ref).unwrap(),
    };

    // The request keeps the real credentials for the wire...
    assert_eq!(request.secrets["token"], "sk_live_abc123");

    // ...while the log line never sees them.
    let rendered = sanitize(&request);
    assert!(rendered.contains("token"));
    assert!(rendered.contains(SANITIZED_MARKER));
    assert!(!rendered.contains("sk_live_abc123"));
}

#[test]
fn resolution_failures_carry_the_reference() {
    let mut resolver = MemoryCredentialResolver::new();
    let missing = SecretReference::new("missing", "storage");
    assert_eq!(
        resolver.resolve(&missing),
        Err(CredentialError::NotFound {
            reference: missing.clone()
        })
    );

    let denied = SecretReference::new("locked", "storage");
    resolver.insert(denied.clone(), BTreeMap::new());
    resolver.deny(denied.clone());
    assert_eq!(
        resolver.resolve(&denied),
        Err(CredentialError::AccessDenied {
            reference: denied.clone()
        })
    );
}
