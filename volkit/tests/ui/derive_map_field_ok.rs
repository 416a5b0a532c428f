use std::collections::BTreeMap;

use volkit::{SecretFields, sanitize};

#[derive(Clone, Debug, SecretFields)]
struct NodePublishRequest {
    volume_id: String,
    #[secret]
    secrets: BTreeMap<String, String>,
}

fn main() {
    let request = NodePublishRequest {
        volume_id: "vol-123".to_string(),
        secrets: BTreeMap::from([("username".to_string(), "alice".to_string())]),
    };
    let rendered = sanitize(&request);
    assert!(!rendered.contains("alice"));
}
