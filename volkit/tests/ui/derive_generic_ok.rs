use std::collections::BTreeMap;
use std::fmt::Debug;

use volkit::{SecretFields, sanitize};

#[derive(Clone, Debug, SecretFields)]
struct Tagged<T: Clone + Debug> {
    tag: T,
    #[secret]
    secrets: BTreeMap<String, String>,
}

fn main() {
    let request = Tagged {
        tag: 7_u32,
        secrets: BTreeMap::from([("token".to_string(), "sk_live_abc".to_string())]),
    };
    let rendered = sanitize(&request);
    assert!(!rendered.contains("sk_live_abc"));
}
