use volkit::{SecretFields, sanitize};

#[derive(Clone, Debug, SecretFields)]
struct GetCapabilitiesRequest;

fn main() {
    assert_eq!(sanitize(&GetCapabilitiesRequest), "");
}
