use volkit::{SecretFields, sanitize};

#[derive(Clone, Debug, SecretFields)]
struct ProbeRequest {
    ready: bool,
}

fn main() {
    let request = ProbeRequest { ready: true };
    assert_eq!(sanitize(&request), "");
}
