mod secret_fields {
    #[test]
    fn accepts_map_field_pattern() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_map_field_ok.rs");
    }

    #[test]
    fn accepts_no_secrets_pattern() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_no_secrets_ok.rs");
    }

    #[test]
    fn accepts_unit_struct_pattern() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_unit_struct_ok.rs");
    }

    #[test]
    fn accepts_generic_struct_pattern() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/derive_generic_ok.rs");
    }
}
