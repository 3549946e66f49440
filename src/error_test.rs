use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = SiteError::MissingElement("#themeToggle".to_owned());
    assert_eq!(err.to_string(), "element not found: #themeToggle");
    assert_eq!(err.error_code(), "E_MISSING_ELEMENT");
}

#[test]
fn config_errors_convert_from_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SiteError::from(parse);
    assert!(matches!(err, SiteError::Config(_)));
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn error_codes_are_distinct() {
    let codes = [
        SiteError::NoWindow.error_code(),
        SiteError::MissingElement(String::new()).error_code(),
        SiteError::Storage(String::new()).error_code(),
        SiteError::Js(String::new()).error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
