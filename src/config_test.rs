use super::*;

#[test]
fn defaults_when_no_vars_are_set() {
    let config = AppConfig::from_vars(None, None, None).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = AppConfig::from_vars(Some("https://api.nhau.app/v1/"), None, None).unwrap();
    assert_eq!(config.api_base, "https://api.nhau.app/v1");
}

#[test]
fn empty_admin_email_disables_sentinel() {
    let config = AppConfig::from_vars(None, Some(""), None).unwrap();
    assert_eq!(config.admin_email, None);

    let config = AppConfig::from_vars(None, Some(" root@example.com "), None).unwrap();
    assert_eq!(config.admin_email.as_deref(), Some("root@example.com"));
}

#[test]
fn namespaces_parse_prefix_and_key_pairs() {
    let config = AppConfig::from_vars(None, None, Some("/:a_user, /beta/:b_user")).unwrap();
    assert_eq!(config.namespaces, vec![Namespace::new("", "a_user"), Namespace::new("/beta", "b_user")]);
}

#[test]
fn namespaces_reject_malformed_entries() {
    assert!(matches!(
        AppConfig::from_vars(None, None, Some("/:a_user,/beta")),
        Err(ConfigError::InvalidNamespaces(entry)) if entry == "/beta"
    ));
    assert!(AppConfig::from_vars(None, None, Some("/:a_user,beta:b_user")).is_err());
    assert!(AppConfig::from_vars(None, None, Some("/:a_user,/beta:")).is_err());
}

#[test]
fn namespaces_reject_duplicates_and_missing_root() {
    assert!(AppConfig::from_vars(None, None, Some("/:a_user,/:b_user")).is_err());
    assert!(AppConfig::from_vars(None, None, Some("/:a_user,/beta:a_user")).is_err());
    assert!(AppConfig::from_vars(None, None, Some("/beta:b_user")).is_err());
}

#[test]
fn namespace_for_resolves_against_configured_prefixes() {
    let config = AppConfig::default();
    assert_eq!(config.namespace_for("/v2/login").storage_key, "nhau_v2_user");
    assert_eq!(config.namespace_for("/polls").storage_key, DEFAULT_STORAGE_KEY);

    let empty = AppConfig { namespaces: Vec::new(), ..AppConfig::default() };
    assert_eq!(empty.namespace_for("/v2"), Namespace::new("", DEFAULT_STORAGE_KEY));
}
