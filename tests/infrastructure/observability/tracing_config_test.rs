use semporna::infrastructure::observability::TracingConfig;

#[test]
fn given_no_env_vars_when_creating_default_then_plain_format_is_used() {
    let config = TracingConfig::default();
    assert!(!config.json_format);
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_explicit_values_when_creating_then_fields_are_kept() {
    let config = TracingConfig::new("prod", true, "warn");
    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.level, "warn");
}
