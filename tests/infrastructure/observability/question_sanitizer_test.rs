use semporna::infrastructure::observability::sanitize_question;

#[test]
fn given_empty_question_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_question(""), "[EMPTY]");
    assert_eq!(sanitize_question("   \n\t  "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_unchanged() {
    let question = "what is the talk about?";
    assert_eq!(sanitize_question(question), question);
}

#[test]
fn given_long_question_when_sanitizing_then_truncates_with_char_count() {
    let question = "a".repeat(150);
    let sanitized = sanitize_question(&question);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_question_when_sanitizing_then_truncation_keeps_char_boundary() {
    let question = "ü".repeat(150);
    let sanitized = sanitize_question(&question);

    assert!(sanitized.starts_with(&"ü".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_value() {
    let question = "why does Bearer abc123xyz appear in the transcript?";
    let sanitized = sanitize_question(question);

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(!sanitized.contains("abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_value() {
    let question = "does api_key=sk-12345 get mentioned?";
    let sanitized = sanitize_question(question);

    assert!(sanitized.contains("api_key=[REDACTED]"));
    assert!(!sanitized.contains("sk-12345"));
}

#[test]
fn given_password_when_sanitizing_then_redacts_value() {
    let question = "was password=hunter2 spoken aloud?";
    let sanitized = sanitize_question(question);

    assert!(sanitized.contains("password=[REDACTED]"));
    assert!(!sanitized.contains("hunter2"));
}
