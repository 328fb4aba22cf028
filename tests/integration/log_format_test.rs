// Log format tests
use typed_env::LogFormat;
use serde_json::json;

#[test]
fn test_log_format_usage() {
    let msg = LogFormat::call("Env", "get_or_null", &["'PORT'".to_string()]);
    assert_eq!(msg, "Env::get_or_null('PORT')");

    let err = LogFormat::error("PortEnv", "resolve", "70000 is not a valid port number between 0 and 65535.");
    assert_eq!(err, "PortEnv::resolve: 70000 is not a valid port number between 0 and 65535.");

    assert_eq!(LogFormat::format_arg(&json!("test")), "'test'");
    assert_eq!(LogFormat::format_arg(&json!(false)), "false");
    assert_eq!(LogFormat::format_arg(&json!([])), "[]");
    assert_eq!(LogFormat::format_arg(&json!({})), "{}");
}

#[test]
fn test_log_format_str_arg() {
    assert_eq!(LogFormat::format_str_arg("short"), "'short'");

    let long = "x".repeat(60);
    let result = LogFormat::format_str_arg(&long);
    assert!(result.starts_with("'xxx"));
    assert!(result.ends_with("'..."));
    assert_eq!(result.len(), 52); // ' + 47 chars + '...
}

// Macros compile whether or not the logging feature is enabled
#[test]
fn test_macro_compilation() {
    typed_env::fn_log!("Test", "method", "arg1", "arg2");
    typed_env::err_log!("Test", "method", "error message");
}
