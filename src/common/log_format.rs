use serde_json::Value;

/// # Examples
/// ```
/// use typed_env::common::log_format::LogFormat;
///
/// let fn_message = LogFormat::call("Env", "get", &["'PORT'".to_string()]);
/// assert_eq!(fn_message, "Env::get('PORT')");
/// ```
pub struct LogFormat;

impl LogFormat {

    pub fn call(class: &str, fn_name: &str, args: &[String]) -> String {
        let args_str = args.join(", ");
        format!("{}::{}({})", class, fn_name, args_str)
    }

    /// # Examples
    /// ```
    /// use typed_env::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::error("PortEnv", "get", "bad value"), "PortEnv::get: bad value");
    /// ```
    pub fn error(class: &str, fn_name: &str, message: &str) -> String {
        format!("{}::{}: {}", class, fn_name, message)
    }

    /// Format JSON value for log output
    ///
    /// # Examples
    /// ```
    /// use typed_env::common::log_format::LogFormat;
    /// use serde_json::json;
    ///
    /// assert_eq!(LogFormat::format_arg(&json!("text")), "'text'");
    /// assert_eq!(LogFormat::format_arg(&json!(42)), "42");
    /// assert_eq!(LogFormat::format_arg(&json!(null)), "null");
    /// assert_eq!(LogFormat::format_arg(&json!([1, 2, 3])), "[3 items]");
    /// assert_eq!(LogFormat::format_arg(&json!({"a": 1})), "{1 fields}");
    /// ```
    pub fn format_arg(value: &Value) -> String {
        match value {
            Value::String(s) => Self::format_str_arg(s),
            Value::Array(arr) if arr.is_empty() => "[]".to_string(),
            Value::Array(arr) => format!("[{} items]", arr.len()),
            Value::Object(obj) if obj.is_empty() => "{}".to_string(),
            Value::Object(obj) => format!("{{{} fields}}", obj.len()),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
        }
    }

    /// Format string argument for log output. Long values are cut at a char boundary.
    ///
    /// # Examples
    /// ```
    /// use typed_env::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::format_str_arg("PORT"), "'PORT'");
    /// ```
    pub fn format_str_arg(s: &str) -> String {
        if s.chars().count() > 50 {
            let head: String = s.chars().take(47).collect();
            format!("'{}'...", head)
        } else {
            format!("'{}'", s)
        }
    }
}

/// Log macro: fn call
///
/// # Examples
/// ```ignore
/// fn_log!("Env", "get", "PORT");
/// // Logs: Env::get('PORT')
/// ```
#[macro_export]
macro_rules! fn_log {
    ($class:expr, $fun:expr $(, $arg:expr)*) => {{
        #[cfg(feature = "logging")]
        {
            let args: Vec<String> = vec![
                $(
                    $crate::common::log_format::LogFormat::format_str_arg($arg),
                )*
            ];
            log::debug!("{}", $crate::common::log_format::LogFormat::call($class, $fun, &args));
        }
    }};
}

/// Log macro: rejected value
///
/// # Examples
/// ```ignore
/// err_log!("PortEnv", "get", &err.to_string());
/// // Logs: PortEnv::get: 70000 is not a valid port number between 0 and 65535.
/// ```
#[macro_export]
macro_rules! err_log {
    ($class:expr, $fun:expr, $msg:expr) => {{
        #[cfg(feature = "logging")]
        {
            log::error!("{}", $crate::common::log_format::LogFormat::error($class, $fun, $msg));
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = ($class, $fun);
        }
    }};
}
