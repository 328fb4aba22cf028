use super::{accessor_common, Typed};
use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;
use crate::fn_log;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON document, as a `serde_json::Value` or deserialized into a caller type.
///
/// # Examples
/// ```
/// use typed_env::{env, Store};
///
/// let v = env("ENV_TEST").from(Store::from_pairs([("ENV_TEST", r#"{"name":"x"}"#)])).json();
/// assert_eq!(v.get().unwrap()["name"], "x");
/// ```
#[derive(Debug, Clone)]
pub struct JsonEnv {
    base: Typed<Value>,
}

impl JsonEnv {
    pub fn new(env: Env) -> Self {
        Self { base: Typed::new(env) }
    }

    accessor_common!(Value);

    pub fn default(mut self, value: Value) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    pub fn get_or_null(&self) -> Result<Option<Value>, EnvError> {
        let value = self.base.resolve("JsonEnv", |raw| {
            serde_json::from_str::<Value>(raw)
                .map_err(|e| EnvError::InvalidJson(raw.to_string(), e.to_string()))
        })?;
        #[cfg(feature = "logging")]
        {
            if let Some(v) = &value {
                log::debug!("JsonEnv::get_or_null -> {}", crate::common::LogFormat::format_arg(v));
            }
        }
        Ok(value)
    }

    pub fn get(&self) -> Result<Value, EnvError> {
        self.base.require(self.get_or_null()?)
    }

    /// Deserializes the document (or the default) into `T`.
    ///
    /// # Examples
    /// ```
    /// use serde::Deserialize;
    /// use typed_env::{env, Store};
    ///
    /// #[derive(Deserialize)]
    /// struct Database { host: String, port: u16 }
    ///
    /// let raw = r#"{"host":"db","port":5432}"#;
    /// let db: Database = env("DB").from(Store::from_pairs([("DB", raw)])).json().get_as().unwrap();
    /// assert_eq!(db.host, "db");
    /// assert_eq!(db.port, 5432);
    /// ```
    pub fn get_as_or_null<T: DeserializeOwned>(&self) -> Result<Option<T>, EnvError> {
        fn_log!("JsonEnv", "get_as_or_null", self.key());
        self.get_or_null()?
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| EnvError::InvalidJson(value.to_string(), e.to_string()))
            })
            .transpose()
    }

    pub fn get_as<T: DeserializeOwned>(&self) -> Result<T, EnvError> {
        self.base.require(self.get_as_or_null()?)
    }
}
