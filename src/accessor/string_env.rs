use super::{accessor_common, Typed};
use crate::env::Env;
use crate::ports::provided::EnvError;

/// Raw value, verbatim.
///
/// # Examples
/// ```
/// use typed_env::{env, Store};
///
/// let v = env("ENV_TEST").from(Store::from_pairs([("ENV_TEST", "test")])).string();
/// assert_eq!(v.get().unwrap(), "test");
///
/// let v = env("ENV_TEST").from(Store::from_pairs([("OTHER", "x")])).string().default("default");
/// assert_eq!(v.get().unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct StringEnv {
    base: Typed<String>,
}

impl StringEnv {
    pub fn new(env: Env) -> Self {
        Self { base: Typed::new(env) }
    }

    accessor_common!(String);

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.base = self.base.with_default(crate::common::DefaultValue::value(value.into()));
        self
    }

    pub fn get_or_null(&self) -> Result<Option<String>, EnvError> {
        self.base.resolve("StringEnv", |raw| Ok(raw.to_string()))
    }

    pub fn get(&self) -> Result<String, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}
