use super::{accessor_common, Typed};
use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;

/// TCP/UDP port, 0 through 65535 inclusive.
///
/// # Examples
/// ```
/// use typed_env::{env, EnvError, Store};
///
/// let port = env("PORT").from(Store::from_pairs([("PORT", "70000")])).port();
/// assert_eq!(port.get(), Err(EnvError::InvalidPort("70000".to_string())));
/// ```
#[derive(Debug, Clone)]
pub struct PortEnv {
    base: Typed<u16>,
}

impl PortEnv {
    pub fn new(env: Env) -> Self {
        Self { base: Typed::new(env) }
    }

    accessor_common!(u16);

    pub fn default(mut self, value: u16) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    pub fn get_or_null(&self) -> Result<Option<u16>, EnvError> {
        self.base.resolve("PortEnv", |raw| {
            raw.trim()
                .parse::<i64>()
                .ok()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| EnvError::InvalidPort(raw.to_string()))
        })
    }

    pub fn get(&self) -> Result<u16, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}
