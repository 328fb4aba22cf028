use super::{accessor_common, Typed};
use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;
use url::Url;

/// Absolute URL.
///
/// # Examples
/// ```
/// use typed_env::{env, Store};
///
/// let url = env("SITE").from(Store::from_pairs([("SITE", "https://github.com")])).url();
/// assert_eq!(url.get_string().unwrap(), "https://github.com/");
/// assert_eq!(url.get().unwrap().host_str(), Some("github.com"));
/// ```
#[derive(Debug, Clone)]
pub struct UrlEnv {
    base: Typed<Url>,
}

impl UrlEnv {
    pub fn new(env: Env) -> Self {
        Self { base: Typed::new(env) }
    }

    accessor_common!(Url);

    pub fn default(mut self, value: Url) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    pub fn get_or_null(&self) -> Result<Option<Url>, EnvError> {
        self.base.resolve("UrlEnv", |raw| {
            Url::parse(raw).map_err(|_| EnvError::InvalidUrl(raw.to_string()))
        })
    }

    pub fn get(&self) -> Result<Url, EnvError> {
        self.base.require(self.get_or_null()?)
    }

    /// Normalized serialization of the URL.
    pub fn get_string_or_null(&self) -> Result<Option<String>, EnvError> {
        Ok(self.get_or_null()?.map(String::from))
    }

    pub fn get_string(&self) -> Result<String, EnvError> {
        self.base.require(self.get_string_or_null()?)
    }
}
