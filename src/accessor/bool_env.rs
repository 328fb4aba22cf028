use super::{accessor_common, Typed};
use crate::common::{parse_bool, BoolOptions, DefaultValue};
use crate::env::Env;
use crate::ports::provided::EnvError;

/// Permissive boolean.
///
/// Accepts `true`/`1`/`on` and `false`/`0`/`off` in any case. Anything else is
/// `EnvError::InvalidBool` unless added through [`BoolEnv::truthy`] or
/// [`BoolEnv::falsy`], or enabled with [`BoolEnv::yes_or_no`].
///
/// # Examples
/// ```
/// use typed_env::{env, Store};
///
/// let debug = env("DEBUG").from(Store::from_pairs([("DEBUG", "Yes")])).bool().yes_or_no(true);
/// assert_eq!(debug.get(), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct BoolEnv {
    base: Typed<bool>,
    options: BoolOptions,
}

impl BoolEnv {
    pub fn new(env: Env) -> Self {
        Self {
            base: Typed::new(env),
            options: BoolOptions::default(),
        }
    }

    accessor_common!(bool);

    pub fn default(mut self, value: bool) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    pub fn options(mut self, options: BoolOptions) -> Self {
        self.options = options;
        self
    }

    pub fn yes_or_no(mut self, enabled: bool) -> Self {
        self.options = self.options.with_yes_or_no(enabled);
        self
    }

    pub fn truthy<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_truthy(tokens);
        self
    }

    pub fn falsy<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_falsy(tokens);
        self
    }

    pub fn get_or_null(&self) -> Result<Option<bool>, EnvError> {
        self.base.resolve("BoolEnv", |raw| {
            parse_bool(raw, &self.options).ok_or_else(|| EnvError::InvalidBool(raw.to_string()))
        })
    }

    pub fn get(&self) -> Result<bool, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}
