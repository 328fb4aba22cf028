use super::{accessor_common, Typed};
use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;

/// 64-bit float. Surrounding whitespace is ignored.
#[derive(Debug, Clone)]
pub struct FloatEnv {
    base: Typed<f64>,
}

impl FloatEnv {
    pub fn new(env: Env) -> Self {
        Self { base: Typed::new(env) }
    }

    accessor_common!(f64);

    pub fn default(mut self, value: f64) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    pub fn get_or_null(&self) -> Result<Option<f64>, EnvError> {
        self.base.resolve("FloatEnv", |raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| EnvError::InvalidFloat(raw.to_string()))
        })
    }

    pub fn get(&self) -> Result<f64, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}
