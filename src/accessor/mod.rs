// Typed accessors over a single key.
//
// Each accessor pairs an `Env` with an optional default and parses the raw value
// into its target type. `get_or_null` suppresses only the missing case.

/// Generates `key` and `default_with` for an accessor holding `base: Typed<$value>`.
macro_rules! accessor_common {
    ($value:ty) => {
        pub fn key(&self) -> &str {
            self.base.env().key()
        }

        /// Fallback computed on first use, at most once across clones of this accessor.
        pub fn default_with<F>(mut self, generator: F) -> Self
        where
            F: Fn() -> $value + Send + Sync + 'static,
        {
            self.base = self.base.with_default($crate::common::DefaultValue::lazy(generator));
            self
        }
    };
}

pub(crate) use accessor_common;

pub mod array_env;
pub mod bool_env;
pub mod eval_env;
pub mod float_env;
pub mod int_env;
pub mod json_env;
pub mod port_env;
pub mod string_env;
pub mod url_env;

pub use array_env::ArrayEnv;
pub use bool_env::BoolEnv;
pub use eval_env::EvalEnv;
pub use float_env::FloatEnv;
pub use int_env::IntEnv;
pub use json_env::JsonEnv;
pub use port_env::PortEnv;
pub use string_env::StringEnv;
pub use url_env::UrlEnv;

use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;
use crate::err_log;
use std::sync::Arc;

/// Key handle plus shared default cell.
#[derive(Debug)]
pub(crate) struct Typed<T> {
    env: Env,
    default: Option<Arc<DefaultValue<T>>>,
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
            default: self.default.clone(),
        }
    }
}

impl<T: Clone> Typed<T> {
    pub(crate) fn new(env: Env) -> Self {
        Self { env, default: None }
    }

    pub(crate) fn env(&self) -> &Env {
        &self.env
    }

    pub(crate) fn with_default(mut self, default: DefaultValue<T>) -> Self {
        self.default = Some(Arc::new(default));
        self
    }

    /// Raw value parsed by `parse`, else the default, else `None`.
    /// The default is returned as-is, never parsed.
    pub(crate) fn resolve<F>(&self, class: &str, parse: F) -> Result<Option<T>, EnvError>
    where
        F: FnOnce(&str) -> Result<T, EnvError>,
    {
        match self.env.get_or_null() {
            Some(raw) => match parse(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    err_log!(class, "resolve", &e.to_string());
                    Err(e)
                }
            },
            None => Ok(self.default.as_ref().map(|d| d.resolve())),
        }
    }

    pub(crate) fn require<V>(&self, value: Option<V>) -> Result<V, EnvError> {
        value.ok_or_else(|| self.env.missing())
    }
}
