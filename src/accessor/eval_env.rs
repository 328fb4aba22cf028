use super::{accessor_common, Typed};
use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;
use crate::ports::required::Evaluator;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Raw value handed to a caller-supplied [`Evaluator`].
///
/// This crate ships no evaluator and never executes a raw value on its own.
/// Plugging one in means every value in the store is trusted as code.
///
/// # Examples
/// ```
/// use serde_json::{json, Value};
/// use typed_env::{env, Evaluator, Store};
///
/// struct Sum;
///
/// impl Evaluator for Sum {
///     fn eval(&self, source: &str) -> Result<Value, String> {
///         source
///             .split('+')
///             .map(|n| n.trim().parse::<i64>().map_err(|e| e.to_string()))
///             .sum::<Result<i64, String>>()
///             .map(Value::from)
///     }
/// }
///
/// let v = env("EXPR").from(Store::from_pairs([("EXPR", "1 + 2")])).eval(Sum);
/// assert_eq!(v.get().unwrap(), json!(3));
/// ```
#[derive(Clone)]
pub struct EvalEnv {
    base: Typed<Value>,
    evaluator: Arc<dyn Evaluator>,
}

impl EvalEnv {
    pub fn new(env: Env, evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            base: Typed::new(env),
            evaluator,
        }
    }

    accessor_common!(Value);

    pub fn default(mut self, value: Value) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    pub fn get_or_null(&self) -> Result<Option<Value>, EnvError> {
        self.base.resolve("EvalEnv", |raw| {
            self.evaluator
                .eval(raw)
                .map_err(|reason| EnvError::EvalFailed(raw.to_string(), reason))
        })
    }

    pub fn get(&self) -> Result<Value, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}

impl fmt::Debug for EvalEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalEnv")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
