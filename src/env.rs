use crate::accessor::{
    ArrayEnv, BoolEnv, EvalEnv, FloatEnv, IntEnv, JsonEnv, PortEnv, StringEnv, UrlEnv,
};
use crate::ports::provided::EnvError;
use crate::ports::required::Evaluator;
use crate::store::Store;
use crate::fn_log;
use std::sync::Arc;

/// Handle on one key of one store.
///
/// Modifiers return a new handle; the receiver is never changed.
///
/// # Examples
/// ```
/// use typed_env::{env, Store};
///
/// let port = env("PORT")
///     .from(Store::from_pairs([("PORT", "8080")]))
///     .port()
///     .get()
///     .unwrap();
/// assert_eq!(port, 8080);
///
/// let workers = env("WORKERS")
///     .from(Store::from_pairs([("OTHER", "1")]))
///     .int()
///     .default(4)
///     .get()
///     .unwrap();
/// assert_eq!(workers, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    key: String,
    store: Store,
}

/// Creates a handle on `key` in the process environment.
pub fn env(key: impl Into<String>) -> Env {
    Env::new(key)
}

impl Env {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            store: Store::Process,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Same key, read from `store` instead.
    pub fn from(&self, store: impl Into<Store>) -> Env {
        Env {
            key: self.key.clone(),
            store: store.into(),
        }
    }

    /// Raw value, untyped.
    pub fn get_or_null(&self) -> Option<String> {
        fn_log!("Env", "get_or_null", &self.key);
        self.store.resolve(&self.key)
    }

    /// Raw value, or `EnvError::Missing`.
    pub fn get(&self) -> Result<String, EnvError> {
        self.get_or_null().ok_or_else(|| self.missing())
    }

    pub(crate) fn missing(&self) -> EnvError {
        EnvError::Missing(self.key.clone())
    }

    pub fn string(&self) -> StringEnv {
        StringEnv::new(self.clone())
    }

    pub fn bool(&self) -> BoolEnv {
        BoolEnv::new(self.clone())
    }

    pub fn int(&self) -> IntEnv {
        IntEnv::new(self.clone())
    }

    pub fn float(&self) -> FloatEnv {
        FloatEnv::new(self.clone())
    }

    pub fn port(&self) -> PortEnv {
        PortEnv::new(self.clone())
    }

    pub fn url(&self) -> UrlEnv {
        UrlEnv::new(self.clone())
    }

    pub fn array(&self) -> ArrayEnv {
        ArrayEnv::new(self.clone())
    }

    pub fn json(&self) -> JsonEnv {
        JsonEnv::new(self.clone())
    }

    /// Evaluates the raw value with `evaluator`.
    ///
    /// Whatever the evaluator executes runs with the caller's full trust; see [`Evaluator`].
    pub fn eval<E: Evaluator + 'static>(&self, evaluator: E) -> EvalEnv {
        EvalEnv::new(self.clone(), Arc::new(evaluator))
    }
}
