// Required Ports - interfaces the caller may implement
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Environment client
/// Resolves a raw value for a key. Absence is `None`, never an error.
pub trait EnvClient: Send + Sync {
    /// Returns the raw value of `key`
    fn get(&self, key: &str) -> Option<String>;
}

/// Resolver functions are clients.
///
/// # Examples
/// ```
/// use typed_env::EnvClient;
///
/// let resolver = |key: &str| Some(format!("value of {}", key));
/// assert_eq!(EnvClient::get(&resolver, "ENV_TEST"), Some("value of ENV_TEST".to_string()));
/// ```
impl<F> EnvClient for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl EnvClient for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvClient for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Evaluator
/// Opt-in hook that turns a raw value into a result by executing it.
///
/// The library never executes anything itself: whatever an implementation runs,
/// it runs with the full trust of the caller. Only hand raw values from stores
/// you control to an evaluator.
pub trait Evaluator: Send + Sync {
    /// Evaluates `source`. The error string is reported as-is.
    fn eval(&self, source: &str) -> Result<Value, String>;
}
