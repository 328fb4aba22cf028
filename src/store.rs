use crate::ports::required::EnvClient;
use crate::fn_log;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Process environment adapter.
///
/// Values that are not valid unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }

    /// Check if environment variable exists
    pub fn has(&self, key: &str) -> bool {
        std::env::var(key).is_ok()
    }

    /// Snapshot of all unicode environment variables
    pub fn get_all(&self) -> HashMap<String, String> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

impl EnvClient for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Source of raw values. Read-only; clones share their data.
///
/// # Examples
/// ```
/// use typed_env::Store;
///
/// let store = Store::from_pairs([("ENV_TEST", "test")]);
/// assert_eq!(store.resolve("ENV_TEST"), Some("test".to_string()));
/// assert_eq!(store.resolve("OTHER"), None);
///
/// let store = Store::resolver(|key: &str| Some(format!("value of {}", key)));
/// assert_eq!(store.resolve("ENV_TEST"), Some("value of ENV_TEST".to_string()));
/// ```
#[derive(Clone, Default)]
pub enum Store {
    /// The process environment table
    #[default]
    Process,
    /// A static key-value mapping
    Map(Arc<HashMap<String, String>>),
    /// A map-like container or resolver function
    Client(Arc<dyn EnvClient>),
}

impl Store {
    pub fn new() -> Self {
        Store::Process
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Store::Map(Arc::new(
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ))
    }

    pub fn map(map: HashMap<String, String>) -> Self {
        Store::Map(Arc::new(map))
    }

    pub fn client<C: EnvClient + 'static>(client: C) -> Self {
        Store::Client(Arc::new(client))
    }

    pub fn resolver<F>(resolver: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Store::Client(Arc::new(resolver))
    }

    /// Looks up `key`. Absence is `None`; a client's own panics propagate.
    pub fn resolve(&self, key: &str) -> Option<String> {
        fn_log!("Store", "resolve", key);
        match self {
            Store::Process => ProcessEnv.get(key),
            Store::Map(map) => map.get(key).cloned(),
            Store::Client(client) => client.get(key),
        }
    }

    pub fn is_process(&self) -> bool {
        matches!(self, Store::Process)
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Store::Process => write!(f, "Store::Process"),
            Store::Map(map) => write!(f, "Store::Map({} keys)", map.len()),
            Store::Client(_) => write!(f, "Store::Client"),
        }
    }
}

impl From<HashMap<String, String>> for Store {
    fn from(map: HashMap<String, String>) -> Self {
        Store::map(map)
    }
}
