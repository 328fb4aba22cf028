use super::{accessor_common, Typed};
use crate::common::{DefaultValue, Splitter};
use crate::env::Env;
use crate::ports::provided::EnvError;

/// List of non-empty items, in order.
///
/// # Examples
/// ```
/// use typed_env::{env, Store};
/// use typed_env::common::Splitter;
///
/// let hosts = env("HOSTS").from(Store::from_pairs([("HOSTS", "a.local, b.local\nc.local")])).array();
/// assert_eq!(hosts.get().unwrap(), vec!["a.local", "b.local", "c.local"]);
///
/// let paths = env("PATHS").from(Store::from_pairs([("PATHS", "/bin:/usr/bin")])).array()
///     .splitter(Splitter::literal(":"));
/// assert_eq!(paths.get().unwrap(), vec!["/bin", "/usr/bin"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayEnv {
    base: Typed<Vec<String>>,
    splitter: Splitter,
}

impl ArrayEnv {
    pub fn new(env: Env) -> Self {
        Self {
            base: Typed::new(env),
            splitter: Splitter::Default,
        }
    }

    accessor_common!(Vec<String>);

    pub fn default<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.base = self.base.with_default(DefaultValue::value(items));
        self
    }

    pub fn splitter(mut self, splitter: Splitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn get_or_null(&self) -> Result<Option<Vec<String>>, EnvError> {
        self.base.resolve("ArrayEnv", |raw| Ok(self.splitter.split(raw)))
    }

    pub fn get(&self) -> Result<Vec<String>, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}
