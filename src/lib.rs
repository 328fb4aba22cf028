//! Typed environment variable accessors.
//!
//! ```
//! use typed_env::{env, Store};
//!
//! let store = Store::from_pairs([("PORT", "8080"), ("HOSTS", "a,b")]);
//! let port = env("PORT").from(store.clone()).port().default(3000).get().unwrap();
//! let hosts = env("HOSTS").from(store).array().get().unwrap();
//! assert_eq!(port, 8080);
//! assert_eq!(hosts, vec!["a", "b"]);
//! ```

pub mod common;
pub mod ports;
pub mod store;
pub mod env;
pub mod accessor;

pub use common::LogFormat;
pub use env::{env, Env};
pub use store::{ProcessEnv, Store};

pub use accessor::{
    ArrayEnv, BoolEnv, EvalEnv, FloatEnv,
    IntEnv, JsonEnv, PortEnv, StringEnv, UrlEnv,
};

pub use ports::required::{EnvClient, Evaluator};
pub use ports::provided::EnvError;
