// Process environment tests. Keys are unique per test since tests run in parallel.
use typed_env::{env, EnvError, ProcessEnv, EnvClient};

#[test]
fn test_reads_process_env_by_default() {
    // SAFETY: key is unique to this test
    unsafe { std::env::set_var("TYPED_ENV_IT_PORT", "4000") };
    assert_eq!(env("TYPED_ENV_IT_PORT").port().get(), Ok(4000));
    assert_eq!(env("TYPED_ENV_IT_PORT").string().get(), Ok("4000".to_string()));
}

#[test]
fn test_raw_and_undefined() {
    let v = env("TYPED_ENV_UNSET");
    assert_eq!(v.get_or_null(), None);
    assert_eq!(v.get(), Err(EnvError::Missing("TYPED_ENV_UNSET".to_string())));
}

#[test]
fn test_process_env_client() {
    // SAFETY: key is unique to this test
    unsafe { std::env::set_var("TYPED_ENV_IT_CLIENT", "on") };
    let client = ProcessEnv::new();
    assert!(client.has("TYPED_ENV_IT_CLIENT"));
    assert_eq!(client.get("TYPED_ENV_IT_CLIENT"), Some("on".to_string()));
    assert_eq!(env("TYPED_ENV_IT_CLIENT").bool().get(), Ok(true));
}
