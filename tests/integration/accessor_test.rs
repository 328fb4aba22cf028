// Typed accessor tests
use typed_env::common::Splitter;
use typed_env::{env, Env, EnvError, Evaluator, Store};
use serde::Deserialize;
use serde_json::{json, Value};

fn with(raw: &'static str) -> Env {
    env("ENV_TEST").from(Store::resolver(move |_: &str| Some(raw.to_string())))
}

#[test]
fn test_bool() {
    assert_eq!(with("true").bool().get(), Ok(true));
    assert_eq!(with("false").bool().get(), Ok(false));
    assert_eq!(with("yes").bool().yes_or_no(true).get(), Ok(true));
    assert_eq!(with("nope").bool().get(), Err(EnvError::InvalidBool("nope".to_string())));
}

#[test]
fn test_int() {
    assert_eq!(with("10").int().get(), Ok(10));
    assert_eq!(with("ff").int().radix(16).get(), Ok(255));
    assert_eq!(with("ten").int().get(), Err(EnvError::InvalidInt("ten".to_string())));
    assert_eq!(with("1").int().radix(40).get(), Err(EnvError::InvalidRadix(40)));
}

#[test]
fn test_float() {
    assert_eq!(with("2.5").float().get(), Ok(2.5));
    assert_eq!(with("x").float().get(), Err(EnvError::InvalidFloat("x".to_string())));
}

#[test]
fn test_port() {
    assert_eq!(with("8080").port().get(), Ok(8080));
    assert_eq!(with("70000").port().get(), Err(EnvError::InvalidPort("70000".to_string())));
    assert_eq!(with("-1").port().get(), Err(EnvError::InvalidPort("-1".to_string())));

    let err = with("70000").port().get().unwrap_err();
    assert!(err.to_string().contains("70000"));
}

#[test]
fn test_invalid_value_ignores_default() {
    let v = with("70000").port().default(8080);
    assert_eq!(v.get(), Err(EnvError::InvalidPort("70000".to_string())));
    assert_eq!(v.get_or_null(), Err(EnvError::InvalidPort("70000".to_string())));
}

#[test]
fn test_url() {
    let v = with("https://github.com").url();
    assert_eq!(v.get_string().unwrap(), "https://github.com/");
    assert_eq!(v.get().unwrap().scheme(), "https");
    assert_eq!(with("::").url().get(), Err(EnvError::InvalidUrl("::".to_string())));
}

#[test]
fn test_array_by_comma() {
    assert_eq!(with("t1,t2,t3").array().get().unwrap(), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_array_by_white_space() {
    assert_eq!(with("t1  t2 t3").array().get().unwrap(), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_array_by_new_line() {
    let raw = "
    t1
    t2
    t3
    ";
    assert_eq!(with(raw).array().get().unwrap(), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_array_rejoined_splits_the_same() {
    let items = with("t1\r\nt2, t3").array().get().unwrap();
    let rejoined = env("ENV_TEST").from(Store::from_pairs([("ENV_TEST", items.join(","))]));
    assert_eq!(rejoined.array().get().unwrap(), items);
}

#[test]
fn test_array_custom_splitter() {
    let v = with("a|b||c").array().splitter(Splitter::literal("|"));
    assert_eq!(v.get().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_json_string() {
    let v = with(r#"
  {
    "name": "typed-env"
  }
    "#).json();
    assert_eq!(v.get().unwrap()["name"], json!("typed-env"));
}

#[test]
fn test_json_name_field() {
    #[derive(Deserialize)]
    struct Named {
        name: String,
    }
    let named: Named = with(r#"{"name":"x"}"#).json().get_as().unwrap();
    assert_eq!(named.name, "x");
}

#[test]
fn test_json_malformed() {
    let err = with(r#"{"name":"x""#).json().get().unwrap_err();
    assert!(matches!(err, EnvError::InvalidJson(ref raw, _) if raw == r#"{"name":"x""#));
}

struct Reverse;

impl Evaluator for Reverse {
    fn eval(&self, source: &str) -> Result<Value, String> {
        Ok(Value::String(source.chars().rev().collect()))
    }
}

#[test]
fn test_eval_hook() {
    assert_eq!(with("abc").eval(Reverse).get(), Ok(json!("cba")));
}
