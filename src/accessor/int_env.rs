use super::{accessor_common, Typed};
use crate::common::DefaultValue;
use crate::env::Env;
use crate::ports::provided::EnvError;

/// Parses `raw` as an `i64`.
///
/// Surrounding whitespace and a leading sign are accepted. Without a radix the
/// value is decimal, or hexadecimal when prefixed with `0x`. Radix 16 also
/// accepts the prefix.
///
/// # Examples
/// ```
/// use typed_env::accessor::int_env::parse_int;
///
/// assert_eq!(parse_int(" 42 ", None), Ok(42));
/// assert_eq!(parse_int("-0x1F", None), Ok(-31));
/// assert_eq!(parse_int("777", Some(8)), Ok(511));
/// assert!(parse_int("12abc", None).is_err());
/// ```
pub fn parse_int(raw: &str, radix: Option<u32>) -> Result<i64, EnvError> {
    let invalid = || EnvError::InvalidInt(raw.to_string());
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let hex = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));
    let (radix, digits) = match (radix, hex) {
        (Some(r), _) if !(2..=36).contains(&r) => return Err(EnvError::InvalidRadix(r)),
        (None | Some(16), Some(hex)) => (16, hex),
        (r, _) => (r.unwrap_or(10), unsigned),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    i64::from_str_radix(&format!("{}{}", sign, digits), radix).map_err(|_| invalid())
}

/// Integer with optional radix.
#[derive(Debug, Clone)]
pub struct IntEnv {
    base: Typed<i64>,
    radix: Option<u32>,
}

impl IntEnv {
    pub fn new(env: Env) -> Self {
        Self {
            base: Typed::new(env),
            radix: None,
        }
    }

    accessor_common!(i64);

    pub fn default(mut self, value: i64) -> Self {
        self.base = self.base.with_default(DefaultValue::value(value));
        self
    }

    /// Radix between 2 and 36. Others fail on resolution with `EnvError::InvalidRadix`.
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = Some(radix);
        self
    }

    pub fn get_or_null(&self) -> Result<Option<i64>, EnvError> {
        self.base.resolve("IntEnv", |raw| parse_int(raw, self.radix))
    }

    pub fn get(&self) -> Result<i64, EnvError> {
        self.base.require(self.get_or_null()?)
    }
}
