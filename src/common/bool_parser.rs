// Permissive string-to-boolean mapping

const TRUTHY: &[&str] = &["true", "1", "on"];
const FALSY: &[&str] = &["false", "0", "off"];
const YES: &[&str] = &["yes", "y"];
const NO: &[&str] = &["no", "n"];

/// Token options for boolean parsing.
///
/// Tokens are compared trimmed and case-insensitively. Custom tokens win over
/// the built-in ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolOptions {
    /// Accept "yes"/"y" as `true` and "no"/"n" as `false`.
    pub yes_or_no: bool,
    pub truthy: Vec<String>,
    pub falsy: Vec<String>,
}

impl BoolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yes_or_no(mut self, enabled: bool) -> Self {
        self.yes_or_no = enabled;
        self
    }

    pub fn with_truthy<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.truthy = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_falsy<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.falsy = tokens.into_iter().map(Into::into).collect();
        self
    }
}

/// Maps `raw` to a boolean, or `None` when no token matches.
///
/// # Examples
/// ```
/// use typed_env::common::{parse_bool, BoolOptions};
///
/// let options = BoolOptions::new();
/// assert_eq!(parse_bool(" TRUE ", &options), Some(true));
/// assert_eq!(parse_bool("off", &options), Some(false));
/// assert_eq!(parse_bool("yes", &options), None);
/// assert_eq!(parse_bool("yes", &options.with_yes_or_no(true)), Some(true));
/// ```
pub fn parse_bool(raw: &str, options: &BoolOptions) -> Option<bool> {
    let token = raw.trim();
    let in_builtin = |list: &[&str]| list.iter().any(|t| t.eq_ignore_ascii_case(token));
    let in_custom = |list: &[String]| list.iter().any(|t| t.trim().eq_ignore_ascii_case(token));

    if in_custom(&options.truthy) {
        return Some(true);
    }
    if in_custom(&options.falsy) {
        return Some(false);
    }
    if in_builtin(TRUTHY) || (options.yes_or_no && in_builtin(YES)) {
        return Some(true);
    }
    if in_builtin(FALSY) || (options.yes_or_no && in_builtin(NO)) {
        return Some(false);
    }
    None
}
