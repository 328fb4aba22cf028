use regex::Regex;

/// Delimiter used to split a raw value into array items.
#[derive(Debug, Clone, Default)]
pub enum Splitter {
    /// Any run of whitespace, commas, or line breaks.
    #[default]
    Default,
    Literal(String),
    Pattern(Regex),
}

impl Splitter {
    pub fn literal(delimiter: impl Into<String>) -> Self {
        Splitter::Literal(delimiter.into())
    }

    /// Compiles `pattern` as a regex delimiter.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Splitter::Pattern(Regex::new(pattern)?))
    }

    /// Splits `raw` and drops empty items. Order is kept, duplicates are kept.
    ///
    /// # Examples
    /// ```
    /// use typed_env::common::Splitter;
    ///
    /// assert_eq!(Splitter::Default.split("t1, t2\n t3"), vec!["t1", "t2", "t3"]);
    /// assert_eq!(Splitter::literal(";").split("a;;b"), vec!["a", "b"]);
    /// ```
    pub fn split(&self, raw: &str) -> Vec<String> {
        let items: Vec<&str> = match self {
            Splitter::Default => raw.split(|c: char| c.is_whitespace() || c == ',').collect(),
            Splitter::Literal(delimiter) if delimiter.is_empty() => vec![raw],
            Splitter::Literal(delimiter) => raw.split(delimiter.as_str()).collect(),
            Splitter::Pattern(regex) => regex.split(raw).collect(),
        };
        items
            .into_iter()
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
