use std::fmt;
use std::sync::OnceLock;

/// Fallback for a key that is absent from its store.
///
/// `Lazy` runs its generator at most once per cell, on first resolution.
/// Accessors hold the cell behind an `Arc`, so every clone of an accessor
/// observes the same memoized value.
///
/// # Examples
/// ```
/// use typed_env::common::DefaultValue;
///
/// let literal = DefaultValue::value(8080u16);
/// assert_eq!(literal.resolve(), 8080);
///
/// let lazy = DefaultValue::lazy(|| "computed".to_string());
/// assert!(!lazy.is_evaluated());
/// assert_eq!(lazy.resolve(), "computed");
/// assert!(lazy.is_evaluated());
/// ```
pub enum DefaultValue<T> {
    Value(T),
    Lazy {
        generator: Box<dyn Fn() -> T + Send + Sync>,
        cell: OnceLock<T>,
    },
}

impl<T: Clone> DefaultValue<T> {
    pub fn value(value: T) -> Self {
        DefaultValue::Value(value)
    }

    pub fn lazy<F>(generator: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        DefaultValue::Lazy {
            generator: Box::new(generator),
            cell: OnceLock::new(),
        }
    }

    /// Returns the default, evaluating the generator on first call only.
    pub fn resolve(&self) -> T {
        match self {
            DefaultValue::Value(value) => value.clone(),
            DefaultValue::Lazy { generator, cell } => cell.get_or_init(|| generator()).clone(),
        }
    }

    /// Literals count as evaluated.
    pub fn is_evaluated(&self) -> bool {
        match self {
            DefaultValue::Value(_) => true,
            DefaultValue::Lazy { cell, .. } => cell.get().is_some(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultValue::Lazy { cell, .. } => match cell.get() {
                Some(value) => f.debug_tuple("Lazy").field(value).finish(),
                None => write!(f, "Lazy(<unevaluated>)"),
            },
        }
    }
}
