/// How requests reach the operator units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// Units run on the caller thread, one queued message at a time
    #[default]
    Inline,
    /// Every unit runs on its own worker thread
    Threaded,
}

/// Settings for a [`Calculator`](struct.Calculator.html)
///
/// # Examples
///
/// ```
/// # use relaycalc::{Config, Dispatch};
/// let config = Config::new().dispatch(Dispatch::Threaded).strict_syntax(true);
/// assert_eq!(config.dispatch, Dispatch::Threaded);
/// assert!(config.strict_syntax);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Where operator units run
    pub dispatch: Dispatch,
    /// Reject misplaced operators while converting to postfix, instead of
    /// letting them surface as evaluation errors
    pub strict_syntax: bool,
}

impl Config {
    /// The default configuration: inline dispatch, lenient syntax
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch mode
    #[must_use]
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Enable or disable strict syntax checking
    #[must_use]
    pub fn strict_syntax(mut self, strict: bool) -> Self {
        self.strict_syntax = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Dispatch};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.dispatch, Dispatch::Inline);
        assert!(!config.strict_syntax);
        assert_eq!(Config::new(), config);
    }
}
