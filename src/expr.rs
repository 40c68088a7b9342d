use crate::channel::{Channel, InlineChannel, ThreadedChannel};
use crate::config::{Config, Dispatch};
use crate::error::EvalFailure;
use crate::evaluator::Evaluator;
use crate::lexer::tokenize;
use crate::postfix::{to_postfix, to_postfix_strict};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// tokenizing, converting or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use relaycalc::{evaluate_text, Error};
///
/// assert_eq!(evaluate_text("45 - 2^3"), Ok(37.0));
/// assert_eq!(evaluate_text("5 / 0"), Err(Error::DivisionByZero));
/// ```
pub fn evaluate_text(input: &str) -> Result<f64, EvalFailure> {
    let mut channel = InlineChannel::new();
    run(input, &mut channel, false)
}

fn run<C>(input: &str, channel: &mut C, strict: bool) -> Result<f64, EvalFailure>
where
    C: Channel + ?Sized,
{
    let tokens = tokenize(input)?;
    let postfix = if strict {
        to_postfix_strict(&tokens)?
    } else {
        to_postfix(&tokens)?
    };
    debug!(
        "{:?} in postfix: {}",
        input,
        postfix
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    let result = Evaluator::new(channel).evaluate(&postfix);
    debug!("{:?} evaluated to {:?}", input, result);
    result
}

/// A calculator keeping its operator units alive between evaluations.
///
/// Each call to [`calculate`](#method.calculate) starts from a fresh
/// evaluator, so no state is carried from one expression to the next. Calls
/// are serialized by the `&mut self` receiver.
///
/// # Examples
/// ```
/// # use relaycalc::{Calculator, Config, Dispatch};
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.calculate("(2 + 3) * 4"), Ok(20.0));
///
/// let config = Config::new().dispatch(Dispatch::Threaded);
/// let mut calculator = Calculator::with_config(config).unwrap();
/// assert_eq!(calculator.calculate("2 ^ 2 ^ 3"), Ok(256.0));
/// ```
pub struct Calculator {
    config: Config,
    channel: Box<dyn Channel>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            config: Config::default(),
            channel: Box::new(InlineChannel::new()),
        }
    }
}

impl Calculator {
    /// Create a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator for `config`. Fails if the unit workers of a
    /// threaded calculator can not be started.
    pub fn with_config(config: Config) -> Result<Self, EvalFailure> {
        let channel: Box<dyn Channel> = match config.dispatch {
            Dispatch::Inline => Box::new(InlineChannel::new()),
            Dispatch::Threaded => Box::new(ThreadedChannel::new()?),
        };
        Ok(Self { config, channel })
    }

    /// The configuration this calculator was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate `input`
    pub fn calculate(&mut self, input: &str) -> Result<f64, EvalFailure> {
        run(input, self.channel.as_mut(), self.config.strict_syntax)
    }
}
