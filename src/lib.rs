#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

//! Relaycalc, a crate evaluating arithmetic expressions by relaying every
//! operator to its own operator unit.
//!
//! The easiest way to use this crate is with the
//! [`evaluate_text`](fn.evaluate_text.html) function:
//!
//! ```
//! assert_eq!(relaycalc::evaluate_text("3 + 5 * 2"), Ok(13.0));
//! assert_eq!(relaycalc::evaluate_text("2 ^ 2 ^ 3"), Ok(256.0));
//! ```
//!
//! A [`Calculator`](struct.Calculator.html) keeps its operator units alive
//! between evaluations, and can run each of them on a worker thread:
//!
//! ```
//! use relaycalc::{Calculator, Config, Dispatch};
//!
//! let config = Config::new().dispatch(Dispatch::Threaded);
//! let mut calculator = Calculator::with_config(config).unwrap();
//! assert_eq!(calculator.calculate("100 / 4 / 5"), Ok(5.0));
//! assert!(calculator.calculate("5 / 0").is_err());
//! ```
//!
//! # Language definition
//!
//! The language implemented by relaycalc can contain the following elements:
//!
//! - unsigned decimal literals: `12`, `0.0045`, `3.`. There is no exponent
//!   notation, and no unary minus: `-3` is a subtraction missing its left
//!   operand;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation.
//!
//! Whitespace is removed before anything else happens. Any other symbol is
//! forbidden in the input.
//!
//! `^` binds tighter than `*` and `/`, which bind tighter than `+` and `-`.
//! `^` is right associative, all the other operators are left associative.
//! Dividing by zero is an error rather than an infinity.
//!
//! # Technical details
//!
//! The input is split into tokens, converted to postfix order with the
//! Shunting-Yard algorithm, then reduced on a stack by an
//! [`Evaluator`](struct.Evaluator.html). For each operator, the evaluator
//! sends a [`Request`](struct.Request.html) through a
//! [`Channel`](trait.Channel.html) to the [`OperatorUnit`](enum.OperatorUnit.html)
//! in charge, and waits for the matching [`Response`](struct.Response.html)
//! before going on.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod channel;
mod config;
mod error;
mod evaluator;
mod expr;
mod lexer;
mod message;
mod postfix;
mod token;
mod unit;
mod util;

pub use channel::{Channel, InlineChannel, ThreadedChannel};
pub use config::{Config, Dispatch};
pub use error::{Error, EvalFailure};
pub use evaluator::Evaluator;
pub use expr::{evaluate_text, Calculator};
pub use lexer::tokenize;
pub use message::{Address, MessageKind, Request, RequestId, Response};
pub use postfix::{to_postfix, to_postfix_strict};
pub use token::{Op, Token};
pub use unit::OperatorUnit;
