use crate::error::Error;
use crate::token::Op;
use std::fmt::{self, Display, Formatter};

/// Identifies a participant of a request/response exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    /// The dispatch evaluator issuing requests
    Evaluator,
    /// The operator unit responsible for an operator
    Unit(Op),
}

impl Display for Address {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Evaluator => write!(fmt, "evaluator"),
            Self::Unit(op) => write!(fmt, "unit '{}'", op),
        }
    }
}

/// Correlates a response with the request it answers. Allocated by the
/// evaluator from a counter that only goes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl Display for RequestId {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "#{}", self.0)
    }
}

/// Kind of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Ask a unit to apply its operator
    Calculate,
    /// Outcome of a `Calculate` request
    Result,
}

/// Ask a unit to compute `operand1 <op> operand2`
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Who is asking
    pub sender: Address,
    /// The unit expected to answer
    pub receiver: Address,
    /// Always `MessageKind::Calculate`
    pub kind: MessageKind,
    /// Left-hand operand
    pub operand1: f64,
    /// Right-hand operand
    pub operand2: f64,
    /// Copied into the response
    pub request_id: RequestId,
}

impl Request {
    /// A `Calculate` request from the evaluator to the unit in charge of `op`
    pub fn calculate(op: Op, operand1: f64, operand2: f64, request_id: RequestId) -> Self {
        Self {
            sender: Address::Evaluator,
            receiver: Address::Unit(op),
            kind: MessageKind::Calculate,
            operand1,
            operand2,
            request_id,
        }
    }

    /// Build the response to this request, addressed back to its sender
    pub fn reply(&self, result: Result<f64, Error>) -> Response {
        Response {
            sender: self.receiver,
            receiver: self.sender,
            kind: MessageKind::Result,
            request_id: self.request_id,
            result,
        }
    }
}

/// Outcome of a request. A failed computation still produces a response, so
/// that the waiting evaluator is always released.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The unit that computed the result
    pub sender: Address,
    /// The sender of the request
    pub receiver: Address,
    /// Always `MessageKind::Result`
    pub kind: MessageKind,
    /// Id of the request being answered
    pub request_id: RequestId,
    /// The computed value, or why it could not be computed
    pub result: Result<f64, Error>,
}
