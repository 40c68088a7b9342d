use crate::channel::Channel;
use crate::error::Error;
use crate::message::{Address, Request, RequestId};
use crate::token::{Op, Token};
use hashbrown::HashMap;

/// Evaluates a postfix sequence, handing every operator over to its operator
/// unit through a [`Channel`](trait.Channel.html).
///
/// An evaluator owns the request counter and the table of responses waiting
/// to be read. Both are reset by every call to `evaluate`, so an evaluator can
/// be reused without carrying anything from one sequence to the next. Only one
/// request is in flight at any time: after sending a request, the evaluator
/// blocks until the matching response has been received and taken out of the
/// table.
///
/// # Examples
///
/// ```
/// # use relaycalc::{to_postfix, tokenize, Evaluator, InlineChannel};
/// let postfix = to_postfix(&tokenize("2 ^ 3 + 4").unwrap()).unwrap();
/// let mut channel = InlineChannel::new();
/// let mut evaluator = Evaluator::new(&mut channel);
/// assert_eq!(evaluator.evaluate(&postfix), Ok(12.0));
/// assert_eq!(evaluator.requests_sent(), 2);
/// ```
pub struct Evaluator<'c, C: Channel + ?Sized> {
    channel: &'c mut C,
    last_request_id: u64,
    pending: HashMap<RequestId, Result<f64, Error>>,
}

impl<'c, C: Channel + ?Sized> Evaluator<'c, C> {
    /// Create an evaluator sending its requests on `channel`
    pub fn new(channel: &'c mut C) -> Self {
        Self {
            channel,
            last_request_id: 0,
            pending: HashMap::new(),
        }
    }

    /// Number of requests issued by the last evaluation
    #[must_use]
    pub fn requests_sent(&self) -> u64 {
        self.last_request_id
    }

    /// Reduce `postfix` to a single value.
    ///
    /// Fails with `EvalError` when an operator lacks operands or when values
    /// are left over, and with whatever error an operator unit reports.
    pub fn evaluate(&mut self, postfix: &[Token]) -> Result<f64, Error> {
        self.last_request_id = 0;
        self.pending.clear();

        let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
        for &token in postfix {
            match token {
                Token::Number(value) => stack.push(value),
                Token::Op(op) => {
                    let (operand2, operand1) = match (stack.pop(), stack.pop()) {
                        (Some(operand2), Some(operand1)) => (operand2, operand1),
                        _ => return Err(Error::EvalError("insufficient operands".into())),
                    };
                    stack.push(self.request(op, operand1, operand2)?);
                }
                Token::LParen | Token::RParen => {
                    return Err(Error::EvalError(format!(
                        "unexpected '{}' in postfix expression",
                        token
                    )))
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(Error::EvalError("malformed expression".into())),
        }
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        RequestId(self.last_request_id)
    }

    /// Send one request and wait for its response
    fn request(&mut self, op: Op, operand1: f64, operand2: f64) -> Result<f64, Error> {
        let request_id = self.next_request_id();
        trace!(
            "request {}: {} {} {} to {}",
            request_id,
            operand1,
            op,
            operand2,
            Address::Unit(op)
        );
        self.channel
            .send(Request::calculate(op, operand1, operand2, request_id))?;
        self.observe(Address::Unit(op))?;

        match self.pending.remove(&request_id) {
            Some(result) => result,
            None => {
                warn!("no response to request {}", request_id);
                Err(Error::ProtocolError(format!(
                    "no response was received for request {}",
                    request_id
                )))
            }
        }
    }

    /// Receive one response and file it in the pending table
    fn observe(&mut self, expected_sender: Address) -> Result<(), Error> {
        let response = self.channel.recv()?;
        trace!(
            "response {} from {}: {:?}",
            response.request_id,
            response.sender,
            response.result
        );
        if response.receiver != Address::Evaluator || response.sender != expected_sender {
            warn!(
                "misaddressed response {} from {} to {}",
                response.request_id, response.sender, response.receiver
            );
            return Err(Error::ProtocolError(format!(
                "response {} from {} to {} was not expected",
                response.request_id, response.sender, response.receiver
            )));
        }
        self.pending.insert(response.request_id, response.result);
        Ok(())
    }
}
