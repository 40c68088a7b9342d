use crate::error::Error;
use crate::message::{Address, MessageKind, Request, Response};
use crate::token::Op;
use libm::pow;

/// A stateless handler for a single operator, only reachable through
/// [`Request`](struct.Request.html)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorUnit {
    /// `operand1 + operand2`
    Add,
    /// `operand1 - operand2`
    Subtract,
    /// `operand1 * operand2`
    Multiply,
    /// `operand1 / operand2`, refusing an exact zero divisor
    Divide,
    /// `operand1 ^ operand2`, with the C library `pow` semantics
    Power,
}

impl OperatorUnit {
    /// Get the unit in charge of `op`
    #[must_use]
    pub fn for_op(op: Op) -> Self {
        match op {
            Op::Plus => Self::Add,
            Op::Minus => Self::Subtract,
            Op::Mul => Self::Multiply,
            Op::Div => Self::Divide,
            Op::Exp => Self::Power,
        }
    }

    /// The operator this unit computes
    #[must_use]
    pub fn op(self) -> Op {
        match self {
            Self::Add => Op::Plus,
            Self::Subtract => Op::Minus,
            Self::Multiply => Op::Mul,
            Self::Divide => Op::Div,
            Self::Power => Op::Exp,
        }
    }

    /// Where requests for this unit are sent
    #[must_use]
    pub fn address(self) -> Address {
        Address::Unit(self.op())
    }

    /// Apply the operator
    #[allow(clippy::float_cmp)]
    pub fn compute(self, operand1: f64, operand2: f64) -> Result<f64, Error> {
        match self {
            Self::Add => Ok(operand1 + operand2),
            Self::Subtract => Ok(operand1 - operand2),
            Self::Multiply => Ok(operand1 * operand2),
            Self::Divide => {
                if operand2 == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(operand1 / operand2)
            }
            Self::Power => Ok(pow(operand1, operand2)),
        }
    }

    /// Answer a request. Requests addressed to another unit, or that are not
    /// `Calculate` requests, get a `ProtocolError` back.
    pub fn handle(self, request: &Request) -> Response {
        let result = if request.receiver != self.address() {
            Err(Error::ProtocolError(format!(
                "{} received a request addressed to {}",
                self.address(),
                request.receiver
            )))
        } else if request.kind != MessageKind::Calculate {
            Err(Error::ProtocolError(format!(
                "{} can not handle {:?} messages",
                self.address(),
                request.kind
            )))
        } else {
            self.compute(request.operand1, request.operand2)
        };
        trace!(
            "{} handled request {}: {:?}",
            self.address(),
            request.request_id,
            result
        );
        let mut response = request.reply(result);
        // a misaddressed request is still answered by the unit that got it
        response.sender = self.address();
        response
    }
}

#[cfg(test)]
mod tests {
    use super::OperatorUnit;
    use crate::error::Error;
    use crate::message::{Address, MessageKind, Request, RequestId};
    use crate::token::Op;
    use test_case::test_case;

    #[test_case(OperatorUnit::Add, 2.0, 3.0 => Ok(5.0) ; "add")]
    #[test_case(OperatorUnit::Subtract, 2.0, 3.0 => Ok(-1.0) ; "subtract keeps operand order")]
    #[test_case(OperatorUnit::Multiply, 2.5, 4.0 => Ok(10.0) ; "multiply")]
    #[test_case(OperatorUnit::Divide, 20.0, 4.0 => Ok(5.0) ; "divide")]
    #[test_case(OperatorUnit::Divide, 1.0, 8.0 => Ok(0.125) ; "divide keeps operand order")]
    #[test_case(OperatorUnit::Divide, 5.0, 0.0 => Err(Error::DivisionByZero) ; "divide by zero")]
    #[test_case(OperatorUnit::Divide, 5.0, -0.0 => Err(Error::DivisionByZero) ; "divide by negative zero")]
    #[test_case(OperatorUnit::Divide, 0.0, 5.0 => Ok(0.0) ; "zero dividend")]
    #[test_case(OperatorUnit::Power, 2.0, 10.0 => Ok(1024.0) ; "power")]
    #[test_case(OperatorUnit::Power, 4.0, 0.5 => Ok(2.0) ; "fractional exponent")]
    #[test_case(OperatorUnit::Power, 2.0, -2.0 => Ok(0.25) ; "negative exponent")]
    fn compute(unit: OperatorUnit, operand1: f64, operand2: f64) -> Result<f64, Error> {
        unit.compute(operand1, operand2)
    }

    #[test]
    fn divide_by_tiny_value_is_allowed() {
        let result = OperatorUnit::Divide.compute(1.0, 1e-300).unwrap();
        assert!(result.is_finite());
    }

    #[test]
    fn one_unit_per_operator() {
        for &op in &Op::ALL {
            let unit = OperatorUnit::for_op(op);
            assert_eq!(unit.op(), op);
            assert_eq!(unit.address(), Address::Unit(op));
        }
    }

    #[test]
    fn handle() {
        let request = Request::calculate(Op::Minus, 10.0, 4.0, RequestId(1));
        let response = OperatorUnit::Subtract.handle(&request);
        assert_eq!(response.sender, Address::Unit(Op::Minus));
        assert_eq!(response.receiver, Address::Evaluator);
        assert_eq!(response.kind, MessageKind::Result);
        assert_eq!(response.request_id, RequestId(1));
        assert_eq!(response.result, Ok(6.0));
    }

    #[test]
    fn handle_failure() {
        let request = Request::calculate(Op::Div, 1.0, 0.0, RequestId(4));
        let response = OperatorUnit::Divide.handle(&request);
        assert_eq!(response.request_id, RequestId(4));
        assert_eq!(response.result, Err(Error::DivisionByZero));
    }

    #[test]
    fn handle_misaddressed() {
        let request = Request::calculate(Op::Plus, 1.0, 2.0, RequestId(2));
        let response = OperatorUnit::Multiply.handle(&request);
        assert_eq!(response.sender, Address::Unit(Op::Mul));
        assert_eq!(
            response.result,
            Err(Error::ProtocolError(
                "unit '*' received a request addressed to unit '+'".into()
            ))
        );
    }
}
