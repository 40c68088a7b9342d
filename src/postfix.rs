use crate::error::Error;
use crate::token::{Op, Token};

/// Convert an infix token sequence to postfix order with the Shunting-Yard
/// algorithm.
///
/// Only parenthesis are checked here. An operator in operand position goes
/// through unnoticed and is reported by the evaluator as a stack underflow.
///
/// # Examples
///
/// ```
/// # use relaycalc::{to_postfix, tokenize};
/// let postfix = to_postfix(&tokenize("2 ^ 2 ^ 3").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered.join(" "), "2 2 3 ^ ^");
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    shunting_yard(tokens, false)
}

/// Same as [`to_postfix`](fn.to_postfix.html), but operands and operators
/// must alternate: `"+ 2"`, `"2 +"`, `"2 (3)"` and `"()"` are rejected with a
/// `SyntaxError` instead of failing later during evaluation.
pub fn to_postfix_strict(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    shunting_yard(tokens, true)
}

fn shunting_yard(tokens: &[Token], strict: bool) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();
    let mut expect_operand = true;

    'tokens: for &token in tokens {
        if strict {
            check_placement(token, expect_operand)?;
        }
        match token {
            Token::Number(_) => {
                output.push(token);
                expect_operand = false;
            }
            Token::LParen => {
                operators.push(token);
                expect_operand = true;
            }
            Token::RParen => {
                expect_operand = false;
                while let Some(top) = operators.pop() {
                    match top {
                        Token::LParen => continue 'tokens,
                        _ => output.push(top),
                    }
                }
                return Err(Error::SyntaxError("unmatched ')'".into()));
            }
            Token::Op(o1) => {
                while let Some(&Token::Op(o2)) = operators.last() {
                    if !pops_before(o2, o1) {
                        break;
                    }
                    operators.pop();
                    output.push(Token::Op(o2));
                }
                operators.push(token);
                expect_operand = true;
            }
        }
    }

    if strict && expect_operand && !tokens.is_empty() {
        return Err(Error::SyntaxError("unexpected end of expression".into()));
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::LParen => return Err(Error::SyntaxError("unmatched '('".into())),
            _ => output.push(token),
        }
    }
    Ok(output)
}

/// Should `top`, sitting on the operator stack, be output before pushing `incoming`?
fn pops_before(top: Op, incoming: Op) -> bool {
    top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence() && incoming.is_left_associative())
}

fn check_placement(token: Token, expect_operand: bool) -> Result<(), Error> {
    match (token, expect_operand) {
        (Token::Op(op), true) => Err(Error::SyntaxError(format!(
            "operator '{}' where an operand was expected",
            op
        ))),
        (Token::RParen, true) => Err(Error::SyntaxError(
            "')' where an operand was expected".into(),
        )),
        (Token::Number(_), false) | (Token::LParen, false) => Err(Error::SyntaxError(format!(
            "missing operator before '{}'",
            token
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_case::test_case;

    fn render(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test_case("2 + 3 * 4" => Ok("2 3 4 * +".to_string()) ; "multiplication binds tighter")]
    #[test_case("(2 + 3) * 4" => Ok("2 3 + 4 *".to_string()) ; "parenthesis group")]
    #[test_case("10 - 5 - 2" => Ok("10 5 - 2 -".to_string()) ; "minus is left associative")]
    #[test_case("100 / 4 / 5" => Ok("100 4 / 5 /".to_string()) ; "division is left associative")]
    #[test_case("2 ^ 2 ^ 3" => Ok("2 2 3 ^ ^".to_string()) ; "power is right associative")]
    #[test_case("2 ^ 3 + 4 * 5 - 6 / 2" => Ok("2 3 ^ 4 5 * + 6 2 / -".to_string()) ; "mixed precedence")]
    #[test_case("((7))" => Ok("7".to_string()) ; "nested parenthesis")]
    #[test_case("(2 + 3" => Err(Error::SyntaxError("unmatched '('".into())) ; "unclosed parenthesis")]
    #[test_case("2 + 3)" => Err(Error::SyntaxError("unmatched ')'".into())) ; "unopened parenthesis")]
    #[test_case("+ 2" => Ok("2 +".to_string()) ; "leading operator is deferred")]
    #[test_case("2 +" => Ok("2 +".to_string()) ; "trailing operator is deferred")]
    fn convert(input: &str) -> Result<String, Error> {
        to_postfix(&tokenize(input).unwrap()).map(|postfix| render(&postfix))
    }

    #[test_case("2 + 3 * 4" => Ok("2 3 4 * +".to_string()) ; "well formed input is unchanged")]
    #[test_case("+ 2" => Err(Error::SyntaxError("operator '+' where an operand was expected".into())) ; "leading operator")]
    #[test_case("2 * * 3" => Err(Error::SyntaxError("operator '*' where an operand was expected".into())) ; "consecutive operators")]
    #[test_case("2 +" => Err(Error::SyntaxError("unexpected end of expression".into())) ; "trailing operator")]
    #[test_case("2 (3)" => Err(Error::SyntaxError("missing operator before '('".into())) ; "implicit multiplication")]
    #[test_case("()" => Err(Error::SyntaxError("')' where an operand was expected".into())) ; "empty parenthesis")]
    #[test_case("2 + 3)" => Err(Error::SyntaxError("unmatched ')'".into())) ; "unopened parenthesis")]
    #[test_case("(2 + 3" => Err(Error::SyntaxError("unmatched '('".into())) ; "unclosed parenthesis")]
    #[test_case("" => Ok(String::new()) ; "empty input is left to the evaluator")]
    fn convert_strict(input: &str) -> Result<String, Error> {
        to_postfix_strict(&tokenize(input).unwrap()).map(|postfix| render(&postfix))
    }
}
