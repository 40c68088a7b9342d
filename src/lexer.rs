use crate::error::Error;
use crate::token::Token;
use crate::util::OPERATORS;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Split `input` into tokens.
///
/// Whitespace is removed before scanning, so it never separates two tokens:
/// `"1 2"` is the single number `12`.
///
/// # Examples
///
/// ```
/// # use relaycalc::{tokenize, Op, Token};
/// assert_eq!(
///     tokenize("2 * 4.5"),
///     Ok(vec![Token::Number(2.0), Token::Op(Op::Mul), Token::Number(4.5)])
/// );
/// assert!(tokenize("2 % 4").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(input).tokens()
}

/// An helper struct for lexing the input
pub struct Lexer {
    input: Peekable<IntoIter<char>>,
    position: usize,
}

impl Lexer {
    pub fn new(string: &str) -> Lexer {
        let stripped: Vec<char> = string.chars().filter(|c| !c.is_whitespace()).collect();
        Lexer {
            input: stripped.into_iter().peekable(),
            position: 0,
        }
    }

    pub fn tokens(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            output.push(token);
        }
        Ok(output)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.input.next()?;
        self.position += 1;
        Some(c)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let start = self.position;
        let c = match self.bump() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            c if c.is_ascii_digit() => self.number(c, start)?,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c => match OPERATORS.get(&c) {
                Some(&op) => Token::Op(op),
                // a '.' only ever appears right after a run of digits
                None => {
                    return Err(Error::LexError {
                        character: c,
                        position: start,
                    })
                }
            },
        };
        Ok(Some(token))
    }

    /// Greedily read `digits [ '.' digits* ]`
    fn number(&mut self, first: char, start: usize) -> Result<Token, Error> {
        let mut literal = String::new();
        literal.push(first);
        self.digits(&mut literal);
        if self.input.peek() == Some(&'.') {
            self.bump();
            literal.push('.');
            self.digits(&mut literal);
        }
        literal
            .parse()
            .map(Token::Number)
            .map_err(|_| Error::LexError {
                character: first,
                position: start,
            })
    }

    fn digits(&mut self, literal: &mut String) {
        while let Some(&c) = self.input.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump();
            literal.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Op, Token};
    use test_case::test_case;

    #[test_case("2 + 2" => Ok(vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(2.0)]) ; "addition is lexed properly")]
    #[test_case("2+2" => Ok(vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(2.0)]) ; "spaces are not significant")]
    #[test_case("1 2" => Ok(vec![Token::Number(12.0)]) ; "whitespace is stripped before scanning")]
    #[test_case("3.25" => Ok(vec![Token::Number(3.25)]) ; "decimal literal")]
    #[test_case("3." => Ok(vec![Token::Number(3.0)]) ; "trailing decimal point")]
    #[test_case("-4" => Ok(vec![Token::Op(Op::Minus), Token::Number(4.0)]) ; "leading minus is an operator")]
    #[test_case("2^3" => Ok(vec![Token::Number(2.0), Token::Op(Op::Exp), Token::Number(3.0)]) ; "caret is power")]
    #[test_case("(1)" => Ok(vec![Token::LParen, Token::Number(1.0), Token::RParen]) ; "parenthesis")]
    #[test_case("\t\n " => Ok(vec![]) ; "whitespace only")]
    fn lex(input: &str) -> Result<Vec<Token>, Error> {
        tokenize(input)
    }

    #[test_case("2 + x" => Error::LexError { character: 'x', position: 2 } ; "letter")]
    #[test_case(".5" => Error::LexError { character: '.', position: 0 } ; "leading decimal point")]
    #[test_case("1.2.3" => Error::LexError { character: '.', position: 3 } ; "second decimal point")]
    #[test_case("1e5" => Error::LexError { character: 'e', position: 1 } ; "no exponent notation")]
    fn lex_errors(input: &str) -> Error {
        tokenize(input).expect_err("input should not lex")
    }

    #[test]
    fn operators() {
        let tokens = tokenize("+-*/^").unwrap();
        let ops: Vec<Token> = Op::ALL.iter().map(|&op| Token::Op(op)).collect();
        assert_eq!(tokens, ops);
    }
}
