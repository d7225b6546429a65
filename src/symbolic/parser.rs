use crate::error::ParseError;
use crate::symbolic::Expression;

/// Parse a feature name such as `sin(x_0**2)*x_1**-1` into its normal form
pub(super) fn parse(input: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser { input, position: 0 };
    let expression = parser.product()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(expression),
        Some(c) => Err(parser.unexpected(c)),
    }
}

// product  := factor ('*' factor)*
// factor   := primary ('**' exponent)?
// exponent := integer | '(' integer ')'
// primary  := '1' | 'x_' digits | name '(' product ')' | '(' product ')'
struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(token) {
            self.position += token.len();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, found: char) -> ParseError {
        ParseError::UnexpectedChar {
            found,
            position: self.position,
        }
    }

    fn error_here(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(c) => self.unexpected(c),
            None => ParseError::UnexpectedEnd { expected },
        }
    }

    fn expect_closing(&mut self) -> Result<(), ParseError> {
        if self.eat(")") {
            Ok(())
        } else {
            Err(self.error_here("')'"))
        }
    }

    fn product(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.factor()?;
        // factor() has consumed any "**", so a remaining '*' is a multiplication
        while self.eat("*") {
            expression = expression * self.factor()?;
        }
        Ok(expression)
    }

    fn factor(&mut self) -> Result<Expression, ParseError> {
        let base = self.primary()?;
        if self.eat("**") {
            let exponent = self.exponent()?;
            Ok(base.pow(exponent))
        } else {
            Ok(base)
        }
    }

    fn exponent(&mut self) -> Result<i64, ParseError> {
        if self.eat("(") {
            let exponent = self.integer()?;
            self.expect_closing()?;
            Ok(exponent)
        } else {
            self.integer()
        }
    }

    fn integer(&mut self) -> Result<i64, ParseError> {
        self.skip_whitespace();
        let start = self.position;
        if self.peek() == Some('-') {
            self.bump();
        }
        let digits_start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.position == digits_start {
            return Err(self.error_here("integer"));
        }
        let literal = &self.input[start..self.position];
        literal
            .parse()
            .map_err(|_| ParseError::IntegerOutOfRange {
                literal: literal.to_owned(),
                position: start,
            })
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd {
                expected: "operand",
            }),
            Some('(') => {
                self.bump();
                let expression = self.product()?;
                self.expect_closing()?;
                Ok(expression)
            }
            Some('1') => {
                self.bump();
                match self.peek() {
                    Some(c) if c.is_ascii_digit() => Err(self.unexpected(c)),
                    _ => Ok(Expression::one()),
                }
            }
            Some(c) if c.is_alphabetic() || c == '_' => self.symbol(),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn symbol(&mut self) -> Result<Expression, ParseError> {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        let name = &self.input[start..self.position];
        if self.eat("(") {
            let argument = self.product()?;
            self.expect_closing()?;
            return Ok(Expression::call(name, argument));
        }
        name.strip_prefix("x_")
            .and_then(|index| index.parse().ok())
            .map(Expression::variable)
            .ok_or_else(|| ParseError::UnknownSymbol {
                name: name.to_owned(),
                position: start,
            })
    }
}
