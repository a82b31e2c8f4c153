//! Recursive-descent parser.
//!
//! Precedence, loosest first:
//!
//! | level | operators                | associativity |
//! |-------|--------------------------|---------------|
//! | 1     | `<->` `<=>`              | left          |
//! | 2     | `->` `=>`                | right         |
//! | 3     | `\|` `\|\|`              | n-ary         |
//! | 4     | `&` `&&`                 | n-ary         |
//! | 5     | `U` `R` `W` `M`          | right         |
//! | 6     | `!` `~` `X` `G` `F`      | prefix        |
//!
//! Numeric atoms `term op term` are primaries. Because `(` may open either a
//! term or a formula, a primary first tries to read a term; when no comparison
//! operator follows, it backtracks and reads a formula instead.

use ltlsimp_ir::{CompOperator, Formula, Term};

use crate::error::ParseError;
use crate::lexer::{Spanned, Token};

/// Maximum nesting of prefix operators and parentheses.
pub const MAX_NESTING: usize = 256;

pub(crate) struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse a complete formula, rejecting trailing tokens.
    pub(crate) fn parse_formula(mut self) -> Result<Formula, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        let formula = self.equivalence()?;
        match self.tokens.get(self.pos) {
            None => Ok(formula),
            Some(spanned) => Err(unexpected(spanned, "an operator or end of input")),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|spanned| &spanned.token)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|spanned| spanned.offset)
            .unwrap_or_default()
    }

    /// Consume the next token when `accept` matches it.
    fn eat(&mut self, accept: impl Fn(&Token) -> bool) -> Option<Token> {
        let token = self.peek().filter(|token| accept(*token))?.clone();
        self.pos += 1;
        Some(token)
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            Some(spanned) if spanned.token == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(spanned) => Err(unexpected(spanned, description)),
            None => Err(ParseError::UnexpectedEnd {
                expected: description,
            }),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                offset: self.offset(),
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ===== Formula levels =====

    fn equivalence(&mut self) -> Result<Formula, ParseError> {
        let mut left = self.implication()?;
        while self.eat(|t| *t == Token::Iff).is_some() {
            let right = self.implication()?;
            left = Formula::or([
                Formula::and([left.clone(), right.clone()]),
                Formula::and([negate(left), negate(right)]),
            ]);
        }
        Ok(left)
    }

    fn implication(&mut self) -> Result<Formula, ParseError> {
        let premise = self.disjunction()?;
        if self.eat(|t| *t == Token::Implies).is_none() {
            return Ok(premise);
        }
        self.enter()?;
        let conclusion = self.implication()?;
        self.leave();
        Ok(Formula::or([negate(premise), conclusion]))
    }

    fn disjunction(&mut self) -> Result<Formula, ParseError> {
        let mut operands = vec![self.conjunction()?];
        while self.eat(|t| *t == Token::Or).is_some() {
            operands.push(self.conjunction()?);
        }
        Ok(Formula::or(operands))
    }

    fn conjunction(&mut self) -> Result<Formula, ParseError> {
        let mut operands = vec![self.binary()?];
        while self.eat(|t| *t == Token::And).is_some() {
            operands.push(self.binary()?);
        }
        Ok(Formula::and(operands))
    }

    fn binary(&mut self) -> Result<Formula, ParseError> {
        let left = self.unary()?;
        let Some(op) = self.eat(|t| {
            matches!(
                t,
                Token::Until | Token::Release | Token::WeakUntil | Token::StrongRelease
            )
        }) else {
            return Ok(left);
        };

        self.enter()?;
        let right = self.binary()?;
        self.leave();
        Ok(match op {
            Token::Until => Formula::until(left, right),
            Token::Release => Formula::release(left, right),
            // a W b = b R (a | b)
            Token::WeakUntil => Formula::release(right.clone(), Formula::or([left, right])),
            // a M b = b U (a & b)
            _ => Formula::until(right.clone(), Formula::and([left, right])),
        })
    }

    fn unary(&mut self) -> Result<Formula, ParseError> {
        let Some(op) = self.eat(|t| {
            matches!(
                t,
                Token::Not | Token::Next | Token::Globally | Token::Finally
            )
        }) else {
            return self.primary();
        };

        self.enter()?;
        let operand = self.unary()?;
        self.leave();
        Ok(match op {
            Token::Not => negate(operand),
            Token::Next => Formula::next(operand),
            Token::Globally => Formula::globally(operand),
            _ => Formula::finally(operand),
        })
    }

    fn primary(&mut self) -> Result<Formula, ParseError> {
        if let Some(atom) = self.comparison()? {
            return Ok(atom);
        }

        let Some(spanned) = self.tokens.get(self.pos) else {
            return Err(ParseError::UnexpectedEnd {
                expected: "a formula",
            });
        };
        match &spanned.token {
            Token::True => {
                self.pos += 1;
                Ok(Formula::TRUE)
            }
            Token::False => {
                self.pos += 1;
                Ok(Formula::FALSE)
            }
            Token::Ident(name) => {
                let literal = Formula::literal(name.clone());
                self.pos += 1;
                Ok(literal)
            }
            Token::LParen => {
                self.pos += 1;
                self.enter()?;
                let inner = self.equivalence()?;
                self.leave();
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(unexpected(spanned, "a formula")),
        }
    }

    /// `term op term`, or `None` (with the position restored) when the input
    /// at this point does not start with a term followed by a comparison.
    fn comparison(&mut self) -> Result<Option<Formula>, ParseError> {
        let start = (self.pos, self.depth);
        let left = match self.term() {
            Ok(term) => term,
            Err(ParseError::IntegerOverflow { literal, offset }) => {
                return Err(ParseError::IntegerOverflow { literal, offset })
            }
            Err(ParseError::TooDeep { limit, offset }) => {
                return Err(ParseError::TooDeep { limit, offset })
            }
            Err(_) => {
                (self.pos, self.depth) = start;
                return Ok(None);
            }
        };

        let op = match self.peek() {
            Some(Token::Leq) => CompOperator::Leq,
            Some(Token::Lt) => CompOperator::Lt,
            Some(Token::Geq) => CompOperator::Geq,
            Some(Token::Gt) => CompOperator::Gt,
            _ => {
                (self.pos, self.depth) = start;
                return Ok(None);
            }
        };
        self.pos += 1;
        let right = self.term()?;
        Ok(Some(Formula::atom(left, op, right)))
    }

    // ===== Terms =====

    fn term(&mut self) -> Result<Term, ParseError> {
        let mut left = self.product()?;
        while let Some(op) = self.eat(|t| matches!(t, Token::Plus | Token::Minus)) {
            let right = self.product()?;
            left = if op == Token::Plus {
                Term::add(left, right)
            } else {
                Term::sub(left, right)
            };
        }
        Ok(left)
    }

    fn product(&mut self) -> Result<Term, ParseError> {
        let mut left = self.factor()?;
        while self.eat(|t| *t == Token::Star).is_some() {
            let right = self.factor()?;
            left = Term::mul(left, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Term, ParseError> {
        let Some(spanned) = self.tokens.get(self.pos).cloned() else {
            return Err(ParseError::UnexpectedEnd { expected: "a term" });
        };
        self.pos += 1;
        match spanned.token {
            Token::Ident(name) => Ok(Term::var(name)),
            Token::Int(digits) => parse_int(&digits, spanned.offset).map(Term::int),
            Token::Minus => {
                // `-3` is a literal, `-(3)` and `-x` are negations
                if let Some(Token::Int(digits)) = self.peek().cloned() {
                    self.pos += 1;
                    return parse_int(&format!("-{}", digits), spanned.offset).map(Term::int);
                }
                self.enter()?;
                let inner = self.factor()?;
                self.leave();
                Ok(Term::neg(inner))
            }
            Token::LParen => {
                self.enter()?;
                let inner = self.term()?;
                self.leave();
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(unexpected(&spanned, "a term")),
        }
    }
}

/// `!p` is a negative literal; `!!p` stays a negation of one.
fn negate(formula: Formula) -> Formula {
    match formula {
        Formula::Literal {
            name,
            negated: false,
        } => Formula::negated_literal(name),
        other => Formula::not(other),
    }
}

fn parse_int(literal: &str, offset: usize) -> Result<i64, ParseError> {
    literal
        .parse::<i64>()
        .map_err(|_| ParseError::IntegerOverflow {
            literal: literal.to_string(),
            offset,
        })
}

fn unexpected(spanned: &Spanned, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.to_string(),
        expected,
        offset: spanned.offset,
    }
}
