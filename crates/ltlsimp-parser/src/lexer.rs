//! Tokenizer for LTL formulas.

use std::fmt;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    True,
    False,
    Ident(String),
    /// Decimal digits, sign handled by the parser
    Int(String),
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Next,
    Globally,
    Finally,
    Until,
    Release,
    WeakUntil,
    StrongRelease,
    Plus,
    Minus,
    Star,
    Leq,
    Lt,
    Geq,
    Gt,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::True => "true",
            Token::False => "false",
            Token::Ident(name) => return f.write_str(name),
            Token::Int(digits) => return f.write_str(digits),
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Not => "!",
            Token::And => "&",
            Token::Or => "|",
            Token::Implies => "->",
            Token::Iff => "<->",
            Token::Next => "X",
            Token::Globally => "G",
            Token::Finally => "F",
            Token::Until => "U",
            Token::Release => "R",
            Token::WeakUntil => "W",
            Token::StrongRelease => "M",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Leq => "<=",
            Token::Lt => "<",
            Token::Geq => ">=",
            Token::Gt => ">",
        };
        f.write_str(text)
    }
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Multi-character operators, longest first so that `<->` wins over `<=`.
const SYMBOLS: &[(&str, Token)] = &[
    ("<->", Token::Iff),
    ("<=>", Token::Iff),
    ("&&", Token::And),
    ("||", Token::Or),
    ("->", Token::Implies),
    ("=>", Token::Implies),
    ("<=", Token::Leq),
    (">=", Token::Geq),
    ("&", Token::And),
    ("|", Token::Or),
    ("!", Token::Not),
    ("~", Token::Not),
    ("(", Token::LParen),
    (")", Token::RParen),
    ("+", Token::Plus),
    ("-", Token::Minus),
    ("*", Token::Star),
    ("<", Token::Lt),
    (">", Token::Gt),
];

fn keyword(word: &str) -> Token {
    match word {
        "true" | "TRUE" | "tt" => Token::True,
        "false" | "FALSE" | "ff" => Token::False,
        "X" => Token::Next,
        "G" => Token::Globally,
        "F" => Token::Finally,
        "U" => Token::Until,
        "R" => Token::Release,
        "W" => Token::WeakUntil,
        "M" => Token::StrongRelease,
        _ => Token::Ident(word.to_string()),
    }
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        let offset = input.len() - rest.len();

        if ch.is_whitespace() {
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            tokens.push(Spanned {
                token: keyword(&rest[..end]),
                offset,
            });
            rest = &rest[end..];
            continue;
        }

        if ch.is_ascii_digit() {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            tokens.push(Spanned {
                token: Token::Int(rest[..end].to_string()),
                offset,
            });
            rest = &rest[end..];
            continue;
        }

        let (text, token) = SYMBOLS
            .iter()
            .find(|(text, _)| rest.starts_with(text))
            .ok_or(ParseError::UnexpectedChar { ch, offset })?;
        tokens.push(Spanned {
            token: token.clone(),
            offset,
        });
        rest = &rest[text.len()..];
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn test_operators_and_words() {
        assert_eq!(
            kinds("G (F (X b))"),
            vec![
                Token::Globally,
                Token::LParen,
                Token::Finally,
                Token::LParen,
                Token::Next,
                Token::Ident("b".into()),
                Token::RParen,
                Token::RParen,
            ]
        );
        assert_eq!(kinds("Gp0"), vec![Token::Ident("Gp0".into())]);
        assert_eq!(kinds("tt ff TRUE"), vec![Token::True, Token::False, Token::True]);
    }

    #[test]
    fn test_longest_symbol_wins() {
        assert_eq!(
            kinds("a<->b <= c->d||e"),
            vec![
                Token::Ident("a".into()),
                Token::Iff,
                Token::Ident("b".into()),
                Token::Leq,
                Token::Ident("c".into()),
                Token::Implies,
                Token::Ident("d".into()),
                Token::Or,
                Token::Ident("e".into()),
            ]
        );
        assert_eq!(kinds("x<-1"), vec![
            Token::Ident("x".into()),
            Token::Lt,
            Token::Minus,
            Token::Int("1".into()),
        ]);
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("  a &\tb").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![2, 4, 6]);
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(
            tokenize("a $ b"),
            Err(ParseError::UnexpectedChar { ch: '$', offset: 2 })
        );
        assert_eq!(
            tokenize("a = b"),
            Err(ParseError::UnexpectedChar { ch: '=', offset: 2 })
        );
    }
}
