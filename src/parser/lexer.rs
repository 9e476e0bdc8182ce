//! Lexer for tokenizing format masks.
//!
//! Field letters are case sensitive and group into runs:
//! - `d` and `M` take up to four letters
//! - `y` takes four letters, or two, and a lone `y` is literal
//! - `h`, `H`, `m`, `s`, `t` and `T` take up to two letters
//! - `l`, `L`, `S`, `W` and `N` are single letters
//!
//! Longer runs split greedily, so `ddddd` is `dddd` followed by `d`. Text in
//! double or single quotes becomes a QuotedString token; anything else is a
//! literal character.

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for format masks.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '"' | '\'' => self.lex_quoted_string(ch)?,

            'd' => Token::Day(self.take_run(ch, 4)),
            'M' => Token::Month(self.take_run(ch, 4)),
            'y' => match self.run_length(ch) {
                n if n >= 4 => Token::Year(self.take_run(ch, 4)),
                n if n >= 2 => Token::Year(self.take_run(ch, 2)),
                _ => {
                    self.advance();
                    Token::Literal(ch)
                }
            },

            'h' => Token::Hour12(self.take_run(ch, 2)),
            'H' => Token::Hour24(self.take_run(ch, 2)),
            'm' => Token::Minute(self.take_run(ch, 2)),
            's' => Token::Second(self.take_run(ch, 2)),
            't' => Token::MarkerLower(self.take_run(ch, 2)),
            'T' => Token::MarkerUpper(self.take_run(ch, 2)),

            'l' => self.single(Token::Millisecond),
            'L' => self.single(Token::Centisecond),
            'S' => self.single(Token::Ordinal),
            'W' => self.single(Token::WeekOfYear),
            'N' => self.single(Token::DayOfWeek),

            // Everything else is a literal
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Counts consecutive `ch` at the current position without consuming.
    fn run_length(&self, ch: char) -> usize {
        self.input[self.position..]
            .chars()
            .take_while(|&c| c == ch)
            .count()
    }

    /// Consumes up to `max` consecutive `ch` and returns how many were taken.
    /// The current character must be `ch`.
    fn take_run(&mut self, ch: char, max: u8) -> u8 {
        let mut count = 0;
        while count < max && self.current_char() == Some(ch) {
            count += 1;
            self.advance();
        }
        count
    }

    /// Lexes a string quoted with `quote`, returning its content.
    fn lex_quoted_string(&mut self, quote: char) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some(ch) if ch == quote => {
                    self.advance(); // Skip the closing quote
                    return Ok(Token::QuotedString(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => {
                    return Err(ParseError::UnterminatedQuote {
                        position: start,
                        quote,
                    });
                }
            }
        }
    }

    /// Returns all remaining tokens as a vector, ending with `Eof`.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
