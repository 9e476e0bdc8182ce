//! Parser for format masks.

pub mod lexer;
pub mod tokens;

use crate::ast::{Mask, MaskPart, NameStyle, NumericField, Padding, TimeMarker};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::Token;

/// Parse a mask string into a Mask. An empty string gives an empty mask.
pub fn parse(mask: &str) -> Result<Mask, ParseError> {
    let mut builder = MaskBuilder::default();
    for spanned in Lexer::new(mask).tokenize()? {
        match spanned.token {
            Token::Eof => break,
            Token::Literal(ch) => builder.push_char(ch),
            Token::QuotedString(text) => builder.push_str(&text),
            token => builder.push_part(field_part(token)),
        }
    }
    Ok(builder.finish())
}

/// Maps a field token to its mask part. Literal tokens never reach here.
fn field_part(token: Token) -> MaskPart {
    match token {
        Token::Day(1) => MaskPart::Numeric(NumericField::Day, Padding::None),
        Token::Day(2) => MaskPart::Numeric(NumericField::Day, Padding::Two),
        Token::Day(3) => MaskPart::DayName(NameStyle::Short),
        Token::Day(_) => MaskPart::DayName(NameStyle::Full),

        Token::Month(1) => MaskPart::Numeric(NumericField::Month, Padding::None),
        Token::Month(2) => MaskPart::Numeric(NumericField::Month, Padding::Two),
        Token::Month(3) => MaskPart::MonthName(NameStyle::Short),
        Token::Month(_) => MaskPart::MonthName(NameStyle::Full),

        Token::Year(2) => MaskPart::YearShort,
        Token::Year(_) => MaskPart::Year,

        Token::Hour12(n) => MaskPart::Numeric(NumericField::Hour12, padding(n)),
        Token::Hour24(n) => MaskPart::Numeric(NumericField::Hour, padding(n)),
        Token::Minute(n) => MaskPart::Numeric(NumericField::Minute, padding(n)),
        Token::Second(n) => MaskPart::Numeric(NumericField::Second, padding(n)),
        Token::Millisecond => MaskPart::Millisecond,
        Token::Centisecond => MaskPart::Centisecond,

        Token::MarkerLower(1) => MaskPart::TimeMarker(TimeMarker::LowerShort),
        Token::MarkerLower(_) => MaskPart::TimeMarker(TimeMarker::Lower),
        Token::MarkerUpper(1) => MaskPart::TimeMarker(TimeMarker::UpperShort),
        Token::MarkerUpper(_) => MaskPart::TimeMarker(TimeMarker::Upper),

        Token::Ordinal => MaskPart::Ordinal,
        Token::WeekOfYear => MaskPart::WeekOfYear,
        Token::DayOfWeek => MaskPart::DayOfWeek,

        Token::Literal(ch) => MaskPart::Literal(ch.to_string()),
        Token::QuotedString(text) => MaskPart::Literal(text),
        Token::Eof => MaskPart::Literal(String::new()),
    }
}

fn padding(run: u8) -> Padding {
    if run >= 2 {
        Padding::Two
    } else {
        Padding::None
    }
}

/// Builder that merges adjacent literal text.
#[derive(Default)]
struct MaskBuilder {
    parts: Vec<MaskPart>,
    literal: String,
}

impl MaskBuilder {
    fn push_char(&mut self, ch: char) {
        self.literal.push(ch);
    }

    fn push_str(&mut self, text: &str) {
        self.literal.push_str(text);
    }

    fn push_part(&mut self, part: MaskPart) {
        self.flush_literal();
        self.parts.push(part);
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.parts
                .push(MaskPart::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn finish(mut self) -> Mask {
        self.flush_literal();
        Mask::from_parts(self.parts)
    }
}
