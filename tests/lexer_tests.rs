//! Tests for the format mask lexer.

use ummalqura::parser::lexer::Lexer;
use ummalqura::parser::tokens::Token;
use ummalqura::ParseError;

#[test]
fn test_lex_date_mask() {
    let mut lexer = Lexer::new("yyyy-MM-dd");
    assert_eq!(lexer.next_token().unwrap().token, Token::Year(4));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal('-'));
    assert_eq!(lexer.next_token().unwrap().token, Token::Month(2));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal('-'));
    assert_eq!(lexer.next_token().unwrap().token, Token::Day(2));
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}

#[test]
fn test_lex_time_mask() {
    let mut lexer = Lexer::new("h:mm:ss.l TT");
    assert_eq!(lexer.next_token().unwrap().token, Token::Hour12(1));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal(':'));
    assert_eq!(lexer.next_token().unwrap().token, Token::Minute(2));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal(':'));
    assert_eq!(lexer.next_token().unwrap().token, Token::Second(2));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal('.'));
    assert_eq!(lexer.next_token().unwrap().token, Token::Millisecond);
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal(' '));
    assert_eq!(lexer.next_token().unwrap().token, Token::MarkerUpper(2));
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}

#[test]
fn test_month_and_minute_are_distinct() {
    let mut lexer = Lexer::new("Mm");
    assert_eq!(lexer.next_token().unwrap().token, Token::Month(1));
    assert_eq!(lexer.next_token().unwrap().token, Token::Minute(1));
}

#[test]
fn test_lex_single_letter_fields() {
    let tokens: Vec<Token> = Lexer::new("LSWN")
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.token)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::Centisecond,
            Token::Ordinal,
            Token::WeekOfYear,
            Token::DayOfWeek,
            Token::Eof
        ]
    );
}

#[test]
fn test_lex_quoted_strings() {
    let mut lexer = Lexer::new("\"day\" 'of'");
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::QuotedString("day".into())
    );
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal(' '));
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::QuotedString("of".into())
    );
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}

#[test]
fn test_other_quote_is_literal_inside_quotes() {
    let mut lexer = Lexer::new("\"it's\"");
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::QuotedString("it's".into())
    );
}

#[test]
fn test_empty_quotes() {
    let mut lexer = Lexer::new("''");
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::QuotedString(String::new())
    );
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}

#[test]
fn test_lex_unterminated_quote() {
    let mut lexer = Lexer::new("dd \"abc");
    assert_eq!(lexer.next_token().unwrap().token, Token::Day(2));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal(' '));
    assert_eq!(
        lexer.next_token().unwrap_err(),
        ParseError::UnterminatedQuote {
            position: 3,
            quote: '"'
        }
    );
}

#[test]
fn test_non_field_letters_are_literals() {
    let mut lexer = Lexer::new("xY");
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal('x'));
    assert_eq!(lexer.next_token().unwrap().token, Token::Literal('Y'));
}

#[test]
fn test_token_spans() {
    let tokens = Lexer::new("dddd, d").tokenize().unwrap();
    assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
    assert_eq!((tokens[1].start, tokens[1].end), (4, 5));
    assert_eq!((tokens[3].start, tokens[3].end), (6, 7));
    assert_eq!((tokens[4].start, tokens[4].end), (7, 7));
}
