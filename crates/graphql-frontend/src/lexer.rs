//! A lexer that scans GraphQL source text one token at a time while
//! recording every token it has ever produced.
//!
//! Tokens are appended to an internal arena and threaded together with
//! `prev`/`next` indices, so the full token stream (comments included)
//! remains walkable after a parse. [`Lexer::advance`] skips comment
//! tokens; they are still linked into the chain for tooling that wants
//! them.

use crate::error::GraphQLError;
use crate::error::syntax_error;
use crate::source::Source;
use crate::token::Token;
use crate::token::TokenKind;

pub struct Lexer {
    source: Source,
    /// Arena of every token produced so far. Index 0 is always the
    /// `<SOF>` token.
    tokens: Vec<Token>,
    /// Index of the token `advance` most recently returned.
    token: usize,
    /// Index of the token current before the last `advance`.
    last_token: usize,
    /// 1-based line of the scan position.
    line: usize,
    /// Character offset of the first character of the current line.
    line_start: usize,
    /// Scan position as a character offset into the body.
    pos: usize,
    /// Scan position as a byte offset, for slicing the body.
    byte_pos: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        let sof = Token::new(TokenKind::Sof, 0, 0, 0, 0, None);
        Lexer {
            source,
            tokens: vec![sof],
            token: 0,
            last_token: 0,
            line: 1,
            line_start: 0,
            pos: 0,
            byte_pos: 0,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The token `advance` most recently returned. Starts at `<SOF>`.
    pub fn token(&self) -> &Token {
        &self.tokens[self.token]
    }

    /// The token that was current before the last `advance`.
    pub fn last_token(&self) -> &Token {
        &self.tokens[self.last_token]
    }

    /// Every token produced so far, `<SOF>` first, comments included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Advances to the next non-comment token and returns it.
    ///
    /// Once `<EOF>` is reached, further calls keep returning it.
    /// Re-advancing over an already-scanned region follows the existing
    /// chain instead of re-lexing.
    pub fn advance(&mut self) -> Result<&Token, GraphQLError> {
        self.last_token = self.token;
        if self.tokens[self.token].kind != TokenKind::Eof {
            let mut cursor = self.token;
            loop {
                cursor = match self.tokens[cursor].next {
                    Some(next) => next,
                    None => self.read_token(cursor)?,
                };
                if self.tokens[cursor].kind != TokenKind::Comment {
                    break;
                }
            }
            self.token = cursor;
        }
        Ok(&self.tokens[self.token])
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source.body()[self.byte_pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source.body()[self.byte_pos..].chars().nth(n)
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += 1;
            self.byte_pos += ch.len_utf8();
        }
    }

    /// Scans the next token at the current position, appends it to the
    /// arena, and links it after `prev`.
    fn read_token(&mut self, prev: usize) -> Result<usize, GraphQLError> {
        self.skip_ignored();
        let line = self.line;
        let column = 1 + self.pos - self.line_start;
        let token = match self.peek() {
            None => Token::new(TokenKind::Eof, self.pos, self.pos, line, column, None),
            Some(ch) => {
                if (ch as u32) < 0x0020 && ch != '\t' && ch != '\n' && ch != '\r' {
                    return Err(syntax_error(
                        &self.source,
                        self.pos,
                        format!(
                            "Cannot contain the invalid character {}.",
                            print_char_code(ch)
                        ),
                    ));
                }
                match ch {
                    '!' => self.read_punctuator(TokenKind::Bang, line, column),
                    '#' => self.read_comment(line, column),
                    '$' => self.read_punctuator(TokenKind::Dollar, line, column),
                    '(' => self.read_punctuator(TokenKind::ParenL, line, column),
                    ')' => self.read_punctuator(TokenKind::ParenR, line, column),
                    '.' => {
                        if self.peek_nth(1) == Some('.') && self.peek_nth(2) == Some('.') {
                            let start = self.pos;
                            self.bump();
                            self.bump();
                            self.bump();
                            Token::new(TokenKind::Spread, start, self.pos, line, column, None)
                        } else {
                            return Err(self.unexpected_character(ch));
                        }
                    }
                    ':' => self.read_punctuator(TokenKind::Colon, line, column),
                    '=' => self.read_punctuator(TokenKind::Equals, line, column),
                    '@' => self.read_punctuator(TokenKind::At, line, column),
                    '[' => self.read_punctuator(TokenKind::BracketL, line, column),
                    ']' => self.read_punctuator(TokenKind::BracketR, line, column),
                    '{' => self.read_punctuator(TokenKind::BraceL, line, column),
                    '}' => self.read_punctuator(TokenKind::BraceR, line, column),
                    '|' => self.read_punctuator(TokenKind::Pipe, line, column),
                    '_' | 'a'..='z' | 'A'..='Z' => self.read_name(line, column),
                    '-' | '0'..='9' => self.read_number(line, column)?,
                    '"' => self.read_string(line, column)?,
                    other => return Err(self.unexpected_character(other)),
                }
            }
        };
        let index = self.tokens.len();
        let mut token = token;
        token.prev = Some(prev);
        self.tokens.push(token);
        self.tokens[prev].next = Some(index);
        Ok(index)
    }

    /// Skips the ignored tokens: whitespace, commas, the byte-order
    /// mark, and line terminators. A `\r\n` pair counts as a single
    /// line terminator.
    fn skip_ignored(&mut self) {
        loop {
            match self.peek() {
                Some('\t') | Some(' ') | Some(',') | Some('\u{FEFF}') => self.bump(),
                Some('\n') => {
                    self.bump();
                    self.line += 1;
                    self.line_start = self.pos;
                }
                Some('\r') => {
                    self.bump();
                    if self.peek() == Some('\n') {
                        self.bump();
                    }
                    self.line += 1;
                    self.line_start = self.pos;
                }
                _ => break,
            }
        }
    }

    fn read_punctuator(&mut self, kind: TokenKind, line: usize, column: usize) -> Token {
        let start = self.pos;
        self.bump();
        Token::new(kind, start, self.pos, line, column, None)
    }

    /// Reads `#` up to but not including the next line terminator. The
    /// token value excludes the `#`.
    fn read_comment(&mut self, line: usize, column: usize) -> Token {
        let start = self.pos;
        self.bump();
        let value_start = self.byte_pos;
        while let Some(ch) = self.peek() {
            if (ch as u32) > 0x001F || ch == '\t' {
                self.bump();
            } else {
                break;
            }
        }
        let value = self.source.body()[value_start..self.byte_pos].to_string();
        Token::new(
            TokenKind::Comment,
            start,
            self.pos,
            line,
            column,
            Some(value),
        )
    }

    fn read_name(&mut self, line: usize, column: usize) -> Token {
        let start = self.pos;
        let value_start = self.byte_pos;
        self.bump();
        while let Some(ch) = self.peek() {
            if ch == '_' || ch.is_ascii_alphanumeric() {
                self.bump();
            } else {
                break;
            }
        }
        let value = self.source.body()[value_start..self.byte_pos].to_string();
        Token::new(TokenKind::Name, start, self.pos, line, column, Some(value))
    }

    /// Reads an int or float per the grammar:
    ///
    /// ```text
    /// Int:   -? IntegerPart
    /// Float: -? IntegerPart ( . Digit+ )? ( (E|e) (+|-)? Digit+ )?
    /// ```
    fn read_number(&mut self, line: usize, column: usize) -> Result<Token, GraphQLError> {
        let start = self.pos;
        let value_start = self.byte_pos;
        let mut is_float = false;
        if self.peek() == Some('-') {
            self.bump();
        }
        if self.peek() == Some('0') {
            self.bump();
            if let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    return Err(syntax_error(
                        &self.source,
                        self.pos,
                        format!("Invalid number, unexpected digit after 0: \"{ch}\"."),
                    ));
                }
            }
        } else {
            self.read_digits()?;
        }
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            self.read_digits()?;
        }
        if matches!(self.peek(), Some('E') | Some('e')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.bump();
            }
            self.read_digits()?;
        }
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        let value = self.source.body()[value_start..self.byte_pos].to_string();
        Ok(Token::new(kind, start, self.pos, line, column, Some(value)))
    }

    /// Consumes one or more ASCII digits.
    fn read_digits(&mut self) -> Result<(), GraphQLError> {
        match self.peek() {
            Some(ch) if ch.is_ascii_digit() => {
                while let Some(ch) = self.peek() {
                    if ch.is_ascii_digit() {
                        self.bump();
                    } else {
                        break;
                    }
                }
                Ok(())
            }
            other => Err(syntax_error(
                &self.source,
                self.pos,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_char(other)
                ),
            )),
        }
    }

    /// Reads a quoted string, resolving escape sequences. The token
    /// value is the decoded string; its offsets span the quotes.
    fn read_string(&mut self, line: usize, column: usize) -> Result<Token, GraphQLError> {
        let start = self.pos;
        self.bump();
        let mut value = String::new();
        loop {
            match self.peek() {
                None | Some('\n') | Some('\r') => {
                    return Err(syntax_error(&self.source, self.pos, "Unterminated string."));
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    value.push(self.read_escape_sequence()?);
                }
                Some(ch) if (ch as u32) < 0x0020 && ch != '\t' => {
                    return Err(syntax_error(
                        &self.source,
                        self.pos,
                        format!("Invalid character within String: {}.", print_char_code(ch)),
                    ));
                }
                Some(ch) => {
                    value.push(ch);
                    self.bump();
                }
            }
        }
        Ok(Token::new(
            TokenKind::String,
            start,
            self.pos,
            line,
            column,
            Some(value),
        ))
    }

    /// Decodes the escape sequence whose designator character is at the
    /// current position (the backslash is already consumed). Errors are
    /// positioned at the designator.
    fn read_escape_sequence(&mut self) -> Result<char, GraphQLError> {
        let decoded = match self.peek() {
            None => {
                return Err(syntax_error(&self.source, self.pos, "Unterminated string."));
            }
            Some('"') => '"',
            Some('/') => '/',
            Some('\\') => '\\',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                let hex: String = (1..=4).filter_map(|n| self.peek_nth(n)).collect();
                let code = if hex.len() == 4 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    u32::from_str_radix(&hex, 16).ok()
                } else {
                    None
                };
                let Some(ch) = code.and_then(char::from_u32) else {
                    return Err(syntax_error(
                        &self.source,
                        self.pos,
                        format!("Invalid character escape sequence: \\u{hex}."),
                    ));
                };
                for _ in 0..4 {
                    self.bump();
                }
                ch
            }
            Some(other) => {
                return Err(syntax_error(
                    &self.source,
                    self.pos,
                    format!("Invalid character escape sequence: \\{other}."),
                ));
            }
        };
        self.bump();
        Ok(decoded)
    }

    fn unexpected_character(&self, ch: char) -> GraphQLError {
        let message = if ch == '\'' {
            "Unexpected single quote character ('), did you mean to use a double quote (\")?"
                .to_string()
        } else {
            format!(
                "Cannot parse the unexpected character {}.",
                print_char(Some(ch))
            )
        };
        syntax_error(&self.source, self.pos, message)
    }
}

/// Renders a character as a quoted `\uXXXX` escape for error messages.
fn print_char_code(ch: char) -> String {
    format!("\"\\u{:04X}\"", ch as u32)
}

/// Renders an optional character for error messages: `<EOF>` when
/// absent, quoted verbatim when printable ASCII, and as a quoted
/// `\uXXXX` escape otherwise.
fn print_char(ch: Option<char>) -> String {
    match ch {
        None => "<EOF>".to_string(),
        Some(ch) if ch.is_ascii_graphic() || ch == ' ' => format!("\"{ch}\""),
        Some(ch) => print_char_code(ch),
    }
}
