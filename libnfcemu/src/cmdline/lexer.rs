// libnfcemu/src/cmdline/lexer.rs

//! Token reader for command arguments.
//!
//! Tokens are split off one at a time up to the first of a set of
//! delimiter characters, which is consumed. Once no delimiter is left the
//! final token is the rest of the input and the lexer is exhausted. Empty
//! tokens between adjacent delimiters are returned as `""`.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexer<'a> {
    rest: Option<&'a str>,
}

impl<'a> Lexer<'a> {
    /// `None` means no arguments at all.
    pub fn new(args: Option<&'a str>) -> Self {
        Self { rest: args }
    }

    /// Unread input, `None` once exhausted.
    pub fn rest(&self) -> Option<&'a str> {
        self.rest
    }

    /// True if any input, even whitespace, is left.
    pub fn has_more(&self) -> bool {
        self.rest.is_some_and(|s| !s.is_empty())
    }

    /// Unread input with leading whitespace removed, if it is not blank.
    pub fn remaining(&self) -> Option<&'a str> {
        self.rest.map(str::trim_start).filter(|s| !s.is_empty())
    }

    /// Drop leading whitespace.
    pub fn skip_whitespace(&mut self) {
        if let Some(s) = self.rest {
            self.rest = Some(s.trim_start());
        }
    }

    /// Consume `c` if the input starts with it.
    pub fn eat(&mut self, c: char) -> bool {
        match self.rest.and_then(|s| s.strip_prefix(c)) {
            Some(s) => {
                self.rest = Some(s);
                true
            }
            None => false,
        }
    }

    /// Split off the next token. Returns `None` only when exhausted.
    pub fn token(&mut self, delims: &str) -> Option<&'a str> {
        let s = self.rest?;
        match s.char_indices().find(|&(_, c)| delims.contains(c)) {
            Some((i, c)) => {
                self.rest = Some(&s[i + c.len_utf8()..]);
                Some(&s[..i])
            }
            None => {
                self.rest = None;
                Some(s)
            }
        }
    }

    pub fn lex(&mut self, field: &'static str, delims: &str) -> Result<&'a str> {
        self.token(delims).ok_or(Error::MissingToken { field })
    }

    pub fn parse_str(
        &mut self,
        field: &'static str,
        delims: &str,
        allow_empty: bool,
    ) -> Result<&'a str> {
        let tok = self.lex(field, delims)?;
        if !allow_empty && tok.is_empty() {
            return Err(Error::EmptyToken { field });
        }
        Ok(tok)
    }

    pub fn parse_i64(&mut self, field: &'static str, delims: &str) -> Result<i64> {
        let tok = self.lex(field, delims)?;
        parse_signed(tok).map_err(|reason| invalid(field, tok, reason))
    }

    pub fn parse_u64(&mut self, field: &'static str, delims: &str) -> Result<u64> {
        let tok = self.lex(field, delims)?;
        parse_unsigned(tok).map_err(|reason| invalid(field, tok, reason))
    }
}

fn invalid(field: &'static str, tok: &str, reason: &'static str) -> Error {
    Error::InvalidValue {
        field,
        value: tok.to_string(),
        reason,
    }
}

/// Radix from the number's prefix: `0x`/`0X` hex, a leading `0` octal,
/// decimal otherwise.
fn split_radix(text: &str) -> (u32, &str) {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (16, hex)
    } else if text.len() > 1 && text.starts_with('0') {
        (8, &text[1..])
    } else {
        (10, text)
    }
}

fn parse_magnitude(text: &str) -> std::result::Result<u64, &'static str> {
    if text.is_empty() {
        return Err("empty value");
    }
    let (radix, digits) = split_radix(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err("not a number");
    }
    u64::from_str_radix(digits, radix).map_err(|_| "out of range")
}

/// Parse an unsigned number with base prefix and optional `+`.
pub fn parse_unsigned(text: &str) -> std::result::Result<u64, &'static str> {
    if text.starts_with('-') {
        return Err("negative value");
    }
    parse_magnitude(text.strip_prefix('+').unwrap_or(text))
}

/// Parse a signed number with base prefix and optional sign.
pub fn parse_signed(text: &str) -> std::result::Result<i64, &'static str> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let magnitude = i128::from(parse_magnitude(digits)?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| "out of range")
}
