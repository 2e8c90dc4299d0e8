//! Tokenizer for function expressions.

use super::error::ParseError;


#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`
    Caret,
    LParen,
    RParen,
}
impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(v) => format!("number {v}"),
            Token::Ident(s)  => format!("identifier '{s}'"),
            Token::Plus      => "'+'".into(),
            Token::Minus     => "'-'".into(),
            Token::Star      => "'*'".into(),
            Token::Slash     => "'/'".into(),
            Token::Caret     => "'^'".into(),
            Token::LParen    => "'('".into(),
            Token::RParen    => "')'".into(),
        }
    }
}


/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub pos:   usize,
}


pub(crate) fn tokenize(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        let pos = i;

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            i = scan_number(bytes, i);
            let text = &src[pos..i];
            let value = text.parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { text: text.to_string(), pos })?;
            out.push(Spanned { token: Token::Number(value), pos });
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            out.push(Spanned { token: Token::Ident(src[pos..i].to_string()), pos });
            continue;
        }

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if bytes.get(i + 1) == Some(&b'*') => { i += 1; Token::Caret },
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _   => {
                // report the full char, not a UTF-8 fragment
                let ch = src[pos..].chars().next().unwrap_or(c);
                return Err(ParseError::UnexpectedChar { ch, pos });
            }
        };
        i += 1;
        out.push(Spanned { token, pos });
    }

    Ok(out)
}


/// Advances past `digits [. digits] [(e|E) [+|-] digits]`.
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }

    // exponent only when digits follow; `2e` lexes as `2` then `e`
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}
