//! Symbol literal formatting.
//!
//! A name is "plain" when it can be written after a bare `:` and read back
//! as the same symbol: identifiers (with an optional `?`, `!` or `=` suffix
//! on non-constant names), instance, class and global variable names,
//! special globals such as `$~` or `$1`, and operator method names such as
//! `<=>`, `[]=` or `+@`. Anything else is quoted and escaped.

use std::fmt::Write;

/// Byte cursor that reads 0 past the end, mirroring a NUL-terminated scan
#[derive(Clone, Copy)]
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Advance, then peek
    #[inline]
    fn step(&mut self) -> u8 {
        self.bump();
        self.peek()
    }

    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == byte {
            self.bump();
            true
        } else {
            false
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

#[inline]
fn is_ident_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Rest of the cursor is a special global name (after the `$`)
fn special_global(mut cur: Cursor<'_>) -> bool {
    match cur.peek() {
        b'~' | b'*' | b'$' | b'?' | b'!' | b'@' | b'/' | b'\\' | b';' | b',' | b'.' | b'='
        | b':' | b'<' | b'>' | b'"' | b'&' | b'`' | b'\'' | b'+' | b'0' => cur.bump(),
        b'-' => {
            if is_ident_char(cur.step()) {
                cur.bump();
            }
        }
        b if b.is_ascii_digit() => {
            while cur.peek().is_ascii_digit() {
                cur.bump();
            }
        }
        _ => return false,
    }
    cur.at_end()
}

/// Identifier body with an optional predicate/bang/setter suffix
fn identifier(cur: &mut Cursor<'_>, local: bool) -> bool {
    let first = cur.peek();
    if first != b'_' && !first.is_ascii_alphabetic() {
        return false;
    }
    while is_ident_char(cur.peek()) {
        cur.bump();
    }
    if local && matches!(cur.peek(), b'!' | b'?' | b'=') {
        cur.bump();
    }
    true
}

/// Whether `name` can be written as a bare symbol literal
///
/// # Examples
///
/// ```
/// use ember_sym::is_plain_name;
///
/// assert!(is_plain_name(b"respond_to?"));
/// assert!(is_plain_name(b"@@count"));
/// assert!(is_plain_name(b"<=>"));
/// assert!(is_plain_name(b"[]="));
/// assert!(!is_plain_name(b"Foo?"));
/// assert!(!is_plain_name(b"two words"));
/// ```
pub fn is_plain_name(name: &[u8]) -> bool {
    let mut cur = Cursor::new(name);
    match cur.peek() {
        0 => return false,
        b'$' => {
            cur.bump();
            if special_global(cur) {
                return true;
            }
            if !identifier(&mut cur, false) {
                return false;
            }
        }
        b'@' => {
            cur.bump();
            cur.eat(b'@');
            if !identifier(&mut cur, false) {
                return false;
            }
        }
        b'<' => match cur.step() {
            b'<' => cur.bump(),
            b'=' => {
                cur.bump();
                cur.eat(b'>');
            }
            _ => {}
        },
        b'>' => {
            if matches!(cur.step(), b'>' | b'=') {
                cur.bump();
            }
        }
        b'=' => match cur.step() {
            b'~' => cur.bump(),
            b'=' => {
                cur.bump();
                cur.eat(b'=');
            }
            _ => return false,
        },
        b'*' => {
            cur.bump();
            cur.eat(b'*');
        }
        b'!' => {
            if matches!(cur.step(), b'=' | b'~') {
                cur.bump();
            }
        }
        b'+' | b'-' => {
            cur.bump();
            cur.eat(b'@');
        }
        b'|' => {
            cur.bump();
            cur.eat(b'|');
        }
        b'&' => {
            cur.bump();
            cur.eat(b'&');
        }
        b'^' | b'/' | b'%' | b'~' | b'`' => cur.bump(),
        b'[' => {
            if cur.step() != b']' {
                return false;
            }
            cur.bump();
            cur.eat(b'=');
        }
        first => {
            let local = !first.is_ascii_uppercase();
            if !identifier(&mut cur, local) {
                return false;
            }
        }
    }
    cur.at_end()
}

/// Append `name` to `out` as the body of a double-quoted literal
///
/// Quotes, backslashes and interpolation starters (`#{`, `#$`, `#@`) are
/// backslash-escaped. Control characters use their short escape when one
/// exists, `\xHH` for other ASCII controls and `\uXXXX` beyond ASCII.
/// Bytes that are not valid UTF-8 are written as `\xHH`.
pub fn escape_into(name: &[u8], out: &mut String) {
    let mut offset = 0;
    for chunk in name.utf8_chunks() {
        let valid = chunk.valid();
        for (i, c) in valid.char_indices() {
            let next = name.get(offset + i + c.len_utf8()).copied();
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '#' if matches!(next, Some(b'{' | b'$' | b'@')) => out.push_str("\\#"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\x0c' => out.push_str("\\f"),
                '\x0b' => out.push_str("\\v"),
                '\x08' => out.push_str("\\b"),
                '\x07' => out.push_str("\\a"),
                '\x1b' => out.push_str("\\e"),
                c if c.is_ascii_control() => {
                    let _ = write!(out, "\\x{:02X}", c as u32);
                }
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04X}", c as u32);
                }
                c => out.push(c),
            }
        }
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{:02X}", byte);
        }
        offset += valid.len() + chunk.invalid().len();
    }
}

/// `name` as a symbol literal: `:name`, or `:"escaped"` when the name is
/// not plain
pub fn inspect(name: &[u8]) -> String {
    let mut out = String::with_capacity(name.len() + 3);
    out.push(':');
    if is_plain_name(name) {
        push_plain(name, &mut out);
    } else {
        out.push('"');
        escape_into(name, &mut out);
        out.push('"');
    }
    out
}

/// `name` as-is when plain, otherwise as a quoted, escaped string
pub fn dump(name: &[u8]) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    if is_plain_name(name) {
        push_plain(name, &mut out);
    } else {
        out.push('"');
        escape_into(name, &mut out);
        out.push('"');
    }
    out
}

/// Plain names are ASCII by construction
fn push_plain(name: &[u8], out: &mut String) {
    out.extend(name.iter().map(|&b| char::from(b)));
}
