//! Input line parsing
//!
//! Each binary reads one line of whitespace-separated tokens. Embedded
//! whitespace cannot be escaped. Missing tokens read as empty strings and
//! tokens past the expected count are ignored. Bytes that are not valid
//! UTF-8 are replaced with U+FFFD.

use std::io::{self, BufRead};

#[derive(Debug, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Read a single line, without its line terminator
pub fn read_request_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line)
        .trim_end_matches(['\r', '\n'])
        .to_string())
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> String {
    tokens.next().unwrap_or("").to_string()
}

// Parse "<username> <password> <role>"
pub fn parse_register(raw: &str) -> RegisterRequest {
    let mut tokens = raw.split_whitespace();
    RegisterRequest {
        username: next_token(&mut tokens),
        password: next_token(&mut tokens),
        role: next_token(&mut tokens),
    }
}

// Parse "<username> <password>"
pub fn parse_login(raw: &str) -> LoginRequest {
    let mut tokens = raw.split_whitespace();
    LoginRequest {
        username: next_token(&mut tokens),
        password: next_token(&mut tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        assert_eq!(
            parse_register("alice secret admin"),
            RegisterRequest {
                username: "alice".into(),
                password: "secret".into(),
                role: "admin".into(),
            }
        );
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(
            parse_login("bob pw1"),
            LoginRequest {
                username: "bob".into(),
                password: "pw1".into(),
            }
        );
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(
            parse_login("  bob \t pw1   "),
            LoginRequest {
                username: "bob".into(),
                password: "pw1".into(),
            }
        );
    }

    #[test]
    fn test_missing_and_extra_tokens() {
        assert_eq!(parse_register("alice").password, "");
        assert_eq!(parse_register("alice").role, "");
        assert_eq!(
            parse_login(""),
            LoginRequest {
                username: String::new(),
                password: String::new(),
            }
        );
        assert_eq!(parse_login("bob pw1 extra").password, "pw1");
    }

    #[test]
    fn test_read_request_line_reads_one_line() {
        let input = b"alice secret admin\r\nbob pw user\n";
        assert_eq!(
            read_request_line(&input[..]).unwrap(),
            "alice secret admin"
        );
        assert_eq!(read_request_line(&b""[..]).unwrap(), "");
    }

    #[test]
    fn test_read_request_line_accepts_invalid_utf8() {
        let input = b"alice p\xffw admin\n";
        let line = read_request_line(&input[..]).unwrap();
        assert_eq!(line, "alice p\u{FFFD}w admin");
        assert_eq!(parse_register(&line).role, "admin");
    }
}
