//! Markup lexer
//!
//! Splits raw dataset text into a flat token stream. The lexer never
//! fails: anything that does not parse as a known construct stays in the
//! output as literal text, so malformed markup degrades to visible
//! characters instead of being swallowed.

use super::Rgba;

/// Tag vocabulary. `Ignored` covers `size.../align...` pairs which are
/// stripped without any visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TagName {
    Underline,
    Bold,
    Italic,
    Unbreak,
    Color,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// Literal run, no '\n' inside
    Text(String),
    /// Line break from any of the accepted newline spellings
    Break,
    /// `{NICKNAME}` placeholder
    Nickname,
    /// `{RUBY_B#annotation}` with the annotation text
    RubyBegin(String),
    /// `{RUBY_E#}`
    RubyEnd,
    /// Opening tag; `color` is set only for a valid `<color=...>`
    Open { name: TagName, color: Option<Rgba> },
    /// Closing tag
    Close(TagName),
}

pub(crate) fn lex(raw: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    macro_rules! flush {
        () => {
            if !text.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut text)));
            }
        };
    }

    while i < raw.len() {
        let rest = &raw[i..];

        // Newlines: real CRLF/LF/CR plus the literal backslash spellings
        // that survive in some dataset strings.
        if let Some(len) = newline_len(rest) {
            flush!();
            tokens.push(Token::Break);
            i += len;
            continue;
        }

        if let Some(rest_after) = rest.strip_prefix("{RUBY_B#") {
            if let Some(end) = rest_after.find('}') {
                flush!();
                tokens.push(Token::RubyBegin(rest_after[..end].to_string()));
                i += "{RUBY_B#".len() + end + 1;
                continue;
            }
        }
        if rest.starts_with("{RUBY_E#}") {
            flush!();
            tokens.push(Token::RubyEnd);
            i += "{RUBY_E#}".len();
            continue;
        }
        if rest.starts_with("{NICKNAME}") {
            flush!();
            tokens.push(Token::Nickname);
            i += "{NICKNAME}".len();
            continue;
        }
        if rest.starts_with('<') {
            if let Some((token, len)) = lex_tag(rest) {
                flush!();
                tokens.push(token);
                i += len;
                continue;
            }
        }

        // Everything else is literal text, one char at a time.
        if let Some(ch) = rest.chars().next() {
            text.push(ch);
            i += ch.len_utf8();
        } else {
            break;
        }
    }
    flush!();
    tokens
}

fn newline_len(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with('\n') || rest.starts_with('\r') {
        Some(1)
    } else if rest.starts_with("\\r\\n") {
        Some(4)
    } else if rest.starts_with("\\n") {
        Some(2)
    } else {
        None
    }
}

/// Try to read one pseudo-tag at the start of `rest` (which begins with
/// '<'). Unknown tags return `None` and the '<' falls through as text.
fn lex_tag(rest: &str) -> Option<(Token, usize)> {
    let end = rest.find('>')?;
    let inner = &rest[1..end];
    if inner.is_empty() || inner.contains('<') {
        return None;
    }
    let len = end + 1;

    if let Some(name) = inner.strip_prefix('/') {
        let name = match name {
            "u" => TagName::Underline,
            "b" => TagName::Bold,
            "i" => TagName::Italic,
            "unbreak" => TagName::Unbreak,
            "color" => TagName::Color,
            _ if name.starts_with("size") || name.starts_with("align") => TagName::Ignored,
            _ => return None,
        };
        return Some((Token::Close(name), len));
    }

    let token = match inner {
        "u" => Token::Open {
            name: TagName::Underline,
            color: None,
        },
        "b" => Token::Open {
            name: TagName::Bold,
            color: None,
        },
        "i" => Token::Open {
            name: TagName::Italic,
            color: None,
        },
        "unbreak" => Token::Open {
            name: TagName::Unbreak,
            color: None,
        },
        _ if inner.starts_with("color") => Token::Open {
            name: TagName::Color,
            // An unparseable value keeps the pair (so the tags vanish)
            // but applies no color.
            color: inner.strip_prefix("color=").and_then(parse_color),
        },
        _ if inner.starts_with("size") || inner.starts_with("align") => Token::Open {
            name: TagName::Ignored,
            color: None,
        },
        _ => return None,
    };
    Some((token, len))
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (leading '#' optional). The alpha byte is
/// normalized to `alpha / 255` rounded to 3 decimals.
fn parse_color(value: &str) -> Option<Rgba> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let alpha = if hex.len() == 8 {
        (f64::from(byte(6)?) / 255.0 * 1000.0).round() / 1000.0
    } else {
        1.0
    };
    Some(Rgba { r, g, b, alpha })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(lex("hello"), vec![Token::Text("hello".to_string())]);
    }

    #[test]
    fn newline_spellings_all_break() {
        for input in ["a\r\nb", "a\nb", "a\\nb", "a\\r\\nb", "a\rb"] {
            assert_eq!(
                lex(input),
                vec![
                    Token::Text("a".to_string()),
                    Token::Break,
                    Token::Text("b".to_string()),
                ],
                "input {input:?}"
            );
        }
    }

    #[test]
    fn ruby_markers() {
        assert_eq!(
            lex("{RUBY_B#よみ}漢字{RUBY_E#}"),
            vec![
                Token::RubyBegin("よみ".to_string()),
                Token::Text("漢字".to_string()),
                Token::RubyEnd,
            ]
        );
    }

    #[test]
    fn unterminated_ruby_marker_is_text() {
        assert_eq!(lex("{RUBY_B#x"), vec![Token::Text("{RUBY_B#x".to_string())]);
    }

    #[test]
    fn unknown_tag_is_literal() {
        assert_eq!(
            lex("<wavy>hi</wavy>"),
            vec![Token::Text("<wavy>hi</wavy>".to_string())]
        );
        assert_eq!(lex("1 < 2"), vec![Token::Text("1 < 2".to_string())]);
    }

    #[test]
    fn color_with_alpha_byte() {
        let tokens = lex("<color=#FF000080>x</color>");
        let Token::Open { name, color } = &tokens[0] else {
            panic!("expected open tag, got {tokens:?}");
        };
        assert_eq!(*name, TagName::Color);
        let rgba = color.clone().unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 0, 0));
        assert_eq!(rgba.alpha, 0.502);
        assert_eq!(tokens[2], Token::Close(TagName::Color));
    }

    #[test]
    fn six_digit_color_is_opaque() {
        let tokens = lex("<color=00AAFF>x</color>");
        let Token::Open { color, .. } = &tokens[0] else {
            panic!("expected open tag");
        };
        assert_eq!(color.clone().unwrap().alpha, 1.0);
    }

    #[test]
    fn invalid_color_value_keeps_the_pair() {
        let tokens = lex("<color=#GGGGGG>x</color>");
        assert_eq!(
            tokens[0],
            Token::Open {
                name: TagName::Color,
                color: None,
            }
        );
    }

    #[test]
    fn size_and_align_are_ignored_tags() {
        assert_eq!(
            lex("<size=24>x</size>"),
            vec![
                Token::Open {
                    name: TagName::Ignored,
                    color: None,
                },
                Token::Text("x".to_string()),
                Token::Close(TagName::Ignored),
            ]
        );
        let aligned = lex("<align=\"center\">x</align>");
        assert_eq!(aligned.len(), 3);
    }
}
