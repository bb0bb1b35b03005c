//! Rich-text markup transformation
//!
//! Dataset strings carry game markup: `{RUBY_B#...}`/`{RUBY_E#}` ruby
//! annotations, the `{NICKNAME}` placeholder, several newline spellings and
//! pseudo-tags (`<u>`, `<b>`, `<i>`, `<unbreak>`, `<color=...>`,
//! `<size...>`, `<align...>`). This module turns such a string into styled
//! segments plus the glossary terms marked by underline spans.
//!
//! The transformation is an ordered pipeline of pure passes:
//!
//! 1. lex into tokens (unknown constructs stay as literal text)
//! 2. substitute `{NICKNAME}`
//! 3. pair ruby markers (orphans are dropped, the base text stays)
//! 4. pair open/close tags, innermost-first per tag name; unmatched
//!    closes are dropped, unmatched opens stripped with no effect
//! 5. emit segments; a character's style is the union of the tag pairs
//!    covering it, so overlapping pairs are legal and deterministic
//! 6. collect the covered text of each `<u>` pair as a glossary term
//!    (ruby annotations are not part of the covered text)
//!
//! Every pass is total; no input can make rendering fail.

mod lexer;

use serde::Serialize;

use lexer::{lex, TagName, Token};

/// RGB color with a normalized alpha (8-digit hex alpha byte divided by
/// 255 and rounded to 3 decimals; 1.0 for 6-digit colors).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

/// Resolved style of one segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SegStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// `<unbreak>`: the run must not wrap. No visual effect in plain text.
    pub unbreak: bool,
    /// Innermost covering color, if any
    pub color: Option<Rgba>,
}

/// One styled run of text.
///
/// Invariant: `text` never contains '\n' except for dedicated newline
/// segments whose text is exactly `"\n"` with the default style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    pub style: SegStyle,
    /// Ruby annotation rendered above this run
    pub ruby: Option<String>,
}

impl Segment {
    fn newline() -> Self {
        Self {
            text: "\n".to_string(),
            style: SegStyle::default(),
            ruby: None,
        }
    }

    pub fn is_newline(&self) -> bool {
        self.text == "\n" && self.ruby.is_none()
    }
}

/// Render result: styled segments plus the glossary terms found in
/// underline spans, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Markup {
    pub segments: Vec<Segment>,
    pub terms: Vec<String>,
}

struct TagPair {
    open: usize,
    close: usize,
    name: TagName,
    color: Option<Rgba>,
}

/// Transform one raw dataset string. `nickname` replaces the `{NICKNAME}`
/// placeholder and should already be localized for the data language.
pub fn render(raw: &str, nickname: &str) -> Markup {
    let mut tokens = lex(raw);

    // Nickname substitution
    for token in &mut tokens {
        if *token == Token::Nickname {
            *token = Token::Text(nickname.to_string());
        }
    }

    let ruby_pairs = pair_ruby(&tokens);
    let mut tag_pairs = pair_tags(&tokens);
    tag_pairs.sort_by_key(|p| p.open);

    let segments = emit_segments(&tokens, &tag_pairs, &ruby_pairs);
    let terms = collect_terms(&tokens, &tag_pairs);

    Markup { segments, terms }
}

/// Pair ruby markers: each end closes the most recent unmatched begin.
/// Orphan markers on either side simply disappear.
fn pair_ruby(tokens: &[Token]) -> Vec<(usize, usize, String)> {
    let mut stack: Vec<usize> = Vec::new();
    let mut pairs = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::RubyBegin(_) => stack.push(i),
            Token::RubyEnd => {
                if let Some(open) = stack.pop() {
                    if let Token::RubyBegin(ann) = &tokens[open] {
                        pairs.push((open, i, ann.clone()));
                    }
                }
            }
            _ => {}
        }
    }
    pairs
}

/// Pair tags innermost-first per name. A close with no pending open of the
/// same name is dropped; opens left on a stack at the end have no pair and
/// therefore no effect.
fn pair_tags(tokens: &[Token]) -> Vec<TagPair> {
    let mut stacks: std::collections::HashMap<TagName, Vec<usize>> =
        std::collections::HashMap::new();
    let mut pairs = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Open { name, .. } => stacks.entry(*name).or_default().push(i),
            Token::Close(name) => {
                if let Some(open) = stacks.entry(*name).or_default().pop() {
                    let color = match &tokens[open] {
                        Token::Open { color, .. } => *color,
                        _ => None,
                    };
                    pairs.push(TagPair {
                        open,
                        close: i,
                        name: *name,
                        color,
                    });
                }
            }
            _ => {}
        }
    }
    pairs
}

fn style_at(index: usize, pairs: &[TagPair]) -> SegStyle {
    let mut style = SegStyle::default();
    let mut color_open = 0;
    for pair in pairs {
        if pair.open < index && index < pair.close {
            match pair.name {
                TagName::Underline => style.underline = true,
                TagName::Bold => style.bold = true,
                TagName::Italic => style.italic = true,
                TagName::Unbreak => style.unbreak = true,
                // Innermost color wins when colors nest
                TagName::Color => {
                    if pair.color.is_some() && pair.open >= color_open {
                        style.color = pair.color;
                        color_open = pair.open;
                    }
                }
                TagName::Ignored => {}
            }
        }
    }
    style
}

fn ruby_at(index: usize, pairs: &[(usize, usize, String)]) -> Option<String> {
    pairs
        .iter()
        .find(|(open, close, _)| *open < index && index < *close)
        .map(|(_, _, ann)| ann.clone())
}

fn emit_segments(
    tokens: &[Token],
    tag_pairs: &[TagPair],
    ruby_pairs: &[(usize, usize, String)],
) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Text(text) => {
                let style = style_at(i, tag_pairs);
                let ruby = ruby_at(i, ruby_pairs);
                // Merge with the previous segment when nothing changed
                if let Some(last) = segments.last_mut() {
                    if !last.is_newline() && last.style == style && last.ruby == ruby {
                        last.text.push_str(text);
                        continue;
                    }
                }
                segments.push(Segment {
                    text: text.clone(),
                    style,
                    ruby,
                });
            }
            Token::Break => segments.push(Segment::newline()),
            _ => {}
        }
    }
    segments
}

/// Glossary terms: the covered text of each underline pair, entity-decoded
/// and trimmed. Breaks inside a span read as a space; ruby annotations are
/// excluded because they never appear as text tokens.
fn collect_terms(tokens: &[Token], tag_pairs: &[TagPair]) -> Vec<String> {
    let mut terms = Vec::new();
    for pair in tag_pairs {
        if pair.name != TagName::Underline {
            continue;
        }
        let mut term = String::new();
        for token in &tokens[pair.open + 1..pair.close] {
            match token {
                Token::Text(text) => term.push_str(text),
                Token::Break => term.push(' '),
                _ => {}
            }
        }
        let term = unescape_entities(&term);
        let term = term.trim();
        if !term.is_empty() {
            terms.push(term.to_string());
        }
    }
    terms
}

impl Markup {
    /// Readable text only: ruby annotations excluded, newlines kept.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Escaped-HTML rendering. Plain input comes out as its
    /// entity-escaped self with no markup added.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < self.segments.len() {
            let seg = &self.segments[i];
            if seg.is_newline() {
                out.push_str("<br>");
                i += 1;
                continue;
            }
            if let Some(ann) = seg.ruby.clone() {
                out.push_str("<ruby>");
                while i < self.segments.len()
                    && self.segments[i].ruby.as_deref() == Some(ann.as_str())
                {
                    push_styled(&mut out, &self.segments[i]);
                    i += 1;
                }
                out.push_str("<rt>");
                out.push_str(&escape_html(&ann));
                out.push_str("</rt></ruby>");
                continue;
            }
            push_styled(&mut out, seg);
            i += 1;
        }
        out
    }
}

fn push_styled(out: &mut String, seg: &Segment) {
    let mut closers: Vec<&str> = Vec::new();
    if let Some(c) = seg.style.color {
        out.push_str(&format!(
            "<span style=\"color:rgba({},{},{},{})\">",
            c.r, c.g, c.b, c.alpha
        ));
        closers.push("</span>");
    }
    if seg.style.unbreak {
        out.push_str("<span class=\"unbreak\">");
        closers.push("</span>");
    }
    if seg.style.underline {
        out.push_str("<u>");
        closers.push("</u>");
    }
    if seg.style.bold {
        out.push_str("<b>");
        closers.push("</b>");
    }
    if seg.style.italic {
        out.push_str("<i>");
        closers.push("</i>");
    }
    out.push_str(&escape_html(&seg.text));
    for closer in closers.iter().rev() {
        out.push_str(closer);
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_en(raw: &str) -> Markup {
        render(raw, "Trailblazer")
    }

    #[test]
    fn plain_text_renders_as_escaped_self() {
        let markup = render_en("1 + 1 < 3 & \"true\"");
        assert_eq!(markup.segments.len(), 1);
        assert_eq!(markup.segments[0].style, SegStyle::default());
        assert_eq!(markup.to_html(), "1 + 1 &lt; 3 &amp; &quot;true&quot;");
        assert!(markup.terms.is_empty());
    }

    #[test]
    fn unknown_tags_stay_literal() {
        let markup = render_en("<wavy>hi</wavy>");
        assert_eq!(markup.plain_text(), "<wavy>hi</wavy>");
        assert_eq!(markup.to_html(), "&lt;wavy&gt;hi&lt;/wavy&gt;");
    }

    #[test]
    fn ruby_keeps_base_and_annotation_apart() {
        let markup = render_en("{RUBY_B#Annotation}base{RUBY_E#}");
        assert_eq!(markup.segments.len(), 1);
        assert_eq!(markup.segments[0].text, "base");
        assert_eq!(markup.segments[0].ruby.as_deref(), Some("Annotation"));
        assert_eq!(markup.plain_text(), "base");
        assert_eq!(
            markup.to_html(),
            "<ruby>base<rt>Annotation</rt></ruby>"
        );
    }

    #[test]
    fn orphan_ruby_markers_keep_base_text() {
        assert_eq!(render_en("{RUBY_B#x}base").plain_text(), "base");
        assert_eq!(render_en("base{RUBY_E#}").plain_text(), "base");
    }

    #[test]
    fn nickname_is_substituted() {
        let markup = render("{NICKNAME}，欢迎回来", "开拓者");
        assert_eq!(markup.plain_text(), "开拓者，欢迎回来");
    }

    #[test]
    fn newline_spellings_normalize() {
        for raw in ["a\r\nb", "a\nb", "a\\nb"] {
            let markup = render_en(raw);
            assert_eq!(markup.plain_text(), "a\nb", "input {raw:?}");
            assert_eq!(markup.segments.len(), 3);
            assert!(markup.segments[1].is_newline());
        }
    }

    #[test]
    fn color_alpha_is_normalized() {
        let markup = render_en("<color=#FF000080>warning</color>");
        let color = markup.segments[0].style.color.unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert_eq!(color.alpha, 0.502);
        assert_eq!(
            markup.to_html(),
            "<span style=\"color:rgba(255,0,0,0.502)\">warning</span>"
        );
    }

    #[test]
    fn invalid_color_strips_the_tags() {
        let markup = render_en("<color=#XYZXYZ>text</color>");
        assert_eq!(markup.plain_text(), "text");
        assert_eq!(markup.segments[0].style, SegStyle::default());
    }

    #[test]
    fn size_and_align_strip_cleanly() {
        assert_eq!(render_en("<size=30>big</size>").to_html(), "big");
        assert_eq!(render_en("<align=\"center\">mid</align>").to_html(), "mid");
    }

    #[test]
    fn underline_yields_a_glossary_term() {
        let markup = render_en("hit by <u>Weakness Break</u> effect");
        assert_eq!(markup.terms, vec!["Weakness Break".to_string()]);
        assert!(markup.segments.iter().any(|s| s.style.underline));
        assert_eq!(
            markup.to_html(),
            "hit by <u>Weakness Break</u> effect"
        );
    }

    #[test]
    fn term_excludes_ruby_annotation() {
        let markup = render_en("<u>{RUBY_B#reading}kanji{RUBY_E#}</u>");
        assert_eq!(markup.terms, vec!["kanji".to_string()]);
    }

    #[test]
    fn unmatched_open_is_stripped() {
        let markup = render_en("<u>hello");
        assert_eq!(markup.plain_text(), "hello");
        assert!(!markup.segments[0].style.underline);
        assert!(markup.terms.is_empty());
    }

    #[test]
    fn unmatched_close_is_dropped() {
        let markup = render_en("hello</u>");
        assert_eq!(markup.plain_text(), "hello");
        assert!(markup.terms.is_empty());
    }

    #[test]
    fn overlapping_pairs_union_their_styles() {
        let markup = render_en("<b>one<u>two</b>three</u>");
        assert_eq!(markup.plain_text(), "onetwothree");
        let styles: Vec<(bool, bool)> = markup
            .segments
            .iter()
            .map(|s| (s.style.bold, s.style.underline))
            .collect();
        assert_eq!(styles, vec![(true, false), (true, true), (false, true)]);
        assert_eq!(markup.terms, vec!["twothree".to_string()]);
    }

    #[test]
    fn nested_colors_use_the_innermost() {
        let markup = render_en("<color=#FF0000>a<color=#00FF00>b</color>c</color>");
        let colors: Vec<(u8, u8, u8)> = markup
            .segments
            .iter()
            .map(|s| {
                let c = s.style.color.unwrap();
                (c.r, c.g, c.b)
            })
            .collect();
        assert_eq!(colors, vec![(255, 0, 0), (0, 255, 0), (255, 0, 0)]);
    }

    #[test]
    fn unbreak_marks_the_run() {
        let markup = render_en("<unbreak>100%</unbreak>");
        assert!(markup.segments[0].style.unbreak);
        assert_eq!(
            markup.to_html(),
            "<span class=\"unbreak\">100%</span>"
        );
    }

    #[test]
    fn multiple_terms_in_source_order() {
        let markup = render_en("<u>first</u> then <u>second</u>");
        assert_eq!(
            markup.terms,
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn term_entities_are_decoded() {
        let markup = render_en("<u>Nine&amp;Ten</u>");
        assert_eq!(markup.terms, vec!["Nine&Ten".to_string()]);
    }
}
