//! 游戏富文本到终端样式的转换
//!
//! `hsrdb_core::markup` 把原始字符串解析为带样式的片段；这里把片段
//! 映射为 ratatui 的 `Line`/`Span`。注音以 `基字(注音)` 的形式内联，
//! 半透明颜色用 DIM 近似。

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use hsrdb_core::markup::{Markup, Segment};

/// 把一段富文本渲染为多行 `Line`
pub fn to_lines(markup: &Markup) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in &markup.segments {
        if segment.is_newline() {
            lines.push(Line::from(std::mem::take(&mut current)));
            continue;
        }
        current.push(to_span(segment));
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    if lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}

/// 渲染原始字符串（替换 {NICKNAME} 后）为多行
pub fn render_lines(raw: &str, nickname: &str) -> Vec<Line<'static>> {
    to_lines(&hsrdb_core::markup::render(raw, nickname))
}

fn to_span(segment: &Segment) -> Span<'static> {
    let mut style = Style::default();

    if let Some(color) = segment.style.color {
        style = style.fg(Color::Rgb(color.r, color.g, color.b));
        // 终端没有 alpha 通道，半透明颜色降级为 DIM
        if color.alpha < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }
    }
    if segment.style.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if segment.style.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if segment.style.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    // 注音内联显示
    let text = match &segment.ruby {
        Some(annotation) => format!("{}({})", segment.text, annotation),
        None => segment.text.clone(),
    };

    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_segments_split_lines() {
        let lines = render_lines("第一行\n第二行", "开拓者");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "第一行");
        assert_eq!(lines[1].spans[0].content, "第二行");
    }

    #[test]
    fn underline_span_is_styled() {
        let lines = render_lines("<u>弱点击破</u>", "开拓者");
        let span = &lines[0].spans[0];
        assert!(span.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn ruby_renders_inline() {
        let lines = render_lines("{RUBY_B#annotation}base{RUBY_E#}", "开拓者");
        assert_eq!(lines[0].spans[0].content, "base(annotation)");
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        let lines = render_lines("", "开拓者");
        assert_eq!(lines.len(), 1);
    }
}
