use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::time::format_range;
use crate::core::types::ProgramOptions;

/// Columns taken by the separator border on the leading edge.
const BORDER_WIDTH: u16 = 1;

/// Default program block.
///
/// # Design
///
/// `Program` is a **transient widget**: the layout creates one per visible
/// program per frame and renders it into the content canvas at the program's
/// (already normalized) position. It holds no state.
///
/// # Content
///
/// - Title, wrapped over as many rows as the block allows
/// - Time range on the last row, only when the block is wide enough
///   (`is_min_width`) and at least two rows tall
///
/// Live programs are highlighted. In RTL the separator moves to the right
/// edge and text is right-aligned.
#[derive(Clone, Copy)]
pub struct Program<'a> {
    pub program: ProgramOptions<'a>,
    pub is_rtl: bool,
    pub is_base_time_format: bool,
}

impl<'a> Program<'a> {
    pub fn new(program: ProgramOptions<'a>, is_rtl: bool, is_base_time_format: bool) -> Self {
        Self {
            program,
            is_rtl,
            is_base_time_format,
        }
    }

    /// Text rows for a block of the given size (border excluded).
    ///
    /// Title lines come first; the time range, when shown, is last.
    pub fn content_lines(&self, width: u16, height: u16) -> Vec<String> {
        let inner_width = width.saturating_sub(BORDER_WIDTH);
        if inner_width == 0 || height == 0 {
            return Vec::new();
        }

        let data = self.program.data;
        let show_time = self.program.is_min_width && height >= 2;
        let title_rows = usize::from(if show_time { height - 1 } else { height });

        let options = textwrap::Options::new(usize::from(inner_width))
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let wrapped = textwrap::wrap(data.title.trim(), options);

        let mut lines: Vec<String> = wrapped
            .iter()
            .take(title_rows)
            .map(|line| line.to_string())
            .collect();
        if wrapped.len() > title_rows
            && let Some(last) = lines.last_mut()
        {
            *last = ellipsize(last, inner_width);
        }

        if show_time {
            lines.push(format_range(data.since, data.till, self.is_base_time_format));
        }
        lines
    }
}

/// Shorten `text` so it ends with `…` within `width` columns.
fn ellipsize(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate = format!("{out}{ch}");
        if candidate.width() + 1 > width {
            break;
        }
        out = candidate;
    }
    out.push('…');
    out
}

impl Widget for Program<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(*buf.area());
        if area.is_empty() {
            return;
        }

        let style = if self.program.is_live {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        let (borders, alignment) = if self.is_rtl {
            (Borders::RIGHT, Alignment::Right)
        } else {
            (Borders::LEFT, Alignment::Left)
        };
        let block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::Black));

        let content = self.content_lines(area.width, area.height);
        let time_row = self.program.is_min_width && area.height >= 2;
        let last = content.len().saturating_sub(1);
        let lines: Vec<Line> = content
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                if time_row && i == last {
                    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::DIM)))
                } else {
                    Line::from(Span::styled(
                        text,
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                }
            })
            .collect();

        Paragraph::new(lines)
            .block(block)
            .style(style)
            .alignment(alignment)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Position, Program as ProgramData};
    use crate::test_support::{at, program};

    fn options(data: &ProgramData, width: u16, is_min_width: bool) -> ProgramOptions<'_> {
        ProgramOptions {
            data,
            position: Position {
                top: 0,
                left: 0,
                width,
                height: 3,
                edge_end: width,
            },
            is_live: false,
            is_min_width,
        }
    }

    fn render_text(widget: Program<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_content_lines_title_and_time() {
        let data = program("p", "a", "News", at(9, 0), at(10, 30));
        let widget = Program::new(options(&data, 20, true), false, false);
        assert_eq!(widget.content_lines(20, 3), vec!["News", "09:00 - 10:30"]);
    }

    #[test]
    fn test_content_lines_narrow_block_hides_time() {
        let data = program("p", "a", "News", at(9, 0), at(10, 30));
        let widget = Program::new(options(&data, 8, false), false, false);
        assert_eq!(widget.content_lines(8, 3), vec!["News"]);
    }

    #[test]
    fn test_content_lines_wraps_and_ellipsizes_title() {
        let data = program("p", "a", "The Very Long Goodbye Again", at(9, 0), at(10, 0));
        let widget = Program::new(options(&data, 9, false), false, false);
        let lines = widget.content_lines(9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "The Very");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 8);
    }

    #[test]
    fn test_content_lines_degenerate_width() {
        let data = program("p", "a", "News", at(9, 0), at(10, 0));
        let widget = Program::new(options(&data, 1, false), false, false);
        assert!(widget.content_lines(1, 3).is_empty());
    }

    #[test]
    fn test_twelve_hour_time_range() {
        let data = program("p", "a", "Film", at(13, 0), at(14, 30));
        let widget = Program::new(options(&data, 24, true), false, true);
        let text = render_text(widget, 24, 3);
        assert!(text.contains("1:00 PM - 2:30 PM"));
    }

    #[test]
    fn test_render_draws_leading_border() {
        let data = program("p", "a", "News", at(9, 0), at(10, 0));
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        Program::new(options(&data, 12, false), false, false).render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "│");

        let mut buf = Buffer::empty(area);
        Program::new(options(&data, 12, false), true, false).render(area, &mut buf);
        assert_eq!(buf.cell((11, 0)).unwrap().symbol(), "│");
    }
}
