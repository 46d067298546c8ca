use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::core::time::format_hour;

/// Rows taken by the topbar: hour labels, then ticks.
pub const TIMELINE_HEIGHT: u16 = 2;

/// Quarter-hour ticks per hour.
const TICKS_PER_HOUR: u16 = 4;

/// Props handed to the topbar, default or override.
///
/// Merges the time bundle (`offset_start_hours_range`,
/// `number_of_hours_in_day`, `is_base_time_format`, `hour_width`) with the
/// layout bundle (`sidebar_width`, `is_sidebar`, `is_rtl`, `day_width`,
/// `number_of_hours_in_day`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineProps {
    pub offset_start_hours_range: u16,
    pub number_of_hours_in_day: u16,
    pub is_base_time_format: bool,
    pub hour_width: u16,
    pub sidebar_width: u16,
    pub is_sidebar: bool,
    pub is_rtl: bool,
    pub day_width: u16,
}

/// Default topbar: one labelled box per hour across the whole day canvas.
///
/// Rendered into the topbar canvas (`day_width` wide), which the layout
/// scrolls horizontally in step with the content.
pub struct Timeline {
    pub props: TimelineProps,
}

impl Timeline {
    pub fn new(props: TimelineProps) -> Self {
        Self { props }
    }

    /// Canvas column where the box for hour index `index` starts.
    pub fn hour_x(&self, index: u16) -> u16 {
        let p = &self.props;
        let x = index.saturating_mul(p.hour_width);
        if p.is_rtl {
            p.day_width.saturating_sub(x).saturating_sub(p.hour_width)
        } else {
            x
        }
    }
}

impl Widget for Timeline {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(*buf.area());
        if area.is_empty() {
            return;
        }
        let p = self.props;
        let label_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let tick_style = Style::default().fg(Color::DarkGray);
        let tick_row = area.y + area.height.saturating_sub(1);
        let step = (p.hour_width / TICKS_PER_HOUR).max(1);

        for index in 0..p.number_of_hours_in_day {
            let box_x = self.hour_x(index);
            let hour = p.offset_start_hours_range + index;

            // Hour boundary sits on the box's leading edge
            let edge = if p.is_rtl {
                box_x.saturating_add(p.hour_width).saturating_sub(1)
            } else {
                box_x
            };
            let edge_x = area.x.saturating_add(edge);
            // The sidebar border already marks the start of the day
            let is_day_start = index == 0 && p.is_sidebar;

            if area.height > 1 {
                let label = format_hour(hour, p.is_base_time_format);
                let label_x = if p.is_rtl {
                    box_x
                        .saturating_add(p.hour_width)
                        .saturating_sub(1)
                        .saturating_sub(label.len() as u16)
                } else {
                    box_x.saturating_add(1)
                };
                let label_x = area.x.saturating_add(label_x);
                if label_x < area.right() {
                    let max_width = usize::from(
                        (area.right() - label_x).min(p.hour_width.saturating_sub(1)),
                    );
                    buf.set_stringn(label_x, area.y, &label, max_width, label_style);
                }
            }

            for tick in 1..TICKS_PER_HOUR {
                let offset = tick * step;
                if offset >= p.hour_width {
                    break;
                }
                let x = if p.is_rtl {
                    edge_x.saturating_sub(offset)
                } else {
                    edge_x.saturating_add(offset)
                };
                if x >= area.x && x < area.right() {
                    buf.set_string(x, tick_row, "·", tick_style);
                }
            }

            if !is_day_start && edge_x < area.right() {
                buf.set_string(edge_x, tick_row, "│", tick_style);
                if area.height > 1 {
                    buf.set_string(edge_x, area.y, "│", tick_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> TimelineProps {
        TimelineProps {
            offset_start_hours_range: 0,
            number_of_hours_in_day: 4,
            is_base_time_format: false,
            hour_width: 12,
            sidebar_width: 10,
            is_sidebar: true,
            is_rtl: false,
            day_width: 48,
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area().width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    /// Column (not byte offset) where `needle` starts.
    fn column_of(row: &str, needle: &str) -> Option<usize> {
        row.find(needle).map(|byte| row[..byte].chars().count())
    }

    fn render(props: TimelineProps) -> Buffer {
        let area = Rect::new(0, 0, props.day_width, TIMELINE_HEIGHT);
        let mut buf = Buffer::empty(area);
        Timeline::new(props).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_labels_each_hour() {
        let buf = render(props());
        let labels = row(&buf, 0);
        assert!(labels.starts_with(" 00:00"));
        assert_eq!(column_of(&labels, "01:00"), Some(13));
        assert_eq!(column_of(&labels, "03:00"), Some(37));
    }

    #[test]
    fn test_labels_start_at_offset_and_wrap() {
        let buf = render(TimelineProps {
            offset_start_hours_range: 22,
            ..props()
        });
        let labels = row(&buf, 0);
        assert!(labels.contains("22:00"));
        assert!(labels.contains("23:00"));
        assert!(labels.contains("00:00"));
        assert!(labels.contains("01:00"));
    }

    #[test]
    fn test_twelve_hour_labels() {
        let buf = render(TimelineProps {
            offset_start_hours_range: 11,
            is_base_time_format: true,
            ..props()
        });
        let labels = row(&buf, 0);
        assert!(labels.contains("11 AM"));
        assert!(labels.contains("12 PM"));
        assert!(labels.contains("1 PM"));
    }

    #[test]
    fn test_ticks_mark_hours_and_quarters() {
        let buf = render(props());
        let ticks = row(&buf, 1);
        let chars: Vec<char> = ticks.chars().collect();
        // First boundary is drawn by the sidebar
        assert_eq!(chars[0], ' ');
        assert_eq!(chars[3], '·');
        assert_eq!(chars[12], '│');
        assert_eq!(chars[15], '·');

        let buf = render(TimelineProps {
            is_sidebar: false,
            ..props()
        });
        assert!(row(&buf, 1).starts_with('│'));
    }

    #[test]
    fn test_rtl_mirrors_hours() {
        let timeline = Timeline::new(TimelineProps {
            is_rtl: true,
            ..props()
        });
        assert_eq!(timeline.hour_x(0), 36);
        assert_eq!(timeline.hour_x(3), 0);

        let buf = render(TimelineProps {
            is_rtl: true,
            ..props()
        });
        let labels = row(&buf, 0);
        assert_eq!(column_of(&labels, "03:00"), Some(6));
        assert_eq!(column_of(&labels, "00:00"), Some(42));
    }
}
