//! Custom widgets for the game UI

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    buffer::Buffer,
};

/// A progress bar for clues found out of clues hidden
pub struct ProgressBar {
    value: usize,
    max: usize,
    label: String,
    color: Color,
}

impl ProgressBar {
    pub fn new(label: &str, value: usize, max: usize) -> Self {
        Self {
            value,
            max,
            label: label.to_string(),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Filled cells for a bar `width` cells wide
    fn filled(&self, width: u16) -> u16 {
        if self.max == 0 {
            return 0;
        }
        let value = self.value.min(self.max);
        (value * usize::from(width) / self.max) as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.max > 0 && self.value >= self.max {
            Color::Green
        } else {
            self.color
        };

        let label = format!("{}: {}/{}", self.label, self.value, self.max);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        // Render bar if there's room
        if area.height > 1 {
            let inner = area.width - 2;
            let filled = self.filled(inner);
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// ASCII art box for the verdict
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        let title_width = self.title.chars().count() as u16 + 2;
        let title_x = area.x + area.width.saturating_sub(title_width) / 2;
        buf.set_string(title_x, area.y, format!(" {} ", self.title), style);

        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_string(area.x + 2, y, line, Style::default().fg(Color::White));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fill_is_proportional() {
        assert_eq!(ProgressBar::new("Clues", 3, 6).filled(10), 5);
        assert_eq!(ProgressBar::new("Clues", 9, 6).filled(10), 10);
        assert_eq!(ProgressBar::new("Clues", 0, 0).filled(10), 0);
    }

    #[test]
    fn dramatic_box_draws_corners_and_title() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        DramaticBox::new("CASE")
            .content(vec!["Sr. Verde".to_string()])
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "╔");
        assert_eq!(buf[(19, 3)].symbol(), "╝");
        assert_eq!(buf[(2, 1)].symbol(), "S");
    }
}
