use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Block, Widget},
};

/// A horizontal bar with sub-cell precision and a centered label.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeekGauge<'a> {
    block: Option<Block<'a>>,
    ratio: f64,
    label: Option<Span<'a>>,
    style: Style,
    filled_style: Style,
    empty_style: Style,
}

impl<'a> SeekGauge<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Out of range and NaN ratios are clamped into `0.0..=1.0`.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }

    pub fn label<T>(mut self, label: T) -> Self
    where
        T: Into<Span<'a>>,
    {
        self.label = Some(label.into());
        self
    }

    pub fn style<S: Into<Style>>(mut self, style: S) -> Self {
        self.style = style.into();
        self
    }

    pub fn filled_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.filled_style = style.into();
        self
    }

    pub fn empty_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.empty_style = style.into();
        self
    }
}

fn partial_block(frac: f64) -> &'static str {
    match (frac * 8.0).round() as u16 {
        0 => " ",
        1 => symbols::block::ONE_EIGHTH,
        2 => symbols::block::ONE_QUARTER,
        3 => symbols::block::THREE_EIGHTHS,
        4 => symbols::block::HALF,
        5 => symbols::block::FIVE_EIGHTHS,
        6 => symbols::block::THREE_QUARTERS,
        7 => symbols::block::SEVEN_EIGHTHS,
        _ => symbols::block::FULL,
    }
}

impl Widget for SeekGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        if let Some(ref block) = self.block {
            block.render(area, buf);
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        if inner.is_empty() {
            return;
        }

        self.render_bar(inner, buf);
    }
}

impl SeekGauge<'_> {
    fn render_bar(&self, area: Rect, buf: &mut Buffer) {
        let filled = area.width as f64 * self.ratio;

        let label_width = self
            .label
            .as_ref()
            .map_or(0, |label| (label.width() as u16).min(area.width));
        let label_col = area.left() + (area.width - label_width) / 2;
        let label_row = area.top() + area.height / 2;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let pos = (x - area.left()) as f64;

                let (mut symbol, mut style) = if pos + 1.0 <= filled {
                    (symbols::block::FULL, self.filled_style)
                } else if pos < filled {
                    (partial_block(filled - pos), self.filled_style)
                } else {
                    (" ", self.empty_style)
                };

                // keep the label readable on top of the bar
                if y == label_row && x >= label_col && x < label_col + label_width {
                    symbol = " ";
                    style = style.bg(style.fg.unwrap_or_default());
                }

                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_fg(style.fg.unwrap_or_default())
                    .set_bg(style.bg.unwrap_or_default());
            }
        }

        if let Some(label) = self.label.as_ref() {
            buf.set_span(label_col, label_row, label, label_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn clamps_ratio() {
        assert_eq!(SeekGauge::default().ratio(1.5).ratio, 1.0);
        assert_eq!(SeekGauge::default().ratio(-0.2).ratio, 0.0);
        assert_eq!(SeekGauge::default().ratio(f64::NAN).ratio, 0.0);
    }

    #[test]
    fn fills_proportionally() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        SeekGauge::default()
            .ratio(0.5)
            .filled_style(Style::new().fg(Color::White).bg(Color::Black))
            .render(area, &mut buf);

        assert_eq!(buf[(4, 0)].symbol(), symbols::block::FULL);
        assert_eq!(buf[(5, 0)].symbol(), " ");
    }
}
