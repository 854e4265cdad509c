use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Size, Theme};

pub const LEGEND_HEIGHT: f32 = 22.0;

const SWATCH: f32 = 10.0;
const CHAR_WIDTH: f32 = 6.5;

/// Draws a centred row of colour swatches and labels starting at `top`.
pub fn legend(frame: &mut Frame, theme: &Theme, entries: &[(&str, Color)], top: f32) {
    if entries.is_empty() {
        return;
    }

    let palette = theme.extended_palette();
    let widths: Vec<f32> = entries
        .iter()
        .map(|(label, _)| SWATCH + 6.0 + label.len() as f32 * CHAR_WIDTH + 16.0)
        .collect();
    let total: f32 = widths.iter().sum();
    let mut x = ((frame.width() - total) / 2.0).max(4.0);

    for ((label, color), width) in entries.iter().zip(widths) {
        let swatch = Path::rectangle(
            Point::new(x, top + (LEGEND_HEIGHT - SWATCH) / 2.0),
            Size::new(SWATCH, SWATCH),
        );
        frame.fill(&swatch, *color);
        frame.fill_text(Text {
            content: (*label).to_string(),
            position: Point::new(x + SWATCH + 6.0, top + LEGEND_HEIGHT / 2.0),
            color: palette.background.base.text,
            size: 11.0.into(),
            align_y: iced::alignment::Vertical::Center.into(),
            ..Text::default()
        });
        x += width;
    }
}

/// Draws a boxed tooltip near `anchor`, flipped to stay inside `area`.
pub fn tooltip(frame: &mut Frame, theme: &Theme, anchor: Point, area: Rectangle, label: String) {
    let palette = theme.extended_palette();
    let padding = 6.0;
    let width = label.len() as f32 * 7.0 + padding * 2.0;
    let height = 20.0;

    let mut x = anchor.x + 10.0;
    let mut y = anchor.y - height - 10.0;
    if x + width > area.x + area.width {
        x = anchor.x - width - 10.0;
    }
    if y < area.y {
        y = anchor.y + 10.0;
    }

    let rect = Path::rectangle(Point::new(x, y), Size::new(width, height));
    frame.fill(&rect, palette.background.strong.color);
    frame.stroke(
        &rect,
        Stroke::default()
            .with_width(1.0)
            .with_color(palette.background.weak.color),
    );
    frame.fill_text(Text {
        content: label,
        position: Point::new(x + padding, y + 4.0),
        color: palette.background.strong.text,
        size: 12.0.into(),
        ..Text::default()
    });
}
