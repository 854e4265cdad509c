use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::model::{ChartConfig, ChartDataset, InteractionConfig, InteractionState};
use super::overlay::{self, LEGEND_HEIGHT};
use crate::message::Message;

/// Grouped bar chart: one group per label, one bar per series.
pub struct BarChart {
    dataset: ChartDataset,
    config: ChartConfig,
    interaction: InteractionConfig,
}

struct Layout {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    max_value: f32,
    group_width: f32,
    pan_x: f32,
}

impl Layout {
    fn bar_width(&self, series_count: usize) -> f32 {
        self.group_width * 0.8 / series_count.max(1) as f32
    }

    fn group_x(&self, index: usize) -> f32 {
        self.left + index as f32 * self.group_width + self.pan_x
    }

    fn bar(&self, group: usize, series: usize, series_count: usize, value: f32) -> Rectangle {
        let width = self.bar_width(series_count);
        let x = self.group_x(group) + self.group_width * 0.1 + series as f32 * width;
        let height = (value / self.max_value).clamp(0.0, 1.0) * (self.bottom - self.top);
        Rectangle {
            x,
            y: self.bottom - height,
            width: width * 0.9,
            height,
        }
    }
}

impl BarChart {
    pub fn new(dataset: ChartDataset) -> Self {
        Self {
            dataset,
            config: ChartConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    fn layout(&self, bounds: Rectangle, state: &InteractionState) -> Option<Layout> {
        let max_value = self.dataset.max_value()?.max(1.0) * 1.1;
        let padding = self.config.padding;
        let legend = if self.config.legend { LEGEND_HEIGHT } else { 0.0 };

        if bounds.width <= padding * 2.0 || bounds.height <= padding * 2.0 + legend {
            return None;
        }

        let left = padding + 8.0;
        let right = bounds.width - padding / 2.0;
        let groups = self.dataset.labels.len().max(1) as f32;

        Some(Layout {
            left,
            top: padding / 2.0 + legend,
            right,
            bottom: bounds.height - padding,
            max_value,
            group_width: (right - left) / groups * state.zoom(),
            pan_x: state.pan.x,
        })
    }

    fn hovered(&self, layout: &Layout, cursor: Point) -> Option<String> {
        let count = self.dataset.series.len();
        for (series_index, series) in self.dataset.series.iter().enumerate() {
            for (group, value) in series.values.iter().enumerate() {
                let Some(value) = value else {
                    continue;
                };
                if layout.bar(group, series_index, count, *value).contains(cursor) {
                    let label = self
                        .dataset
                        .labels
                        .get(group)
                        .map(String::as_str)
                        .unwrap_or_default();
                    return Some(format!("{label} · {}: {value}", series.label));
                }
            }
        }
        None
    }
}

impl canvas::Program<Message> for BarChart {
    type State = InteractionState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        state.handle(&self.interaction, event, bounds, cursor)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(layout) = self.layout(bounds, state) else {
            return Vec::new();
        };

        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let grid = Stroke::default()
            .with_width(1.0)
            .with_color(palette.background.weak.color);

        if self.config.legend {
            let entries: Vec<(&str, Color)> = self
                .dataset
                .series
                .iter()
                .map(|series| (series.label.as_str(), series.fill))
                .collect();
            overlay::legend(&mut frame, theme, &entries, layout.top - LEGEND_HEIGHT - 4.0);
        }

        let grid_lines = self.config.grid_lines.max(1);
        for i in 0..=grid_lines {
            let t = i as f32 / grid_lines as f32;
            let y = layout.bottom - t * (layout.bottom - layout.top);
            frame.stroke(
                &Path::line(Point::new(layout.left, y), Point::new(layout.right, y)),
                grid,
            );
            frame.fill_text(Text {
                content: format!("{:.0}", t * layout.max_value),
                position: Point::new(layout.left - 6.0, y),
                color: palette.background.base.text,
                size: 11.0.into(),
                align_x: iced::alignment::Horizontal::Right.into(),
                align_y: iced::alignment::Vertical::Center.into(),
                ..Text::default()
            });
        }

        let count = self.dataset.series.len();
        for (series_index, series) in self.dataset.series.iter().enumerate() {
            for (group, value) in series.values.iter().enumerate() {
                // absent weeks get no bar at all
                let Some(value) = value else {
                    continue;
                };
                let rect = layout.bar(group, series_index, count, *value);
                if rect.x + rect.width < layout.left || rect.x > layout.right {
                    continue;
                }
                let path = Path::rectangle(rect.position(), Size::new(rect.width, rect.height));
                frame.fill(&path, series.fill);
                frame.stroke(
                    &path,
                    Stroke::default().with_width(1.0).with_color(series.border),
                );
            }
        }

        for (group, label) in self.dataset.labels.iter().enumerate() {
            let x = layout.group_x(group) + layout.group_width / 2.0;
            if x < layout.left || x > layout.right {
                continue;
            }
            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(x, layout.bottom + 8.0),
                color: palette.background.base.text,
                size: 11.0.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }

        let mut geometries = vec![frame.into_geometry()];

        if self.interaction.enable_hover {
            if let Some(cursor_pos) = cursor.position_in(bounds) {
                if let Some(label) = self.hovered(&layout, cursor_pos) {
                    let mut hover = Frame::new(renderer, bounds.size());
                    let area = Rectangle::new(Point::ORIGIN, bounds.size());
                    overlay::tooltip(&mut hover, theme, cursor_pos, area, label);
                    geometries.push(hover.into_geometry());
                }
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
