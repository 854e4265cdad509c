use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use super::model::{ChartConfig, ChartDataset, InteractionConfig, InteractionState};
use super::overlay::{self, LEGEND_HEIGHT};
use crate::message::Message;

/// Category line chart. Absent values break the line instead of dropping
/// to zero.
pub struct LineChart {
    dataset: ChartDataset,
    config: ChartConfig,
    interaction: InteractionConfig,
}

struct Plot {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    y_min: f32,
    y_max: f32,
    zoom: f32,
    pan_x: f32,
    count: usize,
}

impl Plot {
    fn x(&self, index: usize) -> f32 {
        let slot = (self.right - self.left) / self.count as f32;
        self.left + (index as f32 + 0.5) * slot * self.zoom + self.pan_x
    }

    fn y(&self, value: f32) -> f32 {
        let span = (self.y_max - self.y_min).max(f32::EPSILON);
        self.bottom - ((value - self.y_min) / span) * (self.bottom - self.top)
    }

    fn area(&self) -> Rectangle {
        Rectangle {
            x: self.left,
            y: self.top,
            width: self.right - self.left,
            height: self.bottom - self.top,
        }
    }
}

impl LineChart {
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

    fn value_range(&self) -> Option<(f32, f32)> {
        let max = self.dataset.max_value()?;
        let min = self.dataset.min_value()?.min(0.0);
        let max = if max <= min { min + 1.0 } else { max * 1.1 };
        Some((min, max))
    }

    fn plot(&self, bounds: Rectangle, state: &InteractionState) -> Option<Plot> {
        let (y_min, y_max) = self.value_range()?;
        let padding = self.config.padding;
        let legend = if self.config.legend { LEGEND_HEIGHT } else { 0.0 };

        if bounds.width <= padding * 2.0 || bounds.height <= padding * 2.0 + legend {
            return None;
        }

        Some(Plot {
            left: padding + 8.0,
            top: padding / 2.0 + legend,
            right: bounds.width - padding / 2.0,
            bottom: bounds.height - padding,
            y_min,
            y_max,
            zoom: state.zoom(),
            pan_x: state.pan.x,
            count: self.dataset.labels.len().max(1),
        })
    }

    fn draw_axes(&self, frame: &mut Frame, theme: &Theme, plot: &Plot) {
        let palette = theme.extended_palette();
        let grid = Stroke::default()
            .with_width(1.0)
            .with_color(palette.background.weak.color);

        let grid_lines = self.config.grid_lines.max(1);
        for i in 0..=grid_lines {
            let t = i as f32 / grid_lines as f32;
            let value = plot.y_min + t * (plot.y_max - plot.y_min);
            let y = plot.y(value);
            frame.stroke(
                &Path::line(Point::new(plot.left, y), Point::new(plot.right, y)),
                grid,
            );
            frame.fill_text(Text {
                content: format!("{value:.1}"),
                position: Point::new(plot.left - 6.0, y),
                color: palette.background.base.text,
                size: 11.0.into(),
                align_x: iced::alignment::Horizontal::Right.into(),
                align_y: iced::alignment::Vertical::Center.into(),
                ..Text::default()
            });
        }

        frame.stroke(
            &Path::line(
                Point::new(plot.left, plot.bottom),
                Point::new(plot.left, plot.top),
            ),
            grid,
        );

        // thin out labels once they would overlap
        let slot = (plot.right - plot.left) * plot.zoom / plot.count as f32;
        let step = (110.0 / slot).ceil().max(1.0) as usize;
        for (index, label) in self.dataset.labels.iter().enumerate().step_by(step) {
            let x = plot.x(index);
            if x < plot.left || x > plot.right {
                continue;
            }
            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(x, plot.bottom + 8.0),
                color: palette.background.base.text,
                size: 11.0.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }
    }

    fn nearest(&self, plot: &Plot, cursor: Point) -> Option<(Point, String, Color)> {
        let mut nearest: Option<(Point, String, Color, f32)> = None;

        for series in &self.dataset.series {
            for (index, value) in series.values.iter().enumerate() {
                let Some(value) = value else {
                    continue;
                };
                let point = Point::new(plot.x(index), plot.y(*value));
                let distance = point.distance(cursor);
                if nearest.as_ref().map_or(true, |(.., best)| distance < *best) {
                    let label = self
                        .dataset
                        .labels
                        .get(index)
                        .map(String::as_str)
                        .unwrap_or_default();
                    nearest = Some((
                        point,
                        format!("{label} · {}: {}", series.label, series.value_text(*value)),
                        series.border,
                        distance,
                    ));
                }
            }
        }

        nearest.map(|(point, label, color, _)| (point, label, color))
    }
}

impl canvas::Program<Message> for LineChart {
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
        let Some(plot) = self.plot(bounds, state) else {
            return Vec::new();
        };

        let mut frame = Frame::new(renderer, bounds.size());

        if self.config.legend {
            let entries: Vec<(&str, Color)> = self
                .dataset
                .series
                .iter()
                .map(|series| (series.label.as_str(), series.border))
                .collect();
            overlay::legend(&mut frame, theme, &entries, plot.top - LEGEND_HEIGHT - 4.0);
        }

        self.draw_axes(&mut frame, theme, &plot);

        for series in &self.dataset.series {
            let path = Path::new(|builder| {
                let mut pen_down = false;
                for (index, value) in series.values.iter().enumerate() {
                    match value {
                        Some(value) => {
                            let point = Point::new(plot.x(index), plot.y(*value));
                            if pen_down {
                                builder.line_to(point);
                            } else {
                                builder.move_to(point);
                                pen_down = true;
                            }
                        }
                        None => pen_down = false,
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default().with_width(2.0).with_color(series.border),
            );

            for (index, value) in series.values.iter().enumerate() {
                if let Some(value) = value {
                    let marker = Path::circle(Point::new(plot.x(index), plot.y(*value)), 3.0);
                    frame.fill(&marker, series.fill);
                    frame.stroke(
                        &marker,
                        Stroke::default().with_width(1.5).with_color(series.border),
                    );
                }
            }
        }

        let mut geometries = vec![frame.into_geometry()];

        if !self.interaction.enable_hover {
            return geometries;
        }

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if plot.area().contains(cursor_pos) {
                if let Some((point, label, color)) = self.nearest(&plot, cursor_pos) {
                    let mut hover = Frame::new(renderer, bounds.size());
                    let guide = Stroke::default()
                        .with_width(1.0)
                        .with_color(theme.extended_palette().background.weak.color);
                    hover.stroke(
                        &Path::line(
                            Point::new(point.x, plot.top),
                            Point::new(point.x, plot.bottom),
                        ),
                        guide,
                    );
                    hover.fill(&Path::circle(point, 4.5), color);
                    overlay::tooltip(&mut hover, theme, point, plot.area(), label);
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
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
