use std::f32::consts::{FRAC_PI_2, TAU};

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use super::model::{ChartConfig, ChartDataset, InteractionConfig, InteractionState};
use super::overlay::{self, LEGEND_HEIGHT};
use crate::message::Message;

const RINGS: usize = 5;

/// Radar chart: each label is an axis, each series a closed polygon.
pub struct RadarChart {
    dataset: ChartDataset,
    max_value: Option<f32>,
    config: ChartConfig,
    interaction: InteractionConfig,
}

impl RadarChart {
    pub fn new(dataset: ChartDataset) -> Self {
        Self {
            dataset,
            max_value: None,
            config: ChartConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }

    pub fn with_max_value(mut self, max_value: f32) -> Self {
        self.max_value = Some(max_value);
        self
    }

    fn max_value(&self) -> f32 {
        self.max_value
            .or_else(|| self.dataset.max_value())
            .unwrap_or(1.0)
            .max(f32::EPSILON)
    }

    fn geometry(&self, bounds: Rectangle, state: &InteractionState) -> (Point, f32) {
        let legend = if self.config.legend { LEGEND_HEIGHT } else { 0.0 };
        let center = Point::new(bounds.width / 2.0, (bounds.height + legend) / 2.0) + state.pan;
        let radius = ((bounds.width.min(bounds.height - legend)) * 0.36) * state.zoom();
        (center, radius)
    }

    fn axis_point(&self, center: Point, radius: f32, axis: usize, magnitude: f32) -> Point {
        let step = TAU / self.dataset.labels.len() as f32;
        let angle = -FRAC_PI_2 + axis as f32 * step;
        Point::new(
            center.x + radius * magnitude * angle.cos(),
            center.y + radius * magnitude * angle.sin(),
        )
    }
}

impl canvas::Program<Message> for RadarChart {
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
        if self.dataset.labels.len() < 3 || self.dataset.is_empty() {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let grid = Stroke::default()
            .with_width(1.0)
            .with_color(palette.background.weak.color);
        let (center, radius) = self.geometry(bounds, state);
        let max_value = self.max_value();
        let axis_count = self.dataset.labels.len();

        if self.config.legend {
            let entries: Vec<(&str, Color)> = self
                .dataset
                .series
                .iter()
                .map(|series| (series.label.as_str(), series.border))
                .collect();
            overlay::legend(&mut frame, theme, &entries, 4.0);
        }

        for ring in 1..=RINGS {
            let magnitude = ring as f32 / RINGS as f32;
            let ring_path = Path::new(|builder| {
                for axis in 0..axis_count {
                    let point = self.axis_point(center, radius, axis, magnitude);
                    if axis == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
                builder.close();
            });
            frame.stroke(&ring_path, grid);
            frame.fill_text(Text {
                content: format!("{:.0}", magnitude * max_value),
                position: Point::new(center.x + 4.0, center.y - radius * magnitude),
                color: palette.background.weak.text,
                size: 10.0.into(),
                ..Text::default()
            });
        }

        for (axis, label) in self.dataset.labels.iter().enumerate() {
            let end = self.axis_point(center, radius, axis, 1.0);
            frame.stroke(&Path::line(center, end), grid);

            let anchor = self.axis_point(center, radius, axis, 1.14);
            frame.fill_text(Text {
                content: label.clone(),
                position: anchor,
                color: palette.background.base.text,
                size: 11.0.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Center.into(),
                ..Text::default()
            });
        }

        for series in &self.dataset.series {
            let points: Vec<Point> = (0..axis_count)
                .map(|axis| {
                    let value = series.values.get(axis).copied().flatten().unwrap_or(0.0);
                    let magnitude = (value / max_value).clamp(0.0, 1.0);
                    self.axis_point(center, radius, axis, magnitude)
                })
                .collect();

            let polygon = Path::new(|builder| {
                if let Some(first) = points.first() {
                    builder.move_to(*first);
                    for point in points.iter().skip(1) {
                        builder.line_to(*point);
                    }
                    builder.close();
                }
            });
            frame.fill(&polygon, series.fill);
            frame.stroke(
                &polygon,
                Stroke::default().with_width(2.0).with_color(series.border),
            );
            for point in &points {
                frame.fill(&Path::circle(*point, 3.0), series.border);
            }
        }

        let mut geometries = vec![frame.into_geometry()];

        if self.interaction.enable_hover {
            if let Some(cursor_pos) = cursor.position_in(bounds) {
                let dx = cursor_pos.x - center.x;
                let dy = cursor_pos.y - center.y;
                let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
                let step = TAU / axis_count as f32;
                let axis = (angle / step).round() as usize % axis_count;

                if let Some(series) = self.dataset.series.first() {
                    if let Some(Some(value)) = series.values.get(axis) {
                        let mut hover = Frame::new(renderer, bounds.size());
                        let area = Rectangle::new(Point::ORIGIN, bounds.size());
                        let label = format!("{}: {value}", self.dataset.labels[axis]);
                        overlay::tooltip(&mut hover, theme, cursor_pos, area, label);
                        geometries.push(hover.into_geometry());
                    }
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
