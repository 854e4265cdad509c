use std::f32::consts::{FRAC_PI_2, TAU};

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::{Color, Point, Radians, Rectangle, Renderer, Theme};

use super::model::{ChartConfig, ChartDataset, DatasetSeries, InteractionConfig, InteractionState};
use super::overlay::{self, LEGEND_HEIGHT};
use crate::message::Message;

/// Share of the outer radius left hollow.
const CUTOUT: f32 = 0.55;

#[derive(Default)]
pub struct DoughnutState {
    interaction: InteractionState,
    selected_index: Option<usize>,
}

/// Doughnut chart over the first series of a dataset: one segment per label.
pub struct DoughnutChart {
    dataset: ChartDataset,
    config: ChartConfig,
    interaction: InteractionConfig,
}

impl DoughnutChart {
    pub fn new(dataset: ChartDataset) -> Self {
        Self {
            dataset,
            config: ChartConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }

    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    fn series(&self) -> Option<&DatasetSeries> {
        self.dataset.series.first()
    }

    fn segments(&self) -> Vec<(usize, f32)> {
        self.series()
            .map(|series| {
                series
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(|(index, value)| value.filter(|v| *v > 0.0).map(|v| (index, v)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn geometry(&self, bounds: Rectangle, state: &InteractionState) -> (Point, f32) {
        let legend = if self.config.legend { LEGEND_HEIGHT } else { 0.0 };
        let center = Point::new(bounds.width / 2.0, (bounds.height + legend) / 2.0) + state.pan;
        let radius = (bounds.width.min(bounds.height - legend) * 0.38) * state.zoom();
        (center, radius)
    }

    fn hit_test(&self, bounds: Rectangle, cursor: Point, state: &InteractionState) -> Option<usize> {
        let (center, radius) = self.geometry(bounds, state);
        let dx = cursor.x - center.x;
        let dy = cursor.y - center.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > radius || distance < radius * CUTOUT {
            return None;
        }

        // angle measured clockwise from twelve o'clock
        let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
        let segments = self.segments();
        let total: f32 = segments.iter().map(|(_, value)| value).sum();
        if total <= 0.0 {
            return None;
        }

        let mut start = 0.0;
        for (index, value) in segments {
            let end = start + value / total * TAU;
            if angle >= start && angle <= end {
                return Some(index);
            }
            start = end;
        }
        None
    }
}

impl canvas::Program<Message> for DoughnutChart {
    type State = DoughnutState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let position = cursor.position_in(bounds)?;
            let hit = self.hit_test(bounds, position, &state.interaction);
            state.selected_index = if hit == state.selected_index { None } else { hit };
            return Some(canvas::Action::request_redraw());
        }

        state
            .interaction
            .handle(&self.interaction, event, bounds, cursor)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(series) = self.series() else {
            return Vec::new();
        };
        let segments = self.segments();
        let total: f32 = segments.iter().map(|(_, value)| value).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let (center, radius) = self.geometry(bounds, &state.interaction);

        if self.config.legend {
            let entries: Vec<(&str, Color)> = self
                .dataset
                .labels
                .iter()
                .enumerate()
                .map(|(index, label)| (label.as_str(), series.segment_color(index)))
                .collect();
            overlay::legend(&mut frame, theme, &entries, 4.0);
        }

        let mut start = -FRAC_PI_2;
        for (index, value) in &segments {
            let end = start + value / total * TAU;
            let outer = if state.selected_index == Some(*index) {
                radius * 1.06
            } else {
                radius
            };

            let path = Path::new(|builder| {
                builder.arc(canvas::path::Arc {
                    center,
                    radius: outer,
                    start_angle: Radians(start),
                    end_angle: Radians(end),
                });
                builder.arc(canvas::path::Arc {
                    center,
                    radius: radius * CUTOUT,
                    start_angle: Radians(end),
                    end_angle: Radians(start),
                });
                builder.close();
            });
            frame.fill(&path, series.segment_color(*index));
            start = end;
        }

        frame.fill_text(Text {
            content: format!("{total}"),
            position: center,
            color: palette.background.base.text,
            size: 18.0.into(),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: series.label.clone(),
            position: Point::new(center.x, center.y + 18.0),
            color: palette.background.weak.text,
            size: 11.0.into(),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        let mut geometries = vec![frame.into_geometry()];

        if self.interaction.enable_hover {
            if let Some(cursor_pos) = cursor.position_in(bounds) {
                if let Some(index) = self.hit_test(bounds, cursor_pos, &state.interaction) {
                    let value = series.values[index].unwrap_or_default();
                    let label = format!(
                        "{}: {value} ({:.0}%)",
                        self.dataset.labels[index],
                        value / total * 100.0
                    );
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
