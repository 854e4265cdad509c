use iced::mouse;
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Vector};

use crate::message::Message;

/// Constant factor used to co-plot differently scaled series on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Identity,
    Divide(f64),
    Multiply(f64),
}

impl Scale {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Scale::Identity => value,
            Scale::Divide(factor) => value / factor,
            Scale::Multiply(factor) => value * factor,
        }
    }

    /// Recovers the original reading from a plotted value.
    pub fn invert(self, plotted: f64) -> f64 {
        match self {
            Scale::Identity => plotted,
            Scale::Divide(factor) => plotted * factor,
            Scale::Multiply(factor) => plotted / factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSeries {
    pub label: String,
    pub values: Vec<Option<f32>>,
    pub border: Color,
    pub fill: Color,
    /// Factor the values were plotted with.
    pub scale: Scale,
    /// Per-value colours for charts that colour each value on its own.
    pub segment_colors: Vec<Color>,
}

impl DatasetSeries {
    pub fn new(label: impl Into<String>, border: Color, values: Vec<Option<f32>>) -> Self {
        Self {
            label: label.into(),
            values,
            border,
            fill: border.scale_alpha(0.2),
            scale: Scale::Identity,
            segment_colors: Vec::new(),
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Plotted value, followed by the unscaled reading when they differ.
    pub fn value_text(&self, plotted: f32) -> String {
        if self.scale == Scale::Identity {
            return format!("{plotted}");
        }
        let original = format!("{:.4}", self.scale.invert(f64::from(plotted)));
        let original = original.trim_end_matches('0').trim_end_matches('.');
        format!("{plotted} ({original})")
    }

    pub fn with_segment_colors(mut self, colors: Vec<Color>) -> Self {
        self.segment_colors = colors;
        self
    }

    pub fn segment_color(&self, index: usize) -> Color {
        self.segment_colors.get(index).copied().unwrap_or(self.fill)
    }
}

/// Chart input: category labels plus one value per label for each series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub series: Vec<DatasetSeries>,
}

impl ChartDataset {
    pub fn new(labels: Vec<String>, series: Vec<DatasetSeries>) -> Self {
        Self { labels, series }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.values.iter().all(Option::is_none))
    }

    pub fn max_value(&self) -> Option<f32> {
        self.present_values().reduce(f32::max)
    }

    pub fn min_value(&self) -> Option<f32> {
        self.present_values().reduce(f32::min)
    }

    fn present_values(&self) -> impl Iterator<Item = f32> + '_ {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().flatten().copied())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub padding: f32,
    pub grid_lines: usize,
    pub legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            grid_lines: 5,
            legend: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InteractionConfig {
    pub enable_hover: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            enable_hover: true,
            enable_zoom: true,
            enable_pan: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InteractionState {
    pub zoom: f32,
    pub pan: Vector,
    pub pan_start: Option<Point>,
    pub pan_origin: Vector,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vector::new(0.0, 0.0),
            pan_start: None,
            pan_origin: Vector::new(0.0, 0.0),
        }
    }
}

impl InteractionState {
    pub fn zoom(&self) -> f32 {
        if self.zoom <= 0.0 {
            1.0
        } else {
            self.zoom
        }
    }

    /// Wheel zoom and right-drag pan shared by every chart program.
    pub fn handle(
        &mut self,
        config: &InteractionConfig,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(pan_start) = self.pan_start {
                    let delta = Vector::new(position.x - pan_start.x, position.y - pan_start.y);
                    self.pan = self.pan_origin + delta;
                }
                config
                    .enable_hover
                    .then(canvas::Action::request_redraw)
            }
            canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !config.enable_zoom || cursor.position_in(bounds).is_none() {
                    return None;
                }
                let scroll = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / 60.0,
                };
                let factor = if scroll > 0.0 { 1.1 } else { 0.9 };
                self.zoom = (self.zoom * factor).clamp(0.5, 5.0);
                Some(canvas::Action::request_redraw().and_capture())
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
                if !config.enable_pan {
                    return None;
                }
                if let Some(position) = cursor.position_in(bounds) {
                    self.pan_start = Some(position);
                    self.pan_origin = self.pan;
                }
                Some(canvas::Action::request_redraw())
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)) => {
                if !config.enable_pan {
                    return None;
                }
                self.pan_start = None;
                Some(canvas::Action::request_redraw())
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Middle)) => {
                *self = Self::default();
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }
}
