use iced::widget::{column, text};
use iced::Element;

use crate::message::Message;
use crate::panels::ChartPanel;

use super::charts::chart_section;

/// Headline cards first, then the supporting trends at full width.
pub fn view<'a>(panels: Vec<ChartPanel>) -> Element<'a, Message> {
    let content = column![text("Performance at a glance").size(24)].spacing(24);

    content
        .extend(panels.into_iter().map(chart_section))
        .into()
}
