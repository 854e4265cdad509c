use iced::widget::canvas::Canvas;
use iced::widget::{column, container, row, text, Column, Space};
use iced::{Element, Fill, Length};

use crate::message::Message;
use crate::panels::{self, ChartPanel, KpiCard, PanelBody};

/// Panels laid out two per row.
pub fn view<'a>(charts: Vec<ChartPanel>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(24);
    let mut charts = charts.into_iter();

    while let Some(left) = charts.next() {
        let right: Element<'a, Message> = match charts.next() {
            Some(panel) => chart_section(panel),
            None => Space::new().width(Fill).into(),
        };
        content = content.push(row![chart_section(left), right].spacing(24));
    }

    content.into()
}

pub fn chart_section<'a>(panel: ChartPanel) -> Element<'a, Message> {
    let empty = panel.is_empty();
    let body: Element<'a, Message> = match panel.body {
        PanelBody::Line(dataset) => Canvas::new(panels::trend::chart(dataset))
            .width(Fill)
            .height(300)
            .into(),
        PanelBody::Bar(dataset) => Canvas::new(panels::weekly_bars::chart(dataset))
            .width(Fill)
            .height(300)
            .into(),
        PanelBody::Radar(dataset) => Canvas::new(panels::snapshot::chart(dataset))
            .width(Fill)
            .height(320)
            .into(),
        PanelBody::Doughnut(dataset) => Canvas::new(panels::share::chart(dataset))
            .width(Fill)
            .height(300)
            .into(),
        PanelBody::Kpis(cards) => kpi_grid(cards),
    };

    let mut section = column![text(panel.title).size(18), text(panel.subtitle).size(13)]
        .spacing(8)
        .push(body);

    if empty {
        section = section.push(text("No data available yet.").size(14));
    }

    container(section)
        .padding(16)
        .width(Fill)
        .style(container::bordered_box)
        .into()
}

fn kpi_grid<'a>(cards: Vec<KpiCard>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(16);
    let mut cards = cards.into_iter();

    while let Some(left) = cards.next() {
        let right: Element<'a, Message> = match cards.next() {
            Some(card) => kpi_card(card),
            None => Space::new().width(Fill).into(),
        };
        grid = grid.push(row![kpi_card(left), right].spacing(16));
    }

    grid.into()
}

fn kpi_card<'a>(card: KpiCard) -> Element<'a, Message> {
    let accent = card.accent;
    let content = column![
        text(card.label).size(13),
        text(card.value).size(26).color(accent),
        text(card.change).size(12).color(accent),
    ]
    .spacing(4);

    container(content)
        .padding(16)
        .width(Fill)
        .height(Length::Shrink)
        .style(move |_| {
            container::background(accent.scale_alpha(0.12))
                .border(iced::Border::default().rounded(8))
        })
        .into()
}
