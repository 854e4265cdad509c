use iced::alignment::Horizontal;
use iced::widget::{column, container, pick_list, row, scrollable, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::render::{FilterView, TableView};
use crate::table::{CellEdits, TableRow};
use crate::theme::{BOLD, GROUP_BG, HEADER_BG, HEADER_TEXT};

const NUMBER_WIDTH: f32 = 64.0;
const NAME_WIDTH: f32 = 300.0;
const WEEK_WIDTH: f32 = 112.0;
const SUMMARY_WIDTH: f32 = 90.0;

fn table_width() -> f32 {
    NUMBER_WIDTH + NAME_WIDTH + WEEK_WIDTH * crate::data::WEEK_COUNT as f32 + SUMMARY_WIDTH
}

pub fn view<'a>(table: TableView, edits: &'a CellEdits) -> Element<'a, Message> {
    let mut content = column![text("Complete Metrics Table").size(24)].spacing(16);

    if let Some(filter) = table.filter {
        content = content.push(category_picker(filter));
    }

    let mut grid = Column::new().push(header(&table.grid.header)).spacing(2);
    for group in table.grid.groups {
        grid = grid.push(
            container(text(group.label).font(BOLD).size(13))
                .padding([8, 16])
                .width(Length::Fixed(table_width()))
                .style(|_| container::background(GROUP_BG).color(HEADER_TEXT)),
        );
        grid = grid.extend(group.rows.into_iter().map(|entry| metric_row(entry, edits)));
    }

    content.push(scrollable(grid).horizontal()).into()
}

fn category_picker<'a>(filter: FilterView) -> Element<'a, Message> {
    row![
        text("Category").size(14),
        pick_list(filter.options, Some(filter.selected), Message::SelectCategory).text_size(14),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn header<'a>(labels: &[String]) -> Element<'a, Message> {
    let last = labels.len().saturating_sub(1);
    let cells = labels.iter().enumerate().map(|(index, label)| -> Element<'a, Message> {
        let width = match index {
            0 => NUMBER_WIDTH,
            1 => NAME_WIDTH,
            index if index == last => SUMMARY_WIDTH,
            _ => WEEK_WIDTH,
        };
        text(label.clone())
            .size(12)
            .font(BOLD)
            .width(Length::Fixed(width))
            .align_x(Horizontal::Center)
            .into()
    });

    container(Row::with_children(cells))
        .padding([10, 0])
        .style(|_| container::background(HEADER_BG).color(HEADER_TEXT))
        .into()
}

fn metric_row<'a>(entry: TableRow, edits: &'a CellEdits) -> Element<'a, Message> {
    let metric = entry.metric;

    let cells = entry.cells.into_iter().map(move |cell| -> Element<'a, Message> {
        let week = cell.week;
        container(
            text_input(&cell.text, edits.display(metric, &cell))
                .on_input(move |value| Message::CellEdited {
                    metric,
                    week,
                    value,
                })
                .size(12)
                .padding(4),
        )
        .padding([0, 4])
        .width(Length::Fixed(WEEK_WIDTH))
        .into()
    });

    Row::new()
        .push(
            text(entry.number.to_string())
                .size(12)
                .width(Length::Fixed(NUMBER_WIDTH))
                .align_x(Horizontal::Center),
        )
        .push(text(entry.name).size(12).width(Length::Fixed(NAME_WIDTH)))
        .extend(cells)
        .push(
            text(entry.summary)
                .size(12)
                .font(BOLD)
                .width(Length::Fixed(SUMMARY_WIDTH))
                .align_x(Horizontal::Center),
        )
        .align_y(Alignment::Center)
        .padding([4, 0])
        .into()
}
