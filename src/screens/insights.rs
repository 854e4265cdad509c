use iced::widget::{column, container, row, text, Column};
use iced::{Element, Fill};

use crate::guides::{Guide, GuideBody, Note, Phase};
use crate::message::Message;
use crate::theme::{BOLD, HEADER_TEXT};

pub fn view<'a>(guides: Vec<Guide>) -> Element<'a, Message> {
    column![text("Optimization insights").size(24), guide_row(guides)]
        .spacing(24)
        .into()
}

/// Guides side by side; also drawn under the content by the tracker layout.
pub fn guide_row<'a>(guides: Vec<Guide>) -> Element<'a, Message> {
    row(guides.into_iter().map(guide_card)).spacing(24).into()
}

fn guide_card<'a>(guide: Guide) -> Element<'a, Message> {
    let body = match guide.body {
        GuideBody::Notes(notes) => notes_list(notes),
        GuideBody::Checklist(phases) => checklist(phases),
    };
    let accent = guide.accent;

    container(column![text(guide.title).size(18).font(BOLD), body].spacing(16))
        .padding(24)
        .width(Fill)
        .style(move |_| {
            container::background(accent)
                .color(HEADER_TEXT)
                .border(iced::Border::default().rounded(8))
        })
        .into()
}

fn notes_list<'a>(notes: &'static [Note]) -> Element<'a, Message> {
    let mut list = Column::new().spacing(10);
    for note in notes {
        list = list.push(
            column![
                text(note.topic).size(14).font(BOLD),
                text(note.detail).size(13),
            ]
            .spacing(2),
        );
    }
    list.into()
}

fn checklist<'a>(phases: &'static [Phase]) -> Element<'a, Message> {
    let mut list = Column::new().spacing(16);
    for phase in phases {
        let mut items = column![text(phase.title).size(15).font(BOLD)].spacing(4);
        for item in phase.items {
            items = items.push(text(format!("• {item}")).size(13));
        }
        list = list.push(items);
    }
    list.into()
}
