use iced::widget::{column, container, row, text};
use iced::{Element, Length, Padding, Theme};

use crate::app::Message;
use crate::theme;

fn link_column(title: &'static str, links: &[&'static str]) -> Element<'static, Message> {
    let mut col = column![text(title).size(13).color(theme::TEXT_PRIMARY)].spacing(6);
    for link in links {
        col = col.push(text(*link).size(12).color(theme::TEXT_MUTED));
    }
    col.width(Length::FillPortion(1)).into()
}

/// Static footer block.
pub fn footer() -> Element<'static, Message> {
    let about = column![
        text("DramaBox").size(13).color(theme::TEXT_PRIMARY),
        text("Watch premium short dramas anytime, anywhere.")
            .size(12)
            .color(theme::TEXT_MUTED),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));

    let columns = row![
        about,
        link_column("Browse", &["Trending", "New Releases", "Originals"]),
        link_column("Support", &["Help Center", "Terms of Use", "Privacy"]),
        link_column("Social", &["Facebook", "Instagram", "Twitter"]),
    ]
    .spacing(24);

    container(
        column![
            columns,
            text("© 2024 DramaBox. All rights reserved.")
                .size(10)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(16),
    )
    .width(Length::Fill)
    .padding(Padding::from([32, 32]))
    .style(|_: &Theme| container::Style {
        background: Some(iced::Color::BLACK.into()),
        ..Default::default()
    })
    .into()
}
