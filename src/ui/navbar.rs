use iced::widget::{button, container, row, text, text_input, Space};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::theme;

/// Top navigation bar: brand mark, home button, search box.
pub fn navbar(search_input: &str, offline: bool) -> Element<'_, Message> {
    let brand = row![
        text("Drama").size(20).color(theme::BRAND),
        text("Box").size(20).color(theme::TEXT_PRIMARY),
    ]
    .spacing(0);

    let home_btn = button(text("Home").size(13).color(theme::TEXT_PRIMARY))
        .padding(Padding::from([6, 14]))
        .style(|_, status| {
            let bg = match status {
                button::Status::Hovered => theme::BG_HOVER,
                _ => theme::BG_TERTIARY,
            };
            button::Style {
                background: Some(bg.into()),
                text_color: theme::TEXT_PRIMARY,
                border: Border {
                    color: theme::BORDER,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(Message::HomePressed);

    let search = text_input("Search dramas...", search_input)
        .on_input(Message::SearchInputChanged)
        .on_submit(Message::SearchSubmitted)
        .width(280)
        .size(13)
        .padding(Padding::from([6, 10]))
        .style(|_, _| text_input::Style {
            background: theme::BG_TERTIARY.into(),
            border: Border {
                color: theme::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            icon: theme::TEXT_MUTED,
            placeholder: theme::TEXT_MUTED,
            value: theme::TEXT_PRIMARY,
            selection: theme::BRAND,
        });

    let mut left = row![brand].spacing(16).align_y(iced::Alignment::Center);
    if offline {
        left = left.push(
            text("Offline mode (API unavailable)")
                .size(11)
                .color(theme::WARNING),
        );
    }

    let right = row![home_btn, search]
        .spacing(8)
        .align_y(iced::Alignment::Center);

    container(
        row![left, Space::new().width(Length::Fill), right]
            .align_y(iced::Alignment::Center)
            .padding(Padding::from([12, 20])),
    )
    .width(Length::Fill)
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        ..Default::default()
    })
    .into()
}
