use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::core::catalog::Drama;
use crate::theme;
use crate::ui::badges;

/// Modal player overlay: dimmed backdrop, cover frame, and controls.
/// Clicking the backdrop or the close button closes the player.
pub fn player_overlay<'a>(
    drama: &'a Drama,
    cover: Option<&'a iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let screen: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(640)
            .height(360)
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text("▶").size(48).color(theme::TEXT_MUTED))
            .width(640)
            .height(360)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .style(|_: &Theme| container::Style {
                background: Some(iced::Color::BLACK.into()),
                ..Default::default()
            })
            .into(),
    };

    let close_btn = button(text("✕ Close").size(13).color(theme::TEXT_PRIMARY))
        .padding(Padding::from([6, 14]))
        .style(|_, status| {
            let bg = match status {
                button::Status::Hovered => theme::BG_HOVER,
                _ => theme::BG_TERTIARY,
            };
            button::Style {
                background: Some(bg.into()),
                border: Border {
                    color: theme::BORDER,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(Message::PlayerClosed);

    // Scrubber affordance only; there is no real playback.
    let progress = container(
        container(text(""))
            .width(220)
            .height(4)
            .style(|_: &Theme| container::Style {
                background: Some(theme::BRAND.into()),
                ..Default::default()
            }),
    )
    .width(640)
    .height(4)
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_TERTIARY.into()),
        ..Default::default()
    });

    let content = column![
        row![
            text(&drama.title).size(18).color(theme::TEXT_PRIMARY),
            Space::new().width(Length::Fill),
            close_btn,
        ]
        .align_y(iced::Alignment::Center),
        screen,
        progress,
        row![
            text(format!("Episode 1 of {}", drama.episodes))
                .size(12)
                .color(theme::TEXT_SECONDARY),
            Space::new().width(Length::Fill),
            badges::rating_badge(drama.rating),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(12)
    .padding(20)
    .width(680);

    let modal = container(content).style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    });

    mouse_area(
        container(modal)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_: &Theme| container::Style {
                background: Some(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.75).into()),
                ..Default::default()
            }),
    )
    .on_press(Message::PlayerClosed)
    .into()
}
