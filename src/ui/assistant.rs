use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::core::assistant::{ChatMessage, ChatRole};
use crate::theme;

/// Floating round toggle, bottom-right.
pub fn assistant_button(open: bool) -> Element<'static, Message> {
    let label = if open { "✕" } else { "💬" };
    container(
        button(text(label).size(18).color(theme::TEXT_PRIMARY))
            .padding(Padding::from([10, 14]))
            .style(|_, status| {
                let bg = match status {
                    button::Status::Hovered => theme::BRAND_HOVER,
                    _ => theme::BRAND,
                };
                button::Style {
                    background: Some(bg.into()),
                    border: Border::default().rounded(24),
                    ..Default::default()
                }
            })
            .on_press(Message::AssistantToggled),
    )
    .padding(20)
    .into()
}

fn bubble(message: &ChatMessage) -> Element<'_, Message> {
    let (bg, align) = match message.role {
        ChatRole::User => (theme::BRAND, iced::alignment::Horizontal::Right),
        ChatRole::Model => (theme::BG_TERTIARY, iced::alignment::Horizontal::Left),
    };

    let stamp = message.timestamp.format("%H:%M").to_string();

    container(
        column![
            container(text(&message.text).size(12).color(theme::TEXT_PRIMARY))
                .padding(Padding::from([8, 12]))
                .max_width(240)
                .style(move |_: &Theme| container::Style {
                    background: Some(bg.into()),
                    border: Border::default().rounded(10),
                    ..Default::default()
                }),
            text(stamp).size(9).color(theme::TEXT_MUTED),
        ]
        .spacing(2),
    )
    .width(Length::Fill)
    .align_x(align)
    .into()
}

/// Chat panel: transcript plus input row.
pub fn assistant_panel<'a>(
    messages: &'a [ChatMessage],
    input: &'a str,
    pending: bool,
) -> Element<'a, Message> {
    let header = row![
        text("Drama Assistant").size(14).color(theme::TEXT_PRIMARY),
        Space::new().width(Length::Fill),
        text(if pending { "thinking..." } else { "" })
            .size(11)
            .color(theme::TEXT_MUTED),
    ]
    .align_y(iced::Alignment::Center);

    let transcript: Element<'a, Message> = if messages.is_empty() {
        container(
            text("Ask for a recommendation to get started.")
                .size(12)
                .color(theme::TEXT_MUTED),
        )
        .padding(12)
        .into()
    } else {
        scrollable(column(messages.iter().map(bubble)).spacing(8).padding(4))
            .height(Length::Fill)
            .anchor_bottom()
            .into()
    };

    let input_box = text_input("Ask about a drama...", input)
        .on_input(Message::AssistantInputChanged)
        .on_submit(Message::AssistantSubmitted)
        .size(12)
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

    let panel = container(
        column![header, transcript, input_box]
            .spacing(10)
            .padding(14)
            .width(300)
            .height(380),
    )
    .style(|_: &Theme| container::Style {
        background: Some(theme::BG_SECONDARY.into()),
        border: Border {
            color: theme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    });

    container(panel).padding(Padding::from([0, 20])).into()
}
