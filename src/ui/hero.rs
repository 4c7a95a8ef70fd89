use iced::widget::{button, column, container, image, row, stack, text};
use iced::{Border, Element, Length, Padding, Theme};

use crate::app::Message;
use crate::core::catalog::Drama;
use crate::theme;
use crate::ui::badges;

const HERO_HEIGHT: f32 = 340.0;

/// Featured-title banner: cover art with title, badges, and a play button
/// overlaid along the bottom edge.
pub fn hero<'a>(
    drama: &'a Drama,
    cover: Option<&'a iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let backdrop: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(HERO_HEIGHT)
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text(""))
            .width(Length::Fill)
            .height(HERO_HEIGHT)
            .style(|_: &Theme| container::Style {
                background: Some(theme::BG_TERTIARY.into()),
                ..Default::default()
            })
            .into(),
    };

    let description: String = drama.description.chars().take(180).collect();

    let play_btn = button(text("▶  Play").size(14).color(theme::TEXT_PRIMARY))
        .padding(Padding::from([8, 24]))
        .style(|_, status| {
            let bg = match status {
                button::Status::Hovered => theme::BRAND_HOVER,
                _ => theme::BRAND,
            };
            button::Style {
                background: Some(bg.into()),
                text_color: theme::TEXT_PRIMARY,
                border: Border::default().rounded(6),
                ..Default::default()
            }
        })
        .on_press(Message::PlayRequested(drama.clone()));

    let info = column![
        row![badges::flag_badges(drama), badges::rating_badge(drama.rating)].spacing(4),
        text(&drama.title).size(30).color(theme::TEXT_PRIMARY),
        text(description).size(13).color(theme::TEXT_SECONDARY).width(520),
        badges::meta_line(drama),
        play_btn,
    ]
    .spacing(8)
    .padding(Padding::from([24, 32]));

    let overlay = container(info)
        .width(Length::Fill)
        .height(HERO_HEIGHT)
        .align_y(iced::alignment::Vertical::Bottom)
        .style(|_: &Theme| container::Style {
            // Dim the art so the copy stays readable.
            background: Some(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
            ..Default::default()
        });

    stack(vec![backdrop, overlay.into()])
        .width(Length::Fill)
        .height(HERO_HEIGHT)
        .into()
}
