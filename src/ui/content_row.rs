use iced::widget::{column, container, image, mouse_area, row, scrollable, text};
use iced::{Element, Length, Padding, Theme};
use std::collections::HashMap;

use crate::app::Message;
use crate::core::catalog::{Category, Drama};
use crate::theme;
use crate::ui::badges;

const CARD_WIDTH: f32 = 140.0;
const CARD_HEIGHT: f32 = 200.0;
const WIDE_CARD_WIDTH: f32 = 220.0;
const WIDE_CARD_HEIGHT: f32 = 124.0;

/// A single clickable title card. Vertical-format titles get a portrait
/// thumbnail, the rest a landscape one. The returned element owns its copy
/// of the text, so it only borrows the thumbnail cache.
pub fn drama_card<'a>(
    drama: &Drama,
    thumbs: &'a HashMap<String, iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let (w, h) = if drama.is_vertical {
        (CARD_WIDTH, CARD_HEIGHT)
    } else {
        (WIDE_CARD_WIDTH, WIDE_CARD_HEIGHT)
    };

    let thumb: Element<'a, Message> = match thumbs.get(&drama.thumbnail_url) {
        Some(handle) => image(handle.clone())
            .width(w)
            .height(h)
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text("").size(10))
            .width(w)
            .height(h)
            .style(|_: &Theme| container::Style {
                background: Some(theme::BG_TERTIARY.into()),
                ..Default::default()
            })
            .into(),
    };

    let title: String = drama.title.chars().take(30).collect();

    let card = column![
        thumb,
        text(title).size(12).color(theme::TEXT_SECONDARY).width(w),
        badges::meta_line(drama),
    ]
    .spacing(4)
    .width(w);

    mouse_area(card)
        .on_press(Message::PlayRequested(drama.clone()))
        .into()
}

/// One browse row: category name plus a horizontally scrollable card strip.
/// Takes the derived category by value; rows are recomputed per render.
pub fn content_row<'a>(
    category: Category,
    thumbs: &'a HashMap<String, iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = category
        .dramas
        .iter()
        .map(|d| drama_card(d, thumbs))
        .collect();

    let strip = scrollable(row(cards).spacing(12).padding(Padding::from([4, 0])))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4).scroller_width(4),
        ))
        .width(Length::Fill);

    column![
        text(category.name).size(16).color(theme::TEXT_PRIMARY),
        strip,
    ]
    .spacing(8)
    .padding(Padding::from([8, 32]))
    .width(Length::Fill)
    .into()
}
