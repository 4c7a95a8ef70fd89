use iced::widget::{container, row, text};
use iced::{Border, Color, Element, Padding, Theme};

use crate::app::Message;
use crate::core::catalog::Drama;
use crate::theme;

fn pill(label: String, color: Color) -> Element<'static, Message> {
    container(text(label).size(10).color(theme::TEXT_PRIMARY))
        .padding(Padding::from([2, 6]))
        .style(move |_: &Theme| container::Style {
            background: Some(color.into()),
            border: Border::default().rounded(3),
            ..Default::default()
        })
        .into()
}

/// Render a drama's rating badge, colored by score.
pub fn rating_badge(rating: f64) -> Element<'static, Message> {
    pill(format!("★ {rating:.1}"), theme::rating_color(rating))
}

pub fn vip_badge() -> Element<'static, Message> {
    pill("VIP".to_string(), theme::BADGE_VIP)
}

pub fn new_badge() -> Element<'static, Message> {
    pill("NEW".to_string(), theme::BADGE_NEW)
}

pub fn trending_badge() -> Element<'static, Message> {
    pill("TRENDING".to_string(), theme::BADGE_TRENDING)
}

/// Flag badges for a title, in display order.
pub fn flag_badges(drama: &Drama) -> Element<'static, Message> {
    let mut badges: Vec<Element<'static, Message>> = Vec::new();
    if drama.trending {
        badges.push(trending_badge());
    }
    if drama.is_new {
        badges.push(new_badge());
    }
    if drama.is_vip {
        badges.push(vip_badge());
    }
    row(badges).spacing(4).into()
}

/// Year, lead genre, and episode-count meta line.
pub fn meta_line(drama: &Drama) -> Element<'static, Message> {
    let genre = drama.genre.first().cloned().unwrap_or_default();
    text(format!("{} · {} · {} eps", drama.year, genre, drama.episodes))
        .size(11)
        .color(theme::TEXT_MUTED)
        .into()
}
