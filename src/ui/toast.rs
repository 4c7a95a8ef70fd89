use iced::widget::{column, container, mouse_area, text};
use iced::{Border, Color, Element, Length, Padding, Theme};
use std::time::Instant;

use crate::app::Message;
use crate::theme;

const TOAST_LIFETIME_MS: u128 = 3500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(id: u64, message: String, toast_type: ToastType) -> Self {
        Self {
            id,
            message,
            toast_type,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_millis() > TOAST_LIFETIME_MS
    }
}

fn accent(tt: ToastType) -> Color {
    match tt {
        ToastType::Success => theme::SUCCESS,
        ToastType::Error => theme::ERROR,
        ToastType::Info => theme::INFO,
    }
}

/// Render the toast stack (bottom-right overlay). Click to dismiss.
pub fn toast_container(toasts: &[Toast]) -> Element<'_, Message> {
    if toasts.is_empty() {
        return container(column![]).width(0).height(0).into();
    }

    let views: Vec<Element<'_, Message>> = toasts
        .iter()
        .map(|t| {
            let color = accent(t.toast_type);
            let id = t.id;
            mouse_area(
                container(text(&t.message).size(13).color(color))
                    .padding(Padding::from([10, 16]))
                    .width(320)
                    .style(move |_: &Theme| container::Style {
                        background: Some(Color { a: 0.12, ..color }.into()),
                        border: Border {
                            color,
                            width: 1.0,
                            radius: 8.0.into(),
                        },
                        ..Default::default()
                    }),
            )
            .on_press(Message::DismissToast(id))
            .into()
        })
        .collect();

    container(column(views).spacing(8))
        .padding(16)
        .width(Length::Shrink)
        .into()
}
