use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Length, Padding};
use std::collections::HashMap;

use crate::app::{Message, SearchState};
use crate::theme;
use crate::ui::content_row::drama_card;

const GRID_COLUMNS: usize = 5;

/// Search view: heading plus either a pending notice, the result grid, or
/// an empty state.
pub fn search_grid<'a>(
    search: &'a SearchState,
    thumbs: &'a HashMap<String, iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let heading = text("Search Results").size(22).color(theme::TEXT_PRIMARY);

    let body: Element<'a, Message> = if search.pending {
        container(text("Searching...").size(14).color(theme::TEXT_MUTED))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(60)
            .into()
    } else if search.results.is_empty() {
        container(
            text("No titles found matching your search.")
                .size(14)
                .color(theme::TEXT_MUTED),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(60)
        .into()
    } else {
        let rows: Vec<Element<'a, Message>> = search
            .results
            .chunks(GRID_COLUMNS)
            .map(|chunk| {
                row(chunk.iter().map(|d| drama_card(d, thumbs)))
                    .spacing(16)
                    .into()
            })
            .collect();
        scrollable(column(rows).spacing(16))
            .height(Length::Fill)
            .into()
    };

    column![heading, body]
        .spacing(16)
        .padding(Padding::from([24, 32]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
