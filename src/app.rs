use iced::widget::{column, container, scrollable, stack, text};
use iced::{Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::core::api::{ApiClient, CatalogOrigin, CatalogPayload};
use crate::core::assistant::{AssistantClient, ChatMessage, ChatRole};
use crate::core::catalog::{self, Drama};
use crate::theme as app_theme;
use crate::ui;

// ── Message enum ──

#[derive(Debug, Clone)]
pub enum Message {
    // Init
    CatalogLoaded(CatalogPayload),

    // Player
    PlayRequested(Drama),
    PlayerClosed,

    // Search
    SearchInputChanged(String),
    SearchSubmitted,
    SearchCompleted(u64, Result<Vec<Drama>, String>),
    HomePressed,

    // Assistant
    AssistantToggled,
    AssistantInputChanged(String),
    AssistantSubmitted,
    AssistantReplied(String),

    // Artwork
    ThumbLoaded(String, Result<Vec<u8>, String>),

    // Toast
    DismissToast(u64),
    TickToasts,

    // Keyboard
    KeyPressed(iced::keyboard::Key, iced::keyboard::Modifiers),
}

// ── View state ──

/// Catalog lifecycle. There is no separate errored variant: the data source
/// absorbs remote failure into the fallback set and reports the origin.
pub enum CatalogState {
    Loading,
    Ready {
        dramas: Vec<Drama>,
        origin: CatalogOrigin,
    },
}

/// Present only while the search view is active, so a result set cannot
/// exist outside search mode.
pub struct SearchState {
    pub query: String,
    pub pending: bool,
    pub results: Vec<Drama>,
}

pub struct App {
    api: ApiClient,
    assistant: AssistantClient,

    // Catalog
    pub catalog: CatalogState,

    // Search
    pub search: Option<SearchState>,
    pub search_input: String,
    // Monotonic tag; completions carrying an older tag are discarded.
    search_seq: u64,

    // Player. Some(_) is the only representation of "player open".
    pub player: Option<Drama>,

    // Assistant
    pub assistant_open: bool,
    pub assistant_input: String,
    pub assistant_messages: Vec<ChatMessage>,
    pub assistant_pending: bool,
    next_chat_id: u64,

    // Toast
    pub toasts: Vec<ui::toast::Toast>,
    next_toast_id: u64,

    // Artwork cache
    pub thumb_cache: HashMap<String, iced::widget::image::Handle>,
}

impl App {
    fn add_toast(&mut self, message: String, toast_type: ui::toast::ToastType) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts
            .push(ui::toast::Toast::new(id, message, toast_type));
    }

    fn push_chat(&mut self, role: ChatRole, text: String) {
        let id = self.next_chat_id;
        self.next_chat_id += 1;
        self.assistant_messages.push(ChatMessage::new(id, role, text));
    }

    fn catalog_dramas(&self) -> &[Drama] {
        match &self.catalog {
            CatalogState::Ready { dramas, .. } => dramas,
            CatalogState::Loading => &[],
        }
    }

    /// Queue fetches for any of the given image URLs not yet cached.
    fn fetch_missing_art(&self, urls: impl IntoIterator<Item = String>) -> Task<Message> {
        let mut tasks = Vec::new();
        for url in urls {
            if url.is_empty() || self.thumb_cache.contains_key(&url) {
                continue;
            }
            let fetch_url = url.clone();
            tasks.push(Task::perform(
                async move {
                    let bytes = reqwest::get(&fetch_url)
                        .await
                        .map_err(|e| e.to_string())?
                        .bytes()
                        .await
                        .map_err(|e| e.to_string())?;
                    Ok(bytes.to_vec())
                },
                move |result| Message::ThumbLoaded(url.clone(), result),
            ));
        }
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> (Self, Task<Message>) {
        let api = ApiClient::new(config.api_base_url);
        let assistant = AssistantClient::new(config.assistant_url);

        let fetch_api = api.clone();
        let init_task = Task::perform(
            async move { fetch_api.fetch_catalog().await },
            Message::CatalogLoaded,
        );

        let app = App {
            api,
            assistant,
            catalog: CatalogState::Loading,
            search: None,
            search_input: String::new(),
            search_seq: 0,
            player: None,
            assistant_open: false,
            assistant_input: String::new(),
            assistant_messages: Vec::new(),
            assistant_pending: false,
            next_chat_id: 1,
            toasts: Vec::new(),
            next_toast_id: 1,
            thumb_cache: HashMap::new(),
        };

        (app, init_task)
    }

    pub fn title(&self) -> String {
        "DramaBox".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![];

        // Toast auto-dismiss ticker
        if !self.toasts.is_empty() {
            subs.push(
                iced::time::every(std::time::Duration::from_millis(100))
                    .map(|_| Message::TickToasts),
            );
        }

        subs.push(iced::keyboard::listen().map(|event| match event {
            iced::keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::TickToasts, // Ignore other keyboard events; reuse a no-op message
        }));

        Subscription::batch(subs)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ── Init ──
            Message::CatalogLoaded(payload) => {
                info!(
                    "Catalog loaded: {} titles ({:?})",
                    payload.dramas.len(),
                    payload.origin
                );

                let mut urls: Vec<String> = payload
                    .dramas
                    .iter()
                    .map(|d| d.thumbnail_url.clone())
                    .collect();
                if let Some(first) = payload.dramas.first() {
                    urls.push(first.cover_url.clone());
                }

                self.catalog = CatalogState::Ready {
                    dramas: payload.dramas,
                    origin: payload.origin,
                };
                self.fetch_missing_art(urls)
            }

            // ── Player ──
            Message::PlayRequested(drama) => {
                debug!("Playing '{}'", drama.title);
                let art = self.fetch_missing_art([drama.cover_url.clone()]);
                self.player = Some(drama);
                art
            }
            Message::PlayerClosed => {
                self.player = None;
                Task::none()
            }

            // ── Search ──
            Message::SearchInputChanged(query) => {
                self.search_input = query;
                Task::none()
            }
            Message::SearchSubmitted => {
                let query = self.search_input.clone();
                self.search_seq += 1;
                let seq = self.search_seq;

                match &mut self.search {
                    Some(s) => {
                        // Re-querying: previous results are kept in state so
                        // a failed request can fall back to them.
                        s.query = query.clone();
                        s.pending = true;
                    }
                    None => {
                        self.search = Some(SearchState {
                            query: query.clone(),
                            pending: true,
                            results: Vec::new(),
                        });
                    }
                }

                // A fallback catalog means the service is unreachable, so
                // search the bundled set locally instead.
                let offline = matches!(
                    &self.catalog,
                    CatalogState::Ready {
                        origin: CatalogOrigin::Fallback,
                        ..
                    }
                );
                if offline {
                    let dramas = self.catalog_dramas().to_vec();
                    Task::perform(
                        async move { Ok::<_, String>(catalog::search_local(&dramas, &query)) },
                        move |result| Message::SearchCompleted(seq, result),
                    )
                } else {
                    let api = self.api.clone();
                    Task::perform(
                        async move { api.search(&query).await },
                        move |result| Message::SearchCompleted(seq, result),
                    )
                }
            }
            Message::SearchCompleted(seq, result) => {
                if seq != self.search_seq {
                    debug!("Discarding stale search response (seq {seq})");
                    return Task::none();
                }
                let Some(search) = &mut self.search else {
                    return Task::none();
                };
                search.pending = false;

                match result {
                    Ok(results) => {
                        let urls: Vec<String> =
                            results.iter().map(|d| d.thumbnail_url.clone()).collect();
                        search.results = results;
                        self.fetch_missing_art(urls)
                    }
                    Err(e) => {
                        // Previous results stay in place.
                        error!("Search failed: {e}");
                        self.add_toast(
                            format!("Search failed: {e}"),
                            ui::toast::ToastType::Error,
                        );
                        Task::none()
                    }
                }
            }
            Message::HomePressed => {
                // Bump the tag so an in-flight search resolves stale and
                // cannot repopulate results after leaving search mode.
                self.search_seq += 1;
                self.search = None;
                self.search_input.clear();
                Task::none()
            }

            // ── Assistant ──
            Message::AssistantToggled => {
                self.assistant_open = !self.assistant_open;
                Task::none()
            }
            Message::AssistantInputChanged(input) => {
                self.assistant_input = input;
                Task::none()
            }
            Message::AssistantSubmitted => {
                let prompt = self.assistant_input.trim().to_string();
                if prompt.is_empty() || self.assistant_pending {
                    return Task::none();
                }
                self.assistant_input.clear();
                self.push_chat(ChatRole::User, prompt);
                self.assistant_pending = true;

                let assistant = self.assistant.clone();
                let transcript = self.assistant_messages.clone();
                let dramas = self.catalog_dramas().to_vec();
                Task::perform(
                    async move { assistant.reply(&transcript, &dramas).await },
                    Message::AssistantReplied,
                )
            }
            Message::AssistantReplied(reply) => {
                self.assistant_pending = false;
                self.push_chat(ChatRole::Model, reply);
                Task::none()
            }

            // ── Artwork ──
            Message::ThumbLoaded(url, Ok(bytes)) => {
                let handle = iced::widget::image::Handle::from_bytes(bytes);
                self.thumb_cache.insert(url, handle);
                Task::none()
            }
            Message::ThumbLoaded(url, Err(e)) => {
                debug!("Artwork fetch failed for {url}: {e}");
                Task::none()
            }

            // ── Toast ──
            Message::DismissToast(id) => {
                self.toasts.retain(|t| t.id != id);
                Task::none()
            }
            Message::TickToasts => {
                self.toasts.retain(|t| !t.is_expired());
                Task::none()
            }

            // ── Keyboard ──
            Message::KeyPressed(key, _modifiers) => {
                if let iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) = key {
                    if self.player.is_some() {
                        self.player = None;
                    } else if self.assistant_open {
                        self.assistant_open = false;
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let (dramas, origin) = match &self.catalog {
            CatalogState::Loading => {
                return container(
                    column![
                        text("DramaBox").size(28).color(app_theme::BRAND),
                        text("Loading dramas...")
                            .size(14)
                            .color(app_theme::TEXT_MUTED),
                    ]
                    .spacing(12)
                    .align_x(iced::Alignment::Center),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_: &Theme| container::Style {
                    background: Some(app_theme::BG_PRIMARY.into()),
                    ..Default::default()
                })
                .into();
            }
            CatalogState::Ready { dramas, origin } => (dramas, *origin),
        };

        let offline = origin == CatalogOrigin::Fallback;
        let nav = ui::navbar::navbar(&self.search_input, offline);

        let main: Element<'_, Message> = if let Some(search) = &self.search {
            ui::search_grid::search_grid(search, &self.thumb_cache)
        } else {
            let feed: Element<'_, Message> = match catalog::featured(dramas) {
                Some(first) => {
                    let hero = ui::hero::hero(first, self.thumb_cache.get(&first.cover_url));
                    let rows: Vec<Element<'_, Message>> = catalog::categories(dramas)
                        .into_iter()
                        .map(|c| ui::content_row::content_row(c, &self.thumb_cache))
                        .collect();
                    column![hero, column(rows).spacing(8), ui::footer::footer()]
                        .spacing(16)
                        .into()
                }
                None => container(
                    text("No dramas found.")
                        .size(14)
                        .color(app_theme::TEXT_MUTED),
                )
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(120)
                .into(),
            };
            scrollable(feed).height(Length::Fill).into()
        };

        let base = container(column![nav, main].width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_: &Theme| container::Style {
                background: Some(app_theme::BG_PRIMARY.into()),
                ..Default::default()
            });

        // Stack for overlays (assistant, player, toasts)
        let mut layers: Vec<Element<'_, Message>> = vec![base.into()];

        if self.assistant_open {
            layers.push(
                container(ui::assistant::assistant_panel(
                    &self.assistant_messages,
                    &self.assistant_input,
                    self.assistant_pending,
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Right)
                .align_y(iced::alignment::Vertical::Bottom)
                .padding(iced::Padding {
                    bottom: 70.0,
                    ..iced::Padding::ZERO
                })
                .into(),
            );
        }

        layers.push(
            container(ui::assistant::assistant_button(self.assistant_open))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Right)
                .align_y(iced::alignment::Vertical::Bottom)
                .into(),
        );

        if let Some(drama) = &self.player {
            layers.push(ui::player::player_overlay(
                drama,
                self.thumb_cache.get(&drama.cover_url),
            ));
        }

        if !self.toasts.is_empty() {
            layers.push(
                container(ui::toast::toast_container(&self.toasts))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .into(),
            );
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::sample_dramas;

    fn new_app() -> App {
        let (app, _task) = App::with_config(Config::default());
        app
    }

    fn remote_payload(dramas: Vec<Drama>) -> CatalogPayload {
        CatalogPayload {
            dramas,
            origin: CatalogOrigin::Remote,
        }
    }

    fn loaded_app() -> App {
        let mut app = new_app();
        let _ = app.update(Message::CatalogLoaded(remote_payload(sample_dramas())));
        app
    }

    #[test]
    fn load_leaves_loading_state() {
        let mut app = new_app();
        assert!(matches!(app.catalog, CatalogState::Loading));
        let _ = app.update(Message::CatalogLoaded(remote_payload(sample_dramas())));
        match &app.catalog {
            CatalogState::Ready { dramas, origin } => {
                assert_eq!(dramas.len(), sample_dramas().len());
                assert_eq!(*origin, CatalogOrigin::Remote);
            }
            CatalogState::Loading => panic!("still loading after completion"),
        }
    }

    #[test]
    fn fallback_payload_sets_fallback_origin() {
        let mut app = new_app();
        let _ = app.update(Message::CatalogLoaded(CatalogPayload {
            dramas: sample_dramas(),
            origin: CatalogOrigin::Fallback,
        }));
        assert!(matches!(
            app.catalog,
            CatalogState::Ready {
                origin: CatalogOrigin::Fallback,
                ..
            }
        ));
    }

    #[test]
    fn empty_catalog_has_no_featured_or_categories() {
        let mut app = new_app();
        let _ = app.update(Message::CatalogLoaded(remote_payload(Vec::new())));
        let dramas = app.catalog_dramas();
        assert!(catalog::featured(dramas).is_none());
        assert!(catalog::categories(dramas).is_empty());
    }

    #[test]
    fn play_then_close_clears_selection() {
        let mut app = loaded_app();
        let t = sample_dramas()[2].clone();
        let _ = app.update(Message::PlayRequested(t));
        assert!(app.player.is_some());
        let _ = app.update(Message::PlayerClosed);
        assert!(app.player.is_none());
        // Idempotent
        let _ = app.update(Message::PlayerClosed);
        assert!(app.player.is_none());
    }

    #[test]
    fn play_is_last_write_wins() {
        let mut app = loaded_app();
        let dramas = sample_dramas();
        let _ = app.update(Message::PlayRequested(dramas[0].clone()));
        let _ = app.update(Message::PlayRequested(dramas[1].clone()));
        assert_eq!(app.player.as_ref().unwrap().id, dramas[1].id);
    }

    #[test]
    fn play_selection_matches_by_id() {
        let mut app = loaded_app();
        for d in sample_dramas() {
            let id = d.id.clone();
            let _ = app.update(Message::PlayRequested(d));
            assert_eq!(app.player.as_ref().unwrap().id, id);
        }
    }

    #[test]
    fn search_goes_pending_then_stores_results() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchInputChanged("ceo".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let s = app.search.as_ref().unwrap();
        assert!(s.pending);
        assert!(s.results.is_empty());

        let seq = app.search_seq;
        let hits = vec![sample_dramas()[0].clone()];
        let _ = app.update(Message::SearchCompleted(seq, Ok(hits)));
        let s = app.search.as_ref().unwrap();
        assert!(!s.pending);
        assert_eq!(s.results.len(), 1);
    }

    #[test]
    fn empty_query_search_still_completes() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchSubmitted);
        assert!(app.search.as_ref().unwrap().pending);
        let seq = app.search_seq;
        let _ = app.update(Message::SearchCompleted(seq, Ok(Vec::new())));
        let s = app.search.as_ref().unwrap();
        assert!(!s.pending);
        assert!(s.results.is_empty());
    }

    #[test]
    fn failed_search_keeps_previous_results_and_toasts() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchInputChanged("ceo".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let seq = app.search_seq;
        let _ = app.update(Message::SearchCompleted(
            seq,
            Ok(vec![sample_dramas()[0].clone()]),
        ));

        let _ = app.update(Message::SearchInputChanged("vow".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let seq = app.search_seq;
        let _ = app.update(Message::SearchCompleted(seq, Err("boom".to_string())));

        let s = app.search.as_ref().unwrap();
        assert!(!s.pending);
        assert_eq!(s.results.len(), 1);
        assert_eq!(s.results[0].id, "1");
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn stale_search_response_is_discarded() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchInputChanged("a".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let first_seq = app.search_seq;
        let _ = app.update(Message::SearchInputChanged("b".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let second_seq = app.search_seq;
        assert!(second_seq > first_seq);

        // Slow first search resolves after the second was issued.
        let _ = app.update(Message::SearchCompleted(
            first_seq,
            Ok(vec![sample_dramas()[0].clone()]),
        ));
        let s = app.search.as_ref().unwrap();
        assert!(s.pending, "stale completion must not clear pending");
        assert!(s.results.is_empty());

        let _ = app.update(Message::SearchCompleted(
            second_seq,
            Ok(vec![sample_dramas()[1].clone()]),
        ));
        let s = app.search.as_ref().unwrap();
        assert!(!s.pending);
        assert_eq!(s.results[0].id, "2");
    }

    #[test]
    fn home_clears_search_even_while_pending() {
        let mut app = loaded_app();
        let _ = app.update(Message::SearchInputChanged("ceo".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let pending_seq = app.search_seq;
        let _ = app.update(Message::HomePressed);
        assert!(app.search.is_none());

        // The in-flight search resolving late must not repopulate results.
        let _ = app.update(Message::SearchCompleted(
            pending_seq,
            Ok(vec![sample_dramas()[0].clone()]),
        ));
        assert!(app.search.is_none());
    }

    #[test]
    fn escape_closes_player_first_then_assistant() {
        let mut app = loaded_app();
        let _ = app.update(Message::AssistantToggled);
        let _ = app.update(Message::PlayRequested(sample_dramas()[0].clone()));

        let esc = iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape);
        let _ = app.update(Message::KeyPressed(
            esc.clone(),
            iced::keyboard::Modifiers::empty(),
        ));
        assert!(app.player.is_none());
        assert!(app.assistant_open);

        let _ = app.update(Message::KeyPressed(
            esc,
            iced::keyboard::Modifiers::empty(),
        ));
        assert!(!app.assistant_open);
    }

    #[test]
    fn assistant_transcript_is_append_only() {
        let mut app = loaded_app();
        let _ = app.update(Message::AssistantInputChanged("romance please".to_string()));
        let _ = app.update(Message::AssistantSubmitted);
        assert!(app.assistant_pending);
        assert_eq!(app.assistant_messages.len(), 1);
        assert_eq!(app.assistant_messages[0].role, ChatRole::User);

        let _ = app.update(Message::AssistantReplied("Try this one.".to_string()));
        assert!(!app.assistant_pending);
        assert_eq!(app.assistant_messages.len(), 2);
        assert_eq!(app.assistant_messages[1].role, ChatRole::Model);
        assert!(app.assistant_messages[0].id < app.assistant_messages[1].id);
    }

    #[test]
    fn blank_assistant_prompt_is_ignored() {
        let mut app = loaded_app();
        let _ = app.update(Message::AssistantInputChanged("   ".to_string()));
        let _ = app.update(Message::AssistantSubmitted);
        assert!(app.assistant_messages.is_empty());
        assert!(!app.assistant_pending);
    }

    #[test]
    fn toast_dismiss_and_expiry() {
        let mut app = loaded_app();
        app.add_toast("one".to_string(), ui::toast::ToastType::Info);
        app.add_toast("two".to_string(), ui::toast::ToastType::Error);
        let first_id = app.toasts[0].id;
        let _ = app.update(Message::DismissToast(first_id));
        assert_eq!(app.toasts.len(), 1);
        let _ = app.update(Message::TickToasts);
        assert_eq!(app.toasts.len(), 1, "fresh toasts must survive a tick");
    }
}
