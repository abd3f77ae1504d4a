//! Search, removal and cover message handlers

use std::collections::HashSet;

use iced::Task;
use iced::widget::image;
use tracing::{debug, info, warn};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::SearchOutcome;

impl App {
    pub fn handle_search(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SearchChanged(text) => {
                self.search.update_search_text(text.clone());
                Some(Task::none())
            }

            Message::SubmitSearch => {
                let request = match self.search.submit() {
                    Ok(request) => request,
                    Err(e) => return Some(self.show_notice(e)),
                };
                info!(
                    "Searching books for '{}' (generation {})",
                    request.term, request.generation
                );

                let generation = request.generation;
                let Some(client) = self.core.client.clone() else {
                    return Some(Task::done(Message::SearchCompleted(
                        generation,
                        Err("book API client unavailable".to_string()),
                    )));
                };

                Some(Task::perform(
                    async move {
                        client
                            .search(&request.term)
                            .await
                            .map_err(|e| format!("{:#}", e))
                    },
                    move |result| Message::SearchCompleted(generation, result),
                ))
            }

            Message::SearchCompleted(generation, result) => {
                match self.search.apply_results(*generation, result.clone()) {
                    SearchOutcome::Populated(count) => {
                        info!("Search returned {} books", count);
                        Some(self.load_covers())
                    }
                    SearchOutcome::Empty(notice) => {
                        match result {
                            Err(e) => warn!("Book search failed: {}", e),
                            Ok(_) => info!("Search returned no books"),
                        }
                        self.ui.covers.clear();
                        Some(self.show_notice(notice))
                    }
                    SearchOutcome::Stale => {
                        debug!(
                            "Dropping response for generation {} (current {})",
                            generation,
                            self.search.generation()
                        );
                        Some(Task::none())
                    }
                }
            }

            Message::RemoveBook(position) => {
                if let Some(book) = self.search.remove_entry(*position) {
                    debug!("Removed '{}' at position {}", book.title, position);
                    self.prune_covers();
                }
                Some(Task::none())
            }

            Message::CoverLoaded(url, result) => {
                match result {
                    Ok(handle) => {
                        if self.search.books().iter().any(|b| &b.image == url) {
                            self.ui.covers.insert(url.clone(), handle.clone());
                        }
                    }
                    Err(e) => warn!("Failed to load cover {}: {}", url, e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Drop covers no longer referenced by the result list
    fn prune_covers(&mut self) {
        let in_use: HashSet<&str> = self
            .search
            .books()
            .iter()
            .map(|b| b.image.as_str())
            .collect();
        self.ui.covers.retain(|url, _| in_use.contains(url.as_str()));
    }

    /// Request every cover of the current list that is not loaded yet
    fn load_covers(&mut self) -> Task<Message> {
        self.prune_covers();

        let Some(client) = self.core.client.clone() else {
            return Task::none();
        };

        let mut requested = HashSet::new();
        let tasks: Vec<Task<Message>> = self
            .search
            .books()
            .iter()
            .map(|b| b.image.clone())
            .filter(|url| !url.is_empty() && !self.ui.covers.contains_key(url))
            .filter(|url| requested.insert(url.clone()))
            .map(|url| {
                let client = client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .fetch_cover(&url)
                            .await
                            .map(|bytes| image::Handle::from_bytes(bytes))
                            .map_err(|e| format!("{:#}", e));
                        (url, result)
                    },
                    |(url, result)| Message::CoverLoaded(url, result),
                )
            })
            .collect();

        debug!("Loading {} covers", tasks.len());
        Task::batch(tasks)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::BookEntry;
    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::ui::widgets::ToastStyle;
    use iced::widget::image;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    fn book(title: &str) -> BookEntry {
        BookEntry::new(format!("https://itbook.store/img/{}.png", title), title, "$9.99")
    }

    fn titles(app: &App) -> Vec<String> {
        app.search.books().iter().map(|b| b.title.clone()).collect()
    }

    fn toast_text(app: &App) -> Option<&str> {
        app.ui.toast.as_ref().map(|t| t.message.as_str())
    }

    /// Submit `term` and resolve it with `result`
    fn search(app: &mut App, term: &str, result: Result<Vec<BookEntry>, String>) {
        let _ = app.update(Message::SearchChanged(term.to_string()));
        let _ = app.update(Message::SubmitSearch);
        let generation = app.search.generation();
        let _ = app.update(Message::SearchCompleted(generation, result));
    }

    #[test]
    fn empty_submit_shows_notice_without_request() {
        let mut app = app();
        let _ = app.update(Message::SubmitSearch);

        assert_eq!(app.search.generation(), 0);
        assert!(!app.search.is_searching());
        assert_eq!(toast_text(&app), Some("Please enter a search term"));
        assert_eq!(
            app.ui.toast.as_ref().map(|t| t.style),
            Some(ToastStyle::Warning)
        );
    }

    #[test]
    fn submit_starts_request() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("rust".into()));
        let _ = app.update(Message::SubmitSearch);

        assert_eq!(app.search.generation(), 1);
        assert!(app.search.is_searching());
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn results_are_rendered_in_order() {
        let mut app = app();
        search(&mut app, "rust", Ok(vec![book("A"), book("B"), book("C")]));

        assert_eq!(titles(&app), vec!["A", "B", "C"]);
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn zero_results_show_no_books_notice() {
        let mut app = app();
        search(&mut app, "rust", Ok(vec![book("A")]));
        search(&mut app, "qwertyuiop", Ok(vec![]));

        assert!(app.search.books().is_empty());
        assert_eq!(toast_text(&app), Some("No Books Founds!"));
        assert_eq!(
            app.ui.toast.as_ref().map(|t| t.style),
            Some(ToastStyle::Error)
        );
    }

    #[test]
    fn network_failure_shows_no_books_notice() {
        let mut app = app();
        search(&mut app, "rust", Ok(vec![book("A")]));
        search(&mut app, "rust", Err("connection refused".into()));

        assert!(app.search.books().is_empty());
        assert_eq!(toast_text(&app), Some("No Books Founds!"));
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("first".into()));
        let _ = app.update(Message::SubmitSearch);
        let _ = app.update(Message::SearchChanged("second".into()));
        let _ = app.update(Message::SubmitSearch);

        let _ = app.update(Message::SearchCompleted(2, Ok(vec![book("Second")])));
        let _ = app.update(Message::SearchCompleted(1, Err("late failure".into())));

        assert_eq!(titles(&app), vec!["Second"]);
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn remove_by_position() {
        let mut app = app();
        search(&mut app, "rust", Ok(vec![book("Book A"), book("Book B")]));
        let _ = app.update(Message::RemoveBook(0));
        assert_eq!(titles(&app), vec!["Book B"]);

        let mut app = self::app();
        search(&mut app, "rust", Ok(vec![book("Book A"), book("Book B")]));
        let _ = app.update(Message::RemoveBook(1));
        assert_eq!(titles(&app), vec!["Book A"]);

        let _ = app.update(Message::RemoveBook(0));
        assert!(app.search.books().is_empty());
    }

    #[test]
    fn removing_a_book_drops_its_cover() {
        let mut app = app();
        let a = book("A");
        let b = book("B");
        search(&mut app, "rust", Ok(vec![a.clone(), b.clone()]));

        for entry in [&a, &b] {
            let _ = app.update(Message::CoverLoaded(
                entry.image.clone(),
                Ok(image::Handle::from_bytes(vec![0u8; 4])),
            ));
        }
        assert_eq!(app.ui.covers.len(), 2);

        let _ = app.update(Message::RemoveBook(0));
        assert!(!app.ui.covers.contains_key(&a.image));
        assert!(app.ui.covers.contains_key(&b.image));
    }

    #[test]
    fn cover_for_unknown_book_is_ignored() {
        let mut app = app();
        search(&mut app, "rust", Ok(vec![book("A")]));
        let _ = app.update(Message::CoverLoaded(
            "https://elsewhere/x.png".into(),
            Ok(image::Handle::from_bytes(vec![1u8, 2, 3])),
        ));
        assert!(app.ui.covers.is_empty());
    }

    #[test]
    fn old_hide_timer_keeps_newer_toast() {
        let mut app = app();
        let _ = app.update(Message::SubmitSearch);
        let first_id = app.ui.toast_id;
        let _ = app.update(Message::SubmitSearch);

        let _ = app.update(Message::HideToast(first_id));
        assert!(app.ui.toast.is_some());

        let _ = app.update(Message::HideToast(app.ui.toast_id));
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn notice_follows_language() {
        let mut app = app();
        let _ = app.update(Message::SelectLanguage(crate::i18n::Language::Chinese));
        let _ = app.update(Message::SubmitSearch);
        assert_eq!(toast_text(&app), Some("请输入搜索词"));
        assert_eq!(app.core.settings.display.language, "zh");
    }
}
