use crate::github::{Repo, SampleError};
use crate::languages::{Language, ALL_LANGUAGES_VALUE};

/// Lifecycle of the language selector contents. A failed load degrades the
/// selector into a static error for the rest of the session.
pub enum Catalog {
    Loading,
    Ready(Vec<Language>),
    Failed(String),
}

/// Everything the UI renders. Mutated only through [`App::update`], so the
/// state machine stays testable without a terminal.
pub struct App {
    pub catalog: Catalog,
    /// Selector highlight position.
    pub cursor: usize,
    /// Confirmed selection, index into the catalog.
    pub selected: Option<usize>,
    /// Active search filter; empty means unfiltered.
    pub filter: String,
    pub repo: Option<Repo>,
    pub error: Option<String>,
    pub loading: bool,
    pub should_quit: bool,
    /// Language name given on the command line, applied once the catalog
    /// arrives.
    initial_language: Option<String>,
}

pub enum Action {
    CatalogLoaded(Result<Vec<Language>, String>),
    CursorUp,
    CursorDown,
    CursorPage(isize),
    CursorHome,
    CursorEnd,
    /// Confirm the language under the cursor. Clears any displayed
    /// repository and error; never triggers a fetch by itself.
    Select,
    FetchStarted,
    FetchFinished(Result<Repo, SampleError>),
    Quit,
}

impl App {
    pub fn new(initial_language: Option<String>) -> Self {
        Self {
            catalog: Catalog::Loading,
            cursor: 0,
            selected: None,
            filter: String::new(),
            repo: None,
            error: None,
            loading: false,
            should_quit: false,
            initial_language,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::CatalogLoaded(Ok(languages)) => {
                self.catalog = Catalog::Ready(languages);
                if let Some(wanted) = self.initial_language.take() {
                    if let Some(idx) = self.find_language(&wanted) {
                        self.cursor = idx;
                        self.select_at(idx);
                    }
                }
            }
            Action::CatalogLoaded(Err(message)) => {
                self.catalog = Catalog::Failed(message);
            }
            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::CursorPage(delta) => self.move_cursor(delta * 10),
            Action::CursorHome => self.cursor = 0,
            Action::CursorEnd => {
                if let Some(len) = self.catalog_len() {
                    self.cursor = len.saturating_sub(1);
                }
            }
            Action::Select => self.select_at(self.cursor),
            Action::FetchStarted => {
                // The fetch trigger is disabled while a request is in
                // flight, so a second activation is a no-op.
                if !self.loading {
                    self.loading = true;
                    self.error = None;
                }
            }
            Action::FetchFinished(Ok(repo)) => {
                self.loading = false;
                self.error = None;
                self.repo = Some(repo);
            }
            Action::FetchFinished(Err(err)) => {
                self.loading = false;
                self.repo = None;
                self.error = Some(err.to_string());
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Label for the fetch control, mirroring its three states.
    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Fetching..."
        } else if self.repo.is_some() {
            "Fetch Another Repository"
        } else {
            "Fetch Repository"
        }
    }

    pub fn can_fetch(&self) -> bool {
        !self.loading
    }

    /// Title of the confirmed selection, for the selector placeholder line.
    pub fn selected_title(&self) -> Option<&str> {
        match (&self.catalog, self.selected) {
            (Catalog::Ready(languages), Some(idx)) => {
                languages.get(idx).map(|l| l.title.as_str())
            }
            _ => None,
        }
    }

    fn catalog_len(&self) -> Option<usize> {
        match &self.catalog {
            Catalog::Ready(languages) => Some(languages.len()),
            _ => None,
        }
    }

    fn find_language(&self, name: &str) -> Option<usize> {
        match &self.catalog {
            Catalog::Ready(languages) => languages
                .iter()
                .position(|l| l.value.eq_ignore_ascii_case(name)),
            _ => None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let Some(len) = self.catalog_len() else {
            return;
        };
        if len == 0 {
            return;
        }
        let max = (len - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    fn select_at(&mut self, idx: usize) {
        let Catalog::Ready(languages) = &self.catalog else {
            return;
        };
        let Some(language) = languages.get(idx) else {
            return;
        };
        // "All Languages" maps to an empty filter, i.e. unfiltered search.
        self.filter = if language.value == ALL_LANGUAGES_VALUE {
            String::new()
        } else {
            language.value.clone()
        };
        self.selected = Some(idx);
        self.repo = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Language> {
        vec![
            Language {
                title: "All Languages".into(),
                value: "all".into(),
            },
            Language {
                title: "Go".into(),
                value: "Go".into(),
            },
            Language {
                title: "Rust".into(),
                value: "Rust".into(),
            },
        ]
    }

    fn ready_app() -> App {
        let mut app = App::new(None);
        app.update(Action::CatalogLoaded(Ok(catalog())));
        app
    }

    fn repo(name: &str) -> Repo {
        Repo {
            name: name.to_string(),
            full_name: format!("someone/{name}"),
            description: None,
            stargazers_count: 5,
            forks_count: 1,
            open_issues_count: 0,
            html_url: format!("http://{name}"),
            language: None,
        }
    }

    #[test]
    fn all_languages_selection_maps_to_empty_filter() {
        let mut app = ready_app();
        app.update(Action::Select);
        assert_eq!(app.filter, "");
        assert_eq!(app.selected_title(), Some("All Languages"));
    }

    #[test]
    fn concrete_selection_sets_filter() {
        let mut app = ready_app();
        app.update(Action::CursorDown);
        app.update(Action::Select);
        assert_eq!(app.filter, "Go");
    }

    #[test]
    fn selection_clears_repo_and_error_without_fetching() {
        let mut app = ready_app();
        app.update(Action::FetchFinished(Ok(repo("x"))));
        assert!(app.repo.is_some());

        app.update(Action::CursorDown);
        app.update(Action::Select);
        assert!(app.repo.is_none());
        assert!(app.error.is_none());
        assert!(!app.loading);

        app.update(Action::FetchFinished(Err(SampleError::Empty)));
        assert!(app.error.is_some());
        app.update(Action::Select);
        assert!(app.error.is_none());
    }

    #[test]
    fn fetch_failure_sets_error_and_clears_repo() {
        let mut app = ready_app();
        app.update(Action::FetchStarted);
        assert!(app.loading);
        app.update(Action::FetchFinished(Err(SampleError::Empty)));
        assert!(!app.loading);
        assert!(app.repo.is_none());
        let message = app.error.as_deref().unwrap();
        assert!(!message.is_empty());
    }

    #[test]
    fn fetch_success_stores_repo_and_clears_loading() {
        let mut app = ready_app();
        app.update(Action::FetchStarted);
        app.update(Action::FetchFinished(Ok(repo("x"))));
        assert!(!app.loading);
        assert_eq!(app.repo.as_ref().unwrap().name, "x");
        assert!(app.error.is_none());
    }

    #[test]
    fn loading_and_error_never_coexist() {
        let mut app = ready_app();
        app.update(Action::FetchFinished(Err(SampleError::Empty)));
        app.update(Action::FetchStarted);
        assert!(app.loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn button_label_cycles_through_states() {
        let mut app = ready_app();
        assert_eq!(app.button_label(), "Fetch Repository");
        app.update(Action::FetchStarted);
        assert_eq!(app.button_label(), "Fetching...");
        assert!(!app.can_fetch());
        app.update(Action::FetchFinished(Ok(repo("x"))));
        assert_eq!(app.button_label(), "Fetch Another Repository");
    }

    #[test]
    fn cursor_clamps_to_catalog_bounds() {
        let mut app = ready_app();
        app.update(Action::CursorUp);
        assert_eq!(app.cursor, 0);
        app.update(Action::CursorPage(1));
        assert_eq!(app.cursor, 2);
        app.update(Action::CursorHome);
        assert_eq!(app.cursor, 0);
        app.update(Action::CursorEnd);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn catalog_failure_degrades_selector() {
        let mut app = App::new(None);
        app.update(Action::CatalogLoaded(Err("Failed to fetch languages".into())));
        assert!(matches!(app.catalog, Catalog::Failed(_)));
        // The fetch control is still usable, unfiltered.
        assert!(app.can_fetch());
        app.update(Action::Select);
        assert_eq!(app.filter, "");
    }

    #[test]
    fn initial_language_is_applied_when_catalog_arrives() {
        let mut app = App::new(Some("rust".to_string()));
        app.update(Action::CatalogLoaded(Ok(catalog())));
        assert_eq!(app.filter, "Rust");
        assert_eq!(app.selected_title(), Some("Rust"));
    }
}
