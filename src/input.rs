use std::sync::mpsc::Sender;

use arboard::Clipboard;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Runtime;

use crate::app::{Action, App};
use crate::config::Settings;
use crate::github::sample_repository;

/// Maps a key press to state actions. The fetch trigger spawns the sampler
/// on the runtime; its completion comes back through the action channel.
pub fn handle_key(
    key: KeyCode,
    app: &mut App,
    tx: &Sender<Action>,
    rt: &Runtime,
    client: &reqwest::Client,
    settings: &Settings,
) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.update(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => app.update(Action::CursorDown),
        KeyCode::PageUp => app.update(Action::CursorPage(-1)),
        KeyCode::PageDown => app.update(Action::CursorPage(1)),
        KeyCode::Home => app.update(Action::CursorHome),
        KeyCode::End => app.update(Action::CursorEnd),
        KeyCode::Enter => app.update(Action::Select),
        KeyCode::Char('f') | KeyCode::Char('F') => {
            // Disabled while a fetch is in flight; at most one request runs
            // at a time.
            if app.can_fetch() {
                app.update(Action::FetchStarted);
                let tx = tx.clone();
                let client = client.clone();
                let filter = app.filter.clone();
                let api_url = settings.api_url.clone();
                let max_page = settings.max_page;
                let per_page = settings.per_page;
                rt.spawn(async move {
                    let mut rng = StdRng::from_entropy();
                    let result = sample_repository(
                        &client, &api_url, &filter, max_page, per_page, &mut rng,
                    )
                    .await;
                    let _ = tx.send(Action::FetchFinished(result));
                });
            }
        }
        KeyCode::Char('c') => {
            // Copy the displayed repository URL, if any.
            if let Some(repo) = &app.repo {
                let mut clipboard = Clipboard::new().ok();
                if let Some(cb) = clipboard.as_mut() {
                    let _ = cb.set_text(repo.html_url.clone());
                }
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => app.update(Action::Quit),
        _ => {}
    }
}
