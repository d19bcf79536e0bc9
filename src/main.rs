// src/main.rs
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal,
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;

use reporoulette::app::{Action, App};
use reporoulette::config::Settings;
use reporoulette::input::handle_key;
use reporoulette::languages::fetch_languages;
use reporoulette::theme::Theme;
use reporoulette::ui;

#[derive(Parser)]
#[command(name = "reporoulette", version, about = "Discover random popular GitHub repositories by language")]
struct Cli {
    /// Preselect a language filter, e.g. --language rust
    #[arg(short, long)]
    language: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new()?;

    let client = reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    let rt = Runtime::new()?;
    let (tx, rx) = mpsc::channel::<Action>();

    let mut app = App::new(cli.language);

    // Catalog load runs once per session, at startup.
    {
        let tx = tx.clone();
        let client = client.clone();
        let url = settings.languages_url.clone();
        rt.spawn(async move {
            let result = fetch_languages(&client, &url).await;
            let _ = tx.send(Action::CatalogLoaded(result.map_err(|e| e.to_string())));
        });
    }

    terminal::enable_raw_mode()?;
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let theme = Theme::default();

    loop {
        // Drain async completions before drawing.
        while let Ok(action) = rx.try_recv() {
            app.update(action);
        }

        terminal.draw(|f| {
            ui::render(f, &app, &theme);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key_event) = event::read()? {
                handle_key(key_event.code, &mut app, &tx, &rt, &client, &settings);
            }
        }

        if app.should_quit {
            break;
        }
    }

    terminal::disable_raw_mode()?;
    terminal.clear()?;
    Ok(())
}
