use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, Catalog};
use crate::theme::Theme;
use crate::utils::format_count;

/// Renders the whole screen: language selector on the left, fetch control
/// and result pane on the right, key footer at the bottom.
pub fn render(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // language selector
            Constraint::Min(1),     // fetch control + result
        ])
        .split(vertical_chunks[0]);

    render_selector(f, app, theme, columns[0]);
    render_result_pane(f, app, theme, columns[1]);

    let footer = Paragraph::new(
        "↑/↓ or j/k Move | PgUp/PgDn Jump | Enter Select | f Fetch | c Copy URL | q Quit",
    )
    .block(Block::default().borders(Borders::ALL))
    .style(theme.footer);
    f.render_widget(footer, vertical_chunks[1]);
}

fn render_selector(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title = match app.selected_title() {
        Some(title) => format!("Language: {}", title),
        None => "Select a language".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.focus_border));

    match &app.catalog {
        Catalog::Loading => {
            let loading = Paragraph::new("Loading languages...")
                .block(block)
                .alignment(Alignment::Center)
                .style(theme.placeholder);
            f.render_widget(loading, area);
        }
        Catalog::Failed(_) => {
            // No retry affordance; the selector stays unusable for this
            // session and fetches run unfiltered.
            let failed = Paragraph::new("Failed to load languages. Please try again later.")
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(theme.error);
            f.render_widget(failed, area);
        }
        Catalog::Ready(languages) => {
            let items: Vec<ListItem> = languages
                .iter()
                .enumerate()
                .map(|(i, lang)| {
                    let confirmed = app.selected == Some(i);
                    let style = if confirmed {
                        Style::default()
                            .fg(theme.text_highlight)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    let marker = if confirmed { "✓ " } else { "  " };
                    ListItem::new(Line::from(vec![
                        Span::raw(marker),
                        Span::styled(lang.title.clone(), style),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_symbol("→");
            let mut state = ListState::default();
            state.select(Some(app.cursor));
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn render_result_pane(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_button(f, app, theme, chunks[0]);

    if let Some(error) = &app.error {
        let error_line = Paragraph::new(error.as_str())
            .block(Block::default().borders(Borders::ALL).style(Style::default().fg(theme.blurred_border)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(theme.error);
        f.render_widget(error_line, chunks[1]);
    } else if app.repo.is_some() {
        render_repo_card(f, app, theme, chunks[1]);
    } else {
        let hint = Paragraph::new("Discover random GitHub repositories by language")
            .block(Block::default().borders(Borders::ALL).style(Style::default().fg(theme.blurred_border)))
            .alignment(Alignment::Center)
            .style(theme.placeholder);
        f.render_widget(hint, chunks[1]);
    }
}

fn render_button(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let style = if app.can_fetch() {
        theme.button
    } else {
        theme.button_disabled
    };
    let button = Paragraph::new(format!(" {} (f) ", app.button_label()))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(button, area);
}

fn render_repo_card(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(repo) = &app.repo else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(repo.name.clone(), theme.repo_name),
            Span::raw("  "),
            Span::styled(repo.full_name.clone(), theme.repo_full_name),
        ]),
        Line::from(""),
    ];

    match &repo.description {
        Some(description) if !description.is_empty() => {
            lines.push(Line::from(Span::styled(
                description.clone(),
                theme.repo_description,
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "No description provided.",
                theme.placeholder,
            )));
        }
    }
    lines.push(Line::from(""));

    let mut badges = vec![
        Span::styled(format!("★ {}", format_count(repo.stargazers_count)), theme.badge),
        Span::raw("   "),
        Span::styled(format!("⑂ {}", format_count(repo.forks_count)), theme.badge),
        Span::raw("   "),
        Span::styled(
            format!("◌ {} open issues", format_count(repo.open_issues_count)),
            theme.badge,
        ),
    ];
    if let Some(language) = &repo.language {
        badges.push(Span::raw("   "));
        badges.push(Span::styled(
            language.clone(),
            Style::default().fg(theme.text_highlight),
        ));
    }
    lines.push(Line::from(badges));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(repo.html_url.clone(), theme.repo_url)));

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Repository")
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.focus_border)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}
