use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text: Color,
    pub text_highlight: Color,

    // Specific components
    pub repo_name: Style,
    pub repo_full_name: Style,
    pub repo_description: Style,
    pub repo_url: Style,
    pub badge: Style,
    pub placeholder: Style,
    pub error: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub footer: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            blurred_border: Color::DarkGray,
            text: Color::White,
            text_highlight: Color::Yellow,

            repo_name: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            repo_full_name: Style::default().fg(Color::DarkGray),
            repo_description: Style::default().fg(Color::White),
            repo_url: Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            badge: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            button: Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::Gray).bg(Color::DarkGray).add_modifier(Modifier::DIM),
            footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        }
    }
}
