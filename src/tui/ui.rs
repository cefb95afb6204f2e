use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::controller::CopiedField;
use crate::faucets::FAUCETS;
use crate::tui::app::App;
use crate::tui::theme::Theme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the current application state
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, &theme, app, main_layout[0]);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[1]);

    render_wallet_panel(frame, &theme, app, content_layout[0]);
    render_faucet_panel(frame, &theme, app, content_layout[1]);

    render_footer(frame, &theme, main_layout[2]);
}

fn render_header(frame: &mut Frame, theme: &Theme, app: &App, area: Rect) {
    let status = if let Some((ref msg, is_error)) = app.status_message {
        let style = if is_error {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.success)
        };
        Span::styled(format!(" │ {}", msg), style)
    } else {
        Span::raw("")
    };

    let title_line = Line::from(vec![
        Span::styled("Ethereum Wallet Generator", theme.primary_style().bold()),
        status,
    ]);

    let header = Paragraph::new(title_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.primary_style()),
        );

    frame.render_widget(header, area);
}

fn render_wallet_panel(frame: &mut Frame, theme: &Theme, app: &App, area: Rect) {
    let now = Instant::now();
    let mut lines: Vec<Line> = Vec::new();

    if app.controller.is_generating() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} Generating...", spinner),
            theme.primary_style(),
        )));
    } else if let Some(wallet) = app.controller.wallet() {
        let copied = app.controller.copied_field(now);

        let mut address_label = vec![
            Span::styled("Public Address", theme.text_primary_style().bold()),
            Span::styled("  safe to share", theme.text_dim_style()),
        ];
        if copied == Some(CopiedField::Address) {
            address_label.push(Span::styled("  ✓ copied", Style::default().fg(theme.success)));
        }
        lines.push(Line::from(address_label));
        lines.push(Line::from(Span::styled(
            wallet.address.clone(),
            theme.text_primary_style(),
        )));
        lines.push(Line::from(""));

        let mut key_label = vec![
            Span::styled("Private Key", theme.text_primary_style().bold()),
            Span::styled("  keep secret", Style::default().fg(theme.warning)),
        ];
        if copied == Some(CopiedField::PrivateKey) {
            key_label.push(Span::styled("  ✓ copied", Style::default().fg(theme.success)));
        }
        lines.push(Line::from(key_label));
        if let Some(key) = app.controller.displayed_private_key() {
            lines.push(Line::from(Span::styled(key, theme.text_primary_style())));
        }
        lines.push(Line::from(Span::styled(
            if app.controller.private_key_visible() {
                "  v  Hide private key"
            } else {
                "  v  Reveal private key"
            },
            theme.text_dim_style(),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "⚠ Never share your private key. Anyone holding it",
            Style::default().fg(theme.warning),
        )));
        lines.push(Line::from(Span::styled(
            "  has full control over the wallet and its funds.",
            Style::default().fg(theme.warning),
        )));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No wallet yet.",
            theme.text_primary_style(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press g to generate one. Keys are created locally",
            theme.text_dim_style(),
        )));
        lines.push(Line::from(Span::styled(
            "and never leave this machine.",
            theme.text_dim_style(),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(" Wallet ", theme.primary_style()))
            .borders(Borders::ALL)
            .border_style(theme.primary_style()),
    );

    frame.render_widget(panel, area);
}

fn render_faucet_panel(frame: &mut Frame, theme: &Theme, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, faucet) in FAUCETS.iter().enumerate() {
        let selected = i == app.selected_faucet;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            theme.primary_style().bold()
        } else {
            theme.text_primary_style()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, theme.primary_style()),
            Span::styled(faucet.name, name_style),
            Span::styled(format!("  {}", faucet.network), theme.text_dim_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", faucet.url),
            theme.text_dim_style(),
        )));
    }

    lines.push(Line::from(""));
    if let Some(wallet) = app.controller.wallet() {
        lines.push(Line::from(Span::styled(
            format!("Paste your address ({}) into any", wallet.short_address()),
            theme.text_dim_style(),
        )));
        lines.push(Line::from(Span::styled(
            "faucet to receive test ETH.",
            theme.text_dim_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Test tokens have no real value.",
            theme.text_dim_style(),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(" Testnet Faucets ", theme.primary_style()))
            .borders(Borders::ALL)
            .border_style(theme.primary_style()),
    );

    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let hints = Line::from(Span::styled(
        "g Generate │ a Copy address │ p Copy key │ v Show/Hide │ ↑↓ Faucet │ c Copy URL │ q Quit",
        theme.text_dim_style(),
    ));

    let footer = Paragraph::new(hints).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.primary_style()),
    );

    frame.render_widget(footer, area);
}
