use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, list_shortcut: Option<char>, theme: &Theme) {
    let area = centered_rect(56, 18, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" mntui — Keybindings (? or F1 to close) ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let shortcut_line = match list_shortcut {
        Some(c) => key_line(theme, &format!("  {}", c), "Hide / show the mount list"),
        None    => key_line(theme, "  (none)", "List shortcut disabled in config"),
    };

    let lines = vec![
        key_line(theme, "Global", ""),
        key_line(theme, "  q / Esc / Ctrl-C", "Quit"),
        key_line(theme, "  ? / F1",           "Toggle this help"),
        key_line(theme, "  t",                "Cycle color theme"),
        shortcut_line,
        Line::from(""),
        key_line(theme, "Mount list", ""),
        key_line(theme, "  ↑↓ / j k",        "Select entry"),
        key_line(theme, "  g / G",            "Jump first / last"),
        key_line(theme, "  Enter / Space",    "Mount or unmount the selected entry"),
        key_line(theme, "  r",                "Re-read the live mount table now"),
        Line::from(""),
        key_line(theme, "CLI modes", ""),
        key_line(theme, "  --list",           "Print entries and state, exit"),
        key_line(theme, "  --json",           "JSON snapshot, exit"),
        key_line(theme, "  --toggle <MP>",    "One-shot mount/unmount, exit"),
        key_line(theme, "  --config",         "Show config path and values, exit"),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn key_line(theme: &Theme, key: &str, desc: &str) -> Line<'static> {
    if desc.is_empty() {
        return Line::from(Span::styled(key.to_string(), theme.title));
    }
    Line::from(vec![
        Span::styled(format!("{:<20}", key), theme.ok),
        Span::styled(desc.to_string(), theme.text),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
