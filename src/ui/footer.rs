use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    list_visible: bool,
    list_shortcut: Option<char>,
    selected_mounted: Option<bool>,
    theme: &Theme,
) {
    let toggle_desc = match selected_mounted {
        Some(true)  => "Unmount",
        Some(false) => "Mount",
        None        => "Toggle",
    };

    let mut base: Vec<(String, &str)> = vec![
        ("q".into(), "Quit"),
        ("↑↓/jk".into(), "Select"),
        ("Enter".into(), toggle_desc),
        ("r".into(), "Refresh"),
        ("t".into(), "Theme"),
        ("?".into(), "Help"),
    ];
    if let Some(c) = list_shortcut {
        let desc = if list_visible { "Hide list" } else { "Show list" };
        base.push((c.to_string(), desc));
    }

    let mut spans: Vec<Span> = vec![Span::styled(" ", theme.footer_bg)];
    for (key, desc) in &base {
        spans.push(Span::styled(format!(" {} ", key), theme.footer_key));
        spans.push(Span::styled(format!("{}  ", desc), theme.footer_text));
    }

    let hint = if list_visible {
        "Enter mounts or unmounts the selected entry"
    } else {
        "list hidden — state still tracks mount events"
    };
    spans.push(Span::styled("  \u{2502}  ", theme.footer_text));
    spans.push(Span::styled(hint, theme.footer_text));

    let line = Line::from(spans);
    let para = Paragraph::new(line).style(theme.footer_bg);
    f.render_widget(para, area);
}
