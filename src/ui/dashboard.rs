use crate::app::App;
use crate::ui::{footer::render_footer, mount_list::render_mount_list};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let area  = f.area();
    let theme = app.theme.clone();

    // ── Root: header | body | footer ───────────────────────────────
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header: title + mounted badge + clock ──────────────────────
    let mounted = app.catalog.mounted_count();
    let total   = app.catalog.entries.len();

    let left  = format!(" mntui v0.1 — {} ", app.theme_variant.name());
    let badge = format!("  {}/{} mounted  ", mounted, total);
    let right = format!(" {} ", Local::now().format("%H:%M:%S"));

    let badge_style = if mounted > 0 { theme.ok } else { theme.text_dim };
    let pad = (area.width as usize).saturating_sub(left.len() + badge.len() + right.len());

    let header = Line::from(vec![
        Span::styled(left, theme.title),
        Span::styled(badge, badge_style),
        Span::styled(" ".repeat(pad), theme.header),
        Span::styled(right, theme.text_dim),
    ]);
    f.render_widget(Paragraph::new(header).style(theme.header), root[0]);

    // ── Body: mount list, or a one-line summary when hidden ───────
    if app.show_list {
        render_mount_list(
            f, root[1], &app.catalog.entries, &mut app.list_state, mounted, &theme,
        );
    } else {
        let summary = Paragraph::new(Line::from(vec![
            Span::styled("  list hidden — ", theme.text_dim),
            Span::styled(format!("{}/{} mounted", mounted, total), theme.text),
        ]));
        f.render_widget(summary, root[1]);
    }

    // ── Footer ─────────────────────────────────────────────────────
    let selected_mounted = app
        .list_state
        .selected()
        .and_then(|i| app.catalog.entries.get(i))
        .map(|e| e.mounted)
        .filter(|_| app.show_list);
    render_footer(
        f, root[2], app.show_list, app.list_shortcut, selected_mounted, &theme,
    );
}
