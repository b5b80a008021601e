use crate::models::entry::MountEntry;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_mount_list(
    f: &mut Frame,
    area: Rect,
    entries: &[MountEntry],
    state: &mut ListState,
    mounted_count: usize,
    theme: &Theme,
) {
    let title = format!("Mounts  ({} eligible, {} mounted)", entries.len(), mounted_count);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(title, theme.title));

    if entries.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let msg = Paragraph::new(Line::from(vec![
            Span::styled("  no user-mountable entries ", theme.warn),
            Span::styled("(need a 6-field fstab line with noauto + user options)", theme.text_dim),
        ]));
        f.render_widget(msg, inner);
        return;
    }

    let items: Vec<ListItem> = entries.iter().map(|e| entry_row(e, theme)).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, state);
}

fn entry_row(e: &MountEntry, theme: &Theme) -> ListItem<'static> {
    let (dot, dot_style) = if e.mounted {
        ("●", theme.ok)
    } else {
        ("○", theme.text_dim)
    };
    let state_style = if e.mounted { theme.ok } else { theme.text_dim };

    let spans = vec![
        Span::styled(format!("  {} ", dot), dot_style),
        Span::styled(format!("{:<24}", e.mount_point), theme.text),
        Span::styled(format!("{:<16}", e.short_device()), theme.text_dim),
        Span::styled(format!("{:<8}", e.fs_type), theme.text_dim),
        Span::styled(format!("{:<24}", e.options), theme.text_dim),
        Span::styled(format!("{:>9}", e.state_label()), state_style),
    ];

    ListItem::new(Line::from(spans))
}
