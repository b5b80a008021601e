use crate::catalog::Catalog;
use crate::input::{handle_key, Action};
use crate::ui::theme::{Theme, ThemeVariant};
use crate::ui::{dashboard, help};
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

const POLL_TIMEOUT: Duration = Duration::from_millis(150);

/// The presenter: owns the catalog, keeps the displayed list in sync with
/// it, and routes user actions back into it. Single-threaded — mount events
/// and key presses are both drained inside the one loop in `run`.
pub struct App {
    pub theme:         Theme,
    pub theme_variant: ThemeVariant,

    pub catalog:    Catalog,
    pub list_state: ListState,

    // Visibility toggle for the mount list (configured shortcut key)
    pub list_shortcut: Option<char>,
    pub show_list:     bool,

    pub show_help: bool,

    // Fallback refresh (wired from --interval / config)
    refresh_tick: Duration,
    last_refresh: Instant,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        catalog: Catalog,
        list_shortcut: Option<char>,
        initial_theme: ThemeVariant,
        interval_ms: u64,
    ) -> Self {
        let mut list_state = ListState::default();
        if !catalog.entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            theme:         Theme::for_variant(initial_theme),
            theme_variant: initial_theme,
            catalog,
            list_state,
            list_shortcut,
            show_list: true,
            show_help: false,
            refresh_tick: Duration::from_millis(interval_ms.max(500)),
            last_refresh: Instant::now(),
            should_quit:  false,
        }
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        self.catalog.start_watching();

        loop {
            let show_help  = self.show_help;
            let theme_snap = self.theme.clone();
            let shortcut   = self.list_shortcut;

            terminal.draw(|f| {
                dashboard::render(f, self);
                if show_help {
                    help::render(f, shortcut, &theme_snap);
                }
            })?;

            if event::poll(POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = handle_key(key, self.list_shortcut);
                        self.handle_action(action);
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }

            // System mount events: one refresh per drained batch, list
            // rebuilds on the next draw.
            self.catalog.drain_events();

            if self.last_refresh.elapsed() >= self.refresh_tick {
                self.catalog.refresh();
                self.last_refresh = Instant::now();
            }
        }

        // Tear the watch down before the terminal goes away so no event
        // fires into a destroyed display.
        self.catalog.stop_watching();
        Ok(())
    }

    // ── Input dispatch ────────────────────────────────────────────────

    fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit | Action::ShowHelp => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::ShowHelp => self.show_help = true,

            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
            }

            Action::ToggleList => self.show_list = !self.show_list,

            Action::SelectUp   => self.select_delta(-1),
            Action::SelectDown => self.select_delta(1),

            Action::JumpTop => {
                if !self.catalog.entries.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            Action::JumpBottom => {
                let n = self.catalog.entries.len();
                if n > 0 {
                    self.list_state.select(Some(n - 1));
                }
            }

            Action::Toggle => {
                if self.show_list {
                    if let Some(idx) = self.list_state.selected() {
                        // Optimistic flip lands before the next draw, so the
                        // row updates without waiting on a refresh.
                        self.catalog.toggle(idx);
                    }
                }
            }

            Action::Refresh => {
                self.catalog.refresh();
                self.last_refresh = Instant::now();
            }

            Action::None => {}
        }
    }

    fn select_delta(&mut self, delta: i32) {
        let n = self.catalog.entries.len();
        if n == 0 || !self.show_list {
            return;
        }
        let cur  = self.list_state.selected().unwrap_or(0) as i32;
        let next = (cur + delta).clamp(0, n as i32 - 1) as usize;
        self.list_state.select(Some(next));
    }
}
