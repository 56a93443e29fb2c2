//! Portal state and key handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};

use staffing_lib::model::{Portal, Screen};
use staffing_lib::store::Store;
use staffing_table::text::fit;
use staffing_table::{Alignment, EventResult, LineKind, TableAction};

use crate::screens::{ListScreen, build_screen};
use crate::settings::{self, AppSettings, SettingsProvider};

/// Lines above the table: title, tabs and filter.
const HEADER_LINES: usize = 3;
/// Lines below the table: counts and toast.
const FOOTER_LINES: usize = 2;

const KEY_HINTS: &str =
    "tab screen  p portal  1-9 sort  space select  a all  enter details  / filter  x status  d delete  r reload  q quit";

/// Whether keys go to the table or to the filter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Filter,
}

/// How a painted line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Tabs,
    Filter,
    Table(LineKind),
    Status,
    Toast,
    Hint,
}

/// One terminal row, already padded to the full width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painted {
    pub tone: Tone,
    pub text: String,
}

impl Painted {
    fn new(tone: Tone, text: &str, width: usize) -> Self {
        Self {
            tone,
            text: fit(text, width, Alignment::Left),
        }
    }
}

pub struct App {
    store: Store,
    settings: SettingsProvider,
    portal: Portal,
    screens: Vec<Box<dyn ListScreen>>,
    active: usize,
    mode: Mode,
    toast: Option<String>,
    latency: Duration,
    pending_load: bool,
    quit: bool,
}

impl App {
    pub fn new(store: Store, settings: SettingsProvider, config: &AppSettings) -> Self {
        let mut app = Self {
            store,
            settings,
            portal: config.portal,
            screens: Vec::new(),
            active: 0,
            mode: Mode::Browse,
            toast: None,
            latency: Duration::from_millis(config.latency_ms),
            pending_load: true,
            quit: false,
        };
        app.build_screens();
        app
    }

    fn build_screens(&mut self) {
        let editable = self.portal.can_edit();
        self.screens = self
            .portal
            .screens()
            .iter()
            .map(|screen| build_screen(*screen, &self.store, editable))
            .collect();
        self.active = 0;
    }

    pub fn portal(&self) -> Portal {
        self.portal
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Screens of the current portal in tab order.
    pub fn screens(&self) -> Vec<Screen> {
        self.screens.iter().map(|s| s.screen()).collect()
    }

    pub fn active_screen(&self) -> Option<Screen> {
        self.current().map(|s| s.screen())
    }

    pub fn current(&self) -> Option<&dyn ListScreen> {
        self.screens.get(self.active).map(|s| s.as_ref())
    }

    fn current_mut(&mut self) -> Option<&mut Box<dyn ListScreen>> {
        self.screens.get_mut(self.active)
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("toast: {message}");
        self.toast = Some(message);
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    pub fn request_load(&mut self) {
        self.pending_load = true;
    }

    /// Returns true once per requested load.
    pub fn take_pending_load(&mut self) -> bool {
        std::mem::take(&mut self.pending_load)
    }

    /// Show the skeleton row on the current screen.
    pub fn begin_load(&self) {
        if let Some(screen) = self.current() {
            screen.set_loading(true);
        }
    }

    /// Wait out the simulated latency, then fetch the current screen's rows.
    pub async fn finish_load(&mut self) {
        tokio::time::sleep(self.latency).await;
        let Some(screen) = self.current_mut() else {
            return;
        };
        let result = screen.load().await;
        screen.set_loading(false);
        let title = screen.screen().title();
        if let Err(e) = result {
            warn!("failed to load {title}: {e}");
            self.set_toast(format!("Could not load {title}: {e}"));
        }
    }

    /// Load the current screen if a load is pending.
    pub async fn load_if_pending(&mut self) {
        if self.take_pending_load() {
            self.begin_load();
            self.finish_load().await;
        }
    }

    // -------------------------------------------------------------------------
    // Keys
    // -------------------------------------------------------------------------

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(key).await,
            Mode::Filter => self.handle_filter_key(key),
        }
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) {
        if let Some(action) = table_action_for(key.code) {
            self.table_action(action);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab => self.switch_screen(1),
            KeyCode::BackTab => self.switch_screen(self.screens.len().saturating_sub(1)),
            KeyCode::Char('p') => self.cycle_portal().await,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if !self.table_action(TableAction::SortAt(index)).is_consumed() {
                    self.set_toast(format!("Column {c} cannot be sorted"));
                }
            }
            KeyCode::Char('/') => self.mode = Mode::Filter,
            KeyCode::Esc => self.set_filter(String::new()),
            KeyCode::Char('x') => self.cycle_status().await,
            KeyCode::Char('d') => self.delete_selected().await,
            KeyCode::Char('r') => self.request_load(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let mut query = self.current().map(|s| s.filter().to_string()).unwrap_or_default();
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                self.set_filter(String::new());
            }
            KeyCode::Backspace => {
                query.pop();
                self.set_filter(query);
            }
            KeyCode::Char(c) => {
                query.push(c);
                self.set_filter(query);
            }
            _ => {}
        }
    }

    fn table_action(&self, action: TableAction<String>) -> EventResult {
        self.current()
            .map(|s| s.apply(action))
            .unwrap_or(EventResult::Ignored)
    }

    fn set_filter(&mut self, query: String) {
        if let Some(screen) = self.current_mut() {
            screen.set_filter(&query);
        }
    }

    fn switch_screen(&mut self, step: usize) {
        if self.screens.is_empty() {
            return;
        }
        self.active = (self.active + step) % self.screens.len();
        self.mode = Mode::Browse;
        self.request_load();
    }

    async fn cycle_portal(&mut self) {
        self.portal = self.portal.next();
        info!("switched to {} portal", self.portal.label());
        self.build_screens();
        self.mode = Mode::Browse;
        self.request_load();
        match self.settings.set(settings::PORTAL, &self.portal).await {
            Ok(()) => self.set_toast(format!("{} portal", self.portal.label())),
            Err(e) => {
                warn!("failed to save portal: {e}");
                self.set_toast(format!("{} portal (not saved: {e})", self.portal.label()));
            }
        }
    }

    fn ensure_editable(&mut self) -> bool {
        if self.portal.can_edit() {
            return true;
        }
        self.set_toast(format!("The {} portal is read-only", self.portal.label()));
        false
    }

    async fn cycle_status(&mut self) {
        if !self.ensure_editable() {
            return;
        }
        let Some(screen) = self.current_mut() else {
            return;
        };
        let result = screen.cycle_cursor_status().await;
        match result {
            Ok(Some((name, label))) => self.set_toast(format!("{name} is now {label}")),
            Ok(None) => self.set_toast("No row under the cursor"),
            Err(e) => {
                warn!("failed to update record: {e}");
                self.set_toast(format!("Update failed: {e}"));
            }
        }
    }

    async fn delete_selected(&mut self) {
        if !self.ensure_editable() {
            return;
        }
        let Some(screen) = self.current_mut() else {
            return;
        };
        let result = screen.delete_selected().await;
        match result {
            Ok(0) => self.set_toast("Nothing selected"),
            Ok(n) => self.set_toast(format!("Deleted {n} records")),
            Err(e) => {
                warn!("failed to delete records: {e}");
                self.set_toast(format!("Delete failed: {e}"));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Returns true if the current table changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.current().is_some_and(|s| s.take_dirty())
    }

    /// Lay out the whole screen as `height` rows of `width` columns.
    pub fn render(&self, width: u16, height: u16) -> Vec<Painted> {
        let w = width as usize;
        let mut out = vec![
            Painted::new(
                Tone::Title,
                &format!(" Staffing Portal · {} portal", self.portal.label()),
                w,
            ),
            Painted::new(Tone::Tabs, &self.tabs(), w),
            Painted::new(Tone::Filter, &self.filter_line(), w),
        ];

        let body_height = (height as usize).saturating_sub(HEADER_LINES + FOOTER_LINES);
        if let Some(screen) = self.current() {
            let lines = screen.render(width);
            out.extend(
                visible_table_lines(&lines, body_height)
                    .into_iter()
                    .map(|line| Painted {
                        tone: Tone::Table(line.kind),
                        text: line.text.clone(),
                    }),
            );
        }
        while out.len() < HEADER_LINES + body_height {
            out.push(Painted::new(Tone::Hint, "", w));
        }

        out.push(Painted::new(Tone::Status, &self.status_line(), w));
        match &self.toast {
            Some(toast) => out.push(Painted::new(Tone::Toast, &format!(" {toast}"), w)),
            None => out.push(Painted::new(Tone::Hint, &format!(" {KEY_HINTS}"), w)),
        }
        out.truncate(height as usize);
        out
    }

    fn tabs(&self) -> String {
        self.screens
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == self.active {
                    format!("[{}]", s.screen().title())
                } else {
                    format!(" {} ", s.screen().title())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn filter_line(&self) -> String {
        let query = self.current().map(|s| s.filter()).unwrap_or("");
        match self.mode {
            Mode::Filter => format!(" / {query}_"),
            Mode::Browse if query.is_empty() => String::new(),
            Mode::Browse => format!(" filter: {query}"),
        }
    }

    fn status_line(&self) -> String {
        let Some(screen) = self.current() else {
            return " No screens".to_string();
        };
        if screen.is_loading() {
            return format!(" Loading {}…", screen.screen().title());
        }
        let shown = screen.shown_count();
        let total = screen.total_count();
        let rows = if shown == total {
            format!("{total} rows")
        } else {
            format!("{shown} of {total} rows")
        };
        let mut line = format!(" {rows} · {} selected", screen.selected_count());
        if let Some(summary) = screen.summary() {
            line.push_str(" · ");
            line.push_str(&summary);
        }
        line
    }
}

/// Table actions bound directly to a key.
fn table_action_for(code: KeyCode) -> Option<TableAction<String>> {
    let action = match code {
        KeyCode::Up => TableAction::CursorUp,
        KeyCode::Down => TableAction::CursorDown,
        KeyCode::Home => TableAction::CursorFirst,
        KeyCode::End => TableAction::CursorLast,
        KeyCode::Char(' ') => TableAction::ToggleCursorRow,
        KeyCode::Char('a') => TableAction::ToggleAll,
        KeyCode::Enter => TableAction::ExpandCursorRow,
        _ => return None,
    };
    Some(action)
}

/// The table header plus a window of body lines that keeps the focused
/// row visible.
fn visible_table_lines(lines: &[staffing_table::Line], height: usize) -> Vec<&staffing_table::Line> {
    let Some((header, body)) = lines.split_first() else {
        return Vec::new();
    };
    if height == 0 {
        return Vec::new();
    }
    let room = height - 1;
    let focus = body
        .iter()
        .position(|l| matches!(l.kind, LineKind::Row { focused: true, .. }))
        .unwrap_or(0);
    let offset = (focus + 1).saturating_sub(room);
    std::iter::once(header)
        .chain(body.iter().skip(offset).take(room))
        .collect()
}
