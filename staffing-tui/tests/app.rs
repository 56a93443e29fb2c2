use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use staffing_lib::model::{Occupation, Portal, Screen};
use staffing_lib::seed::seed_if_empty;
use staffing_lib::store::{Repository, Store};
use staffing_table::LineKind;
use staffing_tui::App;
use staffing_tui::app::{Mode, Tone};
use staffing_tui::settings::{AppSettings, PORTAL, SettingsProvider};

async fn app_on(portal: Portal) -> (App, Store, SettingsProvider) {
    let store = Store::in_memory();
    seed_if_empty(&store).await.unwrap();
    let settings = SettingsProvider::in_memory();
    let config = AppSettings {
        portal,
        latency_ms: 0,
        ..AppSettings::default()
    };
    let mut app = App::new(store.clone(), settings.clone(), &config);
    app.load_if_pending().await;
    (app, store, settings)
}

async fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).await;
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

fn shown(app: &App) -> usize {
    app.current().map(|s| s.shown_count()).unwrap_or(0)
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_first_screen_loads_on_start() {
    let (app, store, _) = app_on(Portal::Admin).await;
    let occupations = store.repository::<Occupation>().list().await.unwrap();

    assert_eq!(app.active_screen(), Some(Screen::Occupations));
    assert_eq!(shown(&app), occupations.len());
    assert!(!app.current().unwrap().is_loading());
}

#[tokio::test]
async fn test_tab_cycles_screens_and_reloads() {
    let (mut app, _, _) = app_on(Portal::Admin).await;

    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.active_screen(), Some(Screen::Vendors));
    assert!(app.take_pending_load());
    assert!(!app.take_pending_load());

    press(&mut app, KeyCode::BackTab).await;
    press(&mut app, KeyCode::BackTab).await;
    assert_eq!(app.active_screen(), Some(Screen::Candidates));
}

#[tokio::test]
async fn test_begin_load_shows_skeleton() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::Char('r')).await;
    assert!(app.take_pending_load());

    app.begin_load();
    let painted = app.render(60, 20);
    assert!(painted.iter().any(|l| l.tone == Tone::Table(LineKind::Skeleton)));

    app.finish_load().await;
    assert!(!app.current().unwrap().is_loading());
}

#[tokio::test]
async fn test_portal_cycle_is_persisted() {
    let (mut app, _, settings) = app_on(Portal::Admin).await;

    press(&mut app, KeyCode::Char('p')).await;

    assert_eq!(app.portal(), Portal::Organization);
    assert_eq!(app.screens(), Portal::Organization.screens().to_vec());
    assert_eq!(
        settings.get::<Portal>(PORTAL).await.unwrap(),
        Some(Portal::Organization)
    );
}

#[tokio::test]
async fn test_quit_keys() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .await;
    assert!(app.should_quit());

    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}

// ============================================================================
// Table keys
// ============================================================================

#[tokio::test]
async fn test_number_key_sorts_column() {
    let (mut app, _, _) = app_on(Portal::Admin).await;

    press(&mut app, KeyCode::Char('1')).await;

    let painted = app.render(120, 30);
    let header = painted
        .iter()
        .find(|l| l.tone == Tone::Table(LineKind::Header))
        .unwrap();
    assert!(header.text.contains("Title ▲"));
}

#[tokio::test]
async fn test_number_key_past_last_column() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::Char('9')).await;
    assert_eq!(app.toast(), Some("Column 9 cannot be sorted"));
}

#[tokio::test]
async fn test_select_all_then_delete() {
    let (mut app, store, _) = app_on(Portal::Admin).await;
    let total = shown(&app);

    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.current().unwrap().selected_count(), total);

    press(&mut app, KeyCode::Char('d')).await;
    assert_eq!(app.toast(), Some(format!("Deleted {total} records").as_str()));
    assert_eq!(shown(&app), 0);
    assert_eq!(app.current().unwrap().selected_count(), 0);
    assert!(store.repository::<Occupation>().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_without_selection() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::Char('d')).await;
    assert_eq!(app.toast(), Some("Nothing selected"));
}

#[tokio::test]
async fn test_cycle_status_updates_store() {
    let (mut app, store, _) = app_on(Portal::Admin).await;
    let repo = store.repository::<Occupation>();
    let first = repo.list().await.unwrap().remove(0);

    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Char('x')).await;

    let saved = repo.get(&first.id).await.unwrap().unwrap();
    assert_eq!(saved.active, !first.active);
    assert_eq!(
        app.toast().map(str::to_string),
        Some(format!("{} is now {}", first.title, saved.status_label()))
    );
}

#[tokio::test]
async fn test_read_only_portal() {
    let (mut app, _, _) = app_on(Portal::Candidate).await;

    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Char('x')).await;
    assert_eq!(app.toast(), Some("The Candidate portal is read-only"));

    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.current().unwrap().selected_count(), 0);
}

#[tokio::test]
async fn test_enter_expands_cursor_row() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    let painted = app.render(120, 30);
    assert!(painted.iter().any(|l| l.tone == Tone::Table(LineKind::Detail)));
}

// ============================================================================
// Filter
// ============================================================================

#[tokio::test]
async fn test_filter_mode_narrows_rows() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    let total = shown(&app);

    press(&mut app, KeyCode::Char('/')).await;
    assert_eq!(app.mode(), Mode::Filter);
    type_text(&mut app, "forklift").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.mode(), Mode::Browse);
    assert_eq!(app.current().unwrap().filter(), "forklift");
    assert!(shown(&app) >= 1);
    assert!(shown(&app) < total);

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(shown(&app), total);
}

#[tokio::test]
async fn test_filter_keys_do_not_trigger_actions() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::Char('/')).await;
    type_text(&mut app, "qd").await;
    press(&mut app, KeyCode::Backspace).await;

    assert!(!app.should_quit());
    assert_eq!(app.current().unwrap().filter(), "q");
    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current().unwrap().filter(), "");
}

// ============================================================================
// Layout
// ============================================================================

fn status_text(app: &App) -> String {
    app.render(200, 20)
        .into_iter()
        .find(|l| l.tone == Tone::Status)
        .map(|l| l.text)
        .unwrap_or_default()
}

async fn open_screen(app: &mut App, tabs: usize) {
    for _ in 0..tabs {
        press(app, KeyCode::Tab).await;
    }
    app.load_if_pending().await;
}

#[tokio::test]
async fn test_status_line_shows_category_totals() {
    let (app, _, _) = app_on(Portal::Admin).await;
    let status = status_text(&app);

    assert!(status.contains("7 rows"));
    assert!(status.contains("Healthcare 2 @ $45.62/hr"));
    assert!(status.contains("IT 1"));
}

#[tokio::test]
async fn test_status_line_shows_required_compliance() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    open_screen(&mut app, 2).await;

    assert_eq!(app.active_screen(), Some(Screen::Compliance));
    assert!(status_text(&app).contains("5 of 6 required"));
}

#[tokio::test]
async fn test_status_line_shows_candidates_per_status() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    open_screen(&mut app, 3).await;

    assert_eq!(app.active_screen(), Some(Screen::Candidates));
    assert!(
        status_text(&app).contains("Applied 2 · Screening 2 · Placed 2 · Inactive 2")
    );
}

#[tokio::test]
async fn test_status_line_has_no_totals_for_vendors() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    open_screen(&mut app, 1).await;

    let status = status_text(&app);
    assert!(status.trim_end().ends_with("0 selected"));
}

#[tokio::test]
async fn test_render_fills_terminal() {
    let (app, _, _) = app_on(Portal::Admin).await;
    let painted = app.render(80, 12);

    assert_eq!(painted.len(), 12);
    assert!(
        painted
            .iter()
            .all(|l| staffing_table::text::display_width(&l.text) == 80)
    );
    assert!(painted[0].text.contains("Admin portal"));
    assert!(painted[1].text.contains("[Occupations]"));
}

#[tokio::test]
async fn test_cursor_stays_visible_when_scrolling() {
    let (mut app, _, _) = app_on(Portal::Admin).await;
    press(&mut app, KeyCode::End).await;

    let painted = app.render(100, 8);
    assert!(painted.iter().any(|l| matches!(
        l.tone,
        Tone::Table(LineKind::Row { focused: true, .. })
    )));
}
