//! Main event loop.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, info};

use crate::app::App;
use crate::error::TuiError;
use crate::terminal::Terminal;

/// Drive `app` until it asks to quit or the input stream ends.
pub async fn run(mut app: App) -> Result<(), TuiError> {
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    info!("event loop started");

    loop {
        if app.take_pending_load() {
            app.begin_load();
            terminal.draw(&app)?;
            app.finish_load().await;
        }

        terminal.draw(&app)?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                app.handle_key(key).await;
            }
            Some(Ok(Event::Resize(width, height))) => {
                debug!("resized to {width}x{height}");
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e.into()),
            None => break,
        }
    }

    info!("event loop stopped");
    Ok(())
}
