use crate::config::Config;
use crate::submission::SubmissionSink;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Runs the form until the user quits.
pub fn run(config: &Config, sink: Box<dyn SubmissionSink>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(Duration::from_millis(config.ui.poll_interval_ms));
    let mut app = App::new(config.ui.initial_tab, sink);
    tracing::info!(tab = app.active_tab().as_str(), "Profile form started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Paste(text)) => app.on_paste(&text),
            Some(AppEvent::Resize) | None => {}
        }
    }

    tracing::info!("Profile form closed");
    drop(guard);
    Ok(())
}
