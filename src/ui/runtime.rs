use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::lifetime::TeardownToken;
use crate::source::UserSource;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::profile::ProfileContainer;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive TUI until the user quits.
///
/// Blocks the calling thread. Must run inside a tokio runtime context
/// (e.g. `tokio::task::spawn_blocking`) because the container spawns its
/// fetch on the runtime.
pub fn run(config: &Config, source: Arc<dyn UserSource>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let input_stop = TeardownToken::new();
    let events = EventHandler::new(tick_rate, input_stop.clone());

    let mut app = App::new(ProfileContainer::new(source));

    // First frame goes out before the fetch can land.
    terminal.draw(|frame| draw(frame, &app))?;
    app.activate();

    let result = loop {
        if app.sync() {
            tracing::debug!("profile state -> {}", app.profile_state().label());
        }
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    app.teardown();
    input_stop.cancel();
    drop(guard);
    result
}
