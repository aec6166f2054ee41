use crate::profile::ActiveTab;
use crate::ui::app::App;
use crate::ui::profile::ProfileIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The acknowledgment is modal, like a browser alert.
    if app.ack_dialog().is_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_ack();
        }
        return;
    }

    if let KeyCode::F(n @ 1..=3) = key.code {
        app.select_tab(ActiveTab::ALL[usize::from(n) - 1]);
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.dispatch_profile(ProfileIntent::NextTab);
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.dispatch_profile(ProfileIntent::PreviousTab);
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit_active();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_profile(ProfileIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_profile(ProfileIntent::FocusPrevious),
        _ => app.on_key(key),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
}
