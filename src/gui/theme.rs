use gtk::gdk;
use gtk4 as gtk;

pub const WINDOW_CLASS: &str = "dartboard-window";
pub const BOARD_CLASS: &str = "dartboard-drawing-area";

/// Fills the area the board leaves uncovered when the window is not square.
const BACKGROUND: &str = "#1e1e1e";

fn stylesheet() -> String {
    format!(".{WINDOW_CLASS}, .{BOARD_CLASS} {{ background-color: {BACKGROUND}; }}")
}

pub fn load_css() {
    let Some(display) = gdk::Display::default() else {
        log::warn!("No display available, skipping window stylesheet");
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_data(&stylesheet());
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
