use crate::config::WindowConfig;
use gtk::prelude::*;
use gtk4 as gtk;

pub fn apply_config(window: &gtk::ApplicationWindow, config: &WindowConfig) {
    window.set_title(Some(config.title.as_str()));
    window.set_default_size(config.width.max(1), config.height.max(1));
}
