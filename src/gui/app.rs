use crate::config::Config;
use crate::gui::board::{CairoSurface, SegmentRenderer};
use crate::gui::{theme, window};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

pub struct AppModel {
    pub renderer: SegmentRenderer,
    pub root: gtk::ApplicationWindow,
}

#[derive(Debug)]
pub enum AppMsg {
    Close,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = Config;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            add_css_class: theme::WINDOW_CLASS,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Close);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: theme::BOARD_CLASS,
            }
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        theme::load_css();
        window::apply_config(&root, &config.window);

        let model = AppModel {
            renderer: SegmentRenderer::default(),
            root: root.clone(),
        };

        let widgets = view_output!();

        let renderer = model.renderer;
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let mut surface = CairoSurface::new(cr);
                if let Err(e) = renderer.render(width as f64, height as f64, &mut surface) {
                    log::error!("Drawing error: {}", e);
                }
            });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Close => {
                log::debug!("Closing board window");
                self.root.close();
            }
        }
    }
}
