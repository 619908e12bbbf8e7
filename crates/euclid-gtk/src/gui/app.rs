use crate::config;
use crate::events::AppEvent;
use crate::gui::render::{CairoRenderer, ThumbImageCache};
use crate::gui::theme;
use euclid::{Bounds, Control, Point};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub control: Rc<RefCell<Control>>,
    pub value: f64,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    ValueChanged(f64),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

pub struct AppInit {
    pub control: Control,
    pub config_path: PathBuf,
    pub rx: async_channel::Receiver<AppEvent>,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Euclid"),
            set_default_width: 360,
            set_default_height: 400,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "euclid-drawing-area",
                },

                gtk::Label {
                    add_css_class: "euclid-value",
                    #[watch]
                    set_label: &format!("{:.2}", model.value),
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            mut control,
            config_path,
            rx,
        } = init;

        theme::load_css();

        let value_sender = sender.clone();
        control.subscribe(move |value| value_sender.input(AppMsg::ValueChanged(value)));

        let model = AppModel {
            value: control.value(),
            control: Rc::new(RefCell::new(control)),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let control_resize = model.control.clone();
        widgets.drawing_area.connect_resize(move |_, width, height| {
            control_resize
                .borrow_mut()
                .set_bounds(Bounds::from_size(f64::from(width), f64::from(height)));
        });

        let control_draw = model.control.clone();
        let mut images = ThumbImageCache::default();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                let mut renderer = CairoRenderer::new(cr, &mut images);
                if let Err(e) = control_draw.borrow_mut().render(&mut renderer) {
                    log::error!("Drawing error: {}", e);
                }
            });

        widgets
            .drawing_area
            .add_controller(pointer_controller(&model.control, &widgets.drawing_area));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ValueChanged(value) => {
                self.value = value;
            }
            AppMsg::ConfigReload => {
                let result = config::load_config(&self.config_path)
                    .and_then(|c| c.apply(&mut self.control.borrow_mut()));
                match result {
                    Ok(()) => log::info!("Configuration reloaded"),
                    Err(e) => log::error!("Failed to reload config: {}", e),
                }
                if self.control.borrow_mut().take_redraw() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}

/// Feeds drag gestures on `area` into the control. A pointer-down the control does not accept
/// is denied so the gesture can go to someone else.
fn pointer_controller(
    control: &Rc<RefCell<Control>>,
    area: &gtk::DrawingArea,
) -> gtk::GestureDrag {
    let drag = gtk::GestureDrag::new();

    let redraw = {
        let control = control.clone();
        let area = area.clone();
        move || {
            if control.borrow_mut().take_redraw() {
                area.queue_draw();
            }
        }
    };

    {
        let control = control.clone();
        let redraw = redraw.clone();
        drag.connect_drag_begin(move |gesture, x, y| {
            let accepted = control.borrow_mut().pointer_down(Point::new(x, y));
            gesture.set_state(if accepted {
                gtk::EventSequenceState::Claimed
            } else {
                gtk::EventSequenceState::Denied
            });
            redraw();
        });
    }

    {
        let control = control.clone();
        let redraw = redraw.clone();
        drag.connect_drag_update(move |gesture, dx, dy| {
            if let Some((x, y)) = gesture.start_point() {
                control.borrow_mut().pointer_move(Point::new(x + dx, y + dy));
                redraw();
            }
        });
    }

    {
        let control = control.clone();
        drag.connect_drag_end(move |_, _, _| control.borrow_mut().pointer_up());
    }

    {
        let control = control.clone();
        drag.connect_cancel(move |_, _| control.borrow_mut().pointer_cancel());
    }

    drag
}
