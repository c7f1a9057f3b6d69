use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::settings::{Dimensions, SettingsForm};

/// What the settings window produced: the edited form if the user clicked
/// Save, and the window size to remember either way.
pub struct SettingsOutcome {
    pub form: Option<SettingsForm>,
    pub size: Dimensions,
}

/// Show the settings window pre-filled with `current`.
pub fn show_settings_dialog(
    current: &SettingsForm,
    size: Dimensions,
    text_size: i32,
) -> SettingsOutcome {
    let (w, h) = (size.width.round() as i32, size.height.round() as i32);
    let mut dialog = Window::default()
        .with_size(w, h)
        .with_label("Daybook - Configuration")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(15, 15, w - 30, h - 30, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    section_header(&mut flex, "General Settings", text_size);
    let save_dir = labeled_input(&mut flex, "Save Directory:", &current.save_dir, text_size);

    section_header(&mut flex, "Theme Settings", text_size);
    let zoom = labeled_input(&mut flex, "Zoom", &current.zoom, text_size);
    let text = labeled_input(&mut flex, "Text Size", &current.text_size, text_size);
    let heading = labeled_input(&mut flex, "Header Size", &current.heading_size, text_size);

    // Filler takes the remaining height
    Frame::default();

    let mut buttons = Flex::default();
    buttons.set_type(FlexType::Row);
    Frame::default();
    let mut save_btn = Button::default().with_label("Save");
    buttons.fixed(&save_btn, 90);
    let mut cancel_btn = Button::default().with_label("Cancel");
    buttons.fixed(&cancel_btn, 90);
    buttons.end();
    flex.fixed(&buttons, 30);

    flex.end();
    dialog.end();
    dialog.make_resizable(true);
    dialog.show();

    let result = Rc::new(RefCell::new(None));

    let result_save = result.clone();
    let dialog_save = dialog.clone();
    save_btn.set_callback(move |_| {
        *result_save.borrow_mut() = Some(SettingsForm {
            save_dir: save_dir.value(),
            zoom: zoom.value(),
            text_size: text.value(),
            heading_size: heading.value(),
        });
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog);

    let form = result.borrow_mut().take();
    SettingsOutcome {
        form,
        size: Dimensions {
            width: dialog.w() as f32,
            height: dialog.h() as f32,
        },
    }
}

fn section_header(flex: &mut Flex, title: &str, text_size: i32) {
    let mut header = Frame::default().with_label(title);
    header.set_label_font(Font::HelveticaBold);
    header.set_label_size(text_size + 4);
    header.set_align(Align::Left | Align::Inside);
    flex.fixed(&header, text_size + 16);
}

fn labeled_input(flex: &mut Flex, title: &str, value: &str, text_size: i32) -> Input {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);

    let mut label = Frame::default().with_label(title);
    label.set_label_size(text_size);
    label.set_align(Align::Left | Align::Inside);
    row.fixed(&label, 140);

    let mut input = Input::default();
    input.set_value(value);
    input.set_text_size(text_size);

    row.end();
    flex.fixed(&row, text_size + 14);
    input
}
