use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use crate::app::domain::theme::{color_names, size_names, DefaultTheme, ThemeResolver, ThemeVariant};
use crate::app::infrastructure::error::DetailedError;
use crate::ui::theme::{pixel_size, to_fltk_color};

/// Show a modal error: the summary as a heading, then the detail if any.
pub fn show_error_dialog<P: DefaultTheme>(
    err: &DetailedError,
    theme: &ThemeResolver<P>,
    variant: ThemeVariant,
) {
    let heading_size = pixel_size(theme, size_names::SUB_HEADING_TEXT);
    let text_size = pixel_size(theme, size_names::TEXT);
    let background = to_fltk_color(theme.color(color_names::BACKGROUND, variant));
    let foreground = to_fltk_color(theme.color(color_names::FOREGROUND, variant));

    let height = 80 + heading_size + if err.detail.is_some() { text_size * 3 } else { 0 };
    let mut dialog = Window::default()
        .with_size(460, height)
        .with_label("Daybook - Error")
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(background);

    let mut flex = Flex::new(15, 15, 430, height - 30, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    let mut summary = Frame::default();
    // '@' starts an FLTK symbol in labels
    summary.set_label(&format!("Error: {}", err.summary).replace('@', "@@"));
    summary.set_label_size(heading_size);
    summary.set_label_font(Font::HelveticaBold);
    summary.set_label_color(foreground);
    summary.set_align(Align::Left | Align::Inside);
    flex.fixed(&summary, heading_size + 8);

    if let Some(detail) = &err.detail {
        let mut details = Frame::default();
        details.set_label(&detail.replace('@', "@@"));
        details.set_label_size(text_size);
        details.set_label_color(foreground);
        details.set_align(Align::Left | Align::Inside | Align::Wrap);
    }

    let mut ok_btn = Button::default().with_label("Okay");
    flex.fixed(&ok_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    ok_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
