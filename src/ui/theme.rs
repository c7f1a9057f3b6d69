use fltk::{
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::theme::{
    color_names, size_names, DefaultTheme, FontChoice, Rgba, TextStyle, ThemeResolver,
    ThemeVariant,
};
use super::main_window::PageWidgets;

pub fn to_fltk_color(color: Rgba) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

pub fn to_fltk_font(font: FontChoice) -> Font {
    match font {
        FontChoice::Helvetica => Font::Helvetica,
        FontChoice::HelveticaBold => Font::HelveticaBold,
        FontChoice::HelveticaItalic => Font::HelveticaItalic,
        FontChoice::HelveticaBoldItalic => Font::HelveticaBoldItalic,
        FontChoice::Courier => Font::Courier,
        FontChoice::CourierBold => Font::CourierBold,
    }
}

/// Resolved size in whole pixels, as FLTK wants it.
pub fn pixel_size<P: DefaultTheme>(theme: &ThemeResolver<P>, name: &str) -> i32 {
    theme.size(name).round().max(1.0) as i32
}

pub fn apply_theme<P: DefaultTheme>(
    theme: &ThemeResolver<P>,
    variant: ThemeVariant,
    window: &mut Window,
    menu: &mut MenuBar,
    pages: &mut [PageWidgets],
) {
    let background = to_fltk_color(theme.color(color_names::BACKGROUND, variant));
    let foreground = to_fltk_color(theme.color(color_names::FOREGROUND, variant));
    let input_background = to_fltk_color(theme.color(color_names::INPUT_BACKGROUND, variant));
    let selection = to_fltk_color(theme.color(color_names::SELECTION, variant));
    let hover = to_fltk_color(theme.color(color_names::HOVER, variant));

    let text_size = pixel_size(theme, size_names::TEXT);
    let text_font = to_fltk_font(theme.font(TextStyle::default()));

    window.set_color(background);
    window.set_label_color(foreground);

    menu.set_color(background);
    menu.set_text_color(foreground);
    menu.set_text_size(text_size);
    menu.set_selection_color(hover);

    for page in pages.iter_mut() {
        page.group.set_color(background);
        page.group.set_label_color(foreground);
        page.group.set_label_size(text_size);
        page.group.set_selection_color(background);

        page.editor.set_color(input_background);
        page.editor.set_text_color(foreground);
        page.editor.set_cursor_color(foreground);
        page.editor.set_selection_color(selection);
        page.editor.set_text_font(text_font);
        page.editor.set_text_size(text_size);

        page.status.set_color(background);
        page.status.set_label_color(foreground);
        page.status.set_label_size(text_size);

        page.editor.redraw();
        page.status.redraw();
    }

    menu.redraw();
    window.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::theme::ThemeState;
    use crate::app::services::default_theme::BuiltinTheme;

    #[test]
    fn test_pixel_size_rounds_and_zooms() {
        let mut theme = ThemeResolver::new(ThemeState::default(), BuiltinTheme);
        assert_eq!(pixel_size(&theme, size_names::TEXT), 14);
        theme.set_zoom(1.25);
        assert_eq!(pixel_size(&theme, size_names::TEXT), 18);
        assert_eq!(pixel_size(&theme, "unknown"), 1);
    }

    #[test]
    fn test_font_mapping() {
        assert_eq!(to_fltk_font(FontChoice::Courier), Font::Courier);
        assert_eq!(to_fltk_font(FontChoice::HelveticaBold), Font::HelveticaBold);
    }
}
