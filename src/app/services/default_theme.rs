use crate::app::domain::theme::{
    color_names, size_names, DefaultTheme, FontChoice, Rgba, TextStyle, ThemeVariant,
};

/// Built-in sizes and colors used when the user has no override.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTheme;

impl DefaultTheme for BuiltinTheme {
    fn default_size(&self, name: &str) -> f32 {
        match name {
            size_names::TEXT => 14.0,
            size_names::HEADING_TEXT => 24.0,
            size_names::SUB_HEADING_TEXT => 18.0,
            size_names::CAPTION_TEXT => 11.0,
            size_names::PADDING => 6.0,
            size_names::INNER_PADDING => 8.0,
            size_names::LINE_SPACING => 4.0,
            size_names::INLINE_ICON => 20.0,
            size_names::SCROLL_BAR => 16.0,
            size_names::SEPARATOR => 1.0,
            size_names::INPUT_BORDER => 2.0,
            _ => 0.0,
        }
    }

    fn default_color(&self, name: &str, variant: ThemeVariant) -> Rgba {
        match variant {
            ThemeVariant::Light => light_color(name),
            ThemeVariant::Dark => dark_color(name),
        }
    }

    fn default_font(&self, style: TextStyle) -> FontChoice {
        match (style.monospace, style.bold, style.italic) {
            (true, true, _) => FontChoice::CourierBold,
            (true, false, _) => FontChoice::Courier,
            (false, true, true) => FontChoice::HelveticaBoldItalic,
            (false, true, false) => FontChoice::HelveticaBold,
            (false, false, true) => FontChoice::HelveticaItalic,
            (false, false, false) => FontChoice::Helvetica,
        }
    }

    /// FLTK label symbols for the few icons the app draws.
    fn default_icon(&self, name: &str) -> Option<&'static str> {
        match name {
            "document-save" => Some("@filesave"),
            "document" => Some("@fileopen"),
            "settings" => Some("@menu"),
            "error" => Some("@circle"),
            "confirm" => Some("@returnarrow"),
            _ => None,
        }
    }
}

fn light_color(name: &str) -> Rgba {
    match name {
        color_names::BACKGROUND => Rgba::rgb(240, 240, 240),
        color_names::FOREGROUND => Rgba::rgb(20, 20, 20),
        color_names::PRIMARY => Rgba::rgb(41, 111, 246),
        color_names::SELECTION => Rgba::rgb(173, 216, 230),
        color_names::INPUT_BACKGROUND => Rgba::rgb(255, 255, 255),
        color_names::PLACEHOLDER => Rgba::rgb(136, 136, 136),
        color_names::DISABLED => Rgba::rgb(160, 160, 160),
        color_names::ERROR => Rgba::rgb(244, 67, 54),
        color_names::SEPARATOR => Rgba::rgb(200, 200, 200),
        color_names::HOVER => Rgba::rgb(200, 200, 200),
        _ => Rgba::TRANSPARENT,
    }
}

fn dark_color(name: &str) -> Rgba {
    match name {
        color_names::BACKGROUND => Rgba::rgb(25, 25, 25),
        color_names::FOREGROUND => Rgba::rgb(220, 220, 220),
        color_names::PRIMARY => Rgba::rgb(41, 111, 246),
        color_names::SELECTION => Rgba::rgb(70, 70, 100),
        color_names::INPUT_BACKGROUND => Rgba::rgb(30, 30, 30),
        color_names::PLACEHOLDER => Rgba::rgb(150, 150, 150),
        color_names::DISABLED => Rgba::rgb(90, 90, 90),
        color_names::ERROR => Rgba::rgb(244, 67, 54),
        color_names::SEPARATOR => Rgba::rgb(60, 60, 60),
        color_names::HOVER => Rgba::rgb(60, 60, 60),
        _ => Rgba::TRANSPARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sizes() {
        let theme = BuiltinTheme;
        assert_eq!(theme.default_size(size_names::TEXT), 14.0);
        assert_eq!(theme.default_size(size_names::SUB_HEADING_TEXT), 18.0);
        assert_eq!(theme.default_size("nonsense"), 0.0);
    }

    #[test]
    fn test_variants_differ() {
        let theme = BuiltinTheme;
        let light = theme.default_color(color_names::BACKGROUND, ThemeVariant::Light);
        let dark = theme.default_color(color_names::BACKGROUND, ThemeVariant::Dark);
        assert_ne!(light, dark);
        assert_eq!(light.a, 0xFF);
    }

    #[test]
    fn test_unknown_color_is_transparent() {
        let theme = BuiltinTheme;
        assert_eq!(theme.default_color("nonsense", ThemeVariant::Dark), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_fonts() {
        let theme = BuiltinTheme;
        assert_eq!(theme.default_font(TextStyle::default()), FontChoice::Helvetica);
        let bold = TextStyle { bold: true, ..Default::default() };
        assert_eq!(theme.default_font(bold), FontChoice::HelveticaBold);
        let code = TextStyle { monospace: true, italic: true, ..Default::default() };
        assert_eq!(theme.default_font(code), FontChoice::Courier);
    }
}
