//! Zoomable theme: size and color overrides on top of a default provider.
//!
//! The persisted [`ThemeState`] only stores what the user changed. Everything
//! else comes from a [`DefaultTheme`] implementation handed to
//! [`ThemeResolver`] at construction.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Largest accepted zoom factor. Valid zooms lie in `(0, MAX_ZOOM]`.
pub const MAX_ZOOM: f32 = 10.0;

/// Size overrides must lie strictly between these bounds.
pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 100.0;

/// Proposed sizes closer than this to the current value are ignored.
pub const SIZE_EPSILON: f32 = 0.01;

/// Logical size names understood by the default provider.
pub mod size_names {
    pub const TEXT: &str = "text";
    pub const HEADING_TEXT: &str = "headingText";
    pub const SUB_HEADING_TEXT: &str = "subHeadingText";
    pub const CAPTION_TEXT: &str = "captionText";
    pub const PADDING: &str = "padding";
    pub const INNER_PADDING: &str = "innerPadding";
    pub const LINE_SPACING: &str = "lineSpacing";
    pub const INLINE_ICON: &str = "inlineIcon";
    pub const SCROLL_BAR: &str = "scrollBar";
    pub const SEPARATOR: &str = "separator";
    pub const INPUT_BORDER: &str = "inputBorder";
}

/// Logical color names understood by the default provider.
pub mod color_names {
    pub const BACKGROUND: &str = "background";
    pub const FOREGROUND: &str = "foreground";
    pub const PRIMARY: &str = "primary";
    pub const SELECTION: &str = "selection";
    pub const INPUT_BACKGROUND: &str = "inputBackground";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const DISABLED: &str = "disabled";
    pub const ERROR: &str = "error";
    pub const SEPARATOR: &str = "separator";
    pub const HOVER: &str = "hover";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Decode a persisted `0x00RRGGBB` value. The top byte is ignored and
    /// the result is always opaque.
    pub const fn from_packed(packed: u32) -> Self {
        Self::rgb(
            ((packed & 0x00FF_0000) >> 16) as u8,
            ((packed & 0x0000_FF00) >> 8) as u8,
            (packed & 0x0000_00FF) as u8,
        )
    }

    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    Helvetica,
    HelveticaBold,
    HelveticaItalic,
    HelveticaBoldItalic,
    Courier,
    CourierBold,
}

/// Baseline values used whenever the user has not overridden a name.
pub trait DefaultTheme {
    fn default_size(&self, name: &str) -> f32;
    fn default_color(&self, name: &str, variant: ThemeVariant) -> Rgba;
    fn default_font(&self, style: TextStyle) -> FontChoice;
    fn default_icon(&self, name: &str) -> Option<&'static str>;
}

/// The user's theme customizations, in their persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    #[serde(default = "default_zoom", deserialize_with = "deserialize_zoom")]
    zoom: f32,

    #[serde(default, deserialize_with = "lenient_map")]
    sizes: HashMap<String, f32>,

    #[serde(default, deserialize_with = "lenient_map")]
    colors: HashMap<String, u32>,
}

fn default_zoom() -> f32 {
    1.0
}

/// Out-of-range (and NaN) zoom values become 1.0.
pub fn normalize_zoom(zoom: f32) -> f32 {
    if zoom > 0.0 && zoom <= MAX_ZOOM {
        zoom
    } else {
        default_zoom()
    }
}

fn deserialize_zoom<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(raw
        .as_f64()
        .map_or_else(default_zoom, |zoom| normalize_zoom(zoom as f32)))
}

/// A name -> value table where entries of the wrong type are dropped one by
/// one. Anything other than an object (`null` included) gives an empty table.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(HashMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(name, value)| match T::deserialize(value) {
            Ok(value) => Some((name, value)),
            Err(e) => {
                tracing::warn!("Ignoring theme entry {}: {}", name, e);
                None
            }
        })
        .collect())
}

/// A field that falls back to its default when it is `null` or has the
/// wrong shape, so one bad value doesn't discard the rest of the file.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            sizes: HashMap::new(),
            colors: HashMap::new(),
        }
    }
}

impl ThemeState {
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom: normalize_zoom(zoom),
            ..Self::default()
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn size_override(&self, name: &str) -> Option<f32> {
        self.sizes.get(name).copied()
    }

    pub fn color_override(&self, name: &str) -> Option<Rgba> {
        self.colors.get(name).map(|packed| Rgba::from_packed(*packed))
    }
}

/// Resolves presentation sizes and colors for the UI.
#[derive(Debug, Clone)]
pub struct ThemeResolver<P> {
    state: ThemeState,
    defaults: P,
}

impl<P: DefaultTheme> ThemeResolver<P> {
    pub fn new(mut state: ThemeState, defaults: P) -> Self {
        state.zoom = normalize_zoom(state.zoom);
        Self { state, defaults }
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn defaults(&self) -> &P {
        &self.defaults
    }

    /// The zoom factor sizes are multiplied by. Never outside `(0, MAX_ZOOM]`.
    pub fn resolved_zoom(&self) -> f32 {
        normalize_zoom(self.state.zoom)
    }

    pub fn size(&self, name: &str) -> f32 {
        self.size_no_zoom(name) * self.resolved_zoom()
    }

    /// The logical size the user edits, independent of the zoom factor.
    pub fn size_no_zoom(&self, name: &str) -> f32 {
        self.state
            .size_override(name)
            .unwrap_or_else(|| self.defaults.default_size(name))
    }

    pub fn color(&self, name: &str, variant: ThemeVariant) -> Rgba {
        self.state
            .color_override(name)
            .unwrap_or_else(|| self.defaults.default_color(name, variant))
    }

    pub fn font(&self, style: TextStyle) -> FontChoice {
        self.defaults.default_font(style)
    }

    pub fn icon(&self, name: &str) -> Option<&'static str> {
        self.defaults.default_icon(name)
    }

    /// Store a size override. Sizes outside `(MIN_SIZE, MAX_SIZE)` or within
    /// `SIZE_EPSILON` of the current value are ignored. Returns whether the
    /// value was stored.
    pub fn set_size_override(&mut self, name: &str, proposed: f32) -> bool {
        if !(proposed > MIN_SIZE && proposed < MAX_SIZE) {
            return false;
        }
        if (self.size_no_zoom(name) - proposed).abs() < SIZE_EPSILON {
            return false;
        }
        self.state.sizes.insert(name.to_string(), proposed);
        true
    }

    /// Set the zoom factor; values outside `(0, MAX_ZOOM]` reset it to 1.0.
    pub fn set_zoom(&mut self, proposed: f32) {
        self.state.zoom = normalize_zoom(proposed);
    }

    pub fn set_color_override(&mut self, name: &str, color: Rgba) {
        self.state.colors.insert(name.to_string(), color.to_packed());
    }
}
