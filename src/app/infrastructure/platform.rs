//! Desktop light/dark preference, mapped onto [`ThemeVariant`].
//!
//! Each platform asks its own source (registry, gsettings, `defaults`) and
//! hands the raw answer to a parser below. A source that can't be queried
//! gives `None`, and the caller falls back to the light variant.

use crate::app::domain::theme::ThemeVariant;

/// The variant to resolve colors with at startup.
pub fn system_theme_variant() -> ThemeVariant {
    let detected = desktop_preference();
    tracing::debug!(?detected, "Desktop theme preference");
    detected.unwrap_or_default()
}

#[cfg(target_os = "windows")]
fn desktop_preference() -> Option<ThemeVariant> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    let value = personalize.get_value::<u32, _>("AppsUseLightTheme").ok()?;
    Some(variant_from_apps_use_light_theme(value))
}

#[cfg(target_os = "linux")]
fn desktop_preference() -> Option<ThemeVariant> {
    // color-scheme is authoritative when set; older desktops only name a gtk theme
    gsettings_interface_key("color-scheme")
        .and_then(|scheme| variant_from_color_scheme(&scheme))
        .or_else(|| {
            gsettings_interface_key("gtk-theme").and_then(|name| variant_from_gtk_theme(&name))
        })
}

#[cfg(target_os = "linux")]
fn gsettings_interface_key(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn desktop_preference() -> Option<ThemeVariant> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key only exists while dark mode is on
    let style = output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned());
    Some(variant_from_interface_style(style.as_deref()))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn desktop_preference() -> Option<ThemeVariant> {
    None
}

/// `AppsUseLightTheme` registry value: 0 means dark.
pub fn variant_from_apps_use_light_theme(value: u32) -> ThemeVariant {
    if value == 0 {
        ThemeVariant::Dark
    } else {
        ThemeVariant::Light
    }
}

/// gsettings `color-scheme` output such as `'prefer-dark'`. `'default'` says
/// nothing about the preference and gives `None`.
pub fn variant_from_color_scheme(output: &str) -> Option<ThemeVariant> {
    let scheme = output.trim().trim_matches('\'');
    match scheme {
        "prefer-dark" => Some(ThemeVariant::Dark),
        "prefer-light" => Some(ThemeVariant::Light),
        _ => None,
    }
}

/// gsettings `gtk-theme` output such as `'Adwaita-dark'`.
pub fn variant_from_gtk_theme(output: &str) -> Option<ThemeVariant> {
    let name = output.trim().trim_matches('\'');
    if name.is_empty() {
        None
    } else if name.to_lowercase().contains("dark") {
        Some(ThemeVariant::Dark)
    } else {
        Some(ThemeVariant::Light)
    }
}

/// `AppleInterfaceStyle` value, `None` when the key is unset.
pub fn variant_from_interface_style(style: Option<&str>) -> ThemeVariant {
    match style {
        Some(style) if style.to_lowercase().contains("dark") => ThemeVariant::Dark,
        _ => ThemeVariant::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_value() {
        assert_eq!(variant_from_apps_use_light_theme(0), ThemeVariant::Dark);
        assert_eq!(variant_from_apps_use_light_theme(1), ThemeVariant::Light);
    }

    #[test]
    fn test_color_scheme_output() {
        assert_eq!(variant_from_color_scheme("'prefer-dark'\n"), Some(ThemeVariant::Dark));
        assert_eq!(variant_from_color_scheme("'prefer-light'\n"), Some(ThemeVariant::Light));
        assert_eq!(variant_from_color_scheme("'default'\n"), None);
        assert_eq!(variant_from_color_scheme(""), None);
    }

    #[test]
    fn test_gtk_theme_output() {
        assert_eq!(variant_from_gtk_theme("'Adwaita-dark'\n"), Some(ThemeVariant::Dark));
        assert_eq!(variant_from_gtk_theme("'Yaru-Dark'"), Some(ThemeVariant::Dark));
        assert_eq!(variant_from_gtk_theme("'Adwaita'\n"), Some(ThemeVariant::Light));
        assert_eq!(variant_from_gtk_theme("\n"), None);
    }

    #[test]
    fn test_interface_style() {
        assert_eq!(variant_from_interface_style(Some("Dark\n")), ThemeVariant::Dark);
        assert_eq!(variant_from_interface_style(None), ThemeVariant::Light);
    }
}
