use std::path::PathBuf;

use chrono::NaiveDateTime;
use fltk::{app::Sender, group::Tabs, menu::MenuBar, prelude::*, window::Window};

use super::domain::document::{self, Document};
use super::domain::messages::Message;
use super::domain::settings::{AppConfig, Dimensions, SettingsForm};
use super::domain::theme::{size_names, ThemeResolver, ThemeVariant};
use super::domain::word_count::status_label;
use super::infrastructure::error::DetailedError;
use super::infrastructure::platform::system_theme_variant;
use super::services::default_theme::BuiltinTheme;
use super::services::journal_files::{daily_paths, load_document, JournalKind};
use crate::ui::dialogs::error::show_error_dialog;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::main_window::{build_main_window, PageWidgets};
use crate::ui::menu::build_menu;
use crate::ui::theme::{apply_theme, pixel_size};

/// One tab: today's file for a journal kind.
pub struct JournalPage {
    pub kind: JournalKind,
    pub document: Document,
}

pub struct AppState {
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub theme: ThemeResolver<BuiltinTheme>,
    pub variant: ThemeVariant,
    pub pages: Vec<JournalPage>,
    pub page_widgets: Vec<PageWidgets>,
    pub window: Window,
    pub menu: MenuBar,
    pub tabs: Tabs,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        mut config: AppConfig,
        config_path: PathBuf,
        sender: Sender<Message>,
        now: NaiveDateTime,
    ) -> Self {
        let theme = ThemeResolver::new(std::mem::take(&mut config.theme), BuiltinTheme);

        let pages: Vec<JournalPage> = daily_paths(&config.save_dir, now)
            .into_iter()
            .map(|(kind, path)| {
                let mut document = load_document(path);
                let s = sender;
                document.set_error_sink(move |err| s.send(Message::SaveFailed(err)));
                JournalPage { kind, document }
            })
            .collect();

        let titles: Vec<&str> = pages.iter().map(|p| p.kind.title()).collect();
        let mut widgets = build_main_window(&titles, config.window_size, &sender);
        build_menu(&mut widgets.menu, &sender);

        for (page, page_widgets) in pages.iter().zip(widgets.pages.iter_mut()) {
            page_widgets.buffer.set_text(page.document.content());
            page_widgets.status.set_label(&status_label(page.document.content()));
            tracing::debug!("Opened {}", page.document.file_path().display());
        }

        let mut state = Self {
            config,
            config_path,
            theme,
            variant: system_theme_variant(),
            pages,
            page_widgets: widgets.pages,
            window: widgets.wind,
            menu: widgets.menu,
            tabs: widgets.tabs,
            sender,
        };
        state.apply_theme();
        state.update_window_title();
        state
    }

    pub fn show(&mut self) {
        self.window.show();
    }

    /// Dispatch one message. Returns `false` once the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::ContentChanged(index) => self.content_changed(index),
            Message::SaveDocument(index) => self.save_document(index),
            Message::SaveAll => self.save_all(),
            Message::SaveFailed(err) => self.report(&err),
            Message::OpenSettings => self.open_settings(),
            Message::WindowClose => {
                self.close();
                return false;
            }
        }
        true
    }

    pub fn content_changed(&mut self, index: usize) {
        let (Some(page), Some(widgets)) =
            (self.pages.get_mut(index), self.page_widgets.get_mut(index))
        else {
            return;
        };
        page.document.set_content(widgets.buffer.text());
        widgets.status.set_label(&status_label(page.document.content()));
        self.update_window_title();
    }

    /// Ctrl+S: save one page; a failure reaches the page's error sink.
    pub fn save_document(&mut self, index: usize) {
        if let Some(page) = self.pages.get_mut(index) {
            if page.document.save_and_report() {
                tracing::debug!("Saved {}", page.document.file_path().display());
            }
        }
        self.update_window_title();
    }

    /// Save every page and report each failure.
    pub fn save_all(&mut self) {
        let failures = document::save_all(self.pages.iter_mut().map(|p| &mut p.document));
        for err in &failures {
            tracing::warn!("Saving {} failed: {}", err.path().display(), err.detail());
        }
        self.update_window_title();
        for err in &failures {
            self.report(&DetailedError::from(err));
        }
    }

    pub fn report(&self, err: &DetailedError) {
        show_error_dialog(err, &self.theme, self.variant);
    }

    pub fn update_window_title(&mut self) {
        let dirty = self.pages.iter().any(|p| p.document.is_dirty());
        let prefix = if dirty { "*" } else { "" };
        self.window.set_label(&format!("{}Daybook", prefix));
    }

    pub fn apply_theme(&mut self) {
        apply_theme(
            &self.theme,
            self.variant,
            &mut self.window,
            &mut self.menu,
            &mut self.page_widgets,
        );
        self.tabs.set_label_size(pixel_size(&self.theme, size_names::TEXT));
        self.tabs.redraw();
    }

    pub fn open_settings(&mut self) {
        let form = SettingsForm::from_current(&self.config.save_dir, &self.theme);
        let outcome = show_settings_dialog(
            &form,
            self.config.config_window_size,
            pixel_size(&self.theme, size_names::TEXT),
        );
        self.config.config_window_size = outcome.size;

        if let Some(form) = outcome.form {
            form.apply(&mut self.config.save_dir, &mut self.theme);
            tracing::info!(
                zoom = self.theme.resolved_zoom(),
                "Applied settings, save directory {}",
                self.config.save_dir.display()
            );
            self.apply_theme();
        }
    }

    /// Remember the window size, write the config, then save every page.
    pub fn close(&mut self) {
        self.config.window_size = Dimensions {
            width: self.window.w() as f32,
            height: self.window.h() as f32,
        };
        self.config.theme = self.theme.state().clone();

        if let Err(e) = self.config.save(&self.config_path) {
            tracing::warn!("{}: {}", e, e.detail());
            self.report(&DetailedError::from(&e));
        }

        self.save_all();
        self.window.hide();
    }
}
