//! FLTK presentation: the main window, its menu, the theme applier and the
//! modal dialogs. Everything here runs on the UI thread.

pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
