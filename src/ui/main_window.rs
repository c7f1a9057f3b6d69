use fltk::{
    app::{self, Sender},
    enums::{Align, CallbackTrigger, Event, FrameType, Key},
    frame::Frame,
    group::{Flex, FlexType, Tabs},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::Dimensions;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_HEIGHT: i32 = 26;

/// Widgets of one journal page: the editor and its word-count line.
pub struct PageWidgets {
    pub group: Flex,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub status: Frame,
}

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub tabs: Tabs,
    pub pages: Vec<PageWidgets>,
}

/// Build the main window with one tab per title, in order.
pub fn build_main_window(
    titles: &[&str],
    size: Dimensions,
    sender: &Sender<Message>,
) -> MainWidgets {
    let (w, h) = (size.width.round() as i32, size.height.round() as i32);
    let mut wind = Window::new(0, 0, w, h, "Daybook").center_screen();
    wind.set_xclass("Daybook");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut tabs = Tabs::new(0, MENU_HEIGHT, w, h - MENU_HEIGHT, None);
    let pages: Vec<PageWidgets> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| build_page(index, title, sender))
        .collect();
    tabs.end();
    tabs.auto_layout();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing goes through the dispatch loop so pages and config get saved first
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        tabs,
        pages,
    }
}

fn build_page(index: usize, title: &str, sender: &Sender<Message>) -> PageWidgets {
    let mut group = Flex::default_fill().with_label(title);
    group.set_type(FlexType::Column);

    let buffer = TextBuffer::default();
    let mut editor = TextEditor::default();
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(WrapMode::AtBounds, 0);

    editor.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    editor.set_callback(move |_| s.send(Message::ContentChanged(index)));

    let s = *sender;
    editor.handle(move |_, event| {
        if event == Event::KeyDown
            && app::is_event_ctrl()
            && app::event_key() == Key::from_char('s')
        {
            s.send(Message::SaveDocument(index));
            return true;
        }
        false
    });

    let mut status = Frame::default().with_label("Word Count: 0");
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Left | Align::Inside);
    group.fixed(&status, STATUS_HEIGHT);

    group.end();

    PageWidgets {
        group,
        editor,
        buffer,
        status,
    }
}
