use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    // File
    let s = *sender;
    menu.add("File/Save", Shortcut::None, MenuFlag::MenuDivider, move |_| {
        s.send(Message::SaveAll)
    });
    let s = *sender;
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, move |_| {
        s.send(Message::WindowClose)
    });

    // Edit
    let s = *sender;
    menu.add("Edit/Settings...", Shortcut::None, MenuFlag::Normal, move |_| {
        s.send(Message::OpenSettings)
    });
}
