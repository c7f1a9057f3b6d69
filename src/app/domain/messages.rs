use crate::app::infrastructure::error::DetailedError;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    /// The editor of page `n` was edited.
    ContentChanged(usize),
    /// Ctrl+S inside the editor of page `n`.
    SaveDocument(usize),
    /// File/Save: every page.
    SaveAll,
    SaveFailed(DetailedError),
    OpenSettings,
    WindowClose,
}
