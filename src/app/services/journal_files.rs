use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::app::domain::document::Document;

/// Writing done before this hour still belongs to the previous day.
pub const ROLLOVER_HOUR: u32 = 5;

/// The pages opened each day, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JournalKind {
    Worries,
    Journal,
}

impl JournalKind {
    pub fn all() -> &'static [JournalKind] {
        &[Self::Worries, Self::Journal]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Worries => "Worries",
            Self::Journal => "Journal",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            Self::Worries => "worries",
            Self::Journal => "journal",
        }
    }
}

/// The day a moment is filed under.
pub fn journal_date(now: NaiveDateTime) -> NaiveDate {
    let date = now.date();
    if now.hour() < ROLLOVER_HOUR {
        date - Duration::days(1)
    } else {
        date
    }
}

/// `"YYYY-MM-DD - "`, the prefix shared by a day's files.
pub fn file_prefix(date: NaiveDate) -> String {
    format!("{} - ", date.format("%Y-%m-%d"))
}

pub fn daily_path(save_dir: &Path, kind: JournalKind, now: NaiveDateTime) -> PathBuf {
    let prefix = file_prefix(journal_date(now));
    save_dir.join(format!("{}{}.txt", prefix, kind.file_stem()))
}

pub fn daily_paths(save_dir: &Path, now: NaiveDateTime) -> Vec<(JournalKind, PathBuf)> {
    JournalKind::all()
        .iter()
        .map(|kind| (*kind, daily_path(save_dir, *kind, now)))
        .collect()
}

/// Open a page, pre-filled with whatever was already written to it.
/// An unreadable file opens empty.
pub fn load_document(path: PathBuf) -> Document {
    if !path.exists() {
        return Document::new(path);
    }
    match fs::read_to_string(&path) {
        Ok(content) => Document::with_content(path, content),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            Document::new(path)
        }
    }
}

/// Default directory pages are saved to.
pub fn default_save_dir() -> PathBuf {
    let mut path = dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("daybook");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_daytime_uses_same_day() {
        let date = journal_date(at(2024, 3, 15, 14, 30));
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_early_morning_rolls_back() {
        assert_eq!(
            journal_date(at(2024, 3, 15, 4, 59)),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
        );
        assert_eq!(
            journal_date(at(2024, 3, 15, 5, 0)),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_rollover_crosses_month_and_year() {
        assert_eq!(
            journal_date(at(2024, 3, 1, 1, 0)),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            journal_date(at(2025, 1, 1, 0, 10)),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_file_prefix() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(file_prefix(date), "2024-07-04 - ");
    }

    #[test]
    fn test_daily_paths_order_and_names() {
        let paths = daily_paths(Path::new("/journal"), at(2024, 7, 4, 21, 0));
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].0, JournalKind::Worries);
        assert_eq!(paths[0].1, PathBuf::from("/journal/2024-07-04 - worries.txt"));
        assert_eq!(paths[1].0, JournalKind::Journal);
        assert_eq!(paths[1].1, PathBuf::from("/journal/2024-07-04 - journal.txt"));
    }

    #[test]
    fn test_load_document_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("2024-07-04 - journal.txt");
        fs::write(&path, "yesterday's words").unwrap();

        let doc = load_document(path.clone());
        assert_eq!(doc.content(), "yesterday's words");
        assert!(!doc.is_dirty());
        assert_eq!(doc.file_path(), path.as_path());
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = tempdir().unwrap();
        let doc = load_document(dir.path().join("nope.txt"));
        assert_eq!(doc.content(), "");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_titles() {
        assert_eq!(JournalKind::Worries.title(), "Worries");
        assert_eq!(JournalKind::Journal.title(), "Journal");
    }
}
