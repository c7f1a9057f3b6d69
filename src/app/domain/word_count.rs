use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Count the words in `text`.
///
/// Whitespace, punctuation and control characters separate words; any other
/// character is part of one. This works for languages that delimit words
/// with spaces and punctuation. An apostrophe is punctuation, so "don't"
/// counts as two words.
pub fn word_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_boundary(c) {
            if in_word {
                count += 1;
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }

    // Text ending mid-word still closes that word
    if in_word {
        count += 1;
    }

    count
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Status bar text for a page.
pub fn status_label(text: &str) -> String {
    format!("Word Count: {}", word_count(text))
}
