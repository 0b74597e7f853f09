//! Stroke-count lexicon for name divination
//!
//! Exact-match lookup over a fixed table of common kanji; anything not in the
//! table falls back to [`DEFAULT_STROKES`]. The lookup is total over the whole
//! character domain, so there is no error path here.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Stroke count assumed for characters missing from the table
pub const DEFAULT_STROKES: u32 = 7;

static STROKE_TABLE: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    [
        ('一', 1),
        ('二', 2),
        ('三', 3),
        ('四', 4),
        ('五', 5),
        ('六', 6),
        ('七', 7),
        ('八', 8),
        ('九', 9),
        ('十', 10),
        ('百', 6),
        ('千', 3),
        ('万', 3),
        ('木', 4),
        ('林', 8),
        ('森', 12),
        ('田', 5),
        ('山', 3),
        ('川', 3),
        ('河', 8),
        ('水', 4),
        ('火', 4),
        ('土', 3),
        ('金', 8),
        ('石', 5),
        ('日', 4),
        ('月', 4),
        ('明', 8),
        ('光', 6),
        ('空', 8),
        ('雲', 12),
        ('雨', 8),
        ('電', 13),
        ('風', 9),
        ('天', 4),
        ('地', 6),
        ('海', 9),
        ('大', 3),
        ('中', 4),
        ('小', 3),
        ('生', 5),
        ('花', 7),
        ('草', 9),
        ('竹', 6),
        ('年', 6),
        ('子', 3),
        ('父', 4),
        ('母', 5),
        ('男', 7),
        ('女', 3),
        ('人', 2),
        ('心', 4),
        ('手', 4),
        ('足', 7),
        ('目', 5),
        ('耳', 6),
        ('口', 3),
        ('音', 9),
        ('力', 2),
        ('上', 3),
        ('下', 3),
        ('左', 5),
        ('右', 5),
        ('前', 9),
        ('後', 9),
        ('東', 8),
        ('西', 6),
        ('南', 9),
        ('北', 5),
        ('高', 10),
        ('安', 6),
        ('新', 13),
        ('古', 5),
        ('長', 8),
        ('愛', 13),
        ('美', 9),
        ('佐', 7),
        ('藤', 18),
        ('加', 5),
        ('鈴', 13),
        ('村', 7),
        ('岡', 8),
        ('島', 10),
        ('松', 8),
        ('織', 18),
        ('原', 10),
        ('太', 4),
        ('郎', 10),
        ('次', 6),
        ('介', 9),
        ('菜', 11),
        ('香', 9),
        ('智', 12),
        ('恵', 10),
        ('里', 7),
        ('奈', 8),
        ('春', 9),
        ('夏', 10),
        ('秋', 9),
        ('冬', 7),
    ]
    .into_iter()
    .collect()
});

/// Stroke count for a single character, with the fixed default for
/// characters outside the table
pub fn strokes_of(c: char) -> u32 {
    STROKE_TABLE.get(&c).copied().unwrap_or(DEFAULT_STROKES)
}

/// Whether a character participates in stroke totals. Only ideographs,
/// hiragana, and katakana count; spaces, Latin letters, and punctuation
/// contribute nothing.
pub fn is_counted(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

/// Total stroke count of a string, skipping uncounted characters
pub fn total_strokes(name: &str) -> u32 {
    name.chars().filter(|c| is_counted(*c)).map(strokes_of).sum()
}
