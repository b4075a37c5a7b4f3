use std::ops::RangeInclusive;

/// Hiragana block
pub const KANA_RANGE: RangeInclusive<u32> = 0x3040..=0x309F;
/// CJK unified ideographs as used for Japanese kanji
pub const KANJI_RANGE: RangeInclusive<u32> = 0x4E00..=0x9FAF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Kanji,
    Kana,
    Other,
}

pub fn classify(c: char) -> Script {
    classify_code_point(c as u32)
}

/// Same as [`classify`] for raw code points, including surrogates and
/// values past the Unicode range.
pub fn classify_code_point(cp: u32) -> Script {
    if KANJI_RANGE.contains(&cp) {
        Script::Kanji
    } else if KANA_RANGE.contains(&cp) {
        Script::Kana
    } else {
        Script::Other
    }
}

pub fn is_kanji(c: char) -> bool {
    classify(c) == Script::Kanji
}

pub fn is_kana(c: char) -> bool {
    classify(c) == Script::Kana
}

/// Latin-1 and below. Anything here is not Japanese text.
pub fn is_latin1(c: char) -> bool {
    (c as u32) < 256
}

pub fn starts_with_kanji(s: &str) -> bool {
    s.chars().next().is_some_and(is_kanji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_block_is_never_kanji() {
        for cp in KANA_RANGE {
            assert_eq!(classify_code_point(cp), Script::Kana, "U+{cp:04X}");
        }
        assert!(is_kana('か'));
        assert!(!is_kana('日'));
        assert!(!is_kana('ア'));
        assert!(!is_kanji('か'));
    }

    #[test]
    fn kanji_block_bounds() {
        assert_eq!(classify('\u{4E00}'), Script::Kanji);
        assert_eq!(classify('\u{9FAF}'), Script::Kanji);
        assert_eq!(classify('\u{4DFF}'), Script::Other);
        assert_eq!(classify('\u{9FB0}'), Script::Other);
    }

    #[test]
    fn ranges_do_not_overlap() {
        assert!(KANA_RANGE.end() < KANJI_RANGE.start());
    }

    #[test]
    fn everything_else_is_other() {
        for c in ['a', 'Z', '0', ' ', '\n', '。', 'ア', '～', '🎌'] {
            assert_eq!(classify(c), Script::Other, "{c:?}");
        }
        assert_eq!(classify_code_point(0xD800), Script::Other);
        assert_eq!(classify_code_point(u32::MAX), Script::Other);
    }

    #[test]
    fn leading_kanji() {
        assert!(starts_with_kanji("場所"));
        assert!(starts_with_kanji("見る"));
        assert!(!starts_with_kanji("たしかに"));
        assert!(!starts_with_kanji(""));
        assert!(is_latin1('é'));
        assert!(!is_latin1('あ'));
    }
}
