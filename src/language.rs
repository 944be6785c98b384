/// Script classification for keyword pattern fragments.
///
/// Word-boundary anchoring (`\b`) only makes sense for scripts that put
/// whitespace between words. Fragments drawn from scripts written without
/// inter-word spaces must be matched as contiguous substrings instead:
/// with Unicode `\b`, an ideograph is a word character, so an anchored
/// CJK fragment would only match when surrounded by non-word text.
/// Hangul counts as unspaced here because agglutinated suffixes attach
/// directly to keyword stems (댄스파티 contains 댄스 with no boundary).
pub struct ScriptDetector;

impl ScriptDetector {
    /// True if an anchored (`\b`-wrapped) compilation is appropriate for
    /// this fragment. The rule is per-fragment: a single category may mix
    /// anchored Latin terms and contiguous CJK terms.
    pub fn needs_word_boundaries(fragment: &str) -> bool {
        !Self::contains_unspaced_script(fragment)
    }

    /// Any character from a script without whitespace word separation.
    pub fn contains_unspaced_script(text: &str) -> bool {
        Self::contains_cjk(text)
            || Self::contains_kana(text)
            || Self::contains_hangul(text)
            || Self::contains_thai(text)
    }

    pub fn contains_cjk(text: &str) -> bool {
        text.chars().any(|c| {
            // CJK Unified Ideographs: U+4E00–U+9FFF
            // CJK Unified Ideographs Extension A: U+3400–U+4DBF
            // CJK Unified Ideographs Extension B: U+20000–U+2A6DF
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |
                '\u{3400}'..='\u{4DBF}' |
                '\u{20000}'..='\u{2A6DF}'
            )
        })
    }

    pub fn contains_kana(text: &str) -> bool {
        text.chars().any(|c| {
            // Hiragana: U+3040–U+309F
            // Katakana: U+30A0–U+30FF
            // Katakana Phonetic Extensions: U+31F0–U+31FF
            matches!(c,
                '\u{3040}'..='\u{309F}' |
                '\u{30A0}'..='\u{30FF}' |
                '\u{31F0}'..='\u{31FF}'
            )
        })
    }

    pub fn contains_hangul(text: &str) -> bool {
        text.chars().any(|c| {
            // Hangul Syllables: U+AC00–U+D7AF
            // Hangul Jamo: U+1100–U+11FF
            // Hangul Compatibility Jamo: U+3130–U+318F
            matches!(c,
                '\u{AC00}'..='\u{D7AF}' |
                '\u{1100}'..='\u{11FF}' |
                '\u{3130}'..='\u{318F}'
            )
        })
    }

    pub fn contains_thai(text: &str) -> bool {
        // Thai: U+0E00–U+0E7F
        text.chars().any(|c| matches!(c, '\u{0E00}'..='\u{0E7F}'))
    }

    pub fn contains_cyrillic(text: &str) -> bool {
        text.chars().any(|c| {
            // Cyrillic: U+0400–U+04FF
            // Cyrillic Supplement: U+0500–U+052F
            matches!(c,
                '\u{0400}'..='\u{04FF}' |
                '\u{0500}'..='\u{052F}'
            )
        })
    }

    pub fn contains_hebrew(text: &str) -> bool {
        // Hebrew: U+0590–U+05FF
        text.chars().any(|c| matches!(c, '\u{0590}'..='\u{05FF}'))
    }

    /// Script families present in a text, for diagnostics output.
    pub fn detect_scripts(text: &str) -> Vec<String> {
        let mut scripts = Vec::new();

        if text.chars().any(|c| c.is_ascii_alphabetic()) {
            scripts.push("Latin".to_string());
        }
        if Self::contains_cyrillic(text) {
            scripts.push("Cyrillic".to_string());
        }
        if Self::contains_hebrew(text) {
            scripts.push("Hebrew".to_string());
        }
        if Self::contains_cjk(text) {
            scripts.push("CJK".to_string());
        }
        if Self::contains_kana(text) {
            scripts.push("Kana".to_string());
        }
        if Self::contains_hangul(text) {
            scripts.push("Hangul".to_string());
        }
        if Self::contains_thai(text) {
            scripts.push("Thai".to_string());
        }

        scripts
    }
}
