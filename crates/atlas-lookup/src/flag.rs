use crate::table::UNKNOWN_COUNTRY_CODE;

/// Glyph shown for regions without a known country code.
pub const GLOBE: &str = "🌍";

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Render a two-letter country code as a flag emoji.
///
/// Anything that is not two ASCII letters, including the unknown sentinel,
/// renders as a globe.
pub fn flag_emoji(code: &str) -> String {
    if code.eq_ignore_ascii_case(UNKNOWN_COUNTRY_CODE)
        || code.len() != 2
        || !code.chars().all(|ch| ch.is_ascii_alphabetic())
    {
        return GLOBE.to_string();
    }
    code.to_ascii_uppercase()
        .chars()
        .filter_map(|ch| char::from_u32(REGIONAL_INDICATOR_A + (ch as u32 - 'A' as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_becomes_regional_indicators() {
        assert_eq!(flag_emoji("IN"), "🇮🇳");
        assert_eq!(flag_emoji("gb"), "🇬🇧");
    }

    #[test]
    fn sentinel_and_garbage_become_globe() {
        assert_eq!(flag_emoji("XX"), GLOBE);
        assert_eq!(flag_emoji(""), GLOBE);
        assert_eq!(flag_emoji("USA"), GLOBE);
        assert_eq!(flag_emoji("1A"), GLOBE);
    }
}
