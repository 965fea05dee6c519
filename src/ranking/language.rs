use crate::core::{JpSupportLevel, KoreanLevel};

/// Bonus per Korean level, columns ordered `ok, some, unknown, no`.
///
/// Rows are non-increasing from `none` to `native`.
const LANGUAGE_BONUS_TABLE: [[f64; 4]; 5] = [
    [1.0, 0.5, 0.0, 0.0], // none
    [1.0, 0.5, 0.0, 0.0], // beginner
    [0.5, 0.3, 0.0, 0.0], // intermediate
    [0.0, 0.0, 0.0, 0.0], // advanced
    [0.0, 0.0, 0.0, 0.0], // native
];

/// Score bonus for a member's Japanese support given the user's Korean level.
pub fn language_bonus(korean_level: KoreanLevel, jp_support: JpSupportLevel) -> f64 {
    let row = match korean_level {
        KoreanLevel::None => 0,
        KoreanLevel::Beginner => 1,
        KoreanLevel::Intermediate => 2,
        KoreanLevel::Advanced => 3,
        KoreanLevel::Native => 4,
    };
    let column = match jp_support {
        JpSupportLevel::Ok => 0,
        JpSupportLevel::Some => 1,
        JpSupportLevel::Unknown => 2,
        JpSupportLevel::No => 3,
    };
    LANGUAGE_BONUS_TABLE[row][column]
}

/// Same lookup over raw strings: an unknown level uses the `none` row and
/// an unknown support value yields 0.
pub fn language_bonus_str(korean_level: &str, jp_support: &str) -> f64 {
    language_bonus(
        KoreanLevel::parse_lenient(korean_level),
        JpSupportLevel::parse_lenient(jp_support),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_table() {
        assert_eq!(language_bonus(KoreanLevel::None, JpSupportLevel::Ok), 1.0);
        assert_eq!(language_bonus(KoreanLevel::Beginner, JpSupportLevel::Some), 0.5);
        assert_eq!(language_bonus(KoreanLevel::Intermediate, JpSupportLevel::Ok), 0.5);
        assert_eq!(language_bonus(KoreanLevel::Intermediate, JpSupportLevel::Some), 0.3);
        assert_eq!(language_bonus(KoreanLevel::None, JpSupportLevel::Unknown), 0.0);
        assert_eq!(language_bonus(KoreanLevel::None, JpSupportLevel::No), 0.0);
    }

    #[test]
    fn test_fluent_users_get_nothing() {
        for support in JpSupportLevel::ALL {
            assert_eq!(language_bonus(KoreanLevel::Advanced, support), 0.0);
            assert_eq!(language_bonus(KoreanLevel::Native, support), 0.0);
        }
    }

    #[test]
    fn test_bonus_non_increasing_with_level() {
        for support in JpSupportLevel::ALL {
            let bonuses: Vec<f64> = KoreanLevel::ALL
                .iter()
                .map(|&level| language_bonus(level, support))
                .collect();
            assert!(bonuses.windows(2).all(|w| w[0] >= w[1]), "{:?}", bonuses);
        }
    }

    #[test]
    fn test_string_lookup_defaults() {
        assert_eq!(language_bonus_str("bilingual", "ok"), 1.0);
        assert_eq!(language_bonus_str("intermediate", "some"), 0.3);
        assert_eq!(language_bonus_str("none", "sometimes"), 0.0);
    }

    #[test]
    fn test_string_lookup_is_exact() {
        assert_eq!(language_bonus_str("INTERMEDIATE", "ok"), 1.0);
        assert_eq!(language_bonus_str("none", "OK"), 0.0);
        assert_eq!(language_bonus_str("Intermediate", "some"), 0.5);
    }
}
