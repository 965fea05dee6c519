use crate::core::{CandidateMember, Group, Locale};

const RANK_EMOJIS: [&str; 3] = ["👑", "🥈", "🥉"];

fn intro(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "推しチェッカーで診断したら…",
        Locale::Ko => "오시체커로 진단했더니...",
        Locale::En => "My Oshi Checker results...",
    }
}

fn rank_labels(locale: Locale) -> [&'static str; 3] {
    match locale {
        Locale::Ja => ["1位", "2位", "3位"],
        Locale::Ko => ["1위", "2위", "3위"],
        Locale::En => ["1st", "2nd", "3rd"],
    }
}

fn hashtags(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "#推しチェッカー #韓国地下アイドル #推し診断",
        Locale::Ko => "#오시체커 #한국인디아이돌 #최애진단",
        Locale::En => "#OshiChecker #KUndergroundIdol #BiasDiagnosis",
    }
}

/// Post text for the top three results.
///
/// Layout: intro, blank line, one line per ranked member, blank line,
/// hashtags, site URL. Members of unknown groups are listed without a group.
pub fn share_text(top: &[CandidateMember], groups: &[Group], locale: Locale, site_url: &str) -> String {
    let labels = rank_labels(locale);

    let results = top
        .iter()
        .take(RANK_EMOJIS.len())
        .enumerate()
        .map(|(index, candidate)| {
            let member_name = candidate.member.display_name(locale);
            let group_name = groups
                .iter()
                .find(|group| group.id == candidate.member.group_id)
                .map(|group| group.display_name(locale))
                .unwrap_or("");

            if group_name.is_empty() {
                format!("{} {}: {}", RANK_EMOJIS[index], labels[index], member_name)
            } else {
                format!(
                    "{} {}: {}（{}）",
                    RANK_EMOJIS[index], labels[index], member_name, group_name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\n{}\n{}",
        intro(locale),
        results,
        hashtags(locale),
        site_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LocalizedText, Member};

    fn candidate(id: &str, group: &str, ja: &str, en: &str) -> CandidateMember {
        let mut member = Member::new(id, group, ja);
        member.name = LocalizedText::new(ja).with_en(en);
        CandidateMember::new(member, 0.0)
    }

    fn groups() -> Vec<Group> {
        vec![Group {
            id: "g1".to_string(),
            name: LocalizedText::new("ルミナス").with_en("Luminous"),
        }]
    }

    #[test]
    fn test_share_text_ja() {
        let top = vec![
            candidate("m1", "g1", "ミナ", "Mina"),
            candidate("m2", "g1", "ユナ", "Yuna"),
        ];
        let text = share_text(&top, &groups(), Locale::Ja, "https://oshi.test");

        assert_eq!(
            text,
            "推しチェッカーで診断したら…\n\n\
             👑 1位: ミナ（ルミナス）\n\
             🥈 2位: ユナ（ルミナス）\n\n\
             #推しチェッカー #韓国地下アイドル #推し診断\n\
             https://oshi.test"
        );
    }

    #[test]
    fn test_share_text_en_limits_to_three() {
        let top = vec![
            candidate("m1", "g1", "ミナ", "Mina"),
            candidate("m2", "g9", "ユナ", "Yuna"),
            candidate("m3", "g1", "ハナ", "Hana"),
            candidate("m4", "g1", "ソラ", "Sora"),
        ];
        let text = share_text(&top, &groups(), Locale::En, "https://oshi.test");

        assert!(text.starts_with("My Oshi Checker results..."));
        assert!(text.contains("👑 1st: Mina（Luminous）"));
        assert!(text.contains("🥈 2nd: Yuna\n"));
        assert!(text.contains("🥉 3rd: Hana（Luminous）"));
        assert!(!text.contains("Sora"));
        assert!(text.ends_with("#OshiChecker #KUndergroundIdol #BiasDiagnosis\nhttps://oshi.test"));
    }

    #[test]
    fn test_share_text_ko_falls_back_to_ja_names() {
        let top = vec![candidate("m1", "g1", "ミナ", "Mina")];
        let text = share_text(&top, &groups(), Locale::Ko, "https://oshi.test");
        assert!(text.contains("👑 1위: ミナ（ルミナス）"));
    }
}
