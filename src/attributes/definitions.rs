use super::AttributeCategory::{self, Genre, Meet, Performance, Vibe};

/// Built-in attribute keys: (key, category, ja, ko, en)
pub(crate) const BUILTIN: &[(&str, AttributeCategory, &str, &str, &str)] = &[
    // genre
    ("genre_orthodox", Genre, "王道", "정통", "Orthodox"),
    ("genre_denpa", Genre, "電波", "뎀파", "Denpa"),
    ("genre_loud", Genre, "ラウド", "라우드", "Loud"),
    ("genre_alt", Genre, "オルタナ", "얼터너티브", "Alternative"),
    ("genre_dark", Genre, "ダーク", "다크", "Dark"),
    ("genre_gothic", Genre, "ゴシック", "고딕", "Gothic"),
    ("genre_cyber", Genre, "サイバー", "사이버", "Cyber"),
    ("genre_magical", Genre, "マジカル", "마법", "Magical"),
    ("genre_yami", Genre, "病み", "야미", "Yami"),
    // vibe
    ("cute", Vibe, "キュート", "큐트", "Cute"),
    ("squirrel", Vibe, "リス系", "다람쥐상", "Squirrel-like"),
    ("cool", Vibe, "クール", "쿨", "Cool"),
    ("pure", Vibe, "ピュア", "퓨어", "Pure"),
    ("sexy", Vibe, "セクシー", "섹시", "Sexy"),
    ("elegant", Vibe, "エレガント", "엘레강스", "Elegant"),
    ("healing", Vibe, "癒し", "치유", "Healing"),
    ("youthful", Vibe, "フレッシュ", "상큼", "Fresh"),
    ("mysterious", Vibe, "ミステリアス", "미스테리", "Mysterious"),
    ("unique", Vibe, "個性派", "개성파", "Unique"),
    ("idol_kpop", Vibe, "K-POPアイドル", "K-POP 아이돌", "K-POP idol"),
    ("idol_polished", Vibe, "洗練アイドル", "세련 아이돌", "Polished idol"),
    // face types count as vibe
    ("face_cat", Vibe, "猫顔", "고양이상", "Cat face"),
    ("face_dog", Vibe, "子犬顔", "강아지상", "Puppy face"),
    ("face_rabbit", Vibe, "ウサギ顔", "토끼상", "Bunny face"),
    ("face_raccoon_dog", Vibe, "タヌキ顔", "너구리상", "Raccoon face"),
    ("face_fox", Vibe, "キツネ顔", "여우상", "Fox face"),
    ("face_squirrel", Vibe, "リス顔", "다람쥐상", "Squirrel face"),
    ("face_chick", Vibe, "ひよこ顔", "병아리상", "Chick face"),
    ("face_bird", Vibe, "小鳥顔", "작은 새상", "Birdlike face"),
    // performance
    ("dance", Performance, "ダンス", "댄스", "Dance"),
    ("vocal", Performance, "ボーカル", "보컬", "Vocal"),
    ("expression", Performance, "表現力", "표현력", "Expression"),
    ("energy", Performance, "エナジー", "에너지", "Energy"),
    ("stability", Performance, "安定感", "안정감", "Stability"),
    ("growth", Performance, "成長性", "성장성", "Growth"),
    ("presence", Performance, "存在感", "존재감", "Presence"),
    ("facial", Performance, "表情管理", "표정 관리", "Facial control"),
    ("charisma", Performance, "カリスマ", "카리스마", "Charisma"),
    // meet
    ("comfort", Meet, "安心感", "안심감", "Comfort"),
    ("cheer", Meet, "わくわく", "설렘", "Excitement"),
    ("charming", Meet, "愛嬌", "애교", "Charm"),
    ("calm", Meet, "穏やか", "온화함", "Calm"),
    ("dry", Meet, "ドライ", "쿨함", "Dry"),
    ("kind", Meet, "優しさ", "상냥함", "Kindness"),
    ("talk", Meet, "トーク力", "토크력", "Talk skill"),
    ("recognition", Meet, "認知", "인지도", "Recognition"),
    ("closeness", Meet, "距離感", "거리감", "Closeness"),
    ("social", Meet, "社交性", "사교성", "Sociability"),
    ("gap", Meet, "ツンデレ", "츤데레", "Tsundere"),
];
