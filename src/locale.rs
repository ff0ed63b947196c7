//! Chart-facing display strings in the five supported languages.
//!
//! Resolution falls back from the requested language to English, then to
//! the raw key name, so a missing entry never breaks a render.

use clap::ValueEnum;
use serde::Serialize;

use crate::chart::Tag;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ja,
    Zh,
    Es,
    Hi,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
            Lang::Zh => "zh",
            Lang::Es => "es",
            Lang::Hi => "hi",
        }
    }

    pub fn parse(s: &str) -> Option<Lang> {
        match s {
            "en" => Some(Lang::En),
            "ja" => Some(Lang::Ja),
            "zh" => Some(Lang::Zh),
            "es" => Some(Lang::Es),
            "hi" => Some(Lang::Hi),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Title,
    TargetTime,
    Pace,
    Distance,
    SplitTime,
    Half,
    Finish,
    PacePerKm,
    PacePerMile,
    GoodLuck,
}

impl Key {
    /// Raw key name, the last resort of the fallback chain.
    pub fn name(self) -> &'static str {
        match self {
            Key::Title => "title",
            Key::TargetTime => "targetTime",
            Key::Pace => "pace",
            Key::Distance => "distance",
            Key::SplitTime => "splitTime",
            Key::Half => "half",
            Key::Finish => "finish",
            Key::PacePerKm => "pacePerKm",
            Key::PacePerMile => "pacePerMile",
            Key::GoodLuck => "goodLuck",
        }
    }

    pub fn for_tag(tag: Tag) -> Key {
        match tag {
            Tag::Half => Key::Half,
            Tag::Finish => Key::Finish,
        }
    }
}

pub const ALL_KEYS: &[Key] = &[
    Key::Title,
    Key::TargetTime,
    Key::Pace,
    Key::Distance,
    Key::SplitTime,
    Key::Half,
    Key::Finish,
    Key::PacePerKm,
    Key::PacePerMile,
    Key::GoodLuck,
];

fn table(lang: Lang) -> &'static [(Key, &'static str)] {
    match lang {
        Lang::En => &[
            (Key::Title, "Marathon Pace Chart"),
            (Key::TargetTime, "Target Time"),
            (Key::Pace, "Pace"),
            (Key::Distance, "Distance"),
            (Key::SplitTime, "Split Time"),
            (Key::Half, "Half"),
            (Key::Finish, "Finish"),
            (Key::PacePerKm, "Pace per km"),
            (Key::PacePerMile, "Pace per mile"),
            (Key::GoodLuck, "Good luck with your marathon!"),
        ],
        Lang::Ja => &[
            (Key::Title, "マラソンペース表"),
            (Key::TargetTime, "目標タイム"),
            (Key::Pace, "ペース"),
            (Key::Distance, "距離"),
            (Key::SplitTime, "スプリット"),
            (Key::Half, "ハーフ"),
            (Key::Finish, "ゴール"),
            (Key::PacePerKm, "キロペース"),
            (Key::PacePerMile, "マイルペース"),
            (Key::GoodLuck, "マラソン頑張ってください！"),
        ],
        Lang::Zh => &[
            (Key::Title, "马拉松配速表"),
            (Key::TargetTime, "目标时间"),
            (Key::Pace, "配速"),
            (Key::Distance, "距离"),
            (Key::SplitTime, "分段时间"),
            (Key::Half, "半程"),
            (Key::Finish, "终点"),
            (Key::PacePerKm, "每公里配速"),
            (Key::PacePerMile, "每英里配速"),
            (Key::GoodLuck, "祝你马拉松顺利！"),
        ],
        Lang::Es => &[
            (Key::Title, "Tabla de Ritmo de Maratón"),
            (Key::TargetTime, "Tiempo Objetivo"),
            (Key::Pace, "Ritmo"),
            (Key::Distance, "Distancia"),
            (Key::SplitTime, "Tiempo Parcial"),
            (Key::Half, "Media"),
            (Key::Finish, "Meta"),
            (Key::PacePerKm, "Ritmo por km"),
            (Key::PacePerMile, "Ritmo por milla"),
            (Key::GoodLuck, "¡Buena suerte en tu maratón!"),
        ],
        Lang::Hi => &[
            (Key::Title, "मैराथन पेस चार्ट"),
            (Key::TargetTime, "लक्ष्य समय"),
            (Key::Pace, "पेस"),
            (Key::Distance, "दूरी"),
            (Key::SplitTime, "स्प्लिट समय"),
            (Key::Half, "हाफ"),
            (Key::Finish, "फिनिश"),
            (Key::PacePerKm, "प्रति किमी पेस"),
            (Key::PacePerMile, "प्रति मील पेस"),
            (Key::GoodLuck, "आपके मैराथन के लिए शुभकामनाएं!"),
        ],
    }
}

fn lookup(lang: Lang, key: Key) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// Resolve a display string: requested language, then English, then the raw
/// key name.
pub fn resolve(lang: Lang, key: Key) -> &'static str {
    lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .unwrap_or(key.name())
}

/// Best-guess language from a `LANG`-style environment value such as
/// `"ja_JP.UTF-8"` or `"zh-Hant"`. Anything unrecognized is English.
pub fn detect_lang(env_value: Option<&str>) -> Lang {
    let raw = match env_value {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Lang::En,
    };
    let code: String = raw
        .split(['_', '-', '.'])
        .next()
        .unwrap_or("")
        .to_lowercase();
    if let Some(lang) = Lang::parse(&code) {
        return lang;
    }
    if raw.to_lowercase().starts_with("zh") {
        return Lang::Zh;
    }
    Lang::En
}
