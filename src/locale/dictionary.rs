use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every piece of text the shell renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub want: &'static str,
    pub have: &'static str,
    pub tick: &'static str,
    pub gamepass: &'static str,
    pub calc: &'static str,
    pub time: &'static str,
    pub already: &'static str,
    pub credits_btn: &'static str,
    pub credits_title: &'static str,
    pub credits_message: &'static str,
}

pub const LABELS_EN: Labels = Labels {
    want: "Power you want:",
    have: "Power you have now:",
    tick: "Power I get per tick:",
    gamepass: "X2 Gamepass?",
    calc: "Calculate",
    time: "Time",
    already: "You already reached your goal 🎉",
    credits_btn: "Credits",
    credits_title: "Credits",
    credits_message: "App made by \"RoWu\" AKA \"4d5d\" in Roblox\n\
                      Also thanks ARK for telling me how much is a tick lol.\n\n\
                      You can post this file wherever you want,\n\
                      but please don't remove the credits :)",
};

pub const LABELS_ES: Labels = Labels {
    want: "Poder que quieres:",
    have: "Poder que tienes ahora:",
    tick: "Poder que ganas por tick:",
    gamepass: "¿X2 Gamepass?",
    calc: "Calcular",
    time: "Tiempo",
    already: "Ya alcanzaste tu meta 🎉",
    credits_btn: "Créditos",
    credits_title: "Créditos",
    credits_message: "Aplicación hecha por \"RoWu\" AKA \"4d5d\" en Roblox\n\
                      Gracias a ARK por decirme cuánto dura un tick, lol.\n\n\
                      Puedes publicar este archivo donde quieras,\n\
                      pero por favor no quites los créditos :)",
};

/// Choices of the rate-modifier selector, not translated
pub const YES: &str = "Yes";
pub const NO: &str = "No";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &LABELS_EN,
            Locale::Spanish => &LABELS_ES,
        }
    }

    /// The other locale
    pub fn toggle(self) -> Self {
        match self {
            Locale::English => Locale::Spanish,
            Locale::Spanish => Locale::English,
        }
    }

    /// Short code shown for this locale
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "ENG",
            Locale::Spanish => "ESP",
        }
    }

    /// Caption of the language button: it names the locale a press switches to
    pub fn toggle_caption(self) -> &'static str {
        self.toggle().code()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Locale::English),
            "es" | "esp" | "spanish" => Ok(Locale::Spanish),
            other => Err(format!(
                "unknown language '{}' (expected 'en' or 'es')",
                other
            )),
        }
    }
}
