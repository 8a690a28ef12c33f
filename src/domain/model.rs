use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 택배사 (parcel carrier) entry as returned by the carrier directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    #[serde(
        rename = "International",
        serialize_with = "serialize_flag",
        deserialize_with = "deserialize_flag"
    )]
    pub international: bool,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Carrier {
    pub fn new(international: bool, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            international,
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Body of the carrier directory response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyList {
    #[serde(rename = "Company")]
    pub company: Vec<Carrier>,
}

// 目錄服務以字串 "true"/"false" 傳遞旗標
fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "true" } else { "false" })
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match String::deserialize(deserializer)?.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"the string \"true\" or \"false\"",
        )),
    }
}

/// 국내 / 국외 selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Domestic,
    International,
}

impl Scope {
    pub fn id(self) -> u8 {
        match self {
            Scope::Domestic => 1,
            Scope::International => 2,
        }
    }

    pub fn is_international(self) -> bool {
        self == Scope::International
    }

    /// Carrier preselected when the scope is chosen: CJ대한통운 at home, EMS abroad.
    pub fn default_carrier(self) -> (&'static str, &'static str) {
        match self {
            Scope::Domestic => (DEFAULT_CARRIER_CODE, DEFAULT_CARRIER_NAME),
            Scope::International => ("12", "EMS"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scope::Domestic => "국내",
            Scope::International => "국외",
        }
    }
}

pub const DEFAULT_CARRIER_CODE: &str = "04";
pub const DEFAULT_CARRIER_NAME: &str = "CJ대한통운";

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Domestic => write!(f, "domestic"),
            Scope::International => write!(f, "international"),
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "domestic" | "1" | "국내" => Ok(Scope::Domestic),
            "international" | "2" | "국외" => Ok(Scope::International),
            other => Err(format!(
                "unknown scope '{}', expected 'domestic' or 'international'",
                other
            )),
        }
    }
}

/// Presentation profile; only the palette tokens differ between themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Theme {
    #[default]
    Default,
    Salmon,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub back: &'static str,
    pub hover: &'static str,
    pub active: &'static str,
    pub text: &'static str,
    pub outline: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Salmon, Theme::Blue];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Salmon => "salmon",
            Theme::Blue => "blue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "기본",
            Theme::Salmon => "살몬",
            Theme::Blue => "블루",
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Default => ThemePalette {
                back: "bg-indigo-500",
                hover: "hover:bg-indigo-300",
                active: "bg-indigo-400",
                text: "text-indigo-500",
                outline: "outline-indigo-300",
            },
            Theme::Salmon => ThemePalette {
                back: "bg-[#FA8072]",
                hover: "hover:bg-[#f85441]",
                active: "bg-[#f96a59]",
                text: "text-[#FA8072]",
                outline: "outline-[#f85441]",
            },
            Theme::Blue => ThemePalette {
                back: "bg-blue-500",
                hover: "hover:bg-blue-300",
                active: "bg-blue-400",
                text: "text-blue-500",
                outline: "outline-blue-300",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown theme '{}', expected default, salmon or blue", s))
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_list_parses_string_flags() {
        let body = r#"{"Company":[
            {"International":"false","Code":"04","Name":"CJ대한통운"},
            {"International":"true","Code":"12","Name":"EMS"}
        ]}"#;

        let list: CompanyList = serde_json::from_str(body).unwrap();

        assert_eq!(
            list.company,
            vec![
                Carrier::new(false, "04", "CJ대한통운"),
                Carrier::new(true, "12", "EMS"),
            ]
        );
    }

    #[test]
    fn test_carrier_rejects_non_literal_flag() {
        let body = r#"{"International":"yes","Code":"04","Name":"CJ대한통운"}"#;
        assert!(serde_json::from_str::<Carrier>(body).is_err());

        let body = r#"{"International":true,"Code":"04","Name":"CJ대한통운"}"#;
        assert!(serde_json::from_str::<Carrier>(body).is_err());
    }

    #[test]
    fn test_carrier_serializes_flag_as_string() {
        let json = serde_json::to_value(Carrier::new(true, "12", "EMS")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"International": "true", "Code": "12", "Name": "EMS"})
        );
    }

    #[test]
    fn test_scope_parsing_and_defaults() {
        assert_eq!("domestic".parse::<Scope>().unwrap(), Scope::Domestic);
        assert_eq!("2".parse::<Scope>().unwrap(), Scope::International);
        assert_eq!("국외".parse::<Scope>().unwrap(), Scope::International);
        assert!("overseas".parse::<Scope>().is_err());

        assert_eq!(Scope::Domestic.default_carrier(), ("04", "CJ대한통운"));
        assert_eq!(Scope::International.default_carrier(), ("12", "EMS"));
        assert_eq!(Scope::International.id(), 2);
    }

    #[test]
    fn test_theme_palettes() {
        assert_eq!(Theme::default(), Theme::Default);
        assert_eq!("Salmon".parse::<Theme>().unwrap(), Theme::Salmon);
        assert!("dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Default.palette().back, "bg-indigo-500");
        assert_eq!(Theme::Salmon.palette().hover, "hover:bg-[#f85441]");
        assert_eq!(Theme::Blue.palette().outline, "outline-blue-300");
        assert_eq!(Theme::Blue.label(), "블루");
    }

    #[test]
    fn test_theme_deserializes_like_from_str() {
        let theme: Theme = serde_json::from_str("\"Salmon\"").unwrap();
        assert_eq!(theme, Theme::Salmon);
        assert!(serde_json::from_str::<Theme>("\"neon\"").is_err());
        assert_eq!(serde_json::to_string(&Theme::Blue).unwrap(), "\"blue\"");
    }
}
