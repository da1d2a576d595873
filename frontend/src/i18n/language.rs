//! Supported page languages.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the three languages the landing page ships copy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ko,
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ko, Language::En, Language::Zh];

    /// Short code used in `data-*` attributes and in storage.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Value for the root element's `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            other => other.code(),
        }
    }

    /// Id of the selector control that activates this language.
    pub fn button_id(&self) -> &'static str {
        match self {
            Language::Ko => "lang-ko",
            Language::En => "lang-en",
            Language::Zh => "lang-zh",
        }
    }

    /// Name of the attribute holding this language's copy, e.g. `data-en`.
    pub fn text_attribute(&self) -> String {
        format!("data-{}", self.code())
    }

    /// Name of the attribute holding this language's placeholder, e.g. `data-en-placeholder`.
    pub fn placeholder_attribute(&self) -> String {
        format!("data-{}-placeholder", self.code())
    }

    /// Message shown after the beta signup form is submitted.
    pub fn signup_confirmation(&self) -> &'static str {
        match self {
            Language::Ko => "베타 테스터 신청이 완료되었습니다!\n빠른 시일 내에 연락드리겠습니다.",
            Language::Zh => "Beta测试申请已完成！\n我们将尽快与您联系。",
            Language::En => "Beta testing application completed!\nWe will contact you soon.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }

    #[test]
    fn parses_known_codes() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "unknown language code 'fr'");
        assert!("".parse::<Language>().is_err());
        assert!("KO".parse::<Language>().is_err());
    }

    #[test]
    fn chinese_uses_region_tag() {
        assert_eq!(Language::Zh.html_lang(), "zh-CN");
        assert_eq!(Language::Ko.html_lang(), "ko");
        assert_eq!(Language::En.html_lang(), "en");
    }

    #[test]
    fn attribute_names() {
        assert_eq!(Language::Zh.text_attribute(), "data-zh");
        assert_eq!(Language::En.placeholder_attribute(), "data-en-placeholder");
        assert_eq!(Language::Ko.button_id(), "lang-ko");
    }

    #[test]
    fn confirmation_is_localized() {
        assert!(Language::Ko.signup_confirmation().starts_with("베타 테스터"));
        assert!(Language::Zh.signup_confirmation().starts_with("Beta测试"));
        assert!(Language::En.signup_confirmation().contains("We will contact you soon."));
    }
}
