use crate::error::FormatError;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

const MAX_FRACTION_DIGITS: usize = 3;
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Locales for `toLocaleString()`-style output: grouped integer digits and
/// at most three fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    #[default]
    EnUs,
    DeDe,
    FrFr,
    RuRu,
    DeCh,
}

impl NumberLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            NumberLocale::EnUs => "en-US",
            NumberLocale::DeDe => "de-DE",
            NumberLocale::FrFr => "fr-FR",
            NumberLocale::RuRu => "ru-RU",
            NumberLocale::DeCh => "de-CH",
        }
    }

    pub fn grouping_separator(&self) -> char {
        match self {
            NumberLocale::EnUs => ',',
            NumberLocale::DeDe => '.',
            NumberLocale::FrFr => '\u{202F}',
            NumberLocale::RuRu => '\u{00A0}',
            NumberLocale::DeCh => '\u{2019}',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            NumberLocale::EnUs | NumberLocale::DeCh => '.',
            NumberLocale::DeDe | NumberLocale::FrFr | NumberLocale::RuRu => ',',
        }
    }

    pub fn format_int(&self, value: i64) -> String {
        let grouped = self.group(&value.unsigned_abs().to_string());
        if value < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    pub fn format_uint(&self, value: u64) -> String {
        self.group(&value.to_string())
    }

    pub fn format_float(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_negative() { "-∞" } else { "∞" }.to_string();
        }

        let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
        if value.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }

    /// First parsable locale from `LC_ALL`, `LC_NUMERIC`, `LANG`.
    pub fn from_env() -> Option<Self> {
        Self::from_env_vars(|key| std::env::var(key).ok())
    }

    pub fn from_env_vars<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in LOCALE_VARS {
            let Some(value) = lookup(key).filter(|v| !v.is_empty()) else {
                continue;
            };
            match value.parse() {
                Ok(locale) => {
                    debug!("using number locale {} from {}", locale, key);
                    return Some(locale);
                }
                Err(e) => warn!("ignoring {}: {}", key, e),
            }
        }
        None
    }

    fn group(&self, digits: &str) -> String {
        let separator = self.grouping_separator();
        let mut result = String::with_capacity(digits.len() + digits.len() / 3 * 3);
        let len = digits.len();

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                result.push(separator);
            }
            result.push(c);
        }

        result
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NumberLocale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "de_DE.UTF-8@euro" -> "de-de"
        let tag = s
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();

        if tag == "c" || tag == "posix" {
            return Ok(NumberLocale::EnUs);
        }

        let mut subtags = tag.split('-');
        let language = subtags.next().unwrap_or_default();
        let region = subtags.find(|t| t.len() == 2);

        match (language, region) {
            ("en", _) => Ok(NumberLocale::EnUs),
            ("de", Some("ch" | "li")) => Ok(NumberLocale::DeCh),
            ("de", _) => Ok(NumberLocale::DeDe),
            ("fr", _) => Ok(NumberLocale::FrFr),
            ("ru", _) => Ok(NumberLocale::RuRu),
            _ => Err(FormatError::UnknownLocale(s.to_string())),
        }
    }
}

pub fn format_locale_number(value: f64, locale: NumberLocale) -> String {
    locale.format_float(value)
}
