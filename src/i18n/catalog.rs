// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::i18n::format::{format, FormatDict};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Authoring language of the site, used when nothing else matches.
const DEFAULT_LOCALE: &str = "ko";

pub struct I18n {
    catalogs: HashMap<LanguageIdentifier, HashMap<String, String>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut catalogs = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".toml") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let text = String::from_utf8_lossy(content.data.as_ref());
                        match toml::from_str::<HashMap<String, String>>(&text) {
                            Ok(messages) => {
                                catalogs.insert(locale.clone(), messages);
                                available_locales.push(locale);
                            }
                            Err(err) => {
                                eprintln!("Skipping malformed catalog {}: {}", filename, err);
                            }
                        }
                    }
                }
            }
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            catalogs,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.catalogs.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Looks up `key` in the current locale's catalog.
    ///
    /// A missing key comes back unchanged, with a warning on stderr, so
    /// rendering keeps going.
    pub fn t(&self, key: &str) -> String {
        if let Some(messages) = self.catalogs.get(&self.current_locale) {
            if let Some(message) = messages.get(key) {
                return message.clone();
            }
            eprintln!("No appropriate translation for \"{}\"!", key);
        }
        key.to_string()
    }

    /// Translation plus placeholder substitution.
    pub fn t_with(&self, key: &str, dict: &FormatDict) -> String {
        format(&self.t(key), dict)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Some(lang) = match_available(&lang_str, available) {
            return Some(lang);
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Some(lang) = match_available(lang_str, available) {
            return Some(lang);
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Some(lang) = match_available(&os_locale_str, available) {
            return Some(lang);
        }
    }

    None
}

/// Exact match first, then any catalog sharing the primary language
/// subtag, so "ko-KR" selects the "ko" catalog.
fn match_available(
    candidate: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let lang: LanguageIdentifier = candidate.parse().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|locale| locale.language == lang.language)
        .cloned()
}
