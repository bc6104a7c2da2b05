// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            match load_bundle(file.as_ref()) {
                Ok(Some((locale, bundle))) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "skipping translation"),
            }
        }

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(DEFAULT_LOCALE);
        tracing::debug!(locale = %current_locale, "locale selected");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Parses one embedded file. Files not named `<locale>.ftl` are ignored.
fn load_bundle(
    filename: &str,
) -> Result<Option<(LanguageIdentifier, FluentBundle<FluentResource>)>> {
    let Some(stem) = filename.strip_suffix(".ftl") else {
        return Ok(None);
    };
    let locale = stem
        .parse::<LanguageIdentifier>()
        .map_err(|err| Error::translation(filename, err.to_string()))?;
    let content = Asset::get(filename)
        .ok_or_else(|| Error::translation(filename, "not embedded"))?;

    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::translation(filename, format!("{} syntax errors", errors.len()))
    })?;

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    if bundle.add_resource(resource).is_err() {
        tracing::warn!(%filename, "translation has duplicate messages");
    }
    Ok(Some((locale, bundle)))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn unknown_cli_language_falls_through_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn embedded_translations_cover_both_locales() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&langid!("en-US")));
        assert!(i18n.available_locales.contains(&langid!("fr")));
        assert_eq!(i18n.tr("controller-record"), "Record");
    }

    #[test]
    fn french_translation_is_used_when_requested() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.current_locale(), &langid!("fr"));
        assert_eq!(i18n.tr("controller-record"), "Enregistrer");
    }

    #[test]
    fn controller_labels_exist_in_every_locale() {
        let keys = [
            "controller-record",
            "controller-stop",
            "controller-camera-on",
            "controller-camera-off",
            "controller-camera-preview",
            "controller-handle-tooltip",
        ];
        for lang in ["en-US", "fr"] {
            let i18n = I18n::new(Some(lang.to_string()), &Config::default());
            for key in keys {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{lang}: {key}");
            }
        }
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn non_translation_files_are_ignored() {
        assert!(matches!(load_bundle("README.md"), Ok(None)));
    }

    #[test]
    fn unknown_locale_file_is_reported() {
        let err = load_bundle("de.ftl").err();
        assert!(matches!(err, Some(Error::Translation { ref file, .. }) if file == "de.ftl"));
    }
}
