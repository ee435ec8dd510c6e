//! Translated copy for the site. Locale bundles are JSON files embedded at
//! build time and parsed once; lookups are dot-separated key paths resolved
//! as JSON pointers, so `about.photos.0.location` reaches into arrays.

use std::collections::HashMap;
use std::sync::LazyLock;

use leptos::prelude::*;
use rust_embed::Embed;
use serde_json::Value;
use thiserror::Error;

#[derive(Embed)]
#[folder = "locales"]
struct Locales;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    pub fn tag(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
        }
    }
}

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("locale bundle {0} is not embedded")]
    Missing(String),
    #[error("locale bundle {0} failed to parse: {1}")]
    Parse(String, serde_json::Error),
}

static BUNDLES: LazyLock<HashMap<Lang, Value>> = LazyLock::new(|| {
    Lang::ALL
        .iter()
        .map(|&lang| {
            let bundle = load_bundle(lang).unwrap_or_else(|e| {
                log::error!("{e}");
                Value::Null
            });
            (lang, bundle)
        })
        .collect()
});

fn load_bundle(lang: Lang) -> Result<Value, LocaleError> {
    let file = format!("{}.json", lang.tag());
    let asset = Locales::get(&file).ok_or_else(|| LocaleError::Missing(file.clone()))?;
    serde_json::from_slice(&asset.data).map_err(|e| LocaleError::Parse(file, e))
}

fn lookup(lang: Lang, key: &str) -> Option<&'static Value> {
    let bundles: &'static HashMap<Lang, Value> = &BUNDLES;
    let pointer = format!("/{}", key.replace('.', "/"));
    bundles.get(&lang)?.pointer(&pointer)
}

/// Resolve `key` to a string in `lang`. `None` for absent keys or non-string
/// values.
pub fn translate(lang: Lang, key: &str) -> Option<&'static str> {
    lookup(lang, key)?.as_str()
}

/// Resolve `key` to a list of strings. Absent keys and non-arrays come back
/// empty; non-string entries are skipped.
pub fn translate_list(lang: Lang, key: &str) -> Vec<String> {
    lookup(lang, key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Number of entries under an array-valued key. Zero when absent.
pub fn list_len(lang: Lang, key: &str) -> usize {
    lookup(lang, key)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Reactive handle to the active language. Copyable, shared via context.
#[derive(Clone, Copy)]
pub struct I18n {
    pub lang: RwSignal<Lang>,
}

impl I18n {
    /// Translate against the current language. Missing keys echo the key so
    /// broken copy is visible in the page rather than silently blank.
    pub fn t(&self, key: &str) -> String {
        let lang = self.lang.get();
        match translate(lang, key) {
            Some(text) => text.to_string(),
            None => {
                log::warn!("missing translation {key:?} for {}", lang.tag());
                key.to_string()
            }
        }
    }

    pub fn t_list(&self, key: &str) -> Vec<String> {
        let lang = self.lang.get();
        let items = translate_list(lang, key);
        if items.is_empty() {
            log::warn!("missing list translation {key:?} for {}", lang.tag());
        }
        items
    }

    pub fn len(&self, key: &str) -> usize {
        list_len(self.lang.get(), key)
    }
}

pub fn provide_i18n() -> I18n {
    let i18n = I18n {
        lang: RwSignal::new(Lang::default()),
    };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bundles_parse() {
        for lang in Lang::ALL {
            assert!(
                !BUNDLES.get(&lang).expect("bundle loaded").is_null(),
                "{} bundle failed to load",
                lang.tag()
            );
        }
    }

    #[test]
    fn plain_keys_resolve_in_every_language() {
        for lang in Lang::ALL {
            for key in ["hero.greeting", "about.title", "contact.form.send"] {
                assert!(
                    translate(lang, key).is_some(),
                    "{key} missing in {}",
                    lang.tag()
                );
            }
        }
    }

    #[test]
    fn indexed_paths_reach_into_arrays() {
        for lang in Lang::ALL {
            assert!(translate(lang, "about.photos.0.location").is_some());
        }
    }

    #[test]
    fn role_labels_and_boot_lines_are_non_empty_lists() {
        for lang in Lang::ALL {
            assert!(!translate_list(lang, "hero.roles").is_empty());
            assert!(!translate_list(lang, "ai.boot").is_empty());
        }
    }

    #[test]
    fn every_planet_has_a_fact_pool_in_every_language() {
        for lang in Lang::ALL {
            for key in ["sun", "moon", "mars", "mercury", "jupiter", "venus", "saturn"] {
                let pool = translate_list(lang, &format!("planets.facts.{key}"));
                assert!(!pool.is_empty(), "{key} facts missing in {}", lang.tag());
            }
        }
    }

    #[test]
    fn work_experience_entries_are_complete_in_every_language() {
        for lang in Lang::ALL {
            assert!(translate(lang, "nav.experience").is_some());
            let count = list_len(lang, "experience.items");
            assert!(count >= 4, "expected the full work history in {}", lang.tag());
            for i in 0..count {
                for field in ["icon", "role", "company", "period", "location", "description"] {
                    assert!(
                        translate(lang, &format!("experience.items.{i}.{field}")).is_some(),
                        "experience item {i} missing {field} in {}",
                        lang.tag()
                    );
                }
                assert!(
                    !translate_list(lang, &format!("experience.items.{i}.responsibilities"))
                        .is_empty()
                );
                assert!(!translate_list(lang, &format!("experience.items.{i}.skills")).is_empty());
            }
        }
    }

    #[test]
    fn values_grid_entries_pair_icons_with_labels() {
        for lang in Lang::ALL {
            assert!(translate(lang, "about.philosophy").is_some());
            let count = list_len(lang, "about.values");
            assert!(count > 0, "values grid empty in {}", lang.tag());
            for i in 0..count {
                assert!(translate(lang, &format!("about.values.{i}.icon")).is_some());
                assert!(translate(lang, &format!("about.values.{i}.label")).is_some());
            }
        }
    }

    #[test]
    fn missing_keys_are_none_not_panics() {
        assert_eq!(translate(Lang::En, "no.such.key"), None);
        assert!(translate_list(Lang::En, "no.such.list").is_empty());
        assert_eq!(list_len(Lang::En, "no.such.list"), 0);
    }
}
