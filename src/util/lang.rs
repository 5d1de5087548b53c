//! Interface language preference.
//!
//! Persisted in `localStorage` under its own key, next to (but independent
//! of) the credential. The original dashboard ships Vietnamese and English.

#[cfg(test)]
#[path = "lang_test.rs"]
mod lang_test;

#[cfg(feature = "hydrate")]
const LANG_KEY: &str = "procure_ui_lang";

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Vi,
    En,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Vi => "vi",
            Lang::En => "en",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "vi" => Some(Lang::Vi),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Read the stored preference, defaulting to Vietnamese.
pub fn read_preference() -> Lang {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(LANG_KEY) {
                    if let Some(lang) = Lang::parse(&value) {
                        return lang;
                    }
                }
            }
        }
    }
    Lang::default()
}

/// Switch to the other language and persist the new preference.
pub fn toggle(current: Lang) -> Lang {
    let next = match current {
        Lang::Vi => Lang::En,
        Lang::En => Lang::Vi,
    };
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(LANG_KEY, next.as_str());
            }
        }
    }
    next
}
