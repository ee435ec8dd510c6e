use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Root class the stylesheet keys its palette off.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

/// Install the theme signal, seeded from the OS color-scheme preference once
/// the client is up. Toggling afterwards is purely in-memory; nothing is
/// persisted.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::Dark);
    let prefers_dark = leptos_use::use_preferred_dark();
    Effect::watch(
        || (),
        move |_, _, _| {
            if !prefers_dark.get_untracked() {
                theme.set(Theme::Light);
            }
        },
        true,
    );
    provide_context(theme);
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_the_two_variants() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
