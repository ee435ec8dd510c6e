//! Planet-of-the-day theming and the on-demand trivia picks that go with it.
//!
//! The weekday decides the planet; the theme only decides which of the
//! planet's two background images is used. The day index is derived once
//! when the hosting component mounts and deliberately never re-derived, so a
//! session left open across midnight keeps its planet.

use chrono::{Datelike, Local};
use rand::Rng;
use thiserror::Error;

use crate::theme::Theme;

pub struct Planet {
    pub key: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    dark_bg: &'static str,
    light_bg: &'static str,
}

// Sunday-first, matching chrono's num_days_from_sunday. Public-domain
// NASA/ESA imagery.
static WEEKDAY_PLANETS: [Planet; 7] = [
    Planet {
        key: "sun",
        name: "Sun",
        emoji: "☀️",
        dark_bg: "https://images.unsplash.com/photo-1532693322450-2cb5c511067d?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1614642264762-d0a3b8bf3700?w=1920&q=80",
    },
    Planet {
        key: "moon",
        name: "Moon",
        emoji: "🌙",
        dark_bg: "https://images.unsplash.com/photo-1446941611757-91d2c3bd3d45?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1522030299830-16b8d3d049fe?w=1920&q=80",
    },
    Planet {
        key: "mars",
        name: "Mars",
        emoji: "🔴",
        dark_bg: "https://images.unsplash.com/photo-1614728894747-a83421e2b9c9?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1614313913007-2b4ae8ce32d6?w=1920&q=80",
    },
    Planet {
        key: "mercury",
        name: "Mercury",
        emoji: "☿️",
        dark_bg: "https://images.unsplash.com/photo-1614732414444-096e5f1122d5?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1639921884918-8d28ab2e39a4?w=1920&q=80",
    },
    Planet {
        key: "jupiter",
        name: "Jupiter",
        emoji: "🪐",
        dark_bg: "https://images.unsplash.com/photo-1614732484003-ef9881c53c14?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1630839437035-dac17da580d0?w=1920&q=80",
    },
    Planet {
        key: "venus",
        name: "Venus",
        emoji: "♀️",
        dark_bg: "https://images.unsplash.com/photo-1614314107768-6018061b5b72?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1614730321146-b6fa6a46bcb4?w=1920&q=80",
    },
    Planet {
        key: "saturn",
        name: "Saturn",
        emoji: "🪐",
        dark_bg: "https://images.unsplash.com/photo-1614732484230-9d55c3c4e2e6?w=1920&q=80",
        light_bg: "https://images.unsplash.com/photo-1639921884918-8d28ab2e39a4?w=1920&q=80",
    },
];

/// The resolved visual variant for one (day, theme) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub key: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub background: &'static str,
}

/// Day of week with Sunday = 0, frozen by the caller at mount time.
pub fn today_index() -> u8 {
    Local::now().weekday().num_days_from_sunday() as u8
}

/// Pure mapping from (day, theme) to the planet variant. Identical inputs
/// always produce the identical pair.
pub fn resolve_variant(day: u8, theme: Theme) -> Variant {
    let planet = &WEEKDAY_PLANETS[day as usize % WEEKDAY_PLANETS.len()];
    Variant {
        key: planet.key,
        name: planet.name,
        emoji: planet.emoji,
        background: if theme.is_dark() {
            planet.dark_bg
        } else {
            planet.light_bg
        },
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    #[error("fact pool is empty")]
    EmptyPool,
}

/// Uniform pick over the pool. Independent across calls; repeats are allowed.
pub fn pick_random_fact<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> Result<&'a str, FactError> {
    if pool.is_empty() {
        return Err(FactError::EmptyPool);
    }
    Ok(&pool[rng.gen_range(0..pool.len())])
}

/// On-demand trivia for the current planet. `reveal` draws a fresh fact and
/// shows it; `dismiss` hides it but keeps the value, so showing again before
/// the next draw repeats the last fact.
pub struct FactCard {
    pool: Vec<String>,
    current: Option<usize>,
    visible: bool,
}

impl FactCard {
    pub fn new(pool: Vec<String>) -> Result<Self, FactError> {
        if pool.is_empty() {
            return Err(FactError::EmptyPool);
        }
        Ok(Self {
            pool,
            current: None,
            visible: false,
        })
    }

    pub fn reveal<R: Rng>(&mut self, rng: &mut R) {
        self.current = Some(rng.gen_range(0..self.pool.len()));
        self.visible = true;
    }

    /// Re-roll while already visible. Same draw as `reveal`.
    pub fn pick_another<R: Rng>(&mut self, rng: &mut R) {
        self.reveal(rng);
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.pool[i].as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool(facts: &[&str]) -> Vec<String> {
        facts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn variant_is_deterministic_for_fixed_inputs() {
        // Tuesday + Dark always yields the same Mars pair
        let first = resolve_variant(2, Theme::Dark);
        for _ in 0..10 {
            assert_eq!(resolve_variant(2, Theme::Dark), first);
        }
        assert_eq!(first.key, "mars");
        assert_eq!(first.background, WEEKDAY_PLANETS[2].dark_bg);
    }

    #[test]
    fn theme_only_changes_the_asset() {
        for day in 0..7 {
            let dark = resolve_variant(day, Theme::Dark);
            let light = resolve_variant(day, Theme::Light);
            assert_eq!(dark.key, light.key);
            assert_eq!(dark.name, light.name);
            assert_eq!(dark.emoji, light.emoji);
        }
    }

    #[test]
    fn every_weekday_has_a_distinct_key() {
        let mut keys: Vec<_> = WEEKDAY_PLANETS.iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn picks_cover_the_pool_roughly_uniformly() {
        let pool = pool(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..300 {
            let fact = pick_random_fact(&pool, &mut rng).expect("non-empty pool");
            *counts.entry(fact).or_default() += 1;
        }
        for fact in ["a", "b", "c"] {
            assert!(
                counts.get(fact).copied().unwrap_or(0) >= 50,
                "{fact} drawn too rarely: {counts:?}"
            );
        }
    }

    #[test]
    fn empty_pool_is_a_loud_configuration_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_random_fact(&[], &mut rng), Err(FactError::EmptyPool));
        assert!(matches!(FactCard::new(Vec::new()), Err(FactError::EmptyPool)));
    }

    #[test]
    fn dismiss_keeps_the_last_fact() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut card = FactCard::new(pool(&["one", "two"])).expect("non-empty pool");
        assert!(!card.is_visible());
        assert_eq!(card.current(), None);

        card.reveal(&mut rng);
        assert!(card.is_visible());
        let shown = card.current().expect("revealed").to_string();

        card.dismiss();
        assert!(!card.is_visible());
        assert_eq!(card.current(), Some(shown.as_str()));
    }

    #[test]
    fn pick_another_rerolls_from_the_same_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut card = FactCard::new(pool(&["one", "two", "three"])).expect("non-empty pool");
        card.reveal(&mut rng);
        for _ in 0..20 {
            card.pick_another(&mut rng);
            assert!(card.is_visible());
            let current = card.current().expect("visible card has a fact");
            assert!(["one", "two", "three"].contains(&current));
        }
    }
}
