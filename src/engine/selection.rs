//! Word-set selection
//!
//! A [`Catalog`] is a validated, non-empty list of pyramids. Selection draws
//! one Mulberry32 value from the seed, so every caller with the same seed
//! gets the same pyramid.

use super::rng::Mulberry32;
use crate::core::{WordSet, WordSetError};
use crate::wordlists::{DAILY_LIFE_SETS, DAILY_SETS, NATURE_SETS, OBJECT_SETS};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Endless seeds are drawn from `0..ENDLESS_SEED_RANGE`
pub const ENDLESS_SEED_RANGE: i32 = 1_000_000;

/// Non-empty ordered list of word sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sets: Vec<WordSet>,
}

/// Error type for invalid catalogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    InvalidSet { index: usize, error: WordSetError },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Catalog must contain at least one word set"),
            Self::InvalidSet { index, error } => {
                write!(f, "Word set #{}: {error}", index + 1)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

fn builtin(sets: &[[&str; 6]], name: &str) -> Catalog {
    Catalog::from_slices(sets)
        .unwrap_or_else(|e| panic!("built-in {name} catalog is invalid: {e}"))
}

static DAILY: LazyLock<Catalog> = LazyLock::new(|| builtin(DAILY_SETS, "daily"));
static NATURE: LazyLock<Catalog> = LazyLock::new(|| builtin(NATURE_SETS, "nature"));
static DAILY_LIFE: LazyLock<Catalog> = LazyLock::new(|| builtin(DAILY_LIFE_SETS, "daily life"));
static OBJECTS: LazyLock<Catalog> = LazyLock::new(|| builtin(OBJECT_SETS, "objects"));

impl Catalog {
    /// Build a catalog from already-validated word sets
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if `sets` is empty.
    pub fn new(sets: Vec<WordSet>) -> Result<Self, CatalogError> {
        if sets.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { sets })
    }

    /// Build a catalog from raw word lists
    ///
    /// # Errors
    /// Returns `CatalogError` if the list is empty or any set is invalid.
    pub fn from_slices<S: AsRef<str>>(sets: &[[S; 6]]) -> Result<Self, CatalogError> {
        let parsed = sets
            .iter()
            .enumerate()
            .map(|(index, words)| {
                WordSet::new(words).map_err(|error| CatalogError::InvalidSet { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// The built-in daily catalog
    #[must_use]
    pub fn daily() -> &'static Self {
        &DAILY
    }

    /// The built-in catalog for an endless pool
    #[must_use]
    pub fn endless(pool: EndlessPool) -> &'static Self {
        match pool {
            EndlessPool::Random => &DAILY,
            EndlessPool::Nature => &NATURE,
            EndlessPool::DailyLife => &DAILY_LIFE,
            EndlessPool::Objects => &OBJECTS,
        }
    }

    /// Pick a word set for `seed`
    ///
    /// # Examples
    /// ```
    /// use piramit::engine::Catalog;
    ///
    /// let set = Catalog::daily().select(0);
    /// assert_eq!(set.to_string(), "A ÖN SOL YURT ORMAN KUMSAL");
    /// ```
    #[must_use]
    pub fn select(&self, seed: i32) -> &WordSet {
        &self.sets[self.select_index(seed)]
    }

    /// Index that [`Catalog::select`] picks for `seed`
    #[must_use]
    pub fn select_index(&self, seed: i32) -> usize {
        Mulberry32::new(seed).next_index(self.sets.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false: empty catalogs are rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordSet> {
        self.sets.iter()
    }
}

/// Word pools for endless mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndlessPool {
    #[default]
    Random,
    Nature,
    DailyLife,
    Objects,
}

impl EndlessPool {
    pub const ALL: [Self; 4] = [Self::Random, Self::Nature, Self::DailyLife, Self::Objects];

    /// Short key used on the command line and in analytics
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Nature => "doga",
            Self::DailyLife => "gunluk",
            Self::Objects => "nesne",
        }
    }

    /// Mode label shown to players
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Sonsuz • Rastgele",
            Self::Nature => "Sonsuz • Doğa",
            Self::DailyLife => "Sonsuz • Günlük Yaşam",
            Self::Objects => "Sonsuz • Nesneler",
        }
    }
}

impl fmt::Display for EndlessPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for EndlessPool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pool| pool.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let keys: Vec<&str> = Self::ALL.iter().map(|p| p.key()).collect();
                format!("Unknown pool '{s}', expected one of: {}", keys.join(", "))
            })
    }
}

/// Draw a fresh endless-mode seed from the caller's RNG
pub fn draw_endless_seed<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(0..ENDLESS_SEED_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn daily_catalog_has_35_sets() {
        assert_eq!(Catalog::daily().len(), 35);
    }

    #[test]
    fn seed_zero_golden_selection() {
        let catalog = Catalog::daily();
        assert_eq!(catalog.select_index(0), 9);
        assert_eq!(catalog.select(0).to_string(), "A ÖN SOL YURT ORMAN KUMSAL");
    }

    #[test]
    fn golden_selections() {
        let catalog = Catalog::daily();
        assert_eq!(catalog.select_index(1), 21);
        assert_eq!(catalog.select_index(42), 21);
        assert_eq!(catalog.select_index(-5), 16);
        assert_eq!(catalog.select_index(250), 26);
        assert_eq!(catalog.select_index(123_456), 13);
        assert_eq!(catalog.select_index(i32::MAX), 15);
        assert_eq!(catalog.select(250).to_string(), "O ÖD SİS AYNA BÜYÜK TAVŞAN");
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = Catalog::daily();
        for seed in -50..50 {
            assert_eq!(catalog.select(seed), catalog.select(seed));
        }
    }

    #[test]
    fn single_set_catalog_always_selects_it() {
        let catalog = Catalog::endless(EndlessPool::Nature);
        for seed in [0, 1, -1, 999_999] {
            assert_eq!(catalog.select(seed).word(5).text(), "YAPRAK");
        }
    }

    #[test]
    fn empty_catalog_rejected() {
        let empty: &[[&str; 6]] = &[];
        assert_eq!(Catalog::from_slices(empty), Err(CatalogError::Empty));
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn invalid_set_reports_index() {
        let sets = [
            ["O", "EV", "GÖZ", "KAPI", "BAHÇE", "MUTFAK"],
            ["O", "EV", "GÖZ", "KAPI", "BAHÇE", "MUT"],
        ];
        assert!(matches!(
            Catalog::from_slices(&sets),
            Err(CatalogError::InvalidSet { index: 1, .. })
        ));
    }

    #[test]
    fn endless_pools_are_valid() {
        for pool in EndlessPool::ALL {
            assert!(!Catalog::endless(pool).is_empty(), "{pool}");
        }
        assert_eq!(Catalog::endless(EndlessPool::Random), Catalog::daily());
    }

    #[test]
    fn pool_parses_from_key() {
        assert_eq!("doga".parse::<EndlessPool>(), Ok(EndlessPool::Nature));
        assert_eq!("GUNLUK".parse::<EndlessPool>(), Ok(EndlessPool::DailyLife));
        assert_eq!("nesne".parse::<EndlessPool>(), Ok(EndlessPool::Objects));
        assert_eq!("random".parse::<EndlessPool>(), Ok(EndlessPool::Random));
        assert!("space".parse::<EndlessPool>().is_err());
    }

    #[test]
    fn pool_labels() {
        assert_eq!(EndlessPool::Nature.label(), "Sonsuz • Doğa");
        assert_eq!(EndlessPool::DailyLife.label(), "Sonsuz • Günlük Yaşam");
    }

    #[test]
    fn endless_seed_in_range_and_reproducible() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let seed = draw_endless_seed(&mut a);
            assert!((0..ENDLESS_SEED_RANGE).contains(&seed));
            assert_eq!(seed, draw_endless_seed(&mut b));
        }
    }
}
