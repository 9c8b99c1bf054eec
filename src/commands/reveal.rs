//! Reveal command
//!
//! Shows the pyramid and letter mapping behind a puzzle without playing it.

use crate::core::WordSet;
use crate::engine::{Catalog, EndlessPool, LetterMapping};

#[derive(Debug, Clone)]
pub struct RevealReport {
    pub label: String,
    pub seed: i32,
    pub set_index: usize,
    pub words: WordSet,
    pub mapping: LetterMapping,
}

/// The daily puzzle for `day`
#[must_use]
pub fn reveal_daily(catalog: &Catalog, day: i32) -> RevealReport {
    report(catalog, day, format!("Piramit #{day}"))
}

/// The endless puzzle for `seed` in `pool`
#[must_use]
pub fn reveal_endless(pool: EndlessPool, seed: i32) -> RevealReport {
    report(Catalog::endless(pool), seed, pool.label().to_string())
}

fn report(catalog: &Catalog, seed: i32, label: String) -> RevealReport {
    RevealReport {
        label,
        seed,
        set_index: catalog.select_index(seed),
        words: catalog.select(seed).clone(),
        mapping: LetterMapping::generate(seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::engine::GameState;

    #[test]
    fn daily_report_matches_game() {
        let report = reveal_daily(Catalog::daily(), 250);
        let game = GameState::daily(250);

        assert_eq!(report.set_index, 26);
        assert_eq!(report.words.to_string(), "O ÖD SİS AYNA BÜYÜK TAVŞAN");
        assert_eq!(&report.mapping, game.mapping());
        assert_eq!(report.label, "Piramit #250");
    }

    #[test]
    fn endless_report_uses_pool() {
        let report = reveal_endless(EndlessPool::DailyLife, 12);
        assert_eq!(report.words.word(5).text(), "MARKET");
        assert_eq!(report.label, "Sonsuz • Günlük Yaşam");
        assert_eq!(report.mapping, LetterMapping::generate(12));
    }

    #[test]
    fn zero_seed_mapping() {
        let report = reveal_daily(Catalog::daily(), 0);
        let a = Letter::parse('A').unwrap();
        assert_eq!(report.mapping.number_of(a), 26);
    }
}
