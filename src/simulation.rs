//! Monte Carlo estimate of how often a freshly shuffled deck deals a given
//! kind of five-card hand.
//!
//! Every trial builds a brand new [`Deck`], shuffles it, deals one [`Hand`]
//! and throws both away. The loop stops once `target` hands satisfied the
//! predicate, so the number of trials is unbounded up front.

use crate::deck::{Deck, DeckError};
use crate::hand::Hand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Straights to observe before a default run stops.
pub const STRAIGHT_TARGET: u64 = 1000;

/// Outcome of a run: how many hands were dealt and how many matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    pub trials: u64,
    pub matches: u64,
}

impl SimulationReport {
    /// `100 * matches / trials`; 0.0 when nothing was dealt.
    pub fn probability_percent(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        100.0 * self.matches as f64 / self.trials as f64
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The probability of a straight is {}%",
            self.probability_percent()
        )
    }
}

/// Run configuration. Unseeded runs draw from the thread-local RNG.
///
/// ```no_run
/// use straight_odds::simulation::Simulation;
///
/// let report = Simulation::default().with_seed(7).run().unwrap();
/// assert_eq!(report.matches, 1000);
/// println!("{report}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    pub target: u64,
    pub seed: Option<u64>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            target: STRAIGHT_TARGET,
            seed: None,
        }
    }
}

impl Simulation {
    pub fn with_target(mut self, target: u64) -> Self {
        self.target = target;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal until `target` straights have been seen.
    pub fn run(&self) -> Result<SimulationReport, DeckError> {
        self.run_until(Hand::is_straight)
    }

    /// Deal until `target` hands satisfy `predicate`.
    pub fn run_until<F>(&self, predicate: F) -> Result<SimulationReport, DeckError>
    where
        F: FnMut(&mut Hand) -> bool,
    {
        log::info!(
            "dealing until {} matching hands (seed: {:?})",
            self.target,
            self.seed
        );
        let report = match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                estimate_with(self.target, &mut rng, predicate)
            }
            None => estimate_with(self.target, &mut rand::rng(), predicate),
        }?;
        log::info!(
            "{} matches in {} trials ({:.4}%)",
            report.matches,
            report.trials,
            report.probability_percent()
        );
        Ok(report)
    }
}

/// Deal fresh hands from `rng`-shuffled decks until `target` satisfy
/// `predicate`.
pub fn estimate_with<R, F>(
    target: u64,
    rng: &mut R,
    mut predicate: F,
) -> Result<SimulationReport, DeckError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut Hand) -> bool,
{
    let mut report = SimulationReport {
        trials: 0,
        matches: 0,
    };
    while report.matches < target {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        let mut hand = Hand::deal(&mut deck)?;
        if predicate(&mut hand) {
            report.matches += 1;
            log::debug!(
                "match {} on trial {}: {}",
                report.matches,
                report.trials + 1,
                hand
            );
        }
        report.trials += 1;
    }
    Ok(report)
}

/// Run the default straight simulation with `target` straights.
pub fn run_straight_simulation(target: u64) -> Result<SimulationReport, DeckError> {
    Simulation::default().with_target(target).run()
}
