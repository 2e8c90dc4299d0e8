//! Ranking and relative-efficiency statistics over converged runs.
//!
//! [`rank`] orders [`MethodRun`]s by iteration count (stable, so ties keep
//! input order), numbers them 1..N and derives
//! ├ [`Statistics`]    : means, best/worst iterations, fastest/slowest method
//! ├ [`Efficiency`]    : best / iterations × 100, bucketed in [`EfficiencyTier`]
//! └ [`IterationGap`]  : extra iterations of each run over the best one

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::report::Convergence;


pub(crate) fn serialize_ms<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1e3)
}


/// A converged method run as seen by the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodRun {
    pub algorithm   : Algorithm,
    pub convergence : Convergence,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_ms")]
    pub elapsed     : Duration,
    /// |f(root)|
    pub residual    : f64,
}
impl MethodRun {
    pub fn iterations(&self) -> usize {
        self.convergence.iterations()
    }

    pub fn root(&self) -> f64 {
        self.convergence.root
    }
}


/// Qualitative bucket of a relative efficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    /// >= 100 %
    Maximal,
    /// >= 80 %
    High,
    /// >= 60 %
    Medium,
    Low,
}
impl EfficiencyTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            EfficiencyTier::Maximal
        } else if percent >= 80.0 {
            EfficiencyTier::High
        } else if percent >= 60.0 {
            EfficiencyTier::Medium
        } else {
            EfficiencyTier::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EfficiencyTier::Maximal => "MAXIMAL",
            EfficiencyTier::High    => "HIGH",
            EfficiencyTier::Medium  => "MEDIUM",
            EfficiencyTier::Low     => "LOW",
        }
    }
}


/// Iterations of the best run relative to this run's, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Efficiency {
    pub percent : f64,
    pub tier    : EfficiencyTier,
}
impl Efficiency {
    pub fn new(best_iterations: usize, iterations: usize) -> Self {
        let percent = if iterations == best_iterations {
            100.0
        } else {
            best_iterations as f64 / iterations as f64 * 100.0
        };
        Self { percent, tier: EfficiencyTier::from_percent(percent) }
    }
}


/// A run with its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedRun {
    pub rank       : usize,
    pub run        : MethodRun,
    pub efficiency : Efficiency,
}


/// A method and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timed {
    pub algorithm : Algorithm,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_ms")]
    pub elapsed   : Duration,
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub converged        : usize,
    pub mean_iterations  : f64,
    #[serde(rename = "mean_elapsed_ms", serialize_with = "serialize_ms")]
    pub mean_elapsed     : Duration,
    pub best_iterations  : usize,
    pub worst_iterations : usize,
    pub fastest          : Timed,
    pub slowest          : Timed,
}


/// How much more a run iterated than the best one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationGap {
    pub best             : Algorithm,
    pub algorithm        : Algorithm,
    pub extra_iterations : usize,
    /// (iterations - best) / best × 100
    pub percent_more     : f64,
}


/// Converged runs ordered by iteration count, with statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub runs       : Vec<RankedRun>,
    pub statistics : Statistics,
}

impl Ranking {
    pub fn best(&self) -> &RankedRun {
        // a ranking is never built from zero runs
        &self.runs[0]
    }

    pub fn gaps(&self) -> Vec<IterationGap> {
        let best = self.best().run;
        self.runs
            .iter()
            .skip(1)
            .map(|r| {
                let extra = r.run.iterations() - best.iterations();
                IterationGap {
                    best             : best.algorithm,
                    algorithm        : r.run.algorithm,
                    extra_iterations : extra,
                    percent_more     : extra as f64 / best.iterations() as f64 * 100.0,
                }
            })
            .collect()
    }
}


/// Ranks converged runs; `None` when there are none.
pub fn rank(mut runs: Vec<MethodRun>) -> Option<Ranking> {
    if runs.is_empty() {
        return None;
    }

    // stable: ties keep input order
    runs.sort_by_key(MethodRun::iterations);

    let n = runs.len();
    let best_iterations  = runs[0].iterations();
    let worst_iterations = runs[n - 1].iterations();

    let total_iterations: usize = runs.iter().map(MethodRun::iterations).sum();
    let total_elapsed: Duration = runs.iter().map(|r| r.elapsed).sum();

    // first minimum and last maximum, as a stable sort by time would give
    let fastest = runs.iter().min_by_key(|r| r.elapsed).map(timed);
    let slowest = runs.iter().max_by_key(|r| r.elapsed).map(timed);
    let (fastest, slowest) = fastest.zip(slowest)?;

    let statistics = Statistics {
        converged       : n,
        mean_iterations : total_iterations as f64 / n as f64,
        mean_elapsed    : total_elapsed / n as u32,
        best_iterations,
        worst_iterations,
        fastest,
        slowest,
    };

    let runs = runs
        .into_iter()
        .enumerate()
        .map(|(i, run)| RankedRun {
            rank       : i + 1,
            efficiency : Efficiency::new(best_iterations, run.iterations()),
            run,
        })
        .collect();

    Some(Ranking { runs, statistics })
}

fn timed(run: &MethodRun) -> Timed {
    Timed { algorithm: run.algorithm, elapsed: run.elapsed }
}
