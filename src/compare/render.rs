//! Plain-text report for a [`Comparison`].

use std::fmt;
use std::time::Duration;

use crate::root_finding::algorithms::Algorithm;

use super::{Attempt, Comparison, Outcome, Ranking};


const RULE: &str =
    "======================================================================";

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}


impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "interval [a, b]   : [{}, {}]", p.a, p.b)?;
        writeln!(f, "initial x0, x1    : {}, {}", p.x0, p.x1)?;
        writeln!(f, "tolerance         : {:e}", p.cfg.tol())?;
        writeln!(f, "max iterations    : {}", p.cfg.max_iter())?;
        writeln!(f)?;

        for (i, at) in self.attempts.iter().enumerate() {
            write_attempt(f, i + 1, at)?;
        }

        writeln!(f, "{RULE}")?;
        match &self.outcome {
            Outcome::Ranked(ranking) => write_ranking(f, ranking)?,
            Outcome::NoneConverged   => writeln!(f, "no method converged")?,
        }

        writeln!(f)?;
        writeln!(f, "method notes:")?;
        for algorithm in Algorithm::ALL {
            writeln!(
                f,
                "  {:<15} {:<12} {}",
                algorithm.label(),
                algorithm.convergence_order().label(),
                algorithm.summary(),
            )?;
        }
        Ok(())
    }
}


fn write_attempt(f: &mut fmt::Formatter<'_>, n: usize, at: &Attempt) -> fmt::Result {
    writeln!(f, "{n}. {}", at.algorithm.label())?;
    match &at.outcome {
        Ok(c) => writeln!(
            f,
            "   [ok]    root {:.10}  iterations {}  time {:.6} ms  f(root) {:.2e}",
            c.root,
            c.iterations(),
            ms(at.elapsed),
            c.f_root,
        ),
        Err(e) => writeln!(f, "   [error] {e}"),
    }
}


fn write_ranking(f: &mut fmt::Formatter<'_>, ranking: &Ranking) -> fmt::Result {
    writeln!(f, "ranking by iterations")?;
    writeln!(
        f,
        "{:<5} {:<15} {:>10} {:>12} {:>18} {:>12}",
        "pos", "method", "iterations", "time (ms)", "root", "|f(root)|",
    )?;
    for r in &ranking.runs {
        writeln!(
            f,
            "[{}]   {:<15} {:>10} {:>12.6} {:>18.10} {:>12.2e}",
            r.rank,
            r.run.algorithm.label(),
            r.run.iterations(),
            ms(r.run.elapsed),
            r.run.root(),
            r.run.residual,
        )?;
    }

    let best = ranking.best();
    writeln!(f)?;
    writeln!(
        f,
        "best method: {} ({} iterations)",
        best.run.algorithm.label(),
        best.run.iterations(),
    )?;

    let gaps = ranking.gaps();
    if !gaps.is_empty() {
        writeln!(f)?;
        writeln!(f, "iteration gaps:")?;
        for g in gaps {
            writeln!(
                f,
                "  {} needed {} fewer iterations than {} ({:.1}% more)",
                g.best.label(),
                g.extra_iterations,
                g.algorithm.label(),
                g.percent_more,
            )?;
        }
    }

    let s = &ranking.statistics;
    writeln!(f)?;
    writeln!(f, "statistics:")?;
    writeln!(f, "  converged methods : {}", s.converged)?;
    writeln!(f, "  mean iterations   : {:.1}", s.mean_iterations)?;
    writeln!(f, "  mean time         : {:.6} ms", ms(s.mean_elapsed))?;
    writeln!(f, "  best / worst      : {} / {} iterations", s.best_iterations, s.worst_iterations)?;
    writeln!(f, "  fastest           : {} ({:.6} ms)", s.fastest.algorithm.label(), ms(s.fastest.elapsed))?;
    writeln!(f, "  slowest           : {} ({:.6} ms)", s.slowest.algorithm.label(), ms(s.slowest.elapsed))?;

    writeln!(f)?;
    writeln!(f, "relative efficiency:")?;
    for r in &ranking.runs {
        writeln!(
            f,
            "  {:<15} {:>6.1}%  [{}]",
            r.run.algorithm.label(),
            r.efficiency.percent,
            r.efficiency.tier.label(),
        )?;
    }
    Ok(())
}
