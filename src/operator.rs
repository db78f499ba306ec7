//! Variation operator contracts and the stock operators shipped with the
//! engine.
//!
//! Arity is encoded in the trait shape: mutation is unary and in-place,
//! crossover is binary and produces two children, selection is n-ary over a
//! parent pool. Each operator owns its application probability; the engine
//! invokes operators but never implements randomized choice itself.

use crate::dominance::{Compare, ConstraintDominanceComparator};
use crate::error::IncompatibleSolutions;
use crate::solution::Solution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub trait MutationOperator<V> {
    fn execute<R: Rng>(&self, solution: &mut Solution<V>, rng: &mut R);
    fn probability(&self) -> f64;
}

pub trait CrossoverOperator<V> {
    fn execute<R: Rng>(
        &self,
        a: &Solution<V>,
        b: &Solution<V>,
        rng: &mut R,
    ) -> (Solution<V>, Solution<V>);
    fn probability(&self) -> f64;
}

/// Picks one parent from a non-empty pool.
pub trait SelectionOperator<V> {
    fn execute<'a, R: Rng>(
        &self,
        pool: &'a [Solution<V>],
        rng: &mut R,
    ) -> Result<&'a Solution<V>, IncompatibleSolutions>;
}

/// Flips each bit independently with the configured probability.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BitFlipMutation {
    pub probability: f64,
}

impl MutationOperator<Vec<bool>> for BitFlipMutation {
    fn execute<R: Rng>(&self, solution: &mut Solution<Vec<bool>>, rng: &mut R) {
        for bit in &mut solution.variables {
            if rng.random::<f64>() < self.probability {
                *bit = !*bit;
            }
        }
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}

/// Polynomial mutation for real encodings.
///
/// Perturbs each variable with the configured probability by a sample from
/// the polynomial distribution with the given index; larger indices stay
/// closer to the parent. Results are clamped to the variable bounds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolynomialMutation {
    pub probability: f64,
    pub distribution_index: f64,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl PolynomialMutation {
    pub fn new(probability: f64, distribution_index: f64, lower: &[f64], upper: &[f64]) -> Self {
        Self {
            probability,
            distribution_index,
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        }
    }
}

impl MutationOperator<Vec<f64>> for PolynomialMutation {
    fn execute<R: Rng>(&self, solution: &mut Solution<Vec<f64>>, rng: &mut R) {
        for (i, x) in solution.variables.iter_mut().enumerate() {
            if rng.random::<f64>() >= self.probability {
                continue;
            }
            let (yl, yu) = (self.lower[i], self.upper[i]);
            if yu <= yl {
                *x = yl;
                continue;
            }
            let y = *x;
            let delta1 = (y - yl) / (yu - yl);
            let delta2 = (yu - y) / (yu - yl);
            let mut_pow = 1.0 / (self.distribution_index + 1.0);
            let rnd = rng.random::<f64>();
            let deltaq = if rnd <= 0.5 {
                let xy = 1.0 - delta1;
                let val = 2.0 * rnd + (1.0 - 2.0 * rnd) * xy.powf(self.distribution_index + 1.0);
                val.powf(mut_pow) - 1.0
            } else {
                let xy = 1.0 - delta2;
                let val = 2.0 * (1.0 - rnd)
                    + 2.0 * (rnd - 0.5) * xy.powf(self.distribution_index + 1.0);
                1.0 - val.powf(mut_pow)
            };
            *x = (y + deltaq * (yu - yl)).clamp(yl, yu);
        }
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}

/// Uniform mutation for real encodings: adds a symmetric uniform
/// perturbation scaled by `perturbation`, clamped to the bounds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UniformMutation {
    pub probability: f64,
    pub perturbation: f64,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl UniformMutation {
    pub fn new(probability: f64, perturbation: f64, lower: &[f64], upper: &[f64]) -> Self {
        Self {
            probability,
            perturbation,
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        }
    }
}

impl MutationOperator<Vec<f64>> for UniformMutation {
    fn execute<R: Rng>(&self, solution: &mut Solution<Vec<f64>>, rng: &mut R) {
        for (i, x) in solution.variables.iter_mut().enumerate() {
            if rng.random::<f64>() < self.probability {
                let delta = (rng.random::<f64>() - 0.5) * self.perturbation;
                *x = (*x + delta).clamp(self.lower[i], self.upper[i]);
            }
        }
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}

/// Simulated binary crossover for real encodings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SbxCrossover {
    pub probability: f64,
    pub distribution_index: f64,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl SbxCrossover {
    const EPS: f64 = 1.0e-14;

    pub fn new(probability: f64, distribution_index: f64, lower: &[f64], upper: &[f64]) -> Self {
        Self {
            probability,
            distribution_index,
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        }
    }

    fn spread_factor<R: Rng>(&self, beta: f64, rng: &mut R) -> f64 {
        let alpha = 2.0 - beta.powf(-(self.distribution_index + 1.0));
        let rand = rng.random::<f64>();
        if rand <= 1.0 / alpha {
            (rand * alpha).powf(1.0 / (self.distribution_index + 1.0))
        } else {
            (1.0 / (2.0 - rand * alpha)).powf(1.0 / (self.distribution_index + 1.0))
        }
    }
}

impl CrossoverOperator<Vec<f64>> for SbxCrossover {
    fn execute<R: Rng>(
        &self,
        a: &Solution<Vec<f64>>,
        b: &Solution<Vec<f64>>,
        rng: &mut R,
    ) -> (Solution<Vec<f64>>, Solution<Vec<f64>>) {
        let mut c1 = a.clone();
        let mut c2 = b.clone();
        if rng.random::<f64>() > self.probability {
            return (c1, c2);
        }
        for i in 0..a.variables.len() {
            let (x1, x2) = (a.variables[i], b.variables[i]);
            if rng.random::<f64>() > 0.5 || (x1 - x2).abs() <= Self::EPS {
                continue;
            }
            let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
            let (yl, yu) = (self.lower[i], self.upper[i]);

            let beta1 = 1.0 + 2.0 * (y1 - yl) / (y2 - y1);
            let betaq1 = self.spread_factor(beta1, rng);
            let mut v1 = 0.5 * ((y1 + y2) - betaq1 * (y2 - y1));

            let beta2 = 1.0 + 2.0 * (yu - y2) / (y2 - y1);
            let betaq2 = self.spread_factor(beta2, rng);
            let mut v2 = 0.5 * ((y1 + y2) + betaq2 * (y2 - y1));

            v1 = v1.clamp(yl, yu);
            v2 = v2.clamp(yl, yu);
            if rng.random::<f64>() <= 0.5 {
                std::mem::swap(&mut v1, &mut v2);
            }
            c1.variables[i] = v1;
            c2.variables[i] = v2;
        }
        (c1, c2)
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}

/// One-point crossover for binary encodings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SinglePointCrossover {
    pub probability: f64,
}

impl CrossoverOperator<Vec<bool>> for SinglePointCrossover {
    fn execute<R: Rng>(
        &self,
        a: &Solution<Vec<bool>>,
        b: &Solution<Vec<bool>>,
        rng: &mut R,
    ) -> (Solution<Vec<bool>>, Solution<Vec<bool>>) {
        let mut c1 = a.clone();
        let mut c2 = b.clone();
        if rng.random::<f64>() <= self.probability && !a.variables.is_empty() {
            let point = rng.random_range(0..a.variables.len());
            for i in point..a.variables.len() {
                c1.variables[i] = b.variables[i];
                c2.variables[i] = a.variables[i];
            }
        }
        (c1, c2)
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}

/// Binary tournament under constraint-aware dominance. Incomparable pairs
/// are resolved by a fair coin, never by position in the pool.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BinaryTournamentSelection {
    comparator: ConstraintDominanceComparator,
}

impl<V> SelectionOperator<V> for BinaryTournamentSelection {
    fn execute<'a, R: Rng>(
        &self,
        pool: &'a [Solution<V>],
        rng: &mut R,
    ) -> Result<&'a Solution<V>, IncompatibleSolutions> {
        let i = rng.random_range(0..pool.len());
        let j = rng.random_range(0..pool.len());
        let (a, b) = (&pool[i], &pool[j]);
        Ok(match self.comparator.compare(a, b)? {
            Ordering::Less => a,
            Ordering::Greater => b,
            Ordering::Equal => {
                if rng.random_bool(0.5) {
                    a
                } else {
                    b
                }
            }
        })
    }
}
