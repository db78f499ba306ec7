use pareto_engine::dominance::{Compare, ConstraintDominanceComparator, DominanceComparator};
use pareto_engine::Solution;
use std::cmp::Ordering;

fn point(objectives: Vec<f64>) -> Solution<()> {
    Solution::with_objectives((), objectives)
}

fn constrained(objectives: Vec<f64>, constraints: Vec<f64>) -> Solution<()> {
    let mut s = point(objectives);
    s.constraints = constraints;
    s
}

// ============================================================================
// Pure dominance is a strict partial order
// ============================================================================

#[test]
fn compare_is_reflexively_equal() {
    let cmp = DominanceComparator;
    let a = point(vec![1.0, 2.0, 3.0]);
    assert_eq!(cmp.compare(&a, &a).unwrap(), Ordering::Equal);
}

#[test]
fn compare_is_antisymmetric() {
    let cmp = DominanceComparator;
    let better = point(vec![0.0, 0.0]);
    let worse = point(vec![1.0, 1.0]);
    assert_eq!(cmp.compare(&better, &worse).unwrap(), Ordering::Less);
    assert_eq!(cmp.compare(&worse, &better).unwrap(), Ordering::Greater);
}

#[test]
fn compare_is_transitive() {
    let cmp = DominanceComparator;
    let a = point(vec![0.0, 0.0]);
    let b = point(vec![1.0, 0.5]);
    let c = point(vec![2.0, 1.0]);
    assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Less);
    assert_eq!(cmp.compare(&b, &c).unwrap(), Ordering::Less);
    assert_eq!(cmp.compare(&a, &c).unwrap(), Ordering::Less);
}

#[test]
fn incomparable_solutions_compare_equal() {
    let cmp = DominanceComparator;
    let a = point(vec![0.0, 1.0]);
    let b = point(vec![1.0, 0.0]);
    assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Equal);
    assert_eq!(cmp.compare(&b, &a).unwrap(), Ordering::Equal);
}

#[test]
fn strict_improvement_in_one_objective_dominates() {
    let cmp = DominanceComparator;
    let a = point(vec![1.0, 1.0]);
    let b = point(vec![1.0, 2.0]);
    assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Less);
}

#[test]
fn mismatched_objective_lengths_error() {
    let cmp = DominanceComparator;
    let a = point(vec![1.0, 2.0]);
    let b = point(vec![1.0, 2.0, 3.0]);
    let err = cmp.compare(&a, &b).unwrap_err();
    assert_eq!(err.left, 2);
    assert_eq!(err.right, 3);
}

// ============================================================================
// Constraint-aware variant
// ============================================================================

#[test]
fn feasible_beats_infeasible_regardless_of_objectives() {
    let cmp = ConstraintDominanceComparator::default();
    // Feasible but with terrible objectives.
    let feasible = constrained(vec![100.0, 100.0], vec![-1.0]);
    let infeasible = constrained(vec![0.0, 0.0], vec![0.5]);
    assert_eq!(cmp.compare(&feasible, &infeasible).unwrap(), Ordering::Less);
    assert_eq!(cmp.compare(&infeasible, &feasible).unwrap(), Ordering::Greater);
}

#[test]
fn smaller_violation_wins() {
    let cmp = ConstraintDominanceComparator::default();
    let barely = constrained(vec![10.0, 10.0], vec![0.1]);
    let badly = constrained(vec![0.0, 0.0], vec![3.0]);
    assert_eq!(cmp.compare(&barely, &badly).unwrap(), Ordering::Less);
}

#[test]
fn equal_violations_fall_through_to_dominance() {
    let cmp = ConstraintDominanceComparator::default();
    let a = constrained(vec![0.0, 0.0], vec![1.0]);
    let b = constrained(vec![1.0, 1.0], vec![1.0]);
    assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Less);
}

#[test]
fn satisfied_constraints_do_not_interfere() {
    let cmp = ConstraintDominanceComparator::default();
    // Both feasible (values <= 0): plain dominance decides.
    let a = constrained(vec![0.0, 1.0], vec![-5.0]);
    let b = constrained(vec![1.0, 0.0], vec![0.0]);
    assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Equal);
}
