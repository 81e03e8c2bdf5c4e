//! @acp:module "Allocation Engine"
//! @acp:summary "Sum and even-distribution rules for domain quantities"
//! @acp:domain cli
//! @acp:layer logic
//!
//! # Allocation
//!
//! Two rules keep domain and skill counts consistent:
//!
//! - **Sum rule** (expanded domain): the domain quantity is the sum of its
//!   enabled skills' quantities. Disabled skills contribute nothing.
//! - **Even distribution** (bulk domain, export time only): a total `T`
//!   over `n` skills gives every skill `floor(T / n)` except the last,
//!   which takes `T - floor(T / n) * (n - 1)`. The shares always add up to
//!   exactly `T`. The remainder lands on the last skill in stored order.

use crate::filter::{Quantity, SkillEntry};

/// Sum of the quantities of the enabled skills
pub fn sum_enabled(skills: &[SkillEntry]) -> Quantity {
    skills
        .iter()
        .filter(|s| s.enabled)
        .fold(0, |acc: Quantity, s| acc.saturating_add(s.qty))
}

/// Split `total` into `n` shares, remainder on the last share
pub fn distribute_evenly(total: Quantity, n: usize) -> Vec<Quantity> {
    if n == 0 {
        return Vec::new();
    }

    let count = n as u64;
    let base = u64::from(total) / count;
    let last = u64::from(total) - base * (count - 1);

    // base <= last <= total, so both fit back into a Quantity
    let mut shares = vec![base as Quantity; n - 1];
    shares.push(last as Quantity);
    shares
}

/// Pair every skill with its share of `total`, in stored order
pub fn distribute_over(total: Quantity, skills: &[SkillEntry]) -> Vec<(&str, Quantity)> {
    skills
        .iter()
        .zip(distribute_evenly(total, skills.len()))
        .map(|(skill, share)| (skill.name.as_str(), share))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, enabled: bool, qty: Quantity) -> SkillEntry {
        SkillEntry {
            id: 0,
            name: name.to_string(),
            enabled,
            qty,
        }
    }

    #[test]
    fn test_sum_ignores_disabled() {
        let skills = vec![skill("X", true, 5), skill("Y", false, 9), skill("Z", true, 2)];
        assert_eq!(sum_enabled(&skills), 7);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum_enabled(&[]), 0);
    }

    #[test]
    fn test_distribute_remainder_on_last() {
        assert_eq!(distribute_evenly(10, 3), vec![3, 3, 4]);
        assert_eq!(distribute_evenly(11, 4), vec![2, 2, 2, 5]);
        assert_eq!(distribute_evenly(2, 5), vec![0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_distribute_exact_and_edges() {
        assert_eq!(distribute_evenly(9, 3), vec![3, 3, 3]);
        assert_eq!(distribute_evenly(0, 3), vec![0, 0, 0]);
        assert_eq!(distribute_evenly(7, 1), vec![7]);
        assert!(distribute_evenly(7, 0).is_empty());
    }

    #[test]
    fn test_distribute_max_total() {
        let shares = distribute_evenly(Quantity::MAX, 7);
        let sum: u64 = shares.iter().map(|s| u64::from(*s)).sum();
        assert_eq!(sum, u64::from(Quantity::MAX));
    }

    #[test]
    fn test_distribute_over_ignores_enabled_flag() {
        let skills = vec![skill("A", false, 0), skill("B", true, 8), skill("C", false, 1)];
        assert_eq!(distribute_over(10, &skills), vec![("A", 3), ("B", 3), ("C", 4)]);
    }
}
