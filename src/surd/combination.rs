//! Agent-subset keys and lexicographic subset enumeration.

use std::fmt;

/// A non-empty, canonically sorted subset of agent indices.
///
/// Used as the map key throughout the decomposition; equality and
/// hashing are structural over the sorted index set. Ordering is
/// lexicographic over the indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination(Vec<usize>);

impl Combination {
    /// Build a combination from agent indices, sorting and deduplicating
    /// into canonical form.
    pub fn new(mut agents: Vec<usize>) -> Self {
        agents.sort_unstable();
        agents.dedup();
        Self(agents)
    }

    /// Combination of a single agent.
    pub fn single(agent: usize) -> Self {
        Self(vec![agent])
    }

    /// The sorted agent indices.
    pub fn agents(&self) -> &[usize] {
        &self.0
    }

    /// Number of agents in the combination.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the degenerate empty set (never produced by enumeration).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for idx in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{idx}")?;
            first = false;
        }
        Ok(())
    }
}

/// All combinations of length `k` out of agents `0..n`, in lexicographic
/// order. Iterative next-combination stepping, no recursion.
pub fn combinations_of_len(n: usize, k: usize) -> Vec<Combination> {
    if k > n || k == 0 {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();

    loop {
        result.push(Combination(indices.clone()));

        // Advance to the next lexicographic combination.
        let mut i = k as isize - 1;
        while i >= 0 && indices[i as usize] == n - k + i as usize {
            i -= 1;
        }
        if i < 0 {
            break;
        }
        let i = i as usize;
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }

    result
}

/// All `2^n − 1` non-empty combinations of agents `0..n`, grouped by
/// ascending length, lexicographic within each length.
pub fn all_combinations(n: usize) -> Vec<Combination> {
    let mut result = Vec::new();
    for k in 1..=n {
        result.extend(combinations_of_len(n, k));
    }
    result
}
