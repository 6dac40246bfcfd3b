//! The SURD decomposition engine.
//!
//! Decomposes the causal information a target variable receives from a
//! set of agent variables into redundant, unique, and synergistic
//! components plus an information-leak term for unobserved influence.
//!
//! Axis convention: axis 0 of the histogram is the target; axes 1..k
//! are the agents. Agent indices used in [`Combination`] keys are
//! 0-based over the agents, i.e. agent `i` lives on histogram axis
//! `i + 1`.

use std::collections::HashMap;

use ndarray::Array2;

use crate::entropy::{
    conditional_entropy, flat_to_multi, joint_entropy, log2_safe, marginalize, multi_to_flat,
    mutual_information, ProbArray,
};
use crate::error::SurdError;
use crate::histogram::NdHistogram;
use crate::surd::combination::{all_combinations, Combination};

/// Result of a SURD decomposition.
///
/// Key equation:
///
///   H(target) = Σ ΔI_R + Σ ΔI_U + Σ ΔI_S + ΔI_leak
///
/// All map values are in bits. Constructed once per decomposition call
/// and never mutated after return.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Redundant causality per agent combination (keys of length ≥ 2;
    /// zero-valued entries are kept for combinations that absorbed
    /// nothing).
    pub redundant: HashMap<Combination, f64>,

    /// Unique causality per single agent (keys of length 1, disjoint
    /// from `redundant`).
    pub unique: HashMap<Combination, f64>,

    /// Synergistic causality per agent combination (keys of length ≥ 2).
    pub synergistic: HashMap<Combination, f64>,

    /// Raw mutual information I(target; combination) for every
    /// combination.
    pub mutual_info: HashMap<Combination, f64>,

    /// Fraction of target entropy unexplained by the observed agents,
    /// H(target | all agents) / H(target). Expected in [0, 1] for
    /// well-formed inputs but deliberately not clamped: smoothing and
    /// floating-point effects may push it slightly outside.
    pub info_leak: f64,
}

/// Decompose the causality encoded in an N-dimensional histogram.
///
/// The histogram must have at least 2 axes (target plus at least one
/// agent); anything less fails immediately and no partial result is
/// returned. Numeric degeneracies (zero marginals for some state) are
/// absorbed and reduce the attributed information rather than erroring.
pub fn decompose(hist: &NdHistogram) -> Result<Decomposition, SurdError> {
    let shape = hist.shape();
    if shape.len() < 2 {
        return Err(SurdError::TooFewAxes { axes: shape.len() });
    }

    let arr = ProbArray::from_histogram(hist);
    let n_agents = shape.len() - 1;
    let n_target = shape[0];

    // Information leak: H(target | all agents) / H(target).
    let agent_axes: Vec<usize> = (1..=n_agents).collect();
    let h_target = joint_entropy(&arr, &[0]);
    let h_cond = conditional_entropy(&arr, &[0], &agent_axes);
    let info_leak = h_cond / h_target;

    let combs = all_combinations(n_agents);

    // Target marginal p(t).
    let p_target = marginalize(&arr, &[0]).data;

    // Specific mutual information per (combination, target state).
    let specific: Vec<Vec<f64>> = combs
        .iter()
        .map(|comb| specific_mi(&arr, comb.agents(), &p_target, n_target))
        .collect();

    // Ordinary mutual information I(target; combination).
    let mut mutual_info = HashMap::with_capacity(combs.len());
    for comb in &combs {
        let axes: Vec<usize> = comb.agents().iter().map(|&a| a + 1).collect();
        mutual_info.insert(comb.clone(), mutual_information(&arr, &[0], &axes));
    }

    // Accumulators, zero-initialized so every combination appears in the
    // output even when it absorbs nothing.
    let mut redundant: HashMap<Combination, f64> =
        combs.iter().map(|c| (c.clone(), 0.0)).collect();
    let mut synergistic: HashMap<Combination, f64> = combs
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| (c.clone(), 0.0))
        .collect();

    // Per-target-state redistribution: sort, filter, re-sort, diff, walk.
    for t in 0..n_target {
        let values: Vec<f64> = specific.iter().map(|s| s[t]).collect();

        let order = argsort(&values);
        let sorted_combs: Vec<&Combination> = order.iter().map(|&i| &combs[i]).collect();
        let mut sorted_values: Vec<f64> = order.iter().map(|&i| values[i]).collect();

        filter_specific_mi(&sorted_combs, &mut sorted_values);

        let order = argsort(&sorted_values);
        let final_combs: Vec<&Combination> = order.iter().map(|&i| sorted_combs[i]).collect();
        let final_values: Vec<f64> = order.iter().map(|&i| sorted_values[i]).collect();

        // Successive increments of the sorted specific-MI curve.
        let mut diffs = vec![0.0; final_values.len()];
        diffs[0] = final_values[0];
        for i in 1..final_values.len() {
            diffs[i] = final_values[i] - final_values[i - 1];
        }

        // Walk the sorted combinations with a shrinking working set of
        // agents still in play. A single-agent increment is redundancy
        // over everything still unexplained; a multi-agent increment is
        // synergy of exactly that combination.
        let mut remaining: Vec<usize> = (0..n_agents).collect();
        for (i, comb) in final_combs.iter().enumerate() {
            let info = diffs[i] * p_target[t];
            if comb.len() == 1 {
                let key = Combination::new(remaining.clone());
                *redundant.entry(key).or_insert(0.0) += info;
                let agent = comb.agents()[0];
                remaining.retain(|&a| a != agent);
            } else {
                *synergistic.entry((*comb).clone()).or_insert(0.0) += info;
            }
        }
    }

    // Redundancy of a single agent is unique information; move it.
    let singles: Vec<Combination> = redundant
        .keys()
        .filter(|c| c.len() == 1)
        .cloned()
        .collect();
    let mut unique = HashMap::with_capacity(singles.len());
    for key in singles {
        if let Some(val) = redundant.remove(&key) {
            unique.insert(key, val);
        }
    }

    Ok(Decomposition {
        redundant,
        unique,
        synergistic,
        mutual_info,
        info_leak,
    })
}

/// Build a histogram from a sample matrix and decompose it.
///
/// `data` holds one sample per row; column 0 is the target and columns
/// 1..k the agents. Errors from either stage are wrapped with stage
/// context.
pub fn decompose_from_data(data: &Array2<f64>, bins: &[usize]) -> Result<Decomposition, SurdError> {
    if data.nrows() == 0 {
        return Err(SurdError::EmptyData);
    }
    if data.ncols() < 2 {
        return Err(SurdError::TooFewVariables {
            variables: data.ncols(),
        });
    }
    if bins.len() != data.ncols() {
        return Err(SurdError::BinLengthMismatch {
            bins: bins.len(),
            variables: data.ncols(),
        });
    }

    let hist = NdHistogram::from_samples(data, bins).map_err(|e| SurdError::HistogramStage {
        source: Box::new(e),
    })?;
    decompose(&hist).map_err(|e| SurdError::DecompositionStage {
        source: Box::new(e),
    })
}

/// Specific mutual information of an agent combination, per target state.
///
/// For each joint cell over {target} ∪ combination:
///
///   I_spec(t) += p(comb|t) · [log₂ p(t|comb) − log₂ p(t)]
///
/// Cells where the marginal of `t` or of the combination is ≤ 0 are
/// skipped; this is the only numeric-degeneracy guard the engine needs
/// beyond histogram smoothing.
fn specific_mi(arr: &ProbArray, agents: &[usize], p_target: &[f64], n_target: usize) -> Vec<f64> {
    let keep: Vec<usize> = std::iter::once(0)
        .chain(agents.iter().map(|&a| a + 1))
        .collect();
    let joint = marginalize(arr, &keep); // p(target, comb)

    let agent_axes: Vec<usize> = agents.iter().map(|&a| a + 1).collect();
    let p_agents = marginalize(arr, &agent_axes); // p(comb)

    let mut result = vec![0.0; n_target];
    for (flat, &p_ta) in joint.data.iter().enumerate() {
        let multi = flat_to_multi(&joint.shape, flat);
        let t = multi[0];

        let p_a = p_agents.data[multi_to_flat(&p_agents.shape, &multi[1..])];
        let p_t = p_target[t];
        if p_t <= 0.0 || p_a <= 0.0 {
            continue;
        }

        let p_a_given_t = p_ta / p_t;
        let p_t_given_a = p_ta / p_a;
        result[t] += p_a_given_t * (log2_safe(p_t_given_a) - log2_safe(p_t));
    }
    result
}

/// Indices that sort `values` ascending; stable, NaN-tolerant.
fn argsort(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Monotonic floor filter over specific-MI values.
///
/// For each combination length l, a length-(l+1) combination whose value
/// is strictly below the running maximum of the (already filtered)
/// length-l values is zeroed: a higher-order combination may only claim
/// information beyond what some lower-order subset already explains.
/// The running maximum starts at 0, so negative lower-order values never
/// raise the floor.
fn filter_specific_mi(combs: &[&Combination], values: &mut [f64]) {
    let max_len = combs.iter().map(|c| c.len()).max().unwrap_or(0);

    for l in 1..max_len {
        let mut max_val = 0.0;
        for (i, comb) in combs.iter().enumerate() {
            if comb.len() == l && values[i] > max_val {
                max_val = values[i];
            }
        }
        for (i, comb) in combs.iter().enumerate() {
            if comb.len() == l + 1 && values[i] < max_val {
                values[i] = 0.0;
            }
        }
    }
}
