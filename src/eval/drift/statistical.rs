//! Statistical helper functions for drift detection.

use std::cmp::Ordering;

/// Largest `n_ref * n_new` for which the exact KS distribution is used
pub const KS_EXACT_MAX_PRODUCT: usize = 10_000;

const P_VALUE_SCALE: f64 = 1e12;

/// Two-sample Kolmogorov-Smirnov test result
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KsOutcome {
    /// Supremum distance between the two empirical CDFs
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

/// Two-sample Kolmogorov-Smirnov test.
///
/// Returns `None` when either sample is empty. Samples must not contain NaN.
pub fn ks_two_sample(a: &[f64], b: &[f64]) -> Option<KsOutcome> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let statistic = ks_statistic(a, b);
    let (n, m) = (a.len(), b.len());
    let p_value = if n.saturating_mul(m) <= KS_EXACT_MAX_PRODUCT {
        ks_exact_p_value(statistic, n, m)
    } else {
        let n_eff = (n as f64 * m as f64) / (n as f64 + m as f64);
        ks_p_value(statistic * n_eff.sqrt())
    };

    Some(KsOutcome { statistic, p_value })
}

/// Supremum of |F_a(x) - F_b(x)| over all observed values.
///
/// Both CDFs are evaluated after consuming every copy of the current value,
/// so tied observations never produce a spurious gap.
pub fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    let mut sa = a.to_vec();
    let mut sb = b.to_vec();
    sa.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    sb.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));

    let (n, m) = (sa.len() as f64, sb.len() as f64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut d_max = 0.0f64;

    while i < sa.len() && j < sb.len() {
        let x = if sa[i] <= sb[j] { sa[i] } else { sb[j] };
        while i < sa.len() && sa[i] <= x {
            i += 1;
        }
        while j < sb.len() && sb[j] <= x {
            j += 1;
        }
        d_max = d_max.max((i as f64 / n - j as f64 / m).abs());
    }

    d_max
}

/// Exact two-sided p-value P(D >= d) for sample sizes `n` and `m`.
///
/// Counts monotone lattice paths from (0, 0) to (n, m) that stay strictly
/// inside the band |i/n - j/m| < d, normalising each step so the running
/// value is a probability rather than a path count.
pub fn ks_exact_p_value(d: f64, n: usize, m: usize) -> f64 {
    if n == 0 || m == 0 {
        return 1.0;
    }
    let (small, large) = if n <= m { (n, m) } else { (m, n) };
    let (sd, ld) = (small as f64, large as f64);

    // D * n * m is an integer; q sits halfway below it on that lattice
    let q = (0.5 + (d * sd * ld - 1e-7).floor()) / (sd * ld);
    if q < 0.0 {
        return 1.0;
    }

    let mut u: Vec<f64> = (0..=large)
        .map(|j| if j as f64 / ld > q { 0.0 } else { 1.0 })
        .collect();

    for i in 1..=small {
        let w = i as f64 / (i + large) as f64;
        u[0] = if i as f64 / sd > q { 0.0 } else { w * u[0] };
        for j in 1..=large {
            u[j] = if (i as f64 / sd - j as f64 / ld).abs() > q {
                0.0
            } else {
                w * u[j] + u[j - 1]
            };
        }
    }

    // The complement loses the last bits; snap back onto the 1e-12 grid so
    // exact lattice values such as 0.1 compare equal to a threshold
    let p = ((1.0 - u[large]) * P_VALUE_SCALE).round() / P_VALUE_SCALE;
    p.clamp(0.0, 1.0)
}

/// Approximate p-value for KS statistic using Kolmogorov distribution
pub fn ks_p_value(lambda: f64) -> f64 {
    // The alternating series below does not converge for small lambda; the
    // survival function is 1 to within 1e-9 there.
    if lambda < 0.2 {
        return 1.0;
    }
    // Asymptotic approximation: P(D > d) ≈ 2 * sum_{k=1}^∞ (-1)^{k+1} * exp(-2 * k^2 * λ^2)
    let mut p = 0.0;
    for k in 1..=100 {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * (-2.0 * f64::from(k).powi(2) * lambda.powi(2)).exp();
        p += term;
        if term.abs() < 1e-10 {
            break;
        }
    }
    (2.0 * p).clamp(0.0, 1.0)
}

/// Population Stability Index over reference deciles
pub fn population_stability_index(reference: &[f64], current: &[f64]) -> f64 {
    if reference.is_empty() || current.is_empty() {
        return 0.0;
    }

    let n_bins = 10;
    let mut sorted: Vec<f64> = reference.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut edges = Vec::with_capacity(n_bins + 1);
    edges.push(f64::NEG_INFINITY);
    for i in 1..n_bins {
        let idx = (sorted.len() * i / n_bins).min(sorted.len() - 1);
        edges.push(sorted[idx]);
    }
    edges.push(f64::INFINITY);

    let reference_counts = bin_counts(reference, &edges);
    let current_counts = bin_counts(current, &edges);

    let total_reference = reference.len() as f64;
    let total_current = current.len() as f64;

    reference_counts
        .iter()
        .zip(current_counts.iter())
        .map(|(r, c)| {
            let r_pct = (*r as f64 + 0.0001) / (total_reference + 0.001);
            let c_pct = (*c as f64 + 0.0001) / (total_current + 0.001);
            (c_pct - r_pct) * (c_pct / r_pct).ln()
        })
        .sum()
}

/// Count samples in bins defined by edges (left-open, right-closed)
pub fn bin_counts(data: &[f64], edges: &[f64]) -> Vec<usize> {
    let mut counts = vec![0; edges.len().saturating_sub(1)];
    for &val in data {
        for i in 0..counts.len() {
            if val > edges[i] && val <= edges[i + 1] {
                counts[i] += 1;
                break;
            }
        }
    }
    counts
}
