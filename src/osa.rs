use log::{debug, trace};

use crate::cost::{CostConfig, EditopKind};

/// Absolute tolerance used when deciding whether an incoming operation's
/// cost reproduces a cell's stored cost during backtracking.
///
/// Weights are `f64`, so exact equality would drop legitimate ties to
/// floating round-off. The `min` at build time stays exact; only tie
/// detection is tolerant. Changing this value changes which paths are
/// reported as optimal when costs are only approximately equal.
pub const TIE_TOLERANCE: f64 = 1e-6;

/// One edit operation of an optimal alignment.
///
/// Created only during backtracking; immutable afterwards. `src_idx` is the
/// position consumed in the source (or the insertion point), `dst_idx` the
/// position consumed or produced in the target, `cost` the weight actually
/// charged (zero for a replace that is in fact a match), and
/// `output_string` the symbol — or symbol pair, for a transposition —
/// resulting from the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Editop {
    pub kind: EditopKind,
    pub src_idx: usize,
    pub dst_idx: usize,
    pub cost: f64,
    pub output_string: String,
}

/// An ordered sequence of edit operations, first-applied to last-applied.
///
/// Applying the operations in order transforms the source string into the
/// target string exactly, and the operation costs sum to the OSA distance.
pub type Path = Vec<Editop>;

/// Fills the `(|a|+1) x (|b|+1)` table of minimal weighted costs.
///
/// `dp[i][j]` is the minimal cost to transform the first `i` symbols of `a`
/// into the first `j` symbols of `b`. Border: `dp[i][0] = i * delete`,
/// `dp[0][j] = j * insert`. Interior cells take the minimum over deletion,
/// insertion, substitution (zero cost on a match), and — when two adjacent
/// symbols cross-match — transposition of the pair.
fn build_dp_table(a: &[char], b: &[char], config: &CostConfig) -> Vec<Vec<f64>> {
    let len_a = a.len();
    let len_b = b.len();
    let mut dp = vec![vec![0.0_f64; len_b + 1]; len_a + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as f64 * config.delete();
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j as f64 * config.insert();
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let deletion = dp[i - 1][j] + config.delete();
            let insertion = dp[i][j - 1] + config.insert();
            let substitution_cost = if a[i - 1] == b[j - 1] {
                0.0
            } else {
                config.replace()
            };
            let substitution = dp[i - 1][j - 1] + substitution_cost;

            let mut best = deletion.min(insertion).min(substitution);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(dp[i - 2][j - 2] + config.transpose());
            }
            dp[i][j] = best;
        }
    }

    trace!("built {}x{} OSA table", len_a + 1, len_b + 1);
    dp
}

/// Computes the weighted OSA distance from `a` to `b`.
///
/// Builds the cost table only; no paths are materialized, so the running
/// time is `O(|a| * |b|)` regardless of how many optimal alignments exist.
///
/// # Examples
///
/// ```
/// use editdistance::{compute_distance, CostConfig};
///
/// let config = CostConfig::unit();
/// assert_eq!(compute_distance("kitten", "sitting", &config), 3.0);
/// assert_eq!(compute_distance("ab", "ba", &config), 1.0);
/// assert_eq!(compute_distance("", "", &config), 0.0);
/// ```
pub fn compute_distance(a: &str, b: &str, config: &CostConfig) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let dp = build_dp_table(&a, &b, config);
    dp[a.len()][b.len()]
}

/// Enumerates every minimal-cost alignment from `a` to `b`.
///
/// Each returned path transforms `a` into `b` exactly, and its costs sum to
/// [`compute_distance`] within [`TIE_TOLERANCE`]. At least one path is
/// always returned; for two empty strings it is the single empty path.
///
/// The number of optimal paths is bounded only by the number of cost ties
/// in the table and can grow exponentially for highly ambiguous inputs.
/// Callers needing bounded latency should use [`compute_distance`] instead.
///
/// # Examples
///
/// ```
/// use editdistance::{compute_all_optimal_paths, CostConfig, EditopKind};
///
/// let config = CostConfig::unit();
/// let paths = compute_all_optimal_paths("ab", "ba", &config);
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].len(), 1);
/// assert_eq!(paths[0][0].kind, EditopKind::Transpose);
/// assert_eq!(paths[0][0].output_string, "ba");
/// ```
pub fn compute_all_optimal_paths(a: &str, b: &str, config: &CostConfig) -> Vec<Path> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let dp = build_dp_table(&a, &b, config);

    let mut paths = Vec::new();
    let mut current = Vec::new();
    backtrack(&a, &b, &dp, a.len(), b.len(), config, &mut current, &mut paths);
    debug_assert!(current.is_empty());

    debug!(
        "enumerated {} optimal path(s) for |a|={}, |b|={}",
        paths.len(),
        a.len(),
        b.len()
    );
    paths
}

/// Collects into `paths` every minimal-cost operation sequence from `(0,0)`
/// to `(i,j)`.
///
/// Operations are pushed onto `current` walking backwards through the
/// table, so each completed sequence is reversed once at the origin.
/// Candidates are explored in the fixed order delete, insert, replace,
/// transpose; the order is canonical for reproducible output only.
///
/// A transposition is never offered at a cell whose diagonal symbols
/// already match: with non-negative weights it cannot cost less than the
/// zero-cost match, and a zero-weight transposition would merely duplicate
/// the match path.
#[allow(clippy::too_many_arguments)]
fn backtrack(
    a: &[char],
    b: &[char],
    dp: &[Vec<f64>],
    i: usize,
    j: usize,
    config: &CostConfig,
    current: &mut Vec<Editop>,
    paths: &mut Vec<Path>,
) {
    if i == 0 && j == 0 {
        let mut path = current.clone();
        path.reverse();
        paths.push(path);
        return;
    }

    let current_cost = dp[i][j];
    let ties = |candidate: f64| (candidate - current_cost).abs() < TIE_TOLERANCE;

    if i > 0 && ties(dp[i - 1][j] + config.delete()) {
        current.push(Editop {
            kind: EditopKind::Delete,
            src_idx: i - 1,
            dst_idx: i - 1,
            cost: config.delete(),
            output_string: a[i - 1].to_string(),
        });
        backtrack(a, b, dp, i - 1, j, config, current, paths);
        current.pop();
    }

    if j > 0 && ties(dp[i][j - 1] + config.insert()) {
        current.push(Editop {
            kind: EditopKind::Insert,
            src_idx: i,
            dst_idx: i,
            cost: config.insert(),
            output_string: b[j - 1].to_string(),
        });
        backtrack(a, b, dp, i, j - 1, config, current, paths);
        current.pop();
    }

    if i > 0 && j > 0 {
        let matched = a[i - 1] == b[j - 1];
        let sub_cost = if matched { 0.0 } else { config.replace() };
        if ties(dp[i - 1][j - 1] + sub_cost) {
            current.push(Editop {
                kind: EditopKind::Replace,
                src_idx: i - 1,
                dst_idx: j - 1,
                cost: sub_cost,
                output_string: if matched {
                    a[i - 1].to_string()
                } else {
                    b[j - 1].to_string()
                },
            });
            backtrack(a, b, dp, i - 1, j - 1, config, current, paths);
            current.pop();
        }

        if i > 1
            && j > 1
            && !matched
            && a[i - 1] == b[j - 2]
            && a[i - 2] == b[j - 1]
            && ties(dp[i - 2][j - 2] + config.transpose())
        {
            let mut pair = String::with_capacity(2);
            pair.push(b[j - 2]);
            pair.push(b[j - 1]);
            current.push(Editop {
                kind: EditopKind::Transpose,
                src_idx: i - 2,
                dst_idx: j - 2,
                cost: config.transpose(),
                output_string: pair,
            });
            backtrack(a, b, dp, i - 2, j - 2, config, current, paths);
            current.pop();
        }
    }
}
