//! Human-readable reports over distances and optimal paths.
//!
//! The format is diagnostic output, not a wire contract.

use std::fmt;
use std::fmt::Write as _;

use crate::cost::CostConfig;
use crate::osa::{compute_all_optimal_paths, compute_distance, Editop};

impl fmt::Display for Editop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(src_idx={}, dst_idx={}, cost={}, output_string='{}')",
            self.kind, self.src_idx, self.dst_idx, self.cost, self.output_string
        )
    }
}

/// Renders the distance and every optimal path as a multi-line report.
///
/// # Examples
///
/// ```
/// use editdistance::{format_all_paths, CostConfig};
///
/// let report = format_all_paths("ab", "ba", &CostConfig::unit());
/// assert!(report.starts_with("OSA Distance from 'ab' to 'ba': 1"));
/// assert!(report.contains("Number of optimal edit sequences: 1"));
/// assert!(report.contains("TRANSPOSE(src_idx=0, dst_idx=0, cost=1, output_string='ba')"));
/// ```
pub fn format_all_paths(a: &str, b: &str, config: &CostConfig) -> String {
    let distance = compute_distance(a, b, config);
    let paths = compute_all_optimal_paths(a, b, config);

    let mut out = String::new();
    let _ = writeln!(out, "OSA Distance from '{a}' to '{b}': {distance}");
    let _ = writeln!(out, "Number of optimal edit sequences: {}", paths.len());
    let _ = writeln!(out);
    for (idx, path) in paths.iter().enumerate() {
        let _ = writeln!(out, "Path {}:", idx + 1);
        for op in path {
            let _ = writeln!(out, "  {op}");
        }
        let _ = writeln!(out);
    }
    out
}

/// Prints the report of [`format_all_paths`] to stdout.
pub fn print_all_paths(a: &str, b: &str, config: &CostConfig) {
    print!("{}", format_all_paths(a, b, config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::EditopKind;

    #[test]
    fn test_editop_display() {
        let op = Editop {
            kind: EditopKind::Delete,
            src_idx: 2,
            dst_idx: 2,
            cost: 1.5,
            output_string: "x".to_string(),
        };
        assert_eq!(
            op.to_string(),
            "DELETE(src_idx=2, dst_idx=2, cost=1.5, output_string='x')"
        );
    }

    #[test]
    fn test_report_structure() {
        let report = format_all_paths("aa", "a", &CostConfig::unit());
        assert!(report.starts_with("OSA Distance from 'aa' to 'a': 1\n"));
        assert!(report.contains("Number of optimal edit sequences: 2"));
        assert!(report.contains("Path 1:"));
        assert!(report.contains("Path 2:"));
        assert!(!report.contains("Path 3:"));
    }

    #[test]
    fn test_report_for_empty_pair() {
        let report = format_all_paths("", "", &CostConfig::unit());
        assert!(report.starts_with("OSA Distance from '' to '': 0\n"));
        assert!(report.contains("Number of optimal edit sequences: 1"));
        // The single optimal path is empty.
        assert!(report.contains("Path 1:"));
    }
}
