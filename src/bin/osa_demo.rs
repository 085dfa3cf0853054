use std::collections::HashMap;

use editdistance::{
    compute_all_optimal_paths, compute_distance, print_all_paths, CostConfig, EditopKind,
};

fn main() {
    // Build the configuration from a cost-by-kind map, the second of the
    // two supported construction styles.
    let costs = HashMap::from([
        (EditopKind::Delete, 1.0),
        (EditopKind::Insert, 1.0),
        (EditopKind::Replace, 1.0),
        (EditopKind::Transpose, 1.0),
    ]);
    let config = CostConfig::try_from(&costs).expect("all four weights are present");

    println!("Testing OSA distance with all paths:");
    print_all_paths("aaaaaaaaaa", "abaabababa", &config);

    println!("\nAdditional test case:");
    let paths = compute_all_optimal_paths("CA", "AX", &config);
    let distance = compute_distance("CA", "AX", &config);

    println!("OSA Distance from 'CA' to 'AX': {distance}");
    println!("Number of optimal edit sequences: {}", paths.len());
    println!();

    for (idx, path) in paths.iter().enumerate() {
        println!("Path {}:", idx + 1);
        for op in path {
            println!("  {op}");
        }
        println!();
    }
}
