use scanpat::{has_cycle, max_average, move_zeroes, pair_with_sum, DemoConfig, NodeArena};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("scanpat {}: sliding-window and two-pointer scans", scanpat::VERSION);

    let config = DemoConfig::from_env();
    info!(?config, "running demos");

    // Sliding window
    let window = &config.window;
    let average = max_average(&window.values, window.k);
    println!("\nFixed window:");
    println!("  Input: {:?}", window.values);
    if window.values.len() < window.k || window.k == 0 {
        println!("  No window of length {} exists", window.k);
    } else {
        println!(
            "  Maximum average of any subarray of length {} is: {}",
            window.k, average
        );
    }

    // Converging pointers
    let pair = &config.pair;
    println!("\nConverging pointers:");
    println!("  Input: {:?}, target {}", pair.values, pair.target);
    match pair_with_sum(&pair.values, pair.target) {
        Some((left, right)) => println!("  Indices: {}, {}", left, right),
        None => println!("  No pair found."),
    }

    // Fast and slow pointers
    let cycle = &config.cycle;
    let (mut arena, head) = NodeArena::from_values(cycle.values.iter().copied());
    if let Some(target) = cycle.loop_to {
        match (arena.id(arena.len().wrapping_sub(1)), arena.id(target)) {
            (Some(last), Some(to)) => arena.link(last, to),
            _ => warn!(
                loop_to = target,
                len = arena.len(),
                "loop target out of range, list left acyclic"
            ),
        }
    }
    println!("\nFast and slow pointers:");
    println!("{:?}", arena);
    if has_cycle(&arena, head) {
        println!("  Cycle detected");
    } else {
        println!("  No cycle");
    }

    // In-place compaction
    let mut nums = config.compact.values.clone();
    move_zeroes(&mut nums);
    println!("\nIn-place compaction:");
    println!("  Input:  {:?}", config.compact.values);
    println!("  Output: {:?}", nums);
}
