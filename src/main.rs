//! u-evolve demo: evolve "Hello, World!" from random strings.
//!
//! Usage: `u-evolve [seed] [chart.svg]`

use std::path::PathBuf;
use std::time::Instant;

use u_evolve::ga::{GaConfig, GeneticAlgorithm};
use u_evolve::plot::FitnessChart;
use u_evolve::problems::strings::VariableLengthMatch;

const TARGET: &str = "Hello, World!";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [seed] [chart.svg]", args[0]);
        eprintln!();
        eprintln!("Evolve the string {TARGET:?} with a genetic algorithm.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  seed       Random seed (default: random)");
        eprintln!("  chart.svg  Where to write the fitness chart (default: fitness_history.svg)");
        return;
    }

    let seed: Option<u64> = args.get(1).map(|s| {
        s.parse().unwrap_or_else(|e| {
            eprintln!("Error parsing seed {s:?}: {e}");
            std::process::exit(1);
        })
    });
    let chart_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fitness_history.svg"));

    let mut config = GaConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let problem = VariableLengthMatch::default();
    let generator = problem.clone();
    let mut ga = GeneticAlgorithm::builder(problem, config)
        .generator(move |rng| Ok(generator.generate(TARGET, rng)))
        .context(TARGET.to_string())
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error building GA: {e}");
            std::process::exit(1);
        });

    let start = Instant::now();
    let best = ga.run().unwrap_or_else(|e| {
        eprintln!("Error during run: {e}");
        std::process::exit(1);
    });

    log::info!(
        "Best individual: {:?}, fitness: {}",
        best.genotype,
        best.fitness
    );
    println!("Best individual: {:?}", best.genotype);
    println!("Fitness:         {}", best.fitness);
    println!("Generations:     {}", ga.generations());
    println!("Stopped:         {:?}", ga.state());
    println!("Elapsed:         {:.2?}", start.elapsed());

    match FitnessChart::default().write_svg(ga.fitness_history(), &chart_path) {
        Ok(()) => println!("Chart:           {}", chart_path.display()),
        Err(e) => {
            eprintln!("Error writing chart to {}: {e}", chart_path.display());
            std::process::exit(1);
        }
    }
}
