use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use qsbench::benchmark::{ConsoleLog, ConsoleUi, ResultTable, print_summary, write_csv};
use qsbench::{BenchmarkConfig, BenchmarkOrchestrator, Collaborators, SampleSet};

#[derive(Parser)]
#[command(about = "Compare iterative and recursive quicksort on random integer arrays")]
struct BenchArgs {
    /// Five distinct sample sizes in thousands of elements, each in [5, 100]
    #[arg(short, long, default_value = "50,60,70,80,90")]
    samples: SampleSet,

    /// Number of consecutive runs; each new run clears the previous results
    #[arg(short, long, default_value = "1")]
    runs: usize,

    /// Verify that every job produced ascending output
    #[arg(short, long)]
    verify: bool,

    /// Write the final results table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = BenchArgs::parse();

    let config = BenchmarkConfig {
        samples: args.samples,
        verify: args.verify,
    };

    let table = Arc::new(ResultTable::new());
    let orchestrator = BenchmarkOrchestrator::new(Collaborators {
        ui: Arc::new(ConsoleUi),
        log: Arc::new(ConsoleLog),
        results: table.clone(),
    })?;

    println!("\n=== QUICKSORT BENCHMARK ===");
    println!("Sample sizes (thousands): {}", config.samples);
    println!("Runs: {}", args.runs);
    println!("Verify output: {}", config.verify);
    println!();

    for run in 1..=args.runs {
        if args.runs > 1 {
            println!("Run {}/{}", run, args.runs);
        }
        orchestrator.start(config)?.wait()?;
    }

    let rows = table.rows();
    print_summary(&rows);

    if let Some(path) = args.csv {
        write_csv(&path, &rows)?;
        println!("Results written to {:?}", path);
    }

    Ok(())
}
