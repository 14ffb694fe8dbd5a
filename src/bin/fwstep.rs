use clap::{Args, Parser, Subcommand};
use fwstep::{
    cli::{animate, list_samples, load_graph, solve, GraphSource, TerminalObserver},
    driver::Driver,
};
use log::error;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GraphOpts {
    /// Index of the predefined sample graph
    #[clap(short = 's', long, default_value_t = 0)]
    sample: usize,
    /// Use a random graph with this number of vertices instead of a sample
    #[clap(short = 'r', long)]
    random: Option<usize>,
    /// Seed of the random graph
    #[clap(long, default_value_t = 0)]
    seed: u64,
    /// Read the graph from a json file `{"weights": [[0, 5, null], ...]}`
    #[clap(short = 'j', long)]
    json: Option<std::path::PathBuf>,
}

impl GraphOpts {
    fn source(&self) -> GraphSource {
        if let Some(path) = &self.json {
            GraphSource::Json(path.clone())
        } else if let Some(n) = self.random {
            GraphSource::Random { n, seed: self.seed }
        } else {
            GraphSource::Sample(self.sample)
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate the relaxations step by step
    Run {
        #[clap(flatten)]
        graph: GraphOpts,
        /// Interval between two steps in milli-seconds
        #[clap(short = 'i', long, default_value_t = 500)]
        interval_ms: u64,
        /// Stop after this number of steps
        #[clap(short = 'm', long)]
        max_steps: Option<usize>,
        /// Print only the steps that improved a distance
        #[clap(short, long)]
        quiet: bool,
        /// Print engine snapshots as json lines
        #[clap(long)]
        json_output: bool,
        /// Compare the final matrix with an independent solver
        #[clap(long)]
        verify: bool,
    },
    /// Compute all distances without animation
    Solve {
        #[clap(flatten)]
        graph: GraphOpts,
        /// Print the final snapshot as json
        #[clap(long)]
        json_output: bool,
        /// Compare the final matrix with an independent solver
        #[clap(long)]
        verify: bool,
    },
    /// List the predefined sample graphs
    Samples,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# started_at={}", chrono::Local::now());
    println!("# opts={:?}", opts);
    let ok = match &opts.command {
        Commands::Run {
            graph,
            interval_ms,
            max_steps,
            quiet,
            json_output,
            verify,
        } => match load_graph(&graph.source()) {
            Ok(g) => {
                let mut driver = Driver::new(Duration::from_millis(*interval_ms));
                driver.max_steps = *max_steps;
                let mut observer = TerminalObserver {
                    quiet: *quiet,
                    json_output: *json_output,
                };
                animate(&g, &driver, &mut observer, *verify)
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        },
        Commands::Solve {
            graph,
            json_output,
            verify,
        } => match load_graph(&graph.source()) {
            Ok(g) => solve(&g, *json_output, *verify),
            Err(e) => {
                error!("{}", e);
                false
            }
        },
        Commands::Samples => {
            list_samples();
            true
        }
    };
    println!("# finished_at={}", chrono::Local::now());
    if !ok {
        std::process::exit(1);
    }
}
