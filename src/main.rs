use anyhow::{Context, Result};
use clap::{arg, Command};
use fleet_anneal::anneal::solve;
use fleet_anneal::io::{read_problem, write_assignment};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("fleet-anneal")
        .about("Assigns vehicles to time-windowed grid trips with simulated annealing")
        .arg(
            arg!([INPUT] "Path to a problem file (reads stdin when omitted)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"pre-limit" [SECONDS] "Time budget for the unrestricted search phase")
                .default_value("10")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"post-limit" [SECONDS] "Time budget for the shift-only polish phase")
                .default_value("10")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--seed [SEED] "Random generator seed")
                .default_value("42")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--stats [PATH] "Write a JSON solve report to this path")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = cli().get_matches();
    let pre_limit = Duration::from_secs(*matches.get_one::<u64>("pre-limit").expect("default"));
    let post_limit = Duration::from_secs(*matches.get_one::<u64>("post-limit").expect("default"));
    let seed = *matches.get_one::<u64>("seed").expect("default");

    let problem = match matches.get_one::<PathBuf>("INPUT") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_problem(BufReader::new(file))?
        }
        None => read_problem(io::stdin().lock())?,
    };

    info!(
        vehicles = problem.num_vehicles(),
        trips = problem.num_trips(),
        upper_bound = problem.upper_bound(),
        "problem loaded"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let (best, report) = solve(&problem, pre_limit, post_limit, &mut rng);

    info!(
        energy = report.energy,
        quality = report.quality,
        "solve finished"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_assignment(&mut out, &best)?;
    out.flush()?;

    if let Some(path) = matches.get_one::<PathBuf>("stats") {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report).context("writing stats report")?;
    }

    Ok(())
}
