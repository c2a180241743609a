use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mlq_sched::config::{AlgorithmConfig, SimulationConfig};
use mlq_sched::models::Ticks;
use mlq_sched::scheduler::TerminalAlgorithm;
use mlq_sched::simulation::simulate_file;

/// Simulate CPU scheduling over a process file and write per-process metrics.
#[derive(Parser, Debug)]
#[command(name = "mlq-sim", version, about)]
struct Args {
    /// Process file with `PID; BT; AT; Q; P` lines
    input: PathBuf,

    /// Result file
    #[arg(default_value = "salida.txt")]
    output: PathBuf,

    /// JSON configuration file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scheduling algorithm
    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmKind>,

    /// Round-Robin quantum, or the band 1 quantum under MLQ
    #[arg(short, long)]
    quantum: Option<Ticks>,

    /// Band 2 quantum under MLQ
    #[arg(long)]
    quantum2: Option<Ticks>,

    /// Band 3 algorithm under MLQ (fcfs, sjf, stcf)
    #[arg(short, long)]
    terminal: Option<TerminalAlgorithm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmKind {
    Fcfs,
    Sjf,
    Stcf,
    #[value(alias = "round-robin")]
    Rr,
    Mlq,
}

impl From<&AlgorithmConfig> for AlgorithmKind {
    fn from(config: &AlgorithmConfig) -> Self {
        match config {
            AlgorithmConfig::Fcfs => Self::Fcfs,
            AlgorithmConfig::Sjf => Self::Sjf,
            AlgorithmConfig::Stcf => Self::Stcf,
            AlgorithmConfig::RoundRobin { .. } => Self::Rr,
            AlgorithmConfig::Mlq { .. } => Self::Mlq,
        }
    }
}

/// Applies the command-line algorithm and parameters on top of `base`.
///
/// Parameters the flags leave unset come from `base` when it carries
/// them, otherwise from the MLQ defaults.
fn merge_algorithm(base: &AlgorithmConfig, args: &Args) -> AlgorithmConfig {
    let (quantum1, quantum2, terminal) = match *base {
        AlgorithmConfig::Mlq {
            quantum1,
            quantum2,
            terminal,
        } => (quantum1, quantum2, terminal),
        AlgorithmConfig::RoundRobin { quantum } => (quantum, 3, TerminalAlgorithm::Sjf),
        _ => (1, 3, TerminalAlgorithm::Sjf),
    };

    match args.algorithm.unwrap_or_else(|| AlgorithmKind::from(base)) {
        AlgorithmKind::Fcfs => AlgorithmConfig::Fcfs,
        AlgorithmKind::Sjf => AlgorithmConfig::Sjf,
        AlgorithmKind::Stcf => AlgorithmConfig::Stcf,
        AlgorithmKind::Rr => AlgorithmConfig::RoundRobin {
            quantum: args.quantum.unwrap_or(quantum1),
        },
        AlgorithmKind::Mlq => AlgorithmConfig::Mlq {
            quantum1: args.quantum.unwrap_or(quantum1),
            quantum2: args.quantum2.unwrap_or(quantum2),
            terminal: args.terminal.unwrap_or(terminal),
        },
    }
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    config.algorithm = merge_algorithm(&config.algorithm, args);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let report = simulate_file(&args.input, &args.output, &config)
        .with_context(|| format!("simulating {}", args.input.display()))?;

    let kpi = &report.kpi;
    println!(
        "{}: {} processes, makespan {}, utilization {:.1}%",
        report.algorithm,
        kpi.process_count,
        kpi.makespan,
        kpi.utilization * 100.0
    );
    println!(
        "avg WT={:.2} CT={:.2} RT={:.2} TAT={:.2}",
        kpi.avg_waiting_time, kpi.avg_completion_time, kpi.avg_response_time, kpi.avg_turnaround_time
    );
    println!("results written to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mlq-sim").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["in.txt"]);
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("salida.txt"));
        assert_eq!(build_config(&args).unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_unknown_short_flag_is_rejected() {
        let argv = ["mlq-sim", "-z", "2", "in.txt"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(Args::try_parse_from(["mlq-sim", "--algorithm", "sjf"]).is_err());
    }

    #[test]
    fn test_algorithm_flags() {
        let args = parse(&["in.txt", "out.txt", "-a", "rr", "-q", "4"]);
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(
            build_config(&args).unwrap().algorithm,
            AlgorithmConfig::RoundRobin { quantum: 4 }
        );

        let args = parse(&["in.txt", "--algorithm", "round-robin"]);
        assert_eq!(args.algorithm, Some(AlgorithmKind::Rr));

        let args = parse(&["in.txt", "--algorithm", "stcf", "--quantum", "9"]);
        assert_eq!(build_config(&args).unwrap().algorithm, AlgorithmConfig::Stcf);
    }

    #[test]
    fn test_terminal_parses_case_insensitive() {
        let args = parse(&["in.txt", "--terminal", "STCF", "--quantum2", "5"]);
        assert_eq!(
            build_config(&args).unwrap().algorithm,
            AlgorithmConfig::Mlq {
                quantum1: 1,
                quantum2: 5,
                terminal: TerminalAlgorithm::Stcf,
            }
        );
        assert!(Args::try_parse_from(["mlq-sim", "in.txt", "--terminal", "lottery"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"algorithm":{"kind":"mlq","quantum1":2,"quantum2":4,"terminal":"fcfs"},"start_clock":3}"#,
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap();

        let args = parse(&["in.txt", "--config", config_path, "--quantum", "6"]);
        let config = build_config(&args).unwrap();
        assert_eq!(
            config.algorithm,
            AlgorithmConfig::Mlq {
                quantum1: 6,
                quantum2: 4,
                terminal: TerminalAlgorithm::Fcfs,
            }
        );
        assert_eq!(config.start_clock, 3);

        let args = parse(&["in.txt", "--config", config_path, "-a", "rr"]);
        assert_eq!(
            build_config(&args).unwrap().algorithm,
            AlgorithmConfig::RoundRobin { quantum: 2 }
        );
    }

    #[test]
    fn test_round_robin_config_keeps_its_quantum() {
        let base = AlgorithmConfig::RoundRobin { quantum: 7 };
        let args = parse(&["in.txt"]);
        assert_eq!(merge_algorithm(&base, &args), base);

        let args = parse(&["in.txt", "-a", "mlq"]);
        assert_eq!(
            merge_algorithm(&base, &args),
            AlgorithmConfig::Mlq {
                quantum1: 7,
                quantum2: 3,
                terminal: TerminalAlgorithm::Sjf,
            }
        );
    }

    #[test]
    fn test_zero_quantum_fails_validation() {
        let args = parse(&["in.txt", "-a", "rr", "-q", "0"]);
        assert!(build_config(&args).is_err());
    }
}
