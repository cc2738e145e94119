//! Command line input handling

use sortstep::{algorithms::Algorithm, data::DataType, engine::Value};

/// Command line arguments
#[derive(clap::Parser)]
#[command(
    author,
    version,
    about,
    subcommand_value_name = "command",
    subcommand_help_heading = "Commands",
    disable_help_subcommand = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Animate a sorting algorithm step by step
    Animate {
        /// The sorting algorithm to run
        #[arg()]
        algorithm: Algorithm,
        /// Comma separated values to sort, defaults to the demo array
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "random")]
        values: Vec<Value>,
        /// Sort this many random values instead
        #[arg(long)]
        random: Option<usize>,
        /// The kind of random values
        #[arg(long, default_value_t = DataType::Uniform)]
        data: DataType,
        /// Seed for the rng
        #[arg(long)]
        seed: Option<u64>,
        /// Milliseconds between two steps
        #[arg(short, long, default_value_t = 1_000)]
        interval_ms: u64,
        /// Stop after this many steps
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Compare the number of steps every algorithm needs on random data
    Compare {
        /// The number of runs to do
        #[arg(short, long, default_value_t = 100)]
        runs: usize,
        /// The size of the arrays to sort
        #[arg(short, long, default_value_t = 8)]
        size: usize,
        /// The kind of random values
        #[arg(long, default_value_t = DataType::Permutation)]
        data: DataType,
        /// Seed for the rng
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the available algorithms
    List,
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn animate_defaults() {
        let args = Args::try_parse_from(["sortstep", "animate", "bubble"]).unwrap();

        let Command::Animate {
            algorithm,
            values,
            random,
            interval_ms,
            max_steps,
            ..
        } = args.command
        else {
            panic!("expected animate");
        };
        assert_eq!(algorithm, Algorithm::Bubble);
        assert!(values.is_empty());
        assert_eq!(random, None);
        assert_eq!(interval_ms, 1_000);
        assert_eq!(max_steps, None);
    }

    #[test]
    fn animate_values() {
        let args =
            Args::try_parse_from(["sortstep", "animate", "merge", "--values", "3,-1,2"]).unwrap();

        let Command::Animate { values, .. } = args.command else {
            panic!("expected animate");
        };
        assert_eq!(values, vec![3, -1, 2]);
    }

    #[test]
    fn values_conflict_with_random() {
        assert!(
            Args::try_parse_from([
                "sortstep", "animate", "quick", "--values", "1,2", "--random", "5"
            ])
            .is_err()
        );
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(Args::try_parse_from(["sortstep", "animate", "bogo"]).is_err());
    }

    #[test]
    fn verify() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }
}
