use std::ops::ControlFlow;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser as _;
use rand::SeedableRng as _;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use sortstep::algorithms::Algorithm;
use sortstep::clock::{ClockConfig, StepClock};
use sortstep::data::{DEFAULT_VALUES, DataType};
use sortstep::engine::{SortEngine, Value};

mod cli;
mod render;

/// Program entry point
fn main() -> ExitCode {
    let args = cli::Args::parse();
    setup_tracing();

    let result = match args.command {
        cli::Command::Animate {
            algorithm,
            values,
            random,
            data,
            seed,
            interval_ms,
            max_steps,
        } => {
            let values = match random {
                Some(size) => data.generate(size, &mut create_rng(seed)),
                None if values.is_empty() => DEFAULT_VALUES.to_vec(),
                None => values,
            };
            let config = ClockConfig {
                interval: Duration::from_millis(interval_ms),
                max_steps,
            };

            animate(algorithm, values, config)
        }
        cli::Command::Compare {
            runs,
            size,
            data,
            seed,
        } => compare(runs, size, data, &mut create_rng(seed)),
        cli::Command::List => {
            for algorithm in Algorithm::ALL {
                println!(
                    "{name:<10} {algorithm} (stable: {stable})",
                    name = clap::ValueEnum::to_possible_value(&algorithm)
                        .map(|value| value.get_name().to_string())
                        .unwrap_or_default(),
                    stable = algorithm.is_stable(),
                );
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered through `RUST_LOG` with a default of `warn`
fn setup_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Create the rng, seeded from `seed` or the operating system
fn create_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            tracing::info!("no seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    }
}

/// Animate a single run of `algorithm` over `values` in the terminal
fn animate(
    algorithm: Algorithm,
    values: Vec<Value>,
    config: ClockConfig,
) -> Result<(), sortstep::Error> {
    let mut engine = SortEngine::new(values);
    engine.start(algorithm);

    let bar = indicatif::ProgressBar::new_spinner();
    bar.set_message(format!("Sorting using {algorithm}..."));
    bar.println(render::frame(engine.data(), &[]));

    let summary = StepClock::new(config).run(&mut engine, |engine, result| {
        bar.println("");
        bar.println(render::frame(engine.data(), &result.events));
        bar.set_message(format!(
            "step {step}: {description}",
            step = engine.steps_taken(),
            description = render::describe(result),
        ));
        bar.tick();

        ControlFlow::Continue(())
    })?;

    if summary.completed {
        bar.finish_with_message(format!("Sorting complete! ({} steps)", summary.steps));
    } else {
        bar.abandon_with_message(format!("Stopped after {} steps", summary.steps));
    }

    Ok(())
}

/// Run every algorithm on the same random arrays and print step count statistics
fn compare(
    runs: usize,
    size: usize,
    data: DataType,
    rng: &mut impl rand::Rng,
) -> Result<(), sortstep::Error> {
    println!("Runs: {runs}, Array size: {size}, Data type: {data}");

    let mut stats: Vec<rolling_stats::Stats<f64>> = Algorithm::ALL
        .iter()
        .map(|_| rolling_stats::Stats::new())
        .collect();

    let bar = indicatif::ProgressBar::new((runs * Algorithm::ALL.len()) as u64);
    let clock = StepClock::new(ClockConfig::immediate());
    let mut engine = SortEngine::new(Vec::new());

    for _ in 0..runs {
        let values = data.generate(size, rng);

        for (algorithm, stats) in Algorithm::ALL.into_iter().zip(stats.iter_mut()) {
            engine.reset(values.clone());
            engine.start(algorithm);

            let summary = clock.run(&mut engine, |_, _| ControlFlow::Continue(()))?;
            debug_assert!(summary.completed && engine.is_sorted());

            stats.update(summary.steps as f64);
            bar.inc(1);
        }
    }

    bar.finish_and_clear();

    for (algorithm, stats) in Algorithm::ALL.into_iter().zip(stats) {
        println!("{algorithm}: {stats:?}");
    }

    Ok(())
}
