use std::{path::PathBuf, thread, time::Duration};

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sorting_visualiser_core::{
    replay, AppConfig, Algorithm, BarChart, LogSink, NoteIndices, Player, Scale, SortVizError,
    Velocities,
};
use tracing_subscriber::EnvFilter;

fn main() -> sorting_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trace {
            algorithm,
            values,
            json,
        } => run_trace(algorithm, &values, json),
        Commands::Play {
            algorithm,
            size,
            seed,
            delay_ms,
            config,
        } => {
            let mut config = match config {
                Some(path) => AppConfig::from_path(path)?,
                None => AppConfig::default(),
            };
            if let Some(size) = size {
                config.playback.array_size = size;
            }
            if seed.is_some() {
                config.playback.seed = seed;
            }
            if let Some(delay_ms) = delay_ms {
                config.playback.step_delay_ms = delay_ms;
            }
            run_play(algorithm, &config)
        }
        Commands::Verify { size, rounds, seed } => run_verify(size, rounds, seed),
    }
}

fn run_trace(algorithm: Algorithm, values: &[i64], json: bool) -> sorting_visualiser_core::Result<()> {
    tracing::info!(%algorithm, len = values.len(), "recording trace");
    let trace = algorithm.trace(values);

    if json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    for (step, op) in trace.iter().enumerate() {
        println!("{step:>5}  {op}");
    }

    let mut sorted = values.to_vec();
    replay(&mut sorted, &trace)?;
    let stats = trace.stats();
    println!(
        "{} compares, {} copies, {} swaps -> {sorted:?}",
        stats.compares, stats.copies, stats.swaps
    );
    Ok(())
}

fn run_play(algorithm: Algorithm, config: &AppConfig) -> sorting_visualiser_core::Result<()> {
    config.validate()?;
    let playback = &config.playback;
    let seed = playback.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(%algorithm, size = playback.array_size, seed, "starting playback");

    let mut notes = NoteIndices::default();
    notes.initialize_and_shuffle(playback.array_size, &mut StdRng::seed_from_u64(seed));

    let scale = Scale::chromatic(config.audio.base_note, playback.array_size);
    let mut player = Player::new(
        notes,
        algorithm,
        scale,
        Velocities::from(&config.audio),
        LogSink,
    )?;
    let chart = BarChart::new(config.render.width, config.render.height);
    let delay = Duration::from_millis(playback.step_delay_ms);

    draw(&chart, player.notes(), 0, player.trace().len());
    while let Some(frame) = player.step()? {
        draw(&chart, player.notes(), frame.step + 1, player.trace().len());
        thread::sleep(delay);
    }

    let stats = player.trace().stats();
    tracing::info!(
        compares = stats.compares,
        copies = stats.copies,
        swaps = stats.swaps,
        "playback finished"
    );
    Ok(())
}

fn draw(chart: &BarChart, notes: &NoteIndices, step: usize, total: usize) {
    // clear the terminal and home the cursor
    print!("\x1b[2J\x1b[H");
    println!("{}", chart.to_text(notes));
    println!("step {step}/{total}");
}

fn run_verify(size: usize, rounds: usize, seed: u64) -> sorting_visualiser_core::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    for algorithm in Algorithm::ALL {
        let mut operations = 0;
        for round in 0..rounds {
            let len = rng.random_range(0..=size);
            let input: Vec<u32> = (0..len).map(|_| rng.random_range(0..100)).collect();
            let trace = algorithm.trace(&input);

            let mut array = input.clone();
            replay(&mut array, &trace)?;
            if !array.windows(2).all(|pair| pair[0] <= pair[1]) {
                return Err(SortVizError::msg(format!(
                    "{algorithm} sort left round {round} unsorted: {input:?} -> {array:?}"
                )));
            }
            operations += trace.len();
        }
        tracing::info!(%algorithm, rounds, operations, "verified");
    }

    println!("all {} algorithms verified", Algorithm::ALL.len());
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Watch and hear sorting algorithms at work", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the operations a sort performs on the given values.
    Trace {
        /// Sorting algorithm to record.
        #[arg(short, long, default_value = "quick")]
        algorithm: Algorithm,
        /// Values to sort.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Emit the trace as JSON instead of one operation per line.
        #[arg(long)]
        json: bool,
    },
    /// Shuffle an array and animate a sort in the terminal.
    Play {
        /// Sorting algorithm to animate.
        #[arg(short, long, default_value = "quick")]
        algorithm: Algorithm,
        /// Number of elements to shuffle.
        #[arg(short, long)]
        size: Option<usize>,
        /// Shuffle seed, for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
        /// Milliseconds to hold each frame.
        #[arg(short, long)]
        delay_ms: Option<u64>,
        /// Optional JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check every algorithm against random inputs.
    Verify {
        /// Largest input length to try.
        #[arg(short, long, default_value_t = 64)]
        size: usize,
        /// Random inputs per algorithm.
        #[arg(short, long, default_value_t = 100)]
        rounds: usize,
        /// Seed for the generated inputs.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}
