pub mod quiz;
pub mod render;

use rand::Rng;

/// Installs `env_logger` with a level picked by the count of `-v` flags.
/// `RUST_LOG` still wins when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// The given seed, or a fresh one which is printed so the run can be replayed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen();
            eprintln!("seed: {}", seed);
            seed
        }
    }
}
