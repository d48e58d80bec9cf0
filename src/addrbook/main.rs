use env_logger::{Builder, Env};

mod cli;

fn init_logger() {
    // RUST_LOG overrides; stdout is reserved for the shell itself.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
