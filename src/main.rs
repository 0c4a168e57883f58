fn main() {
    if let Err(e) = bullet_measure::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
