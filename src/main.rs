fn main() {
    // Delegate to CLI runner; any failure maps to exit status 1.
    if let Err(err) = safe_replace::cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
