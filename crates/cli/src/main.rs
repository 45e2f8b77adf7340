fn main() {
    if let Err(e) = tilescope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
