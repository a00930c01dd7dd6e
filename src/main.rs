fn main() {
    if let Err(e) = starfield::core::App::run() {
        eprintln!("Starfield failed to start: {}", e);
        std::process::exit(1);
    }
}
