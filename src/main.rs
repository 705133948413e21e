fn main() {
    if let Err(err) = xiao_pinmap::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
