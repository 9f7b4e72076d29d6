fn main() {
    if let Err(err) = csv_infer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
