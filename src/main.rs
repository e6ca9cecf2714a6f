fn main() {
    if let Err(err) = barchart_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
