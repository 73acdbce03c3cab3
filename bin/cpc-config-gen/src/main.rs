fn main() {
    if let Err(err) = cpc_config_gen::cli::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
