use jobmeta::ui::output;

fn main() {
    if let Err(err) = jobmeta::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
