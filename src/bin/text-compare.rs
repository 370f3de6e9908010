use text_compare_service::{cli, init_tracing};

fn main() {
    init_tracing();

    let code = cli::main_with_args(std::env::args().skip(1));
    std::process::exit(code);
}
