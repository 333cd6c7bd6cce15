mod cli;
mod colors;
mod commands;
mod error;

use cli::SearchParams;

fn main() {
    let matches = cli::build_cli().get_matches();
    let params = SearchParams::from_matches(&matches);

    let outcome = if params.recursive {
        commands::walk::run(params.into())
    } else {
        commands::search::run(params.into())
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("lgrep: {err}");
            std::process::exit(2);
        }
    }
}
