use clap::Parser;
use dlog::application::{ExtractLogService, InputKind};
use dlog::cli::{format_log, Cli};
use dlog::error::DlogError;
use dlog::infrastructure::Config;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DlogError> {
    let config = Config::load(cli.config.as_deref())?;
    let service = ExtractLogService::new(config);

    let kind = if cli.ast {
        InputKind::Ast
    } else {
        InputKind::Markup
    };

    let days = service.execute(&cli.input, kind)?;
    print!("{}", format_log(&days));
    Ok(())
}
