use clap::Parser;
use tracing_subscriber::EnvFilter;
use trichoice::cli::{self, Cli};
use trichoice::error::TriChoiceError;
use trichoice::{case, engine, report};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_CASE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, TriChoiceError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let case = case::load_case(&cmd.case_file)?;
            tracing::info!(path = %cmd.case_file.display(), "loaded case file");

            let assessment = engine::assess(&case.anatomy, &case.context)?;
            let format = match cmd.format {
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&report::AssessmentReport::new(case, assessment), format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Template(cmd) => {
            match cmd.out {
                Some(path) => {
                    if cmd.no_overwrite && path.exists() {
                        return Err(TriChoiceError::AlreadyExists(path.display().to_string()));
                    }
                    std::fs::write(&path, case::TEMPLATE)?;
                    println!("template written to {}", path.display());
                }
                None => print!("{}", case::TEMPLATE),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            let code = match &e {
                TriChoiceError::InvalidInput(_)
                | TriChoiceError::CaseNotFound(_)
                | TriChoiceError::CaseParse(_)
                | TriChoiceError::Toml(_) => exit_code::INVALID_CASE,
                _ => exit_code::RUNTIME_FAILURE,
            };
            eprintln!("error: {e}");
            std::process::exit(code);
        }
    }
}
