use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use icss::{
    display_error,
    errors::errors::Error,
    pipeline::{check, compile, Options},
    summarize_errors,
    type_checker::properties::PropertyTable,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "icssc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles ICSS stylesheets to CSS", long_about = None)]
struct Cli {
    /// Input stylesheet
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file, stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only check the stylesheet
    #[arg(long)]
    check: bool,

    /// Allowed-property table
    #[arg(long, value_enum, default_value = "default")]
    properties: PropertySet,

    /// Evaluate even when the checker reports errors
    #[arg(long)]
    evaluate_on_errors: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PropertySet {
    /// color, background-color, width and height
    Default,
    /// color only
    ColorOnly,
}

impl PropertySet {
    fn table(self) -> PropertyTable {
        match self {
            PropertySet::Default => PropertyTable::default(),
            PropertySet::ColorOnly => PropertyTable::color_only(),
        }
    }
}

fn report(errors: &[Error], source: &str) {
    for error in errors {
        eprintln!("{}", display_error(error, source));
    }
    eprintln!("{}", summarize_errors(errors));
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", cli.input.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());

    let options = Options {
        properties: cli.properties.table(),
        evaluate_on_errors: cli.evaluate_on_errors,
    };

    let start = Instant::now();

    if cli.check {
        let errors: Vec<Error> = match check(&source, &file_name, &options) {
            Ok(stylesheet) => stylesheet.collect_errors().into_iter().cloned().collect(),
            Err(error) => vec![error],
        };
        if !errors.is_empty() {
            report(&errors, &source);
            return ExitCode::FAILURE;
        }
        eprintln!("{} is valid ({:.2?})", file_name, start.elapsed());
        return ExitCode::SUCCESS;
    }

    let css = match compile(&source, &file_name, &options) {
        Ok(css) => css,
        Err(errors) => {
            report(&errors, &source);
            return ExitCode::FAILURE;
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(error) = fs::write(path, css) {
                eprintln!("Failed to write {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
            eprintln!("Compiled {} in {:.2?}", file_name, start.elapsed());
        }
        None => print!("{}", css),
    }

    ExitCode::SUCCESS
}
