use clap::Parser;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input .xlsx file
    #[arg(short, long, value_name = "FILE")]
    input: Option<std::path::PathBuf>,

    /// Output directory [default: .]
    #[arg(short, long, value_name = "DIR")]
    output: Option<std::path::PathBuf>,

    /// Treat the first column as data instead of dropping it
    #[arg(long)]
    keep_first_column: bool,

    /// Column used as translation key (0 origin, after the first column is dropped)
    #[arg(short, long, value_name = "N")]
    key: Option<usize>,

    /// Output format: ts, js or json [default: ts]
    #[arg(short, long)]
    format: Option<xlsx_i18n::OutputFormat>,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// Show languages and key counts without writing files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    env_logger::init();

    // parse commandline
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("Error: {}", err);
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> xlsx_i18n::Result<()> {
    // Load config file
    let file_config = if let Some(cfg_file) = &cli.config {
        xlsx_i18n::FileConfig::with_config(cfg_file)?
    } else {
        xlsx_i18n::FileConfig::new()?
    };

    let config = xlsx_i18n::Config::resolve(
        file_config,
        xlsx_i18n::Overrides {
            input: cli.input,
            output: cli.output,
            keep_first_column: cli.keep_first_column,
            key_column: cli.key,
            format: cli.format,
        },
    )?;
    log::debug!("{:?}", config);

    if cli.dry_run {
        let table = xlsx_i18n::pivot_xlsx_file(&config.input, &config.policy)?;
        for (language, entries) in &table {
            println!(
                "{} : {} keys",
                xlsx_i18n::output_path(&config.output_dir, language, config.format)?.display(),
                entries.len()
            );
        }
    } else {
        let written = xlsx_i18n::convert_xlsx_file(&config).await?;
        for path in written {
            println!("{} generated.", path.display());
        }
    }

    Ok(())
}
