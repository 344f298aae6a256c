use super::render::{render_json, render_result};
use super::setup::{Cli, Commands, OutputFormat};
use anyhow::Context;
use clap::Parser;
use providerdb::api::ProviderApi;
use providerdb::commands::CmdResult;
use providerdb::init::initialize;
use providerdb::model::{NewProvider, ProviderUpdate};
use providerdb::store::DataStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let ctx = initialize(&cwd, cli.data.clone()).context("failed to initialize providerdb")?;
    tracing::debug!(path = %ctx.data_file.display(), "store ready");

    let result = dispatch(&ctx.api, cli.command)?;
    print_result(&result, cli.output)
}

/// Logs go to stderr so stdout stays clean for `--output json`.
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "providerdb=debug,providerdb_cli=debug".into()
        } else {
            "providerdb=error,providerdb_cli=error".into()
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub(crate) fn dispatch<S: DataStore>(
    api: &ProviderApi<S>,
    command: Commands,
) -> anyhow::Result<CmdResult> {
    let result = match command {
        Commands::List { page, size } => {
            let size = size.map(|s| usize::try_from(s).unwrap_or(usize::MAX));
            api.list_providers(page, size)?
        }
        Commands::Get { id } => api.get_provider(id)?,
        Commands::Create {
            name,
            company,
            address,
        } => api.create_provider(NewProvider::new(name, company, address))?,
        Commands::Update {
            id,
            name,
            company,
            address,
        } => api.update_provider(
            id,
            ProviderUpdate {
                name,
                company_name: company,
                address,
            },
        )?,
        Commands::Delete { id } => api.delete_provider(id)?,
        Commands::Count => api.count_providers()?,
    };
    Ok(result)
}

fn print_result(result: &CmdResult, output: OutputFormat) -> anyhow::Result<()> {
    let rendered = match output {
        OutputFormat::Text => render_result(result),
        OutputFormat::Json => render_json(result).context("failed to encode result")?,
    };
    print!("{}", rendered);
    Ok(())
}
