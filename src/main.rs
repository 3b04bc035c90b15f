use chrono::Local;
use clap::Parser;
use pythia_client::utils::{logger, validation::Validate};
use pythia_client::{ClientConfig, Dimension, FieldUpdate, HttpApi, Store, YopUpdate};

#[derive(Parser, Debug)]
#[command(name = "pythia")]
#[command(about = "Inspect worksets and build filtered queries against a Pythia backend")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    /// Read configuration from a TOML file instead of flags.
    #[arg(long)]
    config_file: Option<std::path::PathBuf>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Date range preset index (0 = all available, 1 = last 12 months,
    /// 2 = previous year, 3 = custom).
    #[arg(long, default_value = "0")]
    date_range: usize,

    #[arg(long)]
    lang: Option<String>,

    #[arg(long)]
    owner_inst: Option<i64>,

    #[arg(long)]
    work_category: Option<i64>,

    #[arg(long)]
    yop_from: Option<u16>,

    #[arg(long)]
    yop_to: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config_file {
        Some(path) => ClientConfig::from_toml_file(path)?,
        None => cli.config.clone(),
    };

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting pythia client");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api = HttpApi::new(&config)?;
    let mut store = Store::new(api);

    store.start().await;

    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        store.login(email, password).await;
        if let Some(message) = store.session.login_error_text() {
            eprintln!("❌ Login failed: {}", message);
            std::process::exit(1);
        }
        tracing::info!("Logged in as {}", store.username_text());
    }

    store.reload_worksets().await;
    if store.worksets.is_empty() {
        println!("No worksets available");
    }
    for workset in &store.worksets {
        let marker = if Some(workset.uuid) == store.selected_workset_uuid() {
            "*"
        } else {
            " "
        };
        println!(
            "{} {}  {}  ({} records)",
            marker, workset.uuid, workset.name, workset.mi_count
        );
    }

    if let Some(workset) = store.selected_workset_uuid() {
        for dimension in [
            Dimension::Language,
            Dimension::OwnerInstitution,
            Dimension::WorkCategory,
        ] {
            store.fetch_available(dimension, workset).await;
        }
        tracing::info!(
            "{} languages, {} institutions, {} work types available",
            store.language.available.len(),
            store.owner.available.len(),
            store.work_type.available.len()
        );
    }

    let today = Local::now().date_naive();
    store.date_range.select_preset(cli.date_range, today);
    store.language.select(cli.lang.clone());
    store.owner.select(cli.owner_inst);
    store.work_type.select(cli.work_category);
    store.apply_yop(YopUpdate {
        start: cli.yop_from.map_or(FieldUpdate::Keep, FieldUpdate::Set),
        end: cli.yop_to.map_or(FieldUpdate::Keep, FieldUpdate::Set),
    });

    let query = store.work_query();
    println!(
        "✅ Composite query: {}",
        serde_json::to_string_pretty(&query)?
    );

    if let Some(notification) = store.notification() {
        eprintln!("⚠️ {}", notification.message);
    }

    Ok(())
}
