//! Command-line front end for the Nexus ecosystem.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use nexus_app::{
    ArticleSlot, BlogStore, CUSTOM_ANALYSIS_CONTEXT, compose_agent_post, fetch_article,
    find_resource, normalize_query, resources,
};
use nexus_catalog::{Catalog, CatalogView, Category, CategoryFilter, SortMode};
use nexus_chat::{ChatSession, JsonHistoryStore, SendOutcome};
use nexus_config::{API_KEY_ENV, NexusConfig};
use nexus_genai::{GeminiClient, ecosystem_context, master_system_prompt};
use nexus_sim::{Simulation, seed_agents};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Command-line options for the Nexus CLI.
#[derive(Parser)]
#[command(name = "nexus", version, about = "Nexus digital-creator ecosystem")]
struct Cli {
    /// Optional path to a nexus.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List marketplace products with filtering, sorting, and paging
    Catalog {
        /// Category filter, e.g. "Software" or "AI Pack"
        #[arg(long)]
        category: Option<String>,
        /// Sort order for the listing
        #[arg(long, value_enum, default_value_t = SortArg::Default)]
        sort: SortArg,
        /// 1-based page to display
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Run the agent cluster and metrics simulation
    Agents {
        /// Number of ticks to apply before printing the dashboard
        #[arg(long, default_value_t = 5)]
        ticks: u32,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Run on the configured timers until interrupted
        #[arg(long)]
        live: bool,
    },
    /// Chat with the Nexus assistant
    Chat {
        /// Disable web-search grounding
        #[arg(long)]
        no_search: bool,
        /// Enable the extended-reasoning budget
        #[arg(long)]
        thinking: bool,
        /// Sampling creativity in [0, 1]
        #[arg(long)]
        creativity: Option<f32>,
    },
    /// Generate a deep-dive analysis article for a topic or directory resource
    Article {
        /// Resource id/name, or any free-form topic
        topic: String,
        /// Context line for free-form topics
        #[arg(long)]
        context: Option<String>,
    },
    /// Compose an agent-authored blog post
    Post {
        /// Topic to write about
        topic: String,
        /// Agent persona name
        #[arg(long, default_value = "Alpha-1")]
        agent: String,
        /// Agent persona role
        #[arg(long, default_value = "Content Strategist")]
        role: String,
    },
}

/// Sort order accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// Keep insertion order
    Default,
    /// Price low to high
    PriceAsc,
    /// Price high to low
    PriceDesc,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => SortMode::InsertionOrder,
            SortArg::PriceAsc => SortMode::PriceAscending,
            SortArg::PriceDesc => SortMode::PriceDescending,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    let config =
        NexusConfig::load_or_default(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Command::Catalog {
            category,
            sort,
            page,
        } => run_catalog(&config, category, sort, page),
        Command::Agents { ticks, seed, live } => run_agents(&config, ticks, seed, live).await,
        Command::Chat {
            no_search,
            thinking,
            creativity,
        } => run_chat(config, no_search, thinking, creativity).await,
        Command::Article { topic, context } => run_article(&config, &topic, context).await,
        Command::Post { topic, agent, role } => run_post(&config, &topic, &agent, &role).await,
    }
}

fn catalog_rng(config: &NexusConfig) -> StdRng {
    match config.catalog.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn require_api_key() -> anyhow::Result<String> {
    match NexusConfig::api_key() {
        Some(key) => Ok(key),
        None => bail!("{API_KEY_ENV} is required"),
    }
}

fn run_catalog(
    config: &NexusConfig,
    category: Option<String>,
    sort: SortArg,
    page: usize,
) -> anyhow::Result<()> {
    let mut rng = catalog_rng(config);
    info!(
        "building catalog (generated_count={}, seeded={})",
        config.catalog.generated_count,
        config.catalog.seed.is_some()
    );
    let catalog = Arc::new(Catalog::generate(config.catalog.generated_count, &mut rng));
    let mut view = CatalogView::new(catalog, config.catalog.page_size);

    if let Some(name) = category {
        let category: Category = name.parse()?;
        view.set_filter(CategoryFilter::Category(category));
    }
    view.set_sort(sort.into());
    if page != 1 && !view.set_page(page) {
        bail!("page {page} out of range (pages={})", view.page_count());
    }

    println!(
        "{} results — page {}/{}",
        view.result_count(),
        view.page(),
        view.page_count()
    );
    for product in view.page_items() {
        println!(
            "{:>9}  {:<10} {}",
            product.price,
            product.category.as_str(),
            product.title
        );
    }
    Ok(())
}

async fn run_agents(
    config: &NexusConfig,
    ticks: u32,
    seed: Option<u64>,
    live: bool,
) -> anyhow::Result<()> {
    let simulation = Simulation::new();

    if live {
        let agent_tick = Duration::from_millis(config.simulation.agent_tick_ms);
        let handle = simulation.start(
            agent_tick,
            Duration::from_millis(config.simulation.metrics_tick_ms),
            seed,
        );
        println!("simulation running; press Ctrl-C to stop");
        let mut interval = tokio::time::interval(agent_tick);
        loop {
            tokio::select! {
                _ = interval.tick() => print_dashboard(&simulation),
                result = tokio::signal::ctrl_c() => {
                    result.context("failed to listen for Ctrl-C")?;
                    break;
                }
            }
        }
        handle.shutdown();
    } else {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        for _ in 0..ticks {
            simulation.tick_once(&mut rng);
        }
        print_dashboard(&simulation);
    }
    Ok(())
}

fn print_dashboard(simulation: &Simulation) {
    let state = simulation.snapshot();
    println!("--- agent cluster ---");
    for agent in &state.agents {
        println!(
            "{:<10} {:<20} [{}]",
            agent.name,
            agent.role,
            agent.status.as_str()
        );
        for entry in &agent.activity_log {
            println!("    {entry}");
        }
    }
    let metrics = &state.metrics;
    println!(
        "tokens={} processes={} load={:.1}% latency={}ms",
        metrics.total_tokens,
        metrics.active_processes,
        metrics.system_load,
        metrics.network_latency
    );
}

async fn run_chat(
    config: NexusConfig,
    no_search: bool,
    thinking: bool,
    creativity: Option<f32>,
) -> anyhow::Result<()> {
    let api_key = require_api_key()?;

    let mut settings = config.chat.clone();
    if no_search {
        settings.enable_search = false;
    }
    if thinking {
        settings.enable_thinking = true;
    }
    if let Some(creativity) = creativity {
        settings.creativity = creativity.clamp(0.0, 1.0);
    }

    let mut rng = catalog_rng(&config);
    let catalog = Catalog::generate(config.catalog.generated_count, &mut rng);
    let agents = seed_agents();
    let context = ecosystem_context(
        catalog
            .products()
            .iter()
            .map(|product| (product.title.as_str(), product.price.as_str())),
        agents
            .iter()
            .map(|agent| (agent.name.as_str(), agent.role.as_str(), agent.status.as_str())),
        resources().len(),
    );
    let client = GeminiClient::new(api_key, config.model.name.clone())
        .with_system_instruction(master_system_prompt(&context));

    let history_path = config
        .history
        .resolve_path()
        .context("could not resolve a history file path")?;
    let store = Arc::new(JsonHistoryStore::new(history_path)?);
    let mut session = ChatSession::new(store, Arc::new(client), settings);
    session.load();

    for message in session.messages() {
        println!("[{}] {}", message.role.as_str(), message.text);
    }
    println!("(/reset clears history, /quit exits)");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                println!("(history cleared)");
                continue;
            }
            input => match session.send(input).await {
                SendOutcome::Completed { message_id } => {
                    if let Some(message) =
                        session.messages().into_iter().find(|m| m.id == message_id)
                    {
                        println!("{}", message.text);
                        for source in &message.sources {
                            println!("  [{}] {}", source.title, source.uri);
                        }
                    }
                }
                SendOutcome::Failed => {
                    if let Some(message) = session.messages().last() {
                        println!("{}", message.text);
                    }
                }
                SendOutcome::Ignored => {}
            },
        }
    }
    Ok(())
}

async fn run_article(
    config: &NexusConfig,
    topic: &str,
    context: Option<String>,
) -> anyhow::Result<()> {
    let Some(topic) = normalize_query(topic) else {
        return Ok(());
    };
    let api_key = require_api_key()?;
    let client = GeminiClient::new(api_key, config.model.name.clone());

    let (name, description) = match find_resource(topic) {
        Some(resource) => (resource.name.to_string(), resource.description.to_string()),
        None => (
            topic.to_string(),
            context.unwrap_or_else(|| CUSTOM_ANALYSIS_CONTEXT.to_string()),
        ),
    };

    let mut slot = ArticleSlot::new();
    let ticket = slot.begin(&name);
    let result = fetch_article(&client, &name, &description).await;
    slot.complete(ticket, result);

    println!("# {}\n\n{}", slot.title(), slot.content());
    Ok(())
}

async fn run_post(
    config: &NexusConfig,
    topic: &str,
    agent: &str,
    role: &str,
) -> anyhow::Result<()> {
    let api_key = require_api_key()?;
    let client = GeminiClient::new(api_key, config.model.name.clone());

    let mut store = BlogStore::new();
    let post = compose_agent_post(&client, topic, agent, role).await;
    store.upsert(post);

    let post = &store.posts()[0];
    println!("# {}", post.title);
    println!("{} — {} — {}", post.author, post.date, post.read_time);
    println!("\n{}", post.content);
    Ok(())
}
