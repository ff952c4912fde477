use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use gateway::GatewayConfig;
use membership::{Member, MemberStore};
use service_client::{MemberClient, Movie, RecommendationClient};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tracing::info;

/// Metflix - membership registry and recommendation gateway
#[derive(Parser)]
#[command(name = "metflix")]
#[command(about = "Run the Metflix services or talk to them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the membership registry
    Membership {
        /// Port to listen on
        #[arg(long, default_value = "4444")]
        port: u16,
    },

    /// Serve the UI gateway
    Ui {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        #[command(flatten)]
        settings: GatewayArgs,
    },

    /// Look up a member in the registry
    Lookup {
        /// Username to look up
        #[arg(long)]
        user: String,

        #[arg(long, env = "MEMBER_API", default_value = gateway::config::DEFAULT_MEMBER_API)]
        member_api: String,
    },

    /// Register (or overwrite) a member
    Register {
        /// Username to register
        #[arg(long)]
        user: String,

        /// Optional age
        #[arg(long)]
        age: Option<i32>,

        #[arg(long, env = "MEMBER_API", default_value = gateway::config::DEFAULT_MEMBER_API)]
        member_api: String,
    },

    /// Fetch recommendations through the timeout-and-fallback path
    Recommend {
        /// Username to fetch recommendations for
        #[arg(long)]
        username: String,

        #[arg(long, env = "RECOMMENDATION_API", default_value = gateway::config::DEFAULT_RECOMMENDATION_API)]
        recommendation_api: String,

        /// Give up after this many milliseconds
        #[arg(long, env = "RECOMMENDATION_TIMEOUT_MS", default_value = "5000")]
        timeout_ms: u64,
    },
}

/// Gateway settings, each overridable from the environment
#[derive(Args)]
struct GatewayArgs {
    /// Base URL of the membership registry
    #[arg(long, env = "MEMBER_API", default_value = gateway::config::DEFAULT_MEMBER_API)]
    member_api: String,

    /// Base URL of the recommendation service
    #[arg(long, env = "RECOMMENDATION_API", default_value = gateway::config::DEFAULT_RECOMMENDATION_API)]
    recommendation_api: String,

    /// Welcome message on the home view
    #[arg(long, env = "MESSAGE", default_value = gateway::config::DEFAULT_MESSAGE)]
    message: String,

    /// Bound on a recommendation fetch
    #[arg(long, env = "RECOMMENDATION_TIMEOUT_MS", default_value = "5000")]
    recommendation_timeout_ms: u64,

    /// Bound on the member lookup made for each authentication
    #[arg(long, env = "MEMBER_LOOKUP_TIMEOUT_MS", default_value = "5000")]
    member_lookup_timeout_ms: u64,
}

impl From<GatewayArgs> for GatewayConfig {
    fn from(args: GatewayArgs) -> Self {
        GatewayConfig {
            member_api: args.member_api,
            recommendation_api: args.recommendation_api,
            message: args.message,
            recommendation_timeout: Duration::from_millis(args.recommendation_timeout_ms),
            member_lookup_timeout: Duration::from_millis(args.member_lookup_timeout_ms),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Membership { port } => handle_membership(port).await?,
        Commands::Ui { port, settings } => handle_ui(port, settings.into()).await?,
        Commands::Lookup { user, member_api } => handle_lookup(&member_api, &user).await?,
        Commands::Register {
            user,
            age,
            member_api,
        } => handle_register(&member_api, Member::new(user, age)).await?,
        Commands::Recommend {
            username,
            recommendation_api,
            timeout_ms,
        } => {
            handle_recommend(
                &recommendation_api,
                &username,
                Duration::from_millis(timeout_ms),
            )
            .await?
        }
    }

    Ok(())
}

/// Handle the 'membership' command
async fn handle_membership(port: u16) -> Result<()> {
    let store = Arc::new(MemberStore::with_seed_members());
    info!("Member store seeded with {} members", store.len());

    serve("membership", port, membership::api::router(store)).await
}

/// Handle the 'ui' command
async fn handle_ui(port: u16, config: GatewayConfig) -> Result<()> {
    info!(
        "Gateway using member.api={} recommendation.api={}",
        config.member_api, config.recommendation_api
    );
    let app = gateway::build_router(&config).context("Failed to build gateway")?;

    serve("ui", port, app).await
}

async fn serve(name: &str, port: u16, app: axum::Router) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("{} listening on http://{}", name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("{} stopped", name);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Handle the 'lookup' command
async fn handle_lookup(member_api: &str, user: &str) -> Result<()> {
    let client = MemberClient::new(member_api, service_client::DEFAULT_MEMBER_LOOKUP_TIMEOUT)?;

    match client.find_member(user).await? {
        Some(member) => print_member(&member),
        None => println!("{} {} is not a member", "✗".red(), user.bold()),
    }
    Ok(())
}

/// Handle the 'register' command
async fn handle_register(member_api: &str, member: Member) -> Result<()> {
    let client = MemberClient::new(member_api, service_client::DEFAULT_MEMBER_LOOKUP_TIMEOUT)?;

    let echoed = client
        .register(&member)
        .await
        .with_context(|| format!("Failed to register {}", member.user))?;
    print!("{} Registered ", "✓".green());
    print_member(&echoed);
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(recommendation_api: &str, username: &str, timeout: Duration) -> Result<()> {
    let client = RecommendationClient::new(recommendation_api, timeout)?;

    let start = Instant::now();
    let movies = client.get_recommendations(username).await;
    print_recommendations(username, &movies);
    println!("{}", format!("({:.2?})", start.elapsed()).dimmed());
    Ok(())
}

fn print_member(member: &Member) {
    let age = member
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("{} (age: {})", member.user.bold().blue(), age);
}

/// Helper function to format and print recommendations
fn print_recommendations(username: &str, movies: &[Movie]) {
    println!("{}", format!("Recommendations for {}:", username).bold().blue());
    if movies.is_empty() {
        println!("  {}", "nothing to recommend right now".yellow());
        return;
    }
    for (i, movie) in movies.iter().enumerate() {
        let title = match &movie.title {
            Some(title) => title.normal(),
            None => "(untitled)".dimmed(),
        };
        println!("{}. {}", (i + 1).to_string().green(), title);
    }
}
