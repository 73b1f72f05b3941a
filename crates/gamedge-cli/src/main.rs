//! gamedge - browse the IGDB game catalog from the terminal.
//!
//! This is the entry point for the `gamedge` binary. Lists are served from the
//! local store; pass `--refresh` to fetch the page from IGDB (or GameSpot, for
//! news) first.

mod app;
mod opener;
mod render;

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use futures::StreamExt;
use gamedge_data::{ArticleId, GameCategory, GameId, Pagination};
use gamedge_gamespot::GamespotConfig;
use gamedge_igdb::IgdbConfig;

use app::App;
use opener::SystemUrlOpener;

/// gamedge - browse the IGDB game catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "gamedge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory of the local game store.
    #[arg(long, env = "GAMEDGE_DATA_DIR", default_value = ".gamedge")]
    data_dir: PathBuf,

    /// Twitch application client ID used for IGDB.
    #[arg(long, env = "IGDB_CLIENT_ID", default_value = "")]
    client_id: String,

    /// Twitch application client secret.
    #[arg(long, env = "IGDB_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    client_secret: String,

    /// IGDB API base URL.
    #[arg(long, env = "IGDB_BASE_URL", default_value = IgdbConfig::DEFAULT_BASE_URL)]
    igdb_url: String,

    /// Twitch identity base URL.
    #[arg(long, env = "TWITCH_BASE_URL", default_value = IgdbConfig::DEFAULT_TWITCH_BASE_URL)]
    twitch_url: String,

    /// GameSpot API key used for news.
    #[arg(long, env = "GAMESPOT_API_KEY", default_value = "", hide_env_values = true)]
    gamespot_key: String,

    /// GameSpot API base URL.
    #[arg(long, env = "GAMESPOT_BASE_URL", default_value = GamespotConfig::DEFAULT_BASE_URL)]
    gamespot_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "GAMEDGE_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,

    /// Enable debug logging.
    #[arg(long, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn igdb_config(&self) -> IgdbConfig {
        IgdbConfig {
            base_url: self.igdb_url.clone(),
            twitch_base_url: self.twitch_url.clone(),
            request_timeout_seconds: self.request_timeout,
            ..IgdbConfig::new(&self.client_id, &self.client_secret)
        }
    }

    fn gamespot_config(&self) -> GamespotConfig {
        GamespotConfig {
            base_url: self.gamespot_url.clone(),
            request_timeout_seconds: self.request_timeout,
            ..GamespotConfig::new(&self.gamespot_key)
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Popular games released in the last year.
    Popular(PageArgs),
    /// Games released in the last 30 days.
    Recent(PageArgs),
    /// Games with an upcoming release date.
    ComingSoon(PageArgs),
    /// Upcoming games with the most hype.
    Anticipated(PageArgs),
    /// Search games by name.
    Search {
        /// Text to look for.
        query: String,
        #[command(flatten)]
        page: PageSelection,
        /// Only search the local store.
        #[arg(long)]
        offline: bool,
    },
    /// Show a stored game.
    Game {
        /// IGDB game ID.
        id: GameId,
    },
    /// Games similar to a stored game.
    Similar {
        /// IGDB game ID.
        id: GameId,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Print a category every time it changes, until Ctrl-C.
    Watch {
        /// Category to follow.
        category: CategoryArg,
        #[command(flatten)]
        page: PageSelection,
    },
    /// Open the official website of a stored game.
    Open {
        /// IGDB game ID.
        id: GameId,
    },
    /// Latest gaming news.
    News(PageArgs),
    /// Open a stored news article in the browser.
    Read {
        /// GameSpot article ID.
        id: ArticleId,
    },
}

/// Offset and limit.
#[derive(ClapArgs, Debug, Clone, Copy)]
struct PageSelection {
    /// Number of items to skip.
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Number of items to show.
    #[arg(long, default_value_t = Pagination::DEFAULT_LIMIT)]
    limit: u32,
}

impl From<PageSelection> for Pagination {
    fn from(page: PageSelection) -> Self {
        Self::new(page.offset, page.limit)
    }
}

#[derive(ClapArgs, Debug, Clone, Copy)]
struct PageArgs {
    #[command(flatten)]
    page: PageSelection,

    /// Fetch the page from the remote API before showing it.
    #[arg(long)]
    refresh: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryArg {
    Popular,
    Recent,
    ComingSoon,
    Anticipated,
}

impl From<CategoryArg> for GameCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Popular => Self::Popular,
            CategoryArg::Recent => Self::RecentlyReleased,
            CategoryArg::ComingSoon => Self::ComingSoon,
            CategoryArg::Anticipated => Self::MostAnticipated,
        }
    }
}

/// Initialize logging to stderr. `RUST_LOG` overrides the defaults.
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "info,gamedge_core=debug,gamedge_data=debug,gamedge_store=debug,\
         gamedge_igdb=debug,gamedge_gamespot=debug,gamedge_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let app = App::open(&args.data_dir, args.igdb_config(), args.gamespot_config())?;

    match args.command {
        Command::Popular(page) => list(&app, GameCategory::Popular, page).await,
        Command::Recent(page) => list(&app, GameCategory::RecentlyReleased, page).await,
        Command::ComingSoon(page) => list(&app, GameCategory::ComingSoon, page).await,
        Command::Anticipated(page) => list(&app, GameCategory::MostAnticipated, page).await,
        Command::Search {
            query,
            page,
            offline,
        } => {
            let pagination = page.into();
            let games = app.search(&query, pagination, offline).await?;
            println!("{}", render::game_list(&games));
            print_next_page_hint(games.len(), pagination);
            Ok(())
        }
        Command::Game { id } => {
            let game = app.game(id).await?;
            print!("{}", render::game_details(&game));
            Ok(())
        }
        Command::Similar { id, page } => {
            let games = app.similar(id, page.page.into(), page.refresh).await?;
            println!("{}", render::game_list(&games));
            Ok(())
        }
        Command::Watch { category, page } => watch(&app, category.into(), page.into()).await,
        Command::Open { id } => {
            match app.official_website(id).await? {
                Some(url) => println!("{}", opener::open_or_print(&SystemUrlOpener, &url)),
                None => println!("Game {id} has no official website."),
            }
            Ok(())
        }
        Command::News(page) => news(&app, page).await,
        Command::Read { id } => {
            let article = app.article(id).await?;
            println!(
                "{}",
                opener::open_or_print(&SystemUrlOpener, &article.site_detail_url)
            );
            Ok(())
        }
    }
}

/// Show a page of a category, refreshing it first if asked to.
async fn list(app: &App, category: GameCategory, args: PageArgs) -> anyhow::Result<()> {
    let pagination = args.page.into();

    if args.refresh {
        match app.refresh(category, pagination).await {
            Ok(count) => tracing::info!(%category, count, "Refreshed"),
            // Cached games are still worth showing
            Err(e) => eprintln!("{}", render::refresh_failure(&e)),
        }
    }

    let games = app.games(category, pagination).await?;
    println!("{}", render::game_list(&games));
    print_next_page_hint(games.len(), pagination);
    Ok(())
}

/// Show a page of news, refreshing it first if asked to.
async fn news(app: &App, args: PageArgs) -> anyhow::Result<()> {
    let pagination = args.page.into();

    if args.refresh {
        match app.refresh_news(pagination).await {
            Ok(count) => tracing::info!(count, "Refreshed news"),
            Err(e) => eprintln!("{}", render::refresh_failure(&e)),
        }
    }

    let articles = app.news(pagination).await?;
    println!("{}", render::article_list(&articles));
    print_next_page_hint(articles.len(), pagination);
    Ok(())
}

fn print_next_page_hint(shown: usize, pagination: Pagination) {
    if let Some(hint) = render::next_page_hint(shown, pagination) {
        eprintln!("{hint}");
    }
}

/// Print every emission of a category until Ctrl-C.
async fn watch(app: &App, category: GameCategory, pagination: Pagination) -> anyhow::Result<()> {
    let mut games = app.watch(category, pagination);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            next = games.next() => {
                let Some(page) = next else { break };
                println!("--- {category} ---");
                println!("{}", render::game_list(&page?));
            }
        }
    }

    Ok(())
}
