use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use navidrome_api::album_list::DEFAULT_LIST_SIZE;
use navidrome_api::types::{Album, AlbumListType, Artist, SearchResult, Song, WebLinkKind};
use navidrome_api::urls::DEFAULT_COVER_SIZE;
use navidrome_api::{NavidromeClient, RecentSearches, ServerConfig, format_duration};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Album grid size used by the recently-added and most-played views.
const GRID_SIZE: &str = "40";
/// Cover size for album grid entries.
const GRID_COVER_SIZE: u32 = 300;
const LOGIN_HINT: &str =
    "could not load server configuration; run `navidrome login <url> <username> -p <password>`";

#[derive(Parser)]
#[command(
    name = "navidrome",
    version,
    about = "Search and browse a Navidrome / Subsonic music server"
)]
struct Cli {
    /// Debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search artists, albums, and songs (no query: show recent searches)
    Search {
        /// Search text
        query: Vec<String>,
        /// Do not record this query in recent searches
        #[arg(long)]
        no_history: bool,
    },
    /// Recently added albums
    Recent {
        /// Number of albums
        #[arg(short, long, default_value = GRID_SIZE)]
        size: u32,
    },
    /// Most played albums
    MostPlayed {
        /// Number of albums
        #[arg(short, long, default_value = GRID_SIZE)]
        size: u32,
    },
    /// Any album listing supported by the server
    Albums {
        /// Listing type
        r#type: ListKind,
        /// Page size
        #[arg(short, long, default_value_t = DEFAULT_LIST_SIZE)]
        size: u32,
        /// Page offset
        #[arg(short, long, default_value = "0")]
        offset: u32,
    },
    /// Check that the server is reachable and credentials work
    Ping,
    /// Save server URL and credentials
    Login {
        /// Server URL, e.g. `https://music.example.com`
        #[arg(required_unless_present = "check")]
        url: Option<String>,
        /// Username
        #[arg(required_unless_present = "check")]
        username: Option<String>,
        /// Password
        #[arg(short, long, required_unless_present = "check")]
        password: Option<String>,
        /// Check the saved configuration instead
        #[arg(long)]
        check: bool,
    },
    /// Remove saved server configuration
    Logout,
    /// Show or edit recent searches
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Print an authenticated cover-art URL
    CoverUrl {
        /// Cover-art id (from an artist, album, or song)
        cover_art_id: String,
        /// Image size in pixels
        #[arg(short, long, default_value_t = DEFAULT_COVER_SIZE)]
        size: u32,
    },
    /// Print the web UI link for an artist, album, or song
    Open { kind: LinkKind, id: String },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recent searches
    List,
    /// Remove one entry
    Remove { query: String },
    /// Remove every entry
    Clear,
}

#[derive(Clone, ValueEnum)]
enum ListKind {
    Newest,
    Frequent,
    Recent,
    Random,
    Highest,
    Starred,
    ByName,
    ByArtist,
}

#[derive(Clone, ValueEnum)]
enum LinkKind {
    Artist,
    Album,
    Song,
}

impl From<ListKind> for AlbumListType {
    fn from(k: ListKind) -> Self {
        match k {
            ListKind::Newest => Self::Newest,
            ListKind::Frequent => Self::Frequent,
            ListKind::Recent => Self::Recent,
            ListKind::Random => Self::Random,
            ListKind::Highest => Self::Highest,
            ListKind::Starred => Self::Starred,
            ListKind::ByName => Self::AlphabeticalByName,
            ListKind::ByArtist => Self::AlphabeticalByArtist,
        }
    }
}

impl From<LinkKind> for WebLinkKind {
    fn from(k: LinkKind) -> Self {
        match k {
            LinkKind::Artist => Self::Artist,
            LinkKind::Album => Self::Album,
            LinkKind::Song => Self::Song,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Search { query, no_history } => cmd_search(&query.join(" "), !no_history),
        Command::Recent { size } => {
            let client = connect()?;
            let albums = client
                .recently_added(size)
                .context("failed to load recently added albums")?;
            print_album_grid(&client, &albums);
            Ok(())
        }
        Command::MostPlayed { size } => {
            let client = connect()?;
            let albums = client
                .most_played(size)
                .context("failed to load most played albums")?;
            print_album_grid(&client, &albums);
            Ok(())
        }
        Command::Albums {
            r#type,
            size,
            offset,
        } => {
            let client = connect()?;
            let albums = client
                .album_list(r#type.into(), size, offset)
                .context("failed to load albums")?;
            print_album_grid(&client, &albums);
            Ok(())
        }
        Command::Ping => cmd_ping(),
        Command::Login {
            url,
            username,
            password,
            check,
        } => cmd_login(url, username, password, check),
        Command::Logout => cmd_logout(),
        Command::History { action } => cmd_history(action.unwrap_or(HistoryAction::List)),
        Command::CoverUrl { cover_art_id, size } => {
            println!("{}", connect()?.cover_art_url(&cover_art_id, size));
            Ok(())
        }
        Command::Open { kind, id } => {
            println!("{}", connect()?.web_url(kind.into(), &id));
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn connect() -> Result<NavidromeClient> {
    NavidromeClient::from_saved().context(LOGIN_HINT)
}

// ── search ──

fn cmd_search(query: &str, record: bool) -> Result<()> {
    if query.trim().is_empty() {
        return print_recent_searches();
    }

    let client = connect()?;
    let result = client.search(query).context("search failed")?;

    if result.is_empty() {
        println!("No results found for \"{}\"", query.trim());
        return Ok(());
    }
    print_search_result(&client, &result);

    if record {
        if let Err(e) = RecentSearches::load().and_then(|mut r| r.add(query)) {
            warn!(error = %e, "could not record recent search");
        }
    }
    Ok(())
}

fn print_search_result(client: &NavidromeClient, result: &SearchResult) {
    if !result.artists.is_empty() {
        println!("Artists ({})", result.artists.len());
        for a in &result.artists {
            let line = with_details(&a.name, &artist_details(a));
            println!("  [{}] {line}{}", a.id, star(a.is_starred()));
            println!("        {}", client.web_url(WebLinkKind::Artist, &a.id));
        }
        println!();
    }
    if !result.albums.is_empty() {
        println!("Albums ({})", result.albums.len());
        for a in &result.albums {
            let line = with_details(&a.name, &album_details(a));
            println!("  [{}] {line}{}", a.id, star(a.is_starred()));
            println!("        {}", client.web_url(WebLinkKind::Album, &a.id));
        }
        println!();
    }
    if !result.songs.is_empty() {
        println!("Songs ({})", result.songs.len());
        for s in &result.songs {
            let line = with_details(&s.title, &song_details(s));
            println!("  [{}] {line}{}", s.id, star(s.is_starred()));
            println!("        {}", client.song_web_url(s));
        }
    }
}

fn artist_details(a: &Artist) -> Vec<String> {
    match a.album_count {
        Some(1) => vec!["1 album".to_owned()],
        Some(n) if n > 0 => vec![format!("{n} albums")],
        _ => Vec::new(),
    }
}

fn album_details(a: &Album) -> Vec<String> {
    let mut details = Vec::new();
    if let Some(artist) = &a.artist {
        details.push(artist.clone());
    }
    if let Some(year) = a.year.filter(|y| *y > 0) {
        details.push(year.to_string());
    }
    if let Some(count) = a.song_count.filter(|c| *c > 0) {
        details.push(format!("{count} tracks"));
    }
    details
}

fn song_details(s: &Song) -> Vec<String> {
    let mut details = Vec::new();
    details.extend(s.artist.clone());
    details.extend(s.album.clone());
    let duration = format_duration(s.duration);
    if !duration.is_empty() {
        details.push(duration);
    }
    details
}

fn with_details(title: &str, details: &[String]) -> String {
    if details.is_empty() {
        title.to_owned()
    } else {
        format!("{title} · {}", details.join(" · "))
    }
}

fn star(starred: bool) -> &'static str {
    if starred { " ★" } else { "" }
}

fn print_album_grid(client: &NavidromeClient, albums: &[Album]) {
    if albums.is_empty() {
        println!("No albums found. Your library appears to be empty.");
        return;
    }
    for a in albums {
        let artist = a.artist.as_deref().unwrap_or_default();
        println!("  [{}] {} - {}", a.id, artist, a.name);
        println!("        {}", client.web_url(WebLinkKind::Album, &a.id));
        if let Some(cover) = &a.cover_art {
            println!("        {}", client.cover_art_url(cover, GRID_COVER_SIZE));
        }
    }
}

// ── ping ──

fn cmd_ping() -> Result<()> {
    let client = connect()?;
    if client.ping() {
        println!("{} is reachable.", client.base_url());
        Ok(())
    } else {
        let url = client.base_url();
        eprintln!("{url} did not respond (check URL and credentials).");
        std::process::exit(1);
    }
}

// ── login / logout ──

fn cmd_login(
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    check: bool,
) -> Result<()> {
    if check {
        let config = ServerConfig::resolve()?;
        if !config.is_complete() {
            println!("Not configured.");
            return Ok(());
        }
        let client = NavidromeClient::new(config)?;
        if client.ping() {
            println!(
                "Connected to {} as {}",
                client.base_url(),
                client.config().username
            );
        } else {
            println!("Config exists but {} did not respond.", client.base_url());
        }
        return Ok(());
    }

    let config = ServerConfig::new(
        url.context("server URL required")?,
        username.context("username required")?,
        password.context("password required")?,
    );
    config.save()?;
    println!("Config saved to {}", ServerConfig::path()?.display());
    Ok(())
}

fn cmd_logout() -> Result<()> {
    ServerConfig::clear()?;
    println!("Config cleared.");
    Ok(())
}

// ── history ──

fn cmd_history(action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => print_recent_searches(),
        HistoryAction::Remove { query } => {
            RecentSearches::load()?.remove(&query)?;
            println!("Removed \"{query}\".");
            Ok(())
        }
        HistoryAction::Clear => {
            RecentSearches::load()?.clear()?;
            println!("Recent searches cleared.");
            Ok(())
        }
    }
}

fn print_recent_searches() -> Result<()> {
    let recent = RecentSearches::load()?;
    if recent.is_empty() {
        println!("No recent searches. Type a query to search for artists, albums, and songs.");
        return Ok(());
    }
    println!("Recent Searches ({})", recent.entries().len());
    for q in recent.entries() {
        println!("  {q}");
    }
    Ok(())
}
