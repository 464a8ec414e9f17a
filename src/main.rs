use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlrec::{cli, config, error, types::PkceToken};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// Build recommendations from relevant playlists
    Recommend(RecommendOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Mark playlists with this exact name as relevant; can be repeated
    #[clap(short, long = "playlist")]
    pub playlists: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Exact, case-sensitive name of a relevant playlist; can be repeated
    #[clap(short, long = "playlist")]
    pub playlists: Vec<String>,

    /// File with one relevant playlist name per line, matched verbatim
    #[clap(long)]
    pub playlists_file: Option<PathBuf>,

    /// Save all recommendations to a new playlist
    #[clap(long)]
    pub create_playlist: bool,

    /// Directory the CSV files are written to
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Upload the CSV files to this Google Cloud Storage bucket
    #[clap(long)]
    pub bucket: Option<String>,

    /// Look up artists and audio features again for every track
    #[clap(long)]
    pub no_cache: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::list_playlists(opt.playlists).await,
        Command::Recommend(opt) => {
            cli::recommend(cli::RecommendOptions {
                playlists: opt.playlists,
                playlists_file: opt.playlists_file,
                create_playlist: opt.create_playlist,
                output_dir: opt.output_dir,
                bucket: opt.bucket,
                no_cache: opt.no_cache,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
