use bookmarks::api::{BookmarksApi, CmdMessage, MessageLevel};
use bookmarks::browser::SystemBrowser;
use bookmarks::clipboard::SystemClipboard;
use bookmarks::commands;
use bookmarks::config::AppConfig;
use bookmarks::error::Result;
use bookmarks::store::fs::FileStore;
use bookmarks::store::BookmarkStore;
use clap::Parser;
use colored::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::new(
        cli.bookmarks.clone(),
        cli.debug,
        cli.should_create_bookmarks_file(),
    );
    init_logging(&config);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(command: Commands, config: &AppConfig) -> Result<()> {
    debug!(?config, "resolved configuration");

    // `open` never consults the store, so it must not depend on resolving its path.
    if let Commands::Open { urls } = &command {
        return handle_open(urls);
    }

    let mut store = FileStore::new(config.bookmarks_path()?);
    if config.create_bookmarks_file && command.uses_store() {
        store.initialize()?;
    }
    let mut api = BookmarksApi::new(store);

    match command {
        Commands::Add { urls } => handle_add(&mut api, &urls),
        Commands::AddFromClipboard => handle_add_from_clipboard(&mut api),
        Commands::List => handle_list(&api),
        Commands::Open { urls } => handle_open(&urls),
        Commands::Init => handle_init(&mut api),
        Commands::Path => handle_path(&api),
    }
}

fn handle_add(api: &mut BookmarksApi<FileStore>, urls: &[String]) -> Result<()> {
    let result = api.add_bookmarks(urls)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_from_clipboard(api: &mut BookmarksApi<FileStore>) -> Result<()> {
    let result = api.add_from_clipboard(&SystemClipboard)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &BookmarksApi<FileStore>) -> Result<()> {
    let result = api.list_bookmarks()?;
    for bookmark in &result.listed_bookmarks {
        println!("{}", bookmark.url);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(urls: &[String]) -> Result<()> {
    let result = commands::open::run(&SystemBrowser, urls);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(api: &mut BookmarksApi<FileStore>) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(api: &BookmarksApi<FileStore>) -> Result<()> {
    let result = api.store_path();
    if let Some(path) = &result.store_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
