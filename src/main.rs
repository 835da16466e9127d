use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use resort_site::adapters::{
    FirestoreContentStore, HttpEmbedProvider, InMemoryContentStore, ReqwestHttpClient,
};
use resort_site::app::{App, AppMessage, MapEvent};
use resort_site::cli::{command_output, parse_args, CliCommand};
use resort_site::config::SiteConfig;
use resort_site::logging::init_logging;
use resort_site::terminal::{setup_panic_hook, TerminalManager};
use resort_site::traits::{ContentStore, EmbedProvider, HttpClient};
use resort_site::ui;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(output) = command_output(&command) {
        println!("{}", output);
        return Ok(());
    }
    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let mut config = SiteConfig::from_env()?;
    if options.offline {
        config = config.offline();
    }
    init_logging(&config)?;
    info!(offline = config.is_offline(), "starting resort site");

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
        let store = content_store(&config, http.clone());
        let embed_provider: Arc<dyn EmbedProvider> = Arc::new(HttpEmbedProvider::new(http));

        let mut app = App::new(config, store, embed_provider);
        app.load_content();

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();
        result
    })
}

fn content_store(config: &SiteConfig, http: Arc<dyn HttpClient>) -> Arc<dyn ContentStore> {
    match &config.firestore_project_id {
        Some(project) => {
            let mut store = FirestoreContentStore::new(http, project.clone())
                .with_base_url(config.firestore_base_url.clone());
            if let Some(key) = &config.firestore_api_key {
                store = store.with_api_key(key.clone());
            }
            Arc::new(store)
        }
        None => Arc::new(InMemoryContentStore::with_sample_content()),
    }
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut embed_rx: Option<mpsc::UnboundedReceiver<MapEvent>> = app.embed_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }

            message = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match message {
                    Some(message) => app.handle_message(message),
                    None => message_rx = None,
                }
            }

            event = async {
                match &mut embed_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match event {
                    Some(event) => app.handle_embed_event(event),
                    None => embed_rx = None,
                }
            }
        }

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}
