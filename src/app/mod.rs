//! Application state for the terminal site.
//!
//! - [`App`] - screens, listings, booking form and the contact map
//! - [`Screen`] / [`InputMode`] - what is shown and where keys go
//! - [`AppMessage`] - results from background content fetches
//! - [`MapEvent`] - contact map signals, tagged with their mount

mod booking_form;
mod content;
mod keys;
mod messages;
mod types;

pub use booking_form::{BookingForm, FormField};
pub use content::fetch_listing;
pub use messages::{AppMessage, MapEvent};
pub use types::{InputMode, LoadStatus, Screen, StatusKind, StatusLine};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogControls};
use crate::config::SiteConfig;
use crate::embed::SupervisedEmbed;
use crate::error::SiteError;
use crate::models::{Amenity, Offer, Villa};
use crate::traits::{ContentStore, EmbedProvider};

/// Opens an external URL; swapped out in tests.
pub type LinkOpener = fn(&str) -> std::io::Result<()>;

fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that(url)
}

/// Main application state.
pub struct App {
    pub config: SiteConfig,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub should_quit: bool,
    /// Set when visible state changed since the last draw.
    pub needs_redraw: bool,

    pub offers: Catalog<Offer>,
    pub amenities: Catalog<Amenity>,
    pub villas: Catalog<Villa>,
    pub offers_status: LoadStatus,
    pub amenities_status: LoadStatus,
    pub villas_status: LoadStatus,
    /// Highlighted row on the current page of a listing.
    pub selected: usize,

    /// Villa shown on the detail and booking pages.
    pub detail_villa: Option<String>,
    pub booking: Option<BookingForm>,
    /// Contact page map; present only while the contact page is shown.
    pub map: Option<SupervisedEmbed>,
    /// Bumped on every map mount.
    map_mount: u64,
    pub status: Option<StatusLine>,

    store: Arc<dyn ContentStore>,
    embed_provider: Arc<dyn EmbedProvider>,
    link_opener: LinkOpener,

    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub embed_tx: mpsc::UnboundedSender<MapEvent>,
    pub embed_rx: Option<mpsc::UnboundedReceiver<MapEvent>>,
}

impl App {
    pub fn new(
        config: SiteConfig,
        store: Arc<dyn ContentStore>,
        embed_provider: Arc<dyn EmbedProvider>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (embed_tx, embed_rx) = mpsc::unbounded_channel();
        let per_page = config.items_per_page;
        let max_visible = config.max_visible_pages;

        Self {
            screen: Screen::default(),
            input_mode: InputMode::default(),
            should_quit: false,
            needs_redraw: true,
            offers: Catalog::new(per_page).with_max_visible_pages(max_visible),
            amenities: Catalog::new(per_page).with_max_visible_pages(max_visible),
            villas: Catalog::new(per_page).with_max_visible_pages(max_visible),
            offers_status: LoadStatus::default(),
            amenities_status: LoadStatus::default(),
            villas_status: LoadStatus::default(),
            selected: 0,
            detail_villa: None,
            booking: None,
            map: None,
            map_mount: 0,
            status: None,
            store,
            embed_provider,
            link_opener: open_in_browser,
            message_tx,
            message_rx: Some(message_rx),
            embed_tx,
            embed_rx: Some(embed_rx),
            config,
        }
    }

    /// Replace how external links are opened.
    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.link_opener = opener;
        self
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Controls for the listing on screen, if any.
    pub fn current_catalog(&self) -> Option<&dyn CatalogControls> {
        match self.screen {
            Screen::Offers => Some(&self.offers),
            Screen::Amenities => Some(&self.amenities),
            Screen::Villas => Some(&self.villas),
            _ => None,
        }
    }

    fn current_catalog_mut(&mut self) -> Option<&mut dyn CatalogControls> {
        match self.screen {
            Screen::Offers => Some(&mut self.offers),
            Screen::Amenities => Some(&mut self.amenities),
            Screen::Villas => Some(&mut self.villas),
            _ => None,
        }
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        debug!(from = ?self.screen, to = ?screen, "navigate");
        if self.screen == Screen::Contact {
            self.unmount_map();
        }
        self.screen = screen;
        self.input_mode = InputMode::Normal;
        self.selected = 0;
        if screen == Screen::Contact {
            self.ensure_map();
        }
        self.mark_dirty();
    }

    /// Leave a sub-page for its parent.
    pub fn go_back(&mut self) {
        match self.screen {
            Screen::Booking => self.navigate_to(Screen::VillaDetail),
            Screen::VillaDetail => {
                self.navigate_to(Screen::Villas);
                self.restore_villa_selection();
            }
            _ => {}
        }
    }

    pub fn next_page(&mut self) {
        if let Some(catalog) = self.current_catalog_mut() {
            if catalog.next_page() {
                self.selected = 0;
            }
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(catalog) = self.current_catalog_mut() {
            if catalog.previous_page() {
                self.selected = 0;
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.current_catalog().map_or(0, |c| c.visible_len());
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_search_query(&mut self, query: String) {
        if let Some(catalog) = self.current_catalog_mut() {
            catalog.set_query(query);
        }
        self.selected = 0;
    }

    pub fn cycle_sort(&mut self) {
        if let Some(catalog) = self.current_catalog_mut() {
            let sort = catalog.cycle_sort();
            self.status = Some(StatusLine::info(format!("Sorted by {}", sort.label())));
        }
        self.selected = 0;
    }

    /// The villa on the detail/booking pages.
    pub fn detail_villa(&self) -> Option<&Villa> {
        self.detail_villa
            .as_deref()
            .and_then(|id| self.villas.find(id))
    }

    /// Open the detail page for the highlighted villa.
    pub fn open_selected_villa(&mut self) {
        if self.screen != Screen::Villas {
            return;
        }
        let Some(villa) = self.villas.visible_at(self.selected) else {
            return;
        };
        self.detail_villa = Some(villa.id.clone());
        self.navigate_to(Screen::VillaDetail);
    }

    /// Open a fresh booking form for the detail villa.
    pub fn start_booking(&mut self) {
        let Some(id) = self.detail_villa.clone() else {
            return;
        };
        if self.booking.as_ref().map(|form| form.villa_id.as_str()) != Some(id.as_str()) {
            self.booking = Some(BookingForm::new(id));
        }
        self.navigate_to(Screen::Booking);
    }

    pub fn submit_booking(&mut self) {
        let Some(villa) = self.detail_villa().cloned() else {
            return;
        };
        let Some(form) = self.booking.as_mut() else {
            return;
        };
        self.status = Some(match form.submit(&villa) {
            Ok(summary) => StatusLine::info(format!(
                "Request received for {} ({} nights)",
                summary.villa_name, summary.quote.nights
            )),
            Err(err) => StatusLine::error(SiteError::from(err).user_message()),
        });
        self.mark_dirty();
    }

    /// Refetch every collection.
    pub fn reload_content(&mut self) {
        info!("reloading content");
        self.status = Some(StatusLine::info("Refreshing content..."));
        self.load_content();
    }

    fn ensure_map(&mut self) {
        if self.map.is_some() {
            return;
        }
        self.map_mount += 1;
        let mount = self.map_mount;
        info!(mount, url = %self.config.map_embed_url, "mounting map embed");

        // The forwarder ends once the map and its tasks drop their senders.
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let out = self.embed_tx.clone();
        tokio::spawn(async move {
            while let Some(event) = events_rx.recv().await {
                if out.send(MapEvent { mount, event }).is_err() {
                    break;
                }
            }
        });

        self.map = Some(SupervisedEmbed::mount(
            self.embed_provider.clone(),
            self.config.map_embed_url.clone(),
            self.config.map_link_url.clone(),
            self.config.embed_config(),
            events_tx,
        ));
    }

    /// Tear down the map, aborting its load and any pending retry.
    fn unmount_map(&mut self) {
        if self.map.take().is_some() {
            debug!(mount = self.map_mount, "map unmounted");
        }
    }

    /// Feed a load result or timer firing to the map.
    ///
    /// Events from an earlier mount are dropped.
    pub fn handle_embed_event(&mut self, event: MapEvent) {
        if event.mount != self.map_mount {
            debug!(mount = event.mount, current = self.map_mount, "stale map event");
            return;
        }
        if let Some(map) = self.map.as_mut() {
            map.handle(event.event);
            self.mark_dirty();
        }
    }

    /// Manual retry from the contact page.
    pub fn retry_map(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.retry();
            self.status = Some(StatusLine::info("Reloading map..."));
            self.mark_dirty();
        }
    }

    /// Open the fallback map link, once it is offered.
    pub fn open_map_link(&mut self) {
        let Some(url) = self.map.as_ref().and_then(|map| map.view().fallback_url) else {
            return;
        };
        self.status = Some(match (self.link_opener)(&url) {
            Ok(()) => StatusLine::info(format!("Opened {}", url)),
            Err(err) => {
                warn!(error = %err, "could not open map link");
                StatusLine::error(format!("Could not open browser. Visit {}", url))
            }
        });
        self.mark_dirty();
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        self.mark_dirty();
        match message {
            AppMessage::OffersLoaded(items) => {
                self.offers.set_items(items);
                self.offers_status = LoadStatus::Ready;
            }
            AppMessage::AmenitiesLoaded(items) => {
                self.amenities.set_items(items);
                self.amenities_status = LoadStatus::Ready;
            }
            AppMessage::VillasLoaded(items) => {
                self.villas.set_items(items);
                self.villas_status = LoadStatus::Ready;
                if self.detail_villa().is_none()
                    && matches!(self.screen, Screen::VillaDetail | Screen::Booking)
                {
                    self.detail_villa = None;
                    self.booking = None;
                    self.navigate_to(Screen::Villas);
                }
            }
            AppMessage::ContentFailed { collection, error } => {
                let error = SiteError::from(error);
                warn!(
                    collection,
                    category = error.category().as_str(),
                    retryable = error.is_retryable(),
                    "showing content error"
                );
                let message = error.user_message();
                let status = LoadStatus::Failed(message.clone());
                match collection {
                    "offers" => self.offers_status = status,
                    "amenities" => self.amenities_status = status,
                    "villas" => self.villas_status = status,
                    _ => {}
                }
                self.status = Some(StatusLine::error(message));
            }
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.current_catalog().map_or(0, |c| c.visible_len());
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn restore_villa_selection(&mut self) {
        let Some(id) = self.detail_villa.as_deref() else {
            return;
        };
        let position = self.villas.visible().iter().position(|villa| villa.id == id);
        if let Some(position) = position {
            self.selected = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedEmbedProvider;
    use crate::adapters::InMemoryContentStore;
    use crate::embed::{EmbedEvent, EmbedPhase};
    use crate::error::ContentError;

    fn app() -> App {
        let config = SiteConfig::default().with_items_per_page(2);
        App::new(
            config,
            Arc::new(InMemoryContentStore::with_sample_content()),
            Arc::new(ScriptedEmbedProvider::new()),
        )
    }

    async fn loaded_app() -> App {
        let mut app = app();
        let store = InMemoryContentStore::with_sample_content();
        let villas = fetch_listing::<Villa>(&store).await.unwrap();
        let offers = fetch_listing::<Offer>(&store).await.unwrap();
        app.handle_message(AppMessage::VillasLoaded(villas));
        app.handle_message(AppMessage::OffersLoaded(offers));
        app
    }

    #[tokio::test]
    async fn test_messages_fill_catalogs() {
        let app = loaded_app().await;
        assert_eq!(app.villas_status, LoadStatus::Ready);
        assert_eq!(app.villas.items().len(), 5);
        assert_eq!(app.offers.total_pages(), 4);
        assert_eq!(app.amenities_status, LoadStatus::Loading);
    }

    #[tokio::test]
    async fn test_paging_resets_selection() {
        let mut app = loaded_app().await;
        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_next();
        assert_eq!(app.selected, 1);

        app.next_page();
        assert_eq!(app.offers.current_page(), 2);
        assert_eq!(app.selected, 0);

        app.previous_page();
        app.previous_page();
        assert_eq!(app.offers.current_page(), 1);
    }

    #[tokio::test]
    async fn test_villa_detail_and_back() {
        let mut app = loaded_app().await;
        app.navigate_to(Screen::Villas);
        app.select_next();
        app.open_selected_villa();
        assert_eq!(app.screen, Screen::VillaDetail);
        let id = app.detail_villa().map(|v| v.id.clone()).unwrap();

        app.start_booking();
        assert_eq!(app.screen, Screen::Booking);
        assert_eq!(app.booking.as_ref().unwrap().villa_id, id);

        app.go_back();
        app.go_back();
        assert_eq!(app.screen, Screen::Villas);
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_content_failure_sets_status() {
        let mut app = app();
        app.handle_message(AppMessage::ContentFailed {
            collection: "amenities",
            error: ContentError::Transport {
                message: "offline".to_string(),
            },
        });
        assert!(matches!(app.amenities_status, LoadStatus::Failed(_)));
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[tokio::test]
    async fn test_map_lives_with_contact_page() {
        let mut app = app();
        assert!(app.map.is_none());
        app.navigate_to(Screen::Contact);
        assert!(app.map.is_some());
        app.navigate_to(Screen::Offers);
        assert!(app.map.is_none());
        app.navigate_to(Screen::Contact);
        assert!(app.map.is_some());
        assert_eq!(app.map_mount, 2);
    }

    #[tokio::test]
    async fn test_events_from_earlier_mount_ignored() {
        let mut app = app();
        app.navigate_to(Screen::Contact);
        app.navigate_to(Screen::Offers);
        app.navigate_to(Screen::Contact);

        app.handle_embed_event(MapEvent {
            mount: 1,
            event: EmbedEvent::LoadSucceeded { instance_key: 0 },
        });
        assert_eq!(app.map.as_ref().unwrap().phase(), EmbedPhase::Loading);

        app.handle_embed_event(MapEvent {
            mount: 2,
            event: EmbedEvent::LoadSucceeded { instance_key: 0 },
        });
        assert_eq!(app.map.as_ref().unwrap().phase(), EmbedPhase::Loaded);
    }

    #[tokio::test]
    async fn test_map_link_ignored_before_exhaustion() {
        fn refuse(_: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("no browser"))
        }

        let mut app = app().with_link_opener(refuse);
        app.navigate_to(Screen::Contact);
        app.open_map_link();
        assert!(app.status.is_none());
    }
}
