use std::sync::Arc;

use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind},
};
use tracing::{debug, info};

use crate::api::{ChatBackend, HttpBackend};
use crate::chat::{ChatSession, ExchangeOutcome};
use crate::config::WidgetConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::health::{HealthMonitor, LoadingFlag};
use crate::ui::chat_screen::ChatScreen;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Heading shown above the transcript
    pub title: String,
    /// Event handler.
    pub events: EventHandler,
    /// Single-flight chat state and transcript
    pub session: ChatSession,
    /// Terminal view the session renders into
    pub screen: ChatScreen,
    /// Loading indicator shared with the health monitor
    pub loading: LoadingFlag,
    pub backend: Arc<dyn ChatBackend>,
    pub health: Arc<HealthMonitor>,
}

impl App {
    /// Constructs a new instance of [`App`] talking to the configured backend.
    pub fn new(config: &WidgetConfig) -> Result<Self> {
        let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(config)?);
        info!("Chat backend at {}", config.base_url);
        Ok(Self::with_backend(config.title.clone(), backend, EventHandler::new()))
    }

    /// Wire the components around an existing backend and event source.
    pub fn with_backend(title: String, backend: Arc<dyn ChatBackend>, events: EventHandler) -> Self {
        let loading = LoadingFlag::new();
        let health = Arc::new(HealthMonitor::new(backend.clone(), Some(loading.clone())));
        let session = ChatSession::new(health.clone());

        Self {
            running: true,
            title,
            events,
            session,
            screen: ChatScreen::new(),
            loading,
            backend,
            health,
        }
    }

    /// Probe the backend in the background; the result is only logged.
    pub fn start_health_check(&self) -> tokio::task::JoinHandle<()> {
        let health = self.health.clone();
        tokio::spawn(async move {
            health.check_health().await;
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.start_health_check();
        terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;

        while self.running {
            let event = self.events.next().await?;
            if self.handle_event(event) && self.running {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
            }
        }
        Ok(())
    }

    /// Apply one event. Returns whether the screen needs a redraw.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Tick => {
                if self.loading.is_visible() {
                    self.screen.tick();
                    return true;
                }
                false
            }
            Event::Crossterm(CrosstermEvent::Key(key_event)) => {
                self.handle_key_events(key_event);
                true
            }
            Event::Crossterm(CrosstermEvent::Resize(_, _)) => true,
            Event::Crossterm(_) => false,
            Event::App(app_event) => {
                match app_event {
                    AppEvent::Quit => self.quit(),
                    AppEvent::ChatSubmit => self.submit_chat_message(),
                    AppEvent::ChatReply(outcome) => self.apply_chat_reply(outcome),
                }
                true
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        if let Some(app_event) = self.screen.handle_key(key_event) {
            self.events.send(app_event);
        }
    }

    /// Start an exchange if the session accepts the pending input. The
    /// request runs on its own task and reports back as [`AppEvent::ChatReply`].
    pub fn submit_chat_message(&mut self) {
        let Some(pending) = self.session.begin_exchange(&mut self.screen) else {
            return;
        };

        let backend = self.backend.clone();
        let sender = self.events.sender();
        tokio::spawn(async move {
            let outcome = backend.chat(&pending.message).await;
            sender.send(AppEvent::ChatReply(outcome));
        });
    }

    pub fn apply_chat_reply(&mut self, outcome: ExchangeOutcome) {
        debug!("Chat reply received (ok: {})", outcome.is_ok());
        self.session.complete_exchange(outcome, &mut self.screen);
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
