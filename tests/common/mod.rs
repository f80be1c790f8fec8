//! Shared helpers for integration tests.
//!
//! Builds an [`App`] wired to a wiremock server through the real reqwest
//! client, and captures tracing output so tests can count log events.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use recipe_browser::adapters::ReqwestHttpClient;
use recipe_browser::api::RecipeApi;
use recipe_browser::app::{App, AppMessage};
use recipe_browser::screens::{ResponseOrder, Screen};
use recipe_browser::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tracing::subscriber::DefaultGuard;
use wiremock::MockServer;

/// API key every test app is configured with.
pub const TEST_API_KEY: &str = "test-key-0123";

/// App talking to `server` over HTTP.
pub fn app_for(server: &MockServer, order: ResponseOrder) -> App {
    app_for_url(&server.uri(), order)
}

/// App talking to `base_url` over HTTP.
pub fn app_for_url(base_url: &str, order: ResponseOrder) -> App {
    let api = RecipeApi::new(
        Arc::new(ReqwestHttpClient::new()),
        base_url,
        TEST_API_KEY,
    );
    App::new(api, order)
}

/// Base URL of a local port nothing listens on, so every request is refused.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Wait for the next request result, or `None` after `wait`.
pub async fn next_message(app: &mut App, wait: Duration) -> Option<AppMessage> {
    let rx = app.message_rx.as_mut()?;
    tokio::time::timeout(wait, rx.recv()).await.ok().flatten()
}

/// Receive and apply `count` results, panicking if they do not arrive.
pub async fn pump(app: &mut App, count: usize) {
    for _ in 0..count {
        let message = next_message(app, Duration::from_secs(5))
            .await
            .expect("request result did not arrive");
        app.handle_message(message);
    }
}

/// Wait until the current screen has no requests in flight.
pub async fn settle(app: &App) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while app.has_pending_requests() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "requests still pending after 5s"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Render the app and return the frame as text.
pub fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Ids of the search results currently shown, in order.
pub fn result_ids(app: &App) -> Vec<u64> {
    match &app.navigator.current().screen {
        Screen::Home(home) => home.results().iter().map(|r| r.id).collect(),
        Screen::Recipe(_) => panic!("search screen is not current"),
    }
}

/// Collects formatted log output from the thread-local subscriber.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Install a capturing subscriber for the current thread. Keep the guard
    /// alive for the duration of the test.
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let buffer = capture.buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || CaptureWriter(buffer.clone()))
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}
