use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Most titles considered per room
pub const MAX_TITLES: usize = 50;

/// Source of short text titles for a room's underlying content (e.g. playlist track titles).
/// Lookups are best effort: callers treat any error as "no titles".
#[cfg_attr(test, mockall::automock)]
pub trait ContentTitleLookup: Send + Sync {
    fn fetch_titles(&self, content_id: &str) -> Result<Vec<String>>;
}

/// Fans title lookups out to one thread per content id and collects whatever
/// arrives before the deadline
#[derive(Clone)]
pub struct TitleEnricher {
    lookup: Arc<dyn ContentTitleLookup>,
    timeout: Duration,
}

impl TitleEnricher {
    pub fn new(lookup: Arc<dyn ContentTitleLookup>, timeout: Duration) -> Self {
        Self { lookup, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Lowercased titles per content id. Failed, empty and late lookups are left out.
    pub fn fetch_all(&self, content_ids: &[&str]) -> HashMap<String, Vec<String>> {
        let mut pending: Vec<String> = Vec::new();
        for id in content_ids {
            if !id.is_empty() && !pending.iter().any(|p| p == id) {
                pending.push(id.to_string());
            }
        }

        let mut titles = HashMap::new();
        if pending.is_empty() {
            return titles;
        }

        let (sender, receiver) = mpsc::channel();
        for id in &pending {
            let sender = sender.clone();
            let lookup = Arc::clone(&self.lookup);
            let id = id.clone();
            std::thread::spawn(move || {
                let result = lookup.fetch_titles(&id);
                // Receiver is gone once the deadline passed
                let _ = sender.send((id, result));
            });
        }
        drop(sender);

        let deadline = Instant::now() + self.timeout;
        let mut outstanding = pending.len();
        while outstanding > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match receiver.recv_timeout(remaining) {
                Ok((id, Ok(found))) => {
                    outstanding -= 1;
                    let lowered: Vec<String> = found
                        .into_iter()
                        .take(MAX_TITLES)
                        .map(|title| title.to_lowercase())
                        .collect();
                    log::debug!("Fetched {} titles for {}", lowered.len(), id);
                    titles.insert(id, lowered);
                }
                Ok((id, Err(e))) => {
                    outstanding -= 1;
                    log::warn!("Could not fetch titles for {}: {}", id, e);
                }
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!(
                        "Title lookup timed out after {:?} with {} lookups outstanding",
                        self.timeout,
                        outstanding
                    );
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        titles
    }
}
