//! Poster artwork worker
//!
//! Walks a card's fallback chain off the UI thread: fetch the tier's URL,
//! decode it, and hand back a render protocol. Every attempt is reported,
//! success or failure, so the model can advance its state machine. Updates
//! carry the grid generation they were spawned for; the handler drops
//! anything from an abandoned grid.

use anyhow::{Context, Result};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc;

use crate::logic::poster::{self, PosterTier};

// Posters are ~300x450, anything bigger gets downscaled before the
// protocol is built
const MAX_POSTER_WIDTH: u32 = 1000;
const MAX_POSTER_HEIGHT: u32 = 1500;

/// Outcome of one tier attempt for one card
pub enum PosterUpdate {
    /// The tier's artwork decoded, ready to render
    Ready {
        generation: u64,
        index: usize,
        tier: PosterTier,
        protocol: StatefulProtocol,
    },

    /// The tier's fetch or decode failed, with the raw reason for the log
    TierFailed {
        generation: u64,
        index: usize,
        tier: PosterTier,
        detail: String,
    },
}

/// Spawns one fetch task per card and reports back over a channel
pub struct PosterLoader {
    http: reqwest::Client,
    picker: Option<Picker>,
    update_tx: mpsc::UnboundedSender<PosterUpdate>,
}

impl PosterLoader {
    /// `picker` is None when the terminal offers no usable image protocol
    /// or previews are configured off; the loader then never fetches.
    pub fn new(picker: Option<Picker>, update_tx: mpsc::UnboundedSender<PosterUpdate>) -> Self {
        Self {
            http: reqwest::Client::new(),
            picker,
            update_tx,
        }
    }

    pub fn enabled(&self) -> bool {
        self.picker.is_some()
    }

    /// Walk the fallback chain for one card until a tier loads or the
    /// chain runs out
    pub fn spawn_fetch(&self, generation: u64, index: usize, name: String, provided_url: String) {
        let Some(picker) = self.picker.clone() else {
            return;
        };
        let http = self.http.clone();
        let update_tx = self.update_tx.clone();

        tokio::spawn(async move {
            let mut tier = Some(poster::first_tier(&provided_url));
            while let Some(current) = tier {
                let url = poster::tier_url(current, &name, &provided_url);
                match load_poster(&http, &picker, &url).await {
                    Ok(protocol) => {
                        let _ = update_tx.send(PosterUpdate::Ready {
                            generation,
                            index,
                            tier: current,
                            protocol,
                        });
                        return;
                    }
                    Err(e) => {
                        let _ = update_tx.send(PosterUpdate::TierFailed {
                            generation,
                            index,
                            tier: current,
                            detail: format!("{:#}", e),
                        });
                        tier = current.next();
                    }
                }
            }
        });
    }
}

async fn load_poster(
    http: &reqwest::Client,
    picker: &Picker,
    url: &str,
) -> Result<StatefulProtocol> {
    let response = http
        .get(url)
        .send()
        .await
        .context("Failed to fetch poster")?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow::anyhow!("poster fetch returned {}", status));
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read poster bytes")?;

    // Decode on the blocking pool, image decoding is CPU bound
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .context("Poster decode task failed")?;
    let img = decoded.context("Failed to decode poster")?;

    let img = if img.width() > MAX_POSTER_WIDTH || img.height() > MAX_POSTER_HEIGHT {
        img.resize(
            MAX_POSTER_WIDTH,
            MAX_POSTER_HEIGHT,
            image::imageops::FilterType::CatmullRom,
        )
    } else {
        img
    };

    Ok(picker.new_resize_protocol(img))
}

/// Channel pair the loader reports through
pub fn poster_channel() -> (
    mpsc::UnboundedSender<PosterUpdate>,
    mpsc::UnboundedReceiver<PosterUpdate>,
) {
    mpsc::unbounded_channel()
}
