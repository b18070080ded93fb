// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the Utau lyrics API.
//!
//! One call, one request: [`UtauClient::fetch_lyrics`] validates the
//! requested lyrics types, performs a GET against
//! `{base}/v{version}/lyrics`, validates the JSON payload against the wire
//! schema, and classifies the outcome. A 404 paired with a failure envelope
//! is not an error; it comes back as `Ok(None)`.
//!
//! ```no_run
//! # use utau_client::{LyricsType, UtauClient};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = UtauClient::new("api-key", "my-player/1.0")?;
//! if let Some(data) = client
//!     .fetch_lyrics("flashlights by the forest powfu", &[LyricsType::Raw])
//!     .await?
//! {
//!     println!("{:?}", data.extract(LyricsType::Raw));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ApiVersion, UtauClient, UtauClientBuilder, UTAU_API_BASE};
pub use error::{BuildError, Result, UtauError};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
pub use utau_schema as schema;
pub use utau_schema::{Lyric, Lyrics, LyricsData, LyricsType, Track, WordLyric};
