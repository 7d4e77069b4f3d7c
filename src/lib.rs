//! Spotwall turns Spotify track links into "now playing" wallpapers.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! spotwall = "0.1.0"
//! ```
//!
//! By default, Spotwall uses asynchronous programming with `async` and `await`.
//!
//! ## Getting Started
//!
//! A wallpaper is made in three steps:
//!
//! 1. the link is validated with [`link::extract_track_id`] and its metadata
//!    fetched through the track proxy with [`client::Client`];
//! 2. the card is rendered by the host from [`model::card::Card`];
//! 3. the rendered card is captured at 4K by a [`generate::Rasterizer`],
//!    scaled with [`planner::plan_scale`].
//!
//! [`session::Session`] ties these together for an interactive form.
//!
//! ## The track proxy
//!
//! Spotify credentials never reach the client. The proxy side
//! ([`proxy::Proxy`]) exchanges them for a token and looks the track up.
//! It reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` from the
//! environment, see [`config::Config`].
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! spotwall = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```no_run
//! use spotwall::client::Client;
//! use spotwall::config::Config;
//! use spotwall::model::device::DeviceProfile;
//! use spotwall::planner::plan_scale;
//! use dotenv::dotenv;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     // SPOTWALL_PROXY_URL points at the deployed track proxy.
//!     let config = Config::from_env();
//!     let client = Client::from_config(&config);
//!
//!     let track = client
//!         .fetch_track("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC")
//!         .await;
//!     println!("{:?}", track.unwrap());
//!
//!     // A 300x500 card captured for a phone.
//!     let plan = plan_scale(DeviceProfile::Mobile, 300.0, 500.0).unwrap();
//!     println!("{:?}", plan.output_pixels());
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod generate;
pub mod link;
pub mod model;
pub mod normalize;
pub mod planner;
pub mod proxy;
pub mod session;
pub mod spotify;
