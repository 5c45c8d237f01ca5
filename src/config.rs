//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults suitable for running
//! the check-in desk on a venue laptop.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level check-in service configuration.
///
/// Loaded once at startup via [`CheckinConfig::from_env`].
#[derive(Debug, Clone)]
pub struct CheckinConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5000`).
    pub listen_addr: SocketAddr,

    /// Path of the roster CSV file.
    pub data_file: PathBuf,

    /// Directory the entry QR image is written into (and served from).
    pub qr_dir: PathBuf,

    /// URL encoded into the printed QR code. Must point at `/scan_qr` on
    /// whatever host attendees can reach the service under.
    pub scan_url: String,

    /// Minimum edge length of the QR image in pixels.
    pub qr_min_size_px: u32,

    /// Payment / badge-pickup line shown to newly registered walk-ins.
    pub payment_notice: String,
}

impl CheckinConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()?;

        let data_file = PathBuf::from(
            std::env::var("DATA_FILE").unwrap_or_else(|_| "participants.csv".to_string()),
        );

        let qr_dir =
            PathBuf::from(std::env::var("QR_DIR").unwrap_or_else(|_| "qrcodes".to_string()));

        let scan_url = std::env::var("SCAN_URL")
            .unwrap_or_else(|_| "http://localhost:5000/scan_qr".to_string());

        let qr_min_size_px = parse_env("QR_MIN_SIZE_PX", 360);

        let payment_notice = std::env::var("PAYMENT_NOTICE").unwrap_or_else(|_| {
            "Payment is collected at the registration desk before badges are issued.".to_string()
        });

        Ok(Self {
            listen_addr,
            data_file,
            qr_dir,
            scan_url,
            qr_min_size_px,
            payment_notice,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
