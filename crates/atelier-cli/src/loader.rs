use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use atelier_types::{Catalog, Error, Result};

/// Where the catalog document comes from. The kiosk performs exactly one
/// load per session.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(PathBuf),
    Http(String),
}

impl DataSource {
    pub fn parse(location: &str) -> DataSource {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Http(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Http(url) => url.clone(),
        }
    }
}

/// Load the catalog, failing closed on I/O errors, non-success HTTP
/// status, or parse failure.
pub fn load(source: &DataSource) -> Result<Catalog> {
    match source {
        DataSource::File(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        DataSource::Http(url) => {
            let response =
                reqwest::blocking::get(url).map_err(|e| Error::Fetch(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status(status.as_u16()));
            }
            let content = response.text().map_err(|e| Error::Fetch(e.to_string()))?;
            Ok(serde_json::from_str(&content)?)
        }
    }
}

/// Outcome of the background load, delivered over the kiosk's channel.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Catalog),
    Failed(String),
}

/// Fetch on a background thread. There is no cancellation: if the kiosk
/// quits while the fetch is pending, the send fails against a dropped
/// receiver and the result is discarded.
pub fn spawn_load(source: DataSource, tx: Sender<LoadEvent>) {
    thread::spawn(move || {
        let event = match load(&source) {
            Ok(catalog) => LoadEvent::Loaded(catalog),
            Err(e) => LoadEvent::Failed(e.to_string()),
        };
        let _ = tx.send(event);
    });
}
