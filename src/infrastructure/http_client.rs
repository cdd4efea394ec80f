use std::time::Duration;

use reqwest::Client;

use crate::presentation::config::HttpSettings;

/// One client shared by every adapter of a run.
pub fn build_http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}
