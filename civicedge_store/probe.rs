use civicedge_app::connectivity::ConnectivityProbe;

use crate::client::join_url;

/// Liveness probe against the report store. Any HTTP response at all
/// counts as online; only transport failures mean the network is gone.
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpProbe {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: join_url(base_url, "api/reports"),
        }
    }
}

#[async_trait::async_trait]
impl ConnectivityProbe for HttpProbe {
    async fn check(&self) -> bool {
        match self.client.head(&self.url).send().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("connectivity probe failed: {e}");
                false
            }
        }
    }
}
