
use mockito::{Server, ServerGuard};

use crate::feed::FootballDataClient;

pub(super) const TEST_API_KEY: &str = "test-api-key";

pub(super) async fn setup(season: Option<u16>) -> (ServerGuard, FootballDataClient) {
    let server = Server::new_async().await;
    let client =
        FootballDataClient::new(reqwest::Client::new(), server.url(), TEST_API_KEY, season);

    (server, client)
}
