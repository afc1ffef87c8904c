use std::time::Duration;

use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::IndexedRandom;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::fallback::fallback_fact;
use crate::config::Config;
use crate::models::{DayMonth, FeedEvent, FeedResponse};
use crate::utils::terminal::sanitize_fact;

const USER_AGENT: &str = concat!("on-this-day/", env!("CARGO_PKG_VERSION"));

/// Source of "on this day" events (allows stubbing the network in tests)
pub trait FeedSource: Send + Sync {
    fn events(&self, date: DayMonth) -> Result<Vec<FeedEvent>>;
}

/// Wikimedia REST feed client
pub struct WikimediaFeed {
    client: Client,
    base_url: String,
    language: String,
}

impl WikimediaFeed {
    pub fn new(base_url: &str, language: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, &config.language, Duration::from_secs(config.timeout_secs))
    }

    /// Feed URL for a date; month and day are not zero padded
    pub fn events_url(&self, date: DayMonth) -> String {
        format!(
            "{}/feed/v1/wikipedia/{}/onthisday/events/{}/{}",
            self.base_url,
            self.language,
            date.month(),
            date.day()
        )
    }
}

impl FeedSource for WikimediaFeed {
    fn events(&self, date: DayMonth) -> Result<Vec<FeedEvent>> {
        let url = self.events_url(date);
        debug!(%url, "requesting on-this-day feed");

        let response =
            self.client.get(&url).send().with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Feed returned {} for {}", status, url);
        }

        let body: FeedResponse = response.json().context("Failed to parse feed response")?;
        Ok(body.events)
    }
}

/// Source that never has events, so every lookup uses the fallback table
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFeed;

impl FeedSource for OfflineFeed {
    fn events(&self, _date: DayMonth) -> Result<Vec<FeedEvent>> {
        Ok(Vec::new())
    }
}

/// `In <year>: <text>` with the text sanitized for terminal display
pub fn format_event(event: &FeedEvent) -> String {
    format!("In {}: {}", event.year, sanitize_fact(&event.text))
}

/// Look up one fact for `date`
///
/// Picks a random event from the feed. Any failure, or an empty event list, yields
/// [`fallback_fact`] instead; this function never reports an error.
pub fn fetch_fact<R: Rng + ?Sized>(source: &dyn FeedSource, date: DayMonth, rng: &mut R) -> String {
    match source.events(date) {
        Ok(events) => match events.choose(rng) {
            Some(event) => format_event(event),
            None => {
                debug!(%date, "feed returned no events, using fallback");
                fallback_fact(date, rng)
            }
        },
        Err(e) => {
            warn!(%date, error = %format!("{:#}", e), "feed lookup failed, using fallback");
            fallback_fact(date, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    struct StubFeed(Vec<FeedEvent>);

    impl FeedSource for StubFeed {
        fn events(&self, _date: DayMonth) -> Result<Vec<FeedEvent>> {
            Ok(self.0.clone())
        }
    }

    struct FailingFeed;

    impl FeedSource for FailingFeed {
        fn events(&self, _date: DayMonth) -> Result<Vec<FeedEvent>> {
            bail!("network unreachable")
        }
    }

    fn date(s: &str) -> DayMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_event_is_formatted() {
        let feed = StubFeed(vec![FeedEvent::new(1969, "Apollo 11 lands on the Moon.")]);
        let mut rng = StdRng::seed_from_u64(0);

        let fact = fetch_fact(&feed, date("20/07"), &mut rng);
        assert_eq!(fact, "In 1969: Apollo 11 lands on the Moon.");
    }

    #[test]
    fn test_picks_one_of_the_events() {
        let events = vec![
            FeedEvent::new(1815, "Battle of Waterloo."),
            FeedEvent::new(1940, "Appeal of 18 June."),
            FeedEvent::new(1983, "Sally Ride goes to space."),
        ];
        let expected: Vec<String> = events.iter().map(format_event).collect();
        let feed = StubFeed(events);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let fact = fetch_fact(&feed, date("18/06"), &mut rng);
            assert!(expected.contains(&fact), "{}", fact);
        }
    }

    #[test]
    fn test_failure_returns_exact_fallback() {
        for d in ["25/12", "03/03", "18/06"] {
            let mut fetch_rng = StdRng::seed_from_u64(11);
            let mut fallback_rng = StdRng::seed_from_u64(11);

            let fact = fetch_fact(&FailingFeed, date(d), &mut fetch_rng);
            assert_eq!(fact, fallback_fact(date(d), &mut fallback_rng));
        }
    }

    #[test]
    fn test_empty_events_returns_exact_fallback() {
        let mut fetch_rng = StdRng::seed_from_u64(23);
        let mut fallback_rng = StdRng::seed_from_u64(23);

        let fact = fetch_fact(&StubFeed(vec![]), date("09/08"), &mut fetch_rng);
        assert_eq!(fact, fallback_fact(date("09/08"), &mut fallback_rng));
    }

    #[test]
    fn test_offline_feed_uses_curated_fact() {
        let mut rng = StdRng::seed_from_u64(0);
        let fact = fetch_fact(&OfflineFeed, date("25/12"), &mut rng);
        assert!(fact.starts_with("December 25 is Christmas"));
    }

    #[test]
    fn test_event_text_is_sanitized() {
        let event = FeedEvent::new(2000, "\x1b[31mY2K\x1b[0m\npasses");
        assert_eq!(format_event(&event), "In 2000: Y2K passes");
    }

    #[test]
    fn test_events_url() {
        let feed =
            WikimediaFeed::new("https://api.wikimedia.org/", "en", Duration::from_secs(1)).unwrap();
        assert_eq!(
            feed.events_url(date("07/09")),
            "https://api.wikimedia.org/feed/v1/wikipedia/en/onthisday/events/9/7"
        );
    }

    #[test]
    fn test_unreachable_feed_falls_back() {
        // Nothing listens on port 9 of localhost in the test environment
        let feed =
            WikimediaFeed::new("http://127.0.0.1:9", "en", Duration::from_secs(2)).unwrap();
        assert!(feed.events(date("25/12")).is_err());

        let mut rng = StdRng::seed_from_u64(0);
        let fact = fetch_fact(&feed, date("25/12"), &mut rng);
        assert!(fact.starts_with("December 25 is Christmas"));
    }

    /// Serve the same canned HTTP response to `connections` requests on a local port,
    /// returning the base URL
    fn serve_canned(status_line: &'static str, body: &'static str, connections: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        thread::spawn(move || {
            for stream in listener.incoming().take(connections) {
                let mut stream = stream.unwrap();
                // GET requests carry no body; read up to the end of the headers
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        base_url
    }

    fn local_feed(base_url: &str) -> WikimediaFeed {
        WikimediaFeed::new(base_url, "en", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_server_error_status_falls_back() {
        let feed = local_feed(&serve_canned("500 Internal Server Error", "{}", 2));

        let err = feed.events(date("03/03")).unwrap_err();
        assert!(err.to_string().contains("500"), "{}", err);

        let fact = fetch_fact(&feed, date("03/03"), &mut StdRng::seed_from_u64(17));
        assert_eq!(fact, fallback_fact(date("03/03"), &mut StdRng::seed_from_u64(17)));
    }

    #[test]
    fn test_successful_response_is_formatted() {
        let body = r#"{"events":[{"year":"1845","text":"Florida is admitted as the 27th state."}]}"#;
        let feed = local_feed(&serve_canned("200 OK", body, 2));

        let events = feed.events(date("03/03")).unwrap();
        assert_eq!(events, vec![FeedEvent::new(1845, "Florida is admitted as the 27th state.")]);

        let fact = fetch_fact(&feed, date("03/03"), &mut StdRng::seed_from_u64(0));
        assert_eq!(fact, "In 1845: Florida is admitted as the 27th state.");
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let feed = local_feed(&serve_canned("200 OK", "<html>not json</html>", 2));

        let err = feed.events(date("03/03")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse feed response"));

        let fact = fetch_fact(&feed, date("03/03"), &mut StdRng::seed_from_u64(29));
        assert_eq!(fact, fallback_fact(date("03/03"), &mut StdRng::seed_from_u64(29)));
    }
}
