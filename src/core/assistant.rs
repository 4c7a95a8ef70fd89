use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::catalog::Drama;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One entry in the assistant transcript. Append-only; the app never edits
/// or removes messages once pushed.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: u64, role: ChatRole, text: String) -> Self {
        Self {
            id,
            role,
            text,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: ChatRole,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct AssistantRequest<'a> {
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct AssistantResponse {
    reply: String,
}

/// Client for the recommendation assistant. Remote when an endpoint is
/// configured, otherwise a built-in recommender over the loaded catalog,
/// so the widget always answers.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl AssistantClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn reply(&self, transcript: &[ChatMessage], catalog: &[Drama]) -> String {
        if let Some(endpoint) = &self.endpoint {
            match self.remote_reply(endpoint, transcript).await {
                Ok(text) => return text,
                Err(e) => warn!("Assistant endpoint failed, answering locally: {e}"),
            }
        }

        let prompt = transcript
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.text.as_str())
            .unwrap_or("");
        local_reply(prompt, catalog)
    }

    async fn remote_reply(
        &self,
        endpoint: &str,
        transcript: &[ChatMessage],
    ) -> Result<String, String> {
        let body = AssistantRequest {
            messages: transcript
                .iter()
                .map(|m| WireMessage {
                    role: m.role,
                    text: &m.text,
                })
                .collect(),
        };

        let resp = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("assistant request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("assistant API error: {}", resp.status()));
        }

        let parsed: AssistantResponse = resp
            .json()
            .await
            .map_err(|e| format!("assistant parse error: {e}"))?;
        Ok(parsed.reply)
    }
}

/// Keyword recommender over the loaded catalog.
fn local_reply(prompt: &str, catalog: &[Drama]) -> String {
    if catalog.is_empty() {
        return "The catalog is still loading, ask me again in a moment.".to_string();
    }

    let prompt = prompt.to_lowercase();

    // Genre mentioned in the prompt wins.
    let genre_pick = catalog.iter().find(|d| {
        d.genre
            .iter()
            .any(|g| !prompt.is_empty() && prompt.contains(&g.to_lowercase()))
    });
    if let Some(d) = genre_pick {
        return format!(
            "If you're in the mood for {}, try \"{}\" ({}, {} episodes, rated {:.1}).",
            d.genre.join(" / ").to_lowercase(),
            d.title,
            d.year,
            d.episodes,
            d.rating
        );
    }

    // Otherwise the top-rated trending title, or just the top-rated one.
    let top_rated = |a: &&Drama, b: &&Drama| {
        a.rating
            .partial_cmp(&b.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    };
    let pick = catalog
        .iter()
        .filter(|d| d.trending)
        .max_by(top_rated)
        .or_else(|| catalog.iter().max_by(top_rated));
    match pick {
        Some(d) => format!(
            "A lot of people are watching \"{}\" right now: {} episodes of {}, rated {:.1}.",
            d.title,
            d.episodes,
            d.genre.join(" / ").to_lowercase(),
            d.rating
        ),
        None => "Tell me a genre you like and I'll suggest something.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::sample_dramas;

    #[test]
    fn local_reply_matches_genre_keyword() {
        let catalog = sample_dramas();
        let reply = local_reply("something with fantasy please", &catalog);
        assert!(reply.contains("Fated to the Alpha's Kiss"));
    }

    #[test]
    fn local_reply_empty_catalog() {
        let reply = local_reply("anything", &[]);
        assert!(reply.contains("still loading"));
    }

    #[test]
    fn local_reply_prefers_trending_over_higher_rated() {
        let mut catalog = sample_dramas();
        for d in &mut catalog {
            d.trending = d.id == "6";
            if d.id == "3" {
                d.rating = 9.9;
            }
        }
        // "The Substitute Bride" trends at 8.1; "My Hidden Billionaire
        // Husband" outrates it but is not trending.
        let reply = local_reply("what should I watch tonight", &catalog);
        assert!(reply.contains("The Substitute Bride"), "got: {reply}");
    }

    #[test]
    fn local_reply_top_rated_when_nothing_trends() {
        let mut catalog = sample_dramas();
        for d in &mut catalog {
            d.trending = false;
        }
        let reply = local_reply("what should I watch tonight", &catalog);
        assert!(reply.contains("The CEO's Secret Vow"), "got: {reply}");
    }

    #[test]
    fn local_reply_without_keyword_recommends_something() {
        let catalog = sample_dramas();
        let reply = local_reply("what should I watch tonight", &catalog);
        assert!(catalog.iter().any(|d| reply.contains(&d.title)));
    }

    #[tokio::test]
    async fn reply_without_endpoint_answers_locally() {
        let client = AssistantClient::new(None);
        let catalog = sample_dramas();
        let transcript = vec![ChatMessage::new(
            1,
            ChatRole::User,
            "recommend a romance".to_string(),
        )];
        let reply = client.reply(&transcript, &catalog).await;
        assert!(!reply.is_empty());
    }
}
