use serde::{Deserialize, Serialize};

/// A single short-drama title as served by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drama {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub cover_url: String,
    pub genre: Vec<String>,
    pub rating: f64,
    pub year: i64,
    pub episodes: i64,
    pub is_vertical: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_vip: bool,
}

/// A named row of titles derived from the catalog. Never persisted;
/// recomputed from the full drama list on every render.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub dramas: Vec<Drama>,
}

/// The hero title: first entry of the catalog, if any.
pub fn featured(dramas: &[Drama]) -> Option<&Drama> {
    dramas.first()
}

/// Group the catalog into browse rows: Trending, New Releases, then one
/// row per genre in first-seen order. Empty rows are skipped.
pub fn categories(dramas: &[Drama]) -> Vec<Category> {
    let mut out = Vec::new();

    let trending: Vec<Drama> = dramas.iter().filter(|d| d.trending).cloned().collect();
    if !trending.is_empty() {
        out.push(Category {
            id: "trending".to_string(),
            name: "Trending Now".to_string(),
            dramas: trending,
        });
    }

    let fresh: Vec<Drama> = dramas.iter().filter(|d| d.is_new).cloned().collect();
    if !fresh.is_empty() {
        out.push(Category {
            id: "new-releases".to_string(),
            name: "New Releases".to_string(),
            dramas: fresh,
        });
    }

    let mut genres: Vec<String> = Vec::new();
    for d in dramas {
        for g in &d.genre {
            if !genres.contains(g) {
                genres.push(g.clone());
            }
        }
    }

    for genre in genres {
        let bucket: Vec<Drama> = dramas
            .iter()
            .filter(|d| d.genre.contains(&genre))
            .cloned()
            .collect();
        if !bucket.is_empty() {
            out.push(Category {
                id: genre.to_lowercase().replace(' ', "-"),
                name: genre,
                dramas: bucket,
            });
        }
    }

    out
}

/// Minimum score for a title to count as a local search hit.
const LOCAL_SEARCH_CUTOFF: f64 = 0.35;

/// Offline search over an in-memory drama list. Substring hits on title,
/// genre, and description dominate; fuzzy title similarity catches typos.
pub fn search_local(dramas: &[Drama], query: &str) -> Vec<Drama> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return dramas.to_vec();
    }

    let mut scored: Vec<(&Drama, f64)> = dramas
        .iter()
        .map(|d| (d, local_score(d, &q)))
        .filter(|(_, s)| *s >= LOCAL_SEARCH_CUTOFF)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored.into_iter().map(|(d, _)| d.clone()).collect()
}

fn local_score(drama: &Drama, q: &str) -> f64 {
    let title = drama.title.to_lowercase();
    let mut score = strsim::normalized_levenshtein(&title, q);
    if title.contains(q) {
        score += 0.6;
    }
    if drama.genre.iter().any(|g| g.to_lowercase().contains(q)) {
        score += 0.4;
    }
    if drama.description.to_lowercase().contains(q) {
        score += 0.25;
    }
    score
}

/// Bundled sample catalog, used whenever the remote service is unavailable.
/// The first record doubles as the dataset's fingerprint in tests.
pub fn sample_dramas() -> Vec<Drama> {
    fn drama(
        id: &str,
        title: &str,
        description: &str,
        genre: &[&str],
        rating: f64,
        year: i64,
        episodes: i64,
        flags: (bool, bool, bool),
    ) -> Drama {
        let (trending, is_new, is_vip) = flags;
        Drama {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail_url: format!("https://picsum.photos/seed/drama{id}/400/600"),
            cover_url: format!("https://picsum.photos/seed/cover{id}/1280/720"),
            genre: genre.iter().map(|g| g.to_string()).collect(),
            rating,
            year,
            episodes,
            is_vertical: true,
            trending,
            is_new,
            is_vip,
        }
    }

    vec![
        drama(
            "1",
            "The CEO's Secret Vow",
            "Fired on Monday, married to the company's mysterious new CEO by Friday. \
             Mia signed the contract before reading the last clause.",
            &["Romance", "Drama"],
            9.2,
            2024,
            80,
            (true, false, true),
        ),
        drama(
            "2",
            "Revenge of the Divorced Heiress",
            "Cast out penniless, she returns three years later owning the bank that \
             holds her ex-husband's debts.",
            &["Revenge", "Drama"],
            8.9,
            2024,
            72,
            (true, true, false),
        ),
        drama(
            "3",
            "My Hidden Billionaire Husband",
            "Everyone mocks her for marrying a delivery driver. Nobody checked whose \
             name is on the delivery company.",
            &["Romance", "Comedy"],
            8.7,
            2023,
            64,
            (false, false, false),
        ),
        drama(
            "4",
            "Fated to the Alpha's Kiss",
            "A rejected omega flees to the city and walks straight into the pack \
             leader she was promised to at birth.",
            &["Fantasy", "Romance"],
            8.4,
            2024,
            96,
            (true, false, true),
        ),
        drama(
            "5",
            "Reborn: The Empress Strikes Back",
            "Betrayed and poisoned, the empress wakes up twenty years younger with \
             every memory of who wielded the cup.",
            &["Fantasy", "Revenge"],
            9.0,
            2023,
            88,
            (false, true, false),
        ),
        drama(
            "6",
            "The Substitute Bride",
            "Sent to the altar in her sister's place, Lena expected a loveless \
             contract, not a groom who keeps her wedding photo in his wallet.",
            &["Romance", "Drama"],
            8.1,
            2022,
            60,
            (false, false, false),
        ),
        drama(
            "7",
            "Double Life of Professor Chen",
            "Adjunct lecturer by day, underground racing legend by night, until a \
             student recognizes the scar on his wrist.",
            &["Action", "Drama"],
            8.6,
            2024,
            70,
            (false, true, true),
        ),
        drama(
            "8",
            "Moonlit Contract Marriage",
            "One year, no feelings, separate rooms. The contract had three rules and \
             they broke all of them by autumn.",
            &["Romance", "Comedy"],
            8.3,
            2023,
            56,
            (true, false, false),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_first_record_fingerprint() {
        let dramas = sample_dramas();
        assert_eq!(dramas[0].id, "1");
        assert_eq!(dramas[0].title, "The CEO's Secret Vow");
    }

    #[test]
    fn featured_is_first_or_none() {
        let dramas = sample_dramas();
        assert_eq!(featured(&dramas).unwrap().id, "1");
        assert!(featured(&[]).is_none());
    }

    #[test]
    fn categories_of_empty_catalog() {
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn categories_trending_and_new_lead() {
        let cats = categories(&sample_dramas());
        assert_eq!(cats[0].id, "trending");
        assert!(cats[0].dramas.iter().all(|d| d.trending));
        assert_eq!(cats[1].id, "new-releases");
        assert!(cats[1].dramas.iter().all(|d| d.is_new));
    }

    #[test]
    fn categories_skip_empty_buckets() {
        let mut dramas = sample_dramas();
        for d in &mut dramas {
            d.trending = false;
        }
        let cats = categories(&dramas);
        assert!(cats.iter().all(|c| !c.dramas.is_empty()));
        assert!(!cats.iter().any(|c| c.id == "trending"));
    }

    #[test]
    fn categories_genre_order_is_first_seen() {
        let cats = categories(&sample_dramas());
        let genre_ids: Vec<&str> = cats
            .iter()
            .skip(2)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(genre_ids[0], "romance");
        assert_eq!(genre_ids[1], "drama");
    }

    #[test]
    fn categories_are_deterministic() {
        let dramas = sample_dramas();
        let a = categories(&dramas);
        let b = categories(&dramas);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            let xs: Vec<&str> = x.dramas.iter().map(|d| d.id.as_str()).collect();
            let ys: Vec<&str> = y.dramas.iter().map(|d| d.id.as_str()).collect();
            assert_eq!(xs, ys);
        }
    }

    #[test]
    fn local_search_title_substring() {
        let results = search_local(&sample_dramas(), "ceo");
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn local_search_genre() {
        let results = search_local(&sample_dramas(), "revenge");
        assert!(results.iter().any(|d| d.id == "2"));
        assert!(results.iter().any(|d| d.id == "5"));
    }

    #[test]
    fn local_search_empty_query_returns_all() {
        let dramas = sample_dramas();
        assert_eq!(search_local(&dramas, "").len(), dramas.len());
        assert_eq!(search_local(&dramas, "   ").len(), dramas.len());
    }

    #[test]
    fn local_search_no_match() {
        assert!(search_local(&sample_dramas(), "zzqqxv").is_empty());
    }

    #[test]
    fn drama_wire_format_is_camel_case() {
        let json = r#"{
            "id": "42",
            "title": "Test",
            "description": "d",
            "thumbnailUrl": "t",
            "coverUrl": "c",
            "genre": ["Romance"],
            "rating": 8.0,
            "year": 2024,
            "episodes": 10,
            "isVertical": true,
            "isNew": true
        }"#;
        let d: Drama = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "42");
        assert!(d.is_vertical);
        assert!(d.is_new);
        assert!(!d.trending);
        assert!(!d.is_vip);
    }
}
