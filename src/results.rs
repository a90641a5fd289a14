use serde::{Deserialize, Serialize};

/// Placeholder name reported for every actor listing
pub const UNKNOWN_ACTOR: &str = "Unknown Actor";

/// One title found on a catalog listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    /// Poster image, absolute
    pub img_url: String,

    /// Detail page on the catalog site, absolute
    pub page_url: String,

    /// Display title, never blank
    pub title: String,
}

/// Response for free-text search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub language: String,
    pub movies: Vec<MovieEntry>,
    #[serde(rename = "q")]
    pub query: String,
}

/// Response shared by browse, genre, decade and year listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub category: String,
    pub has_more: bool,
    pub language: String,
    pub movies: Vec<MovieEntry>,
    pub next_page: u32,
    pub page: u32,
}

/// Response for an actor's filmography
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorResponse {
    pub actor_id: String,
    pub actor_name: String,
    pub has_more: bool,
    pub language: String,
    pub movies: Vec<MovieEntry>,
    pub next_page: u32,
    pub page: u32,
}

/// Resolved video for a single title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchResponse {
    pub title: String,
    /// Empty when the page carries no playable source
    pub video_url: String,
    pub img_url: String,
}

/// Page of listing results plus the pagination echo
#[derive(Debug, Clone)]
pub struct ListingResult {
    pub language: String,
    pub page: u32,
    pub movies: Vec<MovieEntry>,
}

impl ListingResult {
    pub fn new(language: String, page: u32, movies: Vec<MovieEntry>) -> Self {
        Self {
            language,
            page,
            movies,
        }
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// Heuristic only: a non-empty page is assumed to have a successor
    pub fn has_more(&self) -> bool {
        !self.movies.is_empty()
    }

    pub fn into_browse(self, category: String) -> BrowseResponse {
        BrowseResponse {
            category,
            has_more: self.has_more(),
            next_page: self.next_page(),
            language: self.language,
            movies: self.movies,
            page: self.page,
        }
    }

    pub fn into_actor(self, actor_id: String) -> ActorResponse {
        ActorResponse {
            actor_id,
            actor_name: UNKNOWN_ACTOR.to_string(),
            has_more: self.has_more(),
            next_page: self.next_page(),
            language: self.language,
            movies: self.movies,
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> MovieEntry {
        MovieEntry {
            img_url: "https://img/x.jpg".to_string(),
            page_url: "https://einthusan.tv/movie/1".to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_movie_entry_wire_names() {
        let json = serde_json::to_value(entry("Jailer")).unwrap();
        assert_eq!(json["img_url"], "https://img/x.jpg");
        assert_eq!(json["page_url"], "https://einthusan.tv/movie/1");
        assert_eq!(json["title"], "Jailer");
    }

    #[test]
    fn test_listing_pagination_echo() {
        let result = ListingResult::new("tamil".to_string(), 2, vec![entry("A")]);
        let browse = result.into_browse("recent".to_string());
        assert_eq!(browse.page, 2);
        assert_eq!(browse.next_page, 3);
        assert!(browse.has_more);

        let empty = ListingResult::new("tamil".to_string(), 9, Vec::new());
        let browse = empty.into_browse("Year: 1950".to_string());
        assert!(!browse.has_more);
        assert_eq!(browse.next_page, 10);

        // Empty list serializes as [], not null
        let json = serde_json::to_value(&browse).unwrap();
        assert_eq!(json["movies"], serde_json::json!([]));
    }

    #[test]
    fn test_actor_placeholder_name() {
        let result = ListingResult::new("hindi".to_string(), 1, vec![entry("A")]);
        let actor = result.into_actor("XyZ".to_string());
        assert_eq!(actor.actor_name, "Unknown Actor");

        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(json["actor_id"], "XyZ");
        assert_eq!(json["next_page"], 2);
        assert_eq!(json["has_more"], true);
    }

    #[test]
    fn test_search_response_query_field() {
        let response = SearchResponse {
            language: "tamil".to_string(),
            movies: Vec::new(),
            query: "leo".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["q"], "leo");
        assert!(json.get("query").is_none());
    }
}
