use serde::{Deserialize, Serialize};

/// Browse listing flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Most recently added titles
    Recent,
    /// All-time popularity by views
    Popular,
}

impl Category {
    /// Anything other than "popular" (case-insensitive) browses recent titles
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("popular") {
            Category::Popular
        } else {
            Category::Recent
        }
    }
}

/// Rating-bucket filter for the genre listing.
///
/// Every value is forwarded verbatim; upstream decides what is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBands {
    pub action: String,
    pub comedy: String,
    pub romance: String,
    pub storyline: String,
    pub performance: String,
    /// Minimum number of ratings a title needs to be listed
    pub ratecount: String,
}

impl Default for RatingBands {
    fn default() -> Self {
        Self {
            action: "0".to_string(),
            comedy: "0".to_string(),
            romance: "0".to_string(),
            storyline: "0".to_string(),
            performance: "0".to_string(),
            ratecount: "1".to_string(),
        }
    }
}

/// A content-discovery request, one variant per upstream URL shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search {
        language: String,
        query: String,
    },
    Browse {
        language: String,
        category: Category,
        page: u32,
    },
    Actor {
        language: String,
        actor_code: String,
        page: u32,
    },
    Genre {
        language: String,
        bands: RatingBands,
        page: u32,
    },
    Decade {
        language: String,
        decade: String,
        page: u32,
    },
    Year {
        language: String,
        year: String,
        page: u32,
    },
    /// Full page address on the catalog site
    Watch { page_url: String },
}

impl Intent {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Search { .. } => "search",
            Intent::Browse { .. } => "browse",
            Intent::Actor { .. } => "actor",
            Intent::Genre { .. } => "genre",
            Intent::Decade { .. } => "decade",
            Intent::Year { .. } => "year",
            Intent::Watch { .. } => "watch",
        }
    }

    /// Requested page for paginated listings; search and watch are single-page
    pub fn page(&self) -> u32 {
        match self {
            Intent::Browse { page, .. }
            | Intent::Actor { page, .. }
            | Intent::Genre { page, .. }
            | Intent::Decade { page, .. }
            | Intent::Year { page, .. } => *page,
            Intent::Search { .. } | Intent::Watch { .. } => 1,
        }
    }
}

/// Lenient page parsing: absent means 1, anything non-numeric means 0
pub fn parse_page(value: Option<&str>) -> u32 {
    match value {
        None => 1,
        Some(raw) => raw.parse().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_param() {
        assert_eq!(Category::from_param("popular"), Category::Popular);
        assert_eq!(Category::from_param("POPULAR"), Category::Popular);
        assert_eq!(Category::from_param("recent"), Category::Recent);

        // Unknown values fall back to recent
        assert_eq!(Category::from_param("trending"), Category::Recent);
        assert_eq!(Category::from_param(""), Category::Recent);
    }

    #[test]
    fn test_rating_bands_default() {
        let bands = RatingBands::default();
        assert_eq!(bands.action, "0");
        assert_eq!(bands.comedy, "0");
        assert_eq!(bands.romance, "0");
        assert_eq!(bands.storyline, "0");
        assert_eq!(bands.performance, "0");
        assert_eq!(bands.ratecount, "1");
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("3")), 3);

        // Garbage, padding and negatives are not valid pages
        assert_eq!(parse_page(Some(" 2 ")), 0);
        assert_eq!(parse_page(Some("abc")), 0);
        assert_eq!(parse_page(Some("-4")), 0);
    }

    #[test]
    fn test_intent_page() {
        let browse = Intent::Browse {
            language: "tamil".to_string(),
            category: Category::Recent,
            page: 4,
        };
        assert_eq!(browse.page(), 4);
        assert_eq!(browse.kind(), "browse");

        let watch = Intent::Watch {
            page_url: "https://einthusan.tv/movie/watch/abc/".to_string(),
        };
        assert_eq!(watch.page(), 1);
    }
}
