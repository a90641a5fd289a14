use crate::intent::{Category, Intent};

/// Path of the catalog's listing search, relative to the base origin
const LISTING_PATH: &str = "/movie/results/";

/// Builds the upstream URL for an intent.
///
/// Parameters are forwarded as-is; the only rewrite is the `' '` -> `'+'`
/// substitution the catalog expects in search queries.
pub fn build_url(base_url: &str, intent: &Intent) -> String {
    let listing = format!("{}{}", base_url.trim_end_matches('/'), LISTING_PATH);

    match intent {
        Intent::Search { language, query } => {
            format!(
                "{}?lang={}&query={}",
                listing,
                language,
                query.replace(' ', "+")
            )
        }
        Intent::Browse {
            language,
            category,
            page,
        } => {
            let url = match category {
                Category::Popular => format!(
                    "{}?find=Popularity&lang={}&ptype=view&tp=alltime",
                    listing, language
                ),
                Category::Recent => format!("{}?find=Recent&lang={}", listing, language),
            };
            append_page(url, *page)
        }
        Intent::Actor {
            language,
            actor_code,
            page,
        } => append_page(
            format!(
                "{}?find=Cast&id={}&lang={}&role=",
                listing, actor_code, language
            ),
            *page,
        ),
        Intent::Genre {
            language,
            bands,
            page,
        } => append_page(
            format!(
                "{}?lang={}&find=Rating&action={}&comedy={}&romance={}&storyline={}&performance={}&ratecount={}",
                listing,
                language,
                bands.action,
                bands.comedy,
                bands.romance,
                bands.storyline,
                bands.performance,
                bands.ratecount
            ),
            *page,
        ),
        Intent::Decade {
            language,
            decade,
            page,
        } => append_page(
            format!("{}?decade={}&find=Decade&lang={}", listing, decade, language),
            *page,
        ),
        Intent::Year {
            language,
            year,
            page,
        } => append_page(
            format!("{}?find=Year&lang={}&year={}", listing, language, year),
            *page,
        ),
        Intent::Watch { page_url } => page_url.clone(),
    }
}

/// Appends `&page=N` for N > 1; the first page is always implicit
pub fn append_page(url: String, page: u32) -> String {
    if page > 1 {
        format!("{}&page={}", url, page)
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::RatingBands;

    const BASE: &str = "https://einthusan.tv";

    #[test]
    fn test_search_replaces_spaces() {
        let intent = Intent::Search {
            language: "tamil".to_string(),
            query: "vikram vedha".to_string(),
        };
        assert_eq!(
            build_url(BASE, &intent),
            "https://einthusan.tv/movie/results/?lang=tamil&query=vikram+vedha"
        );
    }

    #[test]
    fn test_browse_categories() {
        let recent = Intent::Browse {
            language: "hindi".to_string(),
            category: Category::Recent,
            page: 1,
        };
        assert_eq!(
            build_url(BASE, &recent),
            "https://einthusan.tv/movie/results/?find=Recent&lang=hindi"
        );

        let popular = Intent::Browse {
            language: "hindi".to_string(),
            category: Category::Popular,
            page: 3,
        };
        assert_eq!(
            build_url(BASE, &popular),
            "https://einthusan.tv/movie/results/?find=Popularity&lang=hindi&ptype=view&tp=alltime&page=3"
        );
    }

    #[test]
    fn test_page_append_rule() {
        let url = "https://einthusan.tv/movie/results/?find=Recent&lang=tamil".to_string();

        // Page 1 and below are never written out
        assert!(!append_page(url.clone(), 0).contains("&page="));
        assert!(!append_page(url.clone(), 1).contains("&page="));

        assert!(append_page(url.clone(), 2).ends_with("&page=2"));
        assert_eq!(append_page(url.clone(), 2).matches("&page=").count(), 1);
    }

    #[test]
    fn test_actor_keeps_empty_role() {
        let intent = Intent::Actor {
            language: "telugu".to_string(),
            actor_code: "AbC1".to_string(),
            page: 2,
        };
        assert_eq!(
            build_url(BASE, &intent),
            "https://einthusan.tv/movie/results/?find=Cast&id=AbC1&lang=telugu&role=&page=2"
        );
    }

    #[test]
    fn test_genre_defaults_and_overrides() {
        let intent = Intent::Genre {
            language: "hindi".to_string(),
            bands: RatingBands::default(),
            page: 1,
        };
        assert_eq!(
            build_url(BASE, &intent),
            "https://einthusan.tv/movie/results/?lang=hindi&find=Rating&action=0&comedy=0&romance=0&storyline=0&performance=0&ratecount=1"
        );

        let intent = Intent::Genre {
            language: "hindi".to_string(),
            bands: RatingBands {
                action: "4".to_string(),
                ratecount: "5".to_string(),
                ..RatingBands::default()
            },
            page: 2,
        };
        let url = build_url(BASE, &intent);
        assert!(url.contains("&action=4&comedy=0"));
        assert!(url.ends_with("&ratecount=5&page=2"));
    }

    #[test]
    fn test_decade_and_year() {
        let decade = Intent::Decade {
            language: "tamil".to_string(),
            decade: "1990".to_string(),
            page: 1,
        };
        assert_eq!(
            build_url(BASE, &decade),
            "https://einthusan.tv/movie/results/?decade=1990&find=Decade&lang=tamil"
        );

        let year = Intent::Year {
            language: "tamil".to_string(),
            year: "2025".to_string(),
            page: 5,
        };
        assert_eq!(
            build_url(BASE, &year),
            "https://einthusan.tv/movie/results/?find=Year&lang=tamil&year=2025&page=5"
        );
    }

    #[test]
    fn test_watch_url_passthrough() {
        let page_url = "https://einthusan.tv/movie/watch/9xyz/?lang=tamil".to_string();
        let intent = Intent::Watch {
            page_url: page_url.clone(),
        };
        assert_eq!(build_url(BASE, &intent), page_url);
    }

    #[test]
    fn test_malformed_input_passthrough() {
        // Upstream decides what is valid
        let intent = Intent::Year {
            language: "xx".to_string(),
            year: "20&25".to_string(),
            page: 1,
        };
        assert_eq!(
            build_url(BASE, &intent),
            "https://einthusan.tv/movie/results/?find=Year&lang=xx&year=20&25"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let intent = Intent::Browse {
            language: "tamil".to_string(),
            category: Category::Recent,
            page: 1,
        };
        assert_eq!(
            build_url("https://einthusan.tv/", &intent),
            "https://einthusan.tv/movie/results/?find=Recent&lang=tamil"
        );
    }
}
