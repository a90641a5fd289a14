use crate::error::Result;
use crate::parsers::html::Document;
use crate::results::MovieEntry;
use crate::utils::{ensure_https, resolve_page_link};

const ITEM: &str = "#UIMovieSummary > ul > li";
const TITLE: &str = "div.block2 > a.title > h3";
const LINK: &str = "div.block2 > a.title";
const POSTER: &str = "div.block1 > a > img";

/// Extracts the movie entries of a catalog listing page, in document order.
///
/// Items without a title are dropped; a missing link or poster becomes an
/// empty value and never fails the page.
pub fn parse(html: &str, base_url: &str) -> Result<Vec<MovieEntry>> {
    let doc = Document::parse(html);
    let items = doc.select(ITEM)?;

    let mut movies = Vec::with_capacity(items.len());
    for item in items {
        // Text of every heading under the title link, so an empty leading <h3> is not the title
        let title = item.all_text(TITLE)?;
        if title.is_empty() {
            ::log::trace!("Skipping listing item without a title");
            continue;
        }

        let href = item.first_attr(LINK, "href")?.unwrap_or_default();
        let img = item.first_attr(POSTER, "src")?.unwrap_or_default();

        movies.push(MovieEntry {
            img_url: ensure_https(&img),
            page_url: resolve_page_link(base_url, &href),
            title,
        });
    }

    ::log::debug!("Listing parser found {} movies", movies.len());
    Ok(movies)
}
