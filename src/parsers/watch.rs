use crate::error::Result;
use crate::parsers::html::Document;
use crate::results::WatchResponse;
use crate::utils::{ensure_https, rewrite_endpoint};

const TITLE: &str = "#UIMovieSummary div.block2 a.title h3";
const POSTER: &str = "#UIMovieSummary div.block1 img";
const PLAYER: &str = "#UIVideoPlayer";
const MP4_ATTR: &str = "data-mp4-link";
const HLS_ATTR: &str = "data-hls-link";

/// Extracts title, poster and playable address from a title's watch page.
///
/// The direct MP4 link wins over the HLS manifest. Whichever is used gets
/// an `https:` scheme if protocol-relative and has any raw IPv4 delivery
/// node replaced by `cdn_host`. A page without a player yields an empty
/// `video_url`.
pub fn parse(html: &str, cdn_host: &str) -> Result<WatchResponse> {
    let doc = Document::parse(html);

    let title = doc.first_text(TITLE)?.unwrap_or_default();
    let img_url = ensure_https(&doc.first_attr(POSTER, "src")?.unwrap_or_default());

    let video_url = match video_source(&doc)? {
        Some(src) => rewrite_endpoint(&ensure_https(&src), cdn_host),
        None => {
            ::log::debug!("No video source on watch page '{}'", title);
            String::new()
        }
    };

    Ok(WatchResponse {
        title,
        video_url,
        img_url,
    })
}

fn video_source(doc: &Document) -> Result<Option<String>> {
    let players = doc.select(PLAYER)?;
    let Some(player) = players.first() else {
        return Ok(None);
    };

    let src = [MP4_ATTR, HLS_ATTR]
        .iter()
        .filter_map(|attr| player.attr(attr))
        .find(|value| !value.is_empty())
        .map(|value| value.to_string());

    Ok(src)
}
