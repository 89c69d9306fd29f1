//! Image and video extraction.

use crate::category::Category;
use crate::cleaning::clean_text;
use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::patterns::VIDEO_PLATFORMS;
use crate::records::{ImageRecord, VideoKind, VideoRecord};

use super::{check_depth, Harvest};

/// Attributes holding an image URL, in order of preference.
const IMAGE_SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src"];

/// First non-empty image source, including lazy-loading attributes.
#[must_use]
pub fn image_source(img: &Selection) -> String {
    IMAGE_SOURCE_ATTRS
        .iter()
        .filter_map(|attr| dom::get_attribute(img, attr))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
}

/// Whether an iframe `src` points at a video host.
#[must_use]
pub fn is_video_embed(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    VIDEO_PLATFORMS.iter().any(|platform| lower.contains(platform))
}

/// Every `<img>`, including ones without a usable source.
#[must_use]
pub fn extract_images(page: &Page, opts: &Options) -> Harvest<ImageRecord> {
    let mut harvest = Harvest::new(Category::Images);

    for (idx, node) in page.select("img").nodes().iter().enumerate() {
        let img = Selection::from(*node);
        if let Err(e) = check_depth(&img, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        harvest.push(ImageRecord {
            position: idx + 1,
            url: page.resolve(&image_source(&img)),
            alt: clean_text(&dom::attr_or_empty(&img, "alt")),
            title: clean_text(&dom::attr_or_empty(&img, "title")),
            width: dom::attr_or_empty(&img, "width"),
            height: dom::attr_or_empty(&img, "height"),
            loading: dom::attr_or_empty(&img, "loading"),
        });
    }

    harvest
}

/// `<video>` tags, then iframes embedding a video host.
///
/// Positions run on from the video tags into the iframes. Iframe failures
/// are indexed after all video tags.
#[must_use]
pub fn extract_videos(page: &Page, opts: &Options) -> Harvest<VideoRecord> {
    let mut harvest = Harvest::new(Category::Videos);

    let videos = page.select("video");
    let video_count = videos.nodes().len();
    for (idx, node) in videos.nodes().iter().enumerate() {
        let video = Selection::from(*node);
        if let Err(e) = check_depth(&video, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        let src = dom::get_attribute(&video, "src")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| dom::get_attribute(&video.select("source[src]").first(), "src"))
            .unwrap_or_default();

        harvest.push(VideoRecord {
            position: harvest.records().len() + 1,
            kind: VideoKind::Video,
            src: page.resolve(&src),
            poster: page.resolve(&dom::attr_or_empty(&video, "poster")),
            title: String::new(),
            width: dom::attr_or_empty(&video, "width"),
            height: dom::attr_or_empty(&video, "height"),
        });
    }

    for (idx, node) in page.select("iframe[src]").nodes().iter().enumerate() {
        let iframe = Selection::from(*node);
        let src = dom::attr_or_empty(&iframe, "src");
        if !is_video_embed(&src) {
            continue;
        }
        if let Err(e) = check_depth(&iframe, opts) {
            harvest.skip(video_count + idx, &e);
            continue;
        }

        harvest.push(VideoRecord {
            position: harvest.records().len() + 1,
            kind: VideoKind::Iframe,
            src: page.resolve(&src),
            poster: String::new(),
            title: clean_text(&dom::attr_or_empty(&iframe, "title")),
            width: dom::attr_or_empty(&iframe, "width"),
            height: dom::attr_or_empty(&iframe, "height"),
        });
    }

    harvest
}
