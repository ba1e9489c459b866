pub mod cache;
pub mod detector;
pub mod extract;
pub mod fetcher;
pub mod types;
pub mod urls;

pub use cache::{CacheEntry, FileCache, MetadataCache};
pub use detector::detect_links;
pub use extract::{MetaTag, PageMetadata, decode_html_entities};
pub use fetcher::LinkPreviewer;
pub use types::{LinkMetadata, LinkPreview, PreviewConfig, PreviewSource};
pub use urls::{extract_domain, resolve_image_url};
