//! Application-level state for Nexus: navigation, the resource directory
//! and product-intel hub, the blog store, and the on-demand article slot.

mod article;
mod blog;
mod directory;
mod session;

pub use article::{
    ARTICLE_FALLBACK, ArticleSlot, ArticleTicket, CUSTOM_ANALYSIS_CONTEXT, EMPTY_ARTICLE,
    fetch_article,
};
pub use blog::{AuthorType, BlogPost, BlogStore, compose_agent_post};
pub use directory::{
    CategoryGroup, Collection, ExternalLink, HubEntry, ResourceItem, collections,
    featured_links, find_resource, normalize_query, product_categories, resources,
};
pub use session::AppSession;
