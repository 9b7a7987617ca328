//! In-memory product catalog: record model, procedural generation, and the
//! marketplace filter/sort/pagination pipeline.

mod generate;
mod model;
mod view;

pub use generate::{Catalog, generate_products, seed_products};
pub use model::{Category, ParseCategoryError, Product, price_value};
pub use view::{CatalogView, CategoryFilter, SortMode};
