use std::fmt;

use helpdesk_catalog::product::{CatalogStore, Product};
use serde::Serialize;

use crate::money::format_usd;

/// How many suggestions a failed detail lookup offers.
const MAX_SUGGESTIONS: usize = 3;
/// How many rows a search report shows (the total is still reported).
const MAX_SEARCH_ROWS: usize = 5;
const SNIPPET_CHARS: usize = 80;

/// One search-result line: name, price, truncated description.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub name: String,
    pub price_cents: i32,
    pub snippet: String,
}

impl ProductSummary {
    fn of(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price_cents: product.price_cents,
            snippet: truncate(&product.description, SNIPPET_CHARS),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProductDetails {
    Found {
        product: Product,
    },
    NotFound {
        query: String,
        suggestions: Vec<ProductSummary>,
    },
}

impl fmt::Display for ProductDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductDetails::Found { product } => {
                writeln!(
                    f,
                    "**{}** - {}",
                    product.name,
                    format_usd(product.price_cents)
                )?;
                writeln!(f, "Brand: {}", product.brand)?;
                writeln!(f, "Category: {}", product.category)?;
                writeln!(f, "Description: {}", product.description)?;
                writeln!(f, "Specifications: {}", product.specifications)?;
                writeln!(f, "Features:")?;
                for feature in &product.features {
                    writeln!(f, "  - {feature}")?;
                }
                Ok(())
            }
            ProductDetails::NotFound { query, suggestions } => {
                if suggestions.is_empty() {
                    writeln!(f, "Product '{query}' not found in our catalog.")
                } else {
                    writeln!(f, "Product '{query}' not found. Similar products:")?;
                    for s in suggestions {
                        writeln!(f, "  - {} - {}", s.name, format_usd(s.price_cents))?;
                    }
                    Ok(())
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SearchReport {
    Matches {
        total: usize,
        shown: Vec<ProductSummary>,
    },
    Empty {
        query: String,
        categories: Vec<String>,
    },
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchReport::Matches { total, shown } => {
                writeln!(f, "Found {total} products:")?;
                for s in shown {
                    writeln!(
                        f,
                        "  - {} ({}) - {}",
                        s.name,
                        format_usd(s.price_cents),
                        s.snippet
                    )?;
                }
                Ok(())
            }
            SearchReport::Empty { query, categories } => {
                writeln!(f, "No products found for '{query}'.")?;
                writeln!(f, "Available categories: {}", categories.join(", "))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

impl fmt::Display for CategoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available categories:")?;
        for category in &self.categories {
            writeln!(f, "  - {category}")?;
        }
        Ok(())
    }
}

/// Product-catalog tools: detail lookup, search, category listing.
pub struct CatalogTools<'a> {
    catalog: &'a CatalogStore,
}

impl<'a> CatalogTools<'a> {
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self { catalog }
    }

    /// Full detail block for the first product matching `name`. A miss
    /// comes back with up to three similar products as suggestions.
    pub fn product_details(&self, name: &str) -> ProductDetails {
        match self.catalog.find_product(name) {
            Some(product) => ProductDetails::Found {
                product: product.clone(),
            },
            None => ProductDetails::NotFound {
                query: name.to_string(),
                suggestions: self
                    .catalog
                    .search(name, None)
                    .into_iter()
                    .take(MAX_SUGGESTIONS)
                    .map(ProductSummary::of)
                    .collect(),
            },
        }
    }

    pub fn search_catalog(&self, query: &str, category: Option<&str>) -> SearchReport {
        let matches = self.catalog.search(query, category);
        if matches.is_empty() {
            SearchReport::Empty {
                query: query.to_string(),
                categories: self.catalog.group_names().map(String::from).collect(),
            }
        } else {
            SearchReport::Matches {
                total: matches.len(),
                shown: matches
                    .into_iter()
                    .take(MAX_SEARCH_ROWS)
                    .map(ProductSummary::of)
                    .collect(),
            }
        }
    }

    pub fn categories(&self) -> CategoryList {
        CategoryList {
            categories: self.catalog.group_names().map(title_case).collect(),
        }
    }
}
