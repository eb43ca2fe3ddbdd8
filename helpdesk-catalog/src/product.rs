use serde::{Deserialize, Serialize};

/// A single catalog entry. Immutable once the store is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price_cents: i32,
    pub description: String,
    pub specifications: String,
    pub features: Vec<String>,
}

/// A named group of products (e.g. "electronics"). Order is authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductGroup {
    pub name: String,
    pub products: Vec<Product>,
}

/// Read-only product table, grouped and order-preserving.
///
/// Lookups are deliberate linear scans: iteration order is part of the
/// contract. `find_product` returns the first hit in authored order and
/// ambiguous queries are not disambiguated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStore {
    groups: Vec<ProductGroup>,
}

impl CatalogStore {
    pub fn new(groups: Vec<ProductGroup>) -> Self {
        Self { groups }
    }

    /// All products in authored order (group order, then in-group order).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.groups.iter().flat_map(|g| g.products.iter())
    }

    /// Group names in authored order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Case-insensitive substring match against product names, first match
    /// in store order wins.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        let needle = name.to_lowercase();
        let hit = self
            .products()
            .find(|p| p.name.to_lowercase().contains(&needle));
        tracing::debug!(query = name, found = hit.is_some(), "find_product");
        hit
    }

    /// Case-insensitive substring search over name, description and brand.
    /// An optional category is an exact (case-insensitive) group-name
    /// filter. Results come back in store order, unranked.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();
        for group in &self.groups {
            if let Some(cat) = category {
                if !group.name.eq_ignore_ascii_case(cat) {
                    continue;
                }
            }
            for product in &group.products {
                if product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
                {
                    results.push(product);
                }
            }
        }
        tracing::debug!(query, matches = results.len(), "search");
        results
    }

    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.products().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use crate::fixture::demo_catalog;

    #[test]
    fn test_find_product_case_insensitive() {
        let catalog = demo_catalog();
        for name in [
            "iPhone 15 Pro",
            "Samsung Galaxy S24",
            "MacBook Pro 14\"",
            "Sony WH-1000XM5",
            "iPad Air",
        ] {
            let exact = catalog.find_product(name).expect("known product");
            let upper = catalog.find_product(&name.to_uppercase()).unwrap();
            let lower = catalog.find_product(&name.to_lowercase()).unwrap();
            assert_eq!(exact.id, upper.id);
            assert_eq!(exact.id, lower.id);
        }
    }

    #[test]
    fn test_find_product_first_match_wins() {
        // "i" is a substring of both "iPhone 15 Pro" (id 1) and
        // "iPad Air" (id 5); store order breaks the tie.
        let catalog = demo_catalog();
        assert_eq!(catalog.find_product("i").unwrap().id, 1);
    }

    #[test]
    fn test_find_product_miss_is_none() {
        assert!(demo_catalog().find_product("flux capacitor").is_none());
    }

    #[test]
    fn test_search_matches_name_description_and_brand() {
        let catalog = demo_catalog();

        // Brand match, store order.
        let apple: Vec<u32> = catalog.search("apple", None).iter().map(|p| p.id).collect();
        assert_eq!(apple, vec![1, 3, 5]);

        // Description-only matches.
        let noise: Vec<u32> = catalog.search("noise", None).iter().map(|p| p.id).collect();
        assert_eq!(noise, vec![4]);
        let titanium: Vec<u32> = catalog
            .search("titanium", None)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(titanium, vec![1]);
    }

    #[test]
    fn test_search_category_filter_never_adds_results() {
        let catalog = demo_catalog();
        let unfiltered: Vec<u32> = catalog.search("apple", None).iter().map(|p| p.id).collect();
        let filtered: Vec<u32> = catalog
            .search("apple", Some("tablets"))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(filtered, vec![5]);
        assert!(filtered.iter().all(|id| unfiltered.contains(id)));
    }

    #[test]
    fn test_search_category_is_case_insensitive() {
        let catalog = demo_catalog();
        let audio: Vec<u32> = catalog
            .search("", Some("AUDIO"))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(audio, vec![4]);
    }

    #[test]
    fn test_search_miss_is_empty() {
        assert!(demo_catalog().search("flux capacitor", None).is_empty());
    }

    #[test]
    fn test_product_by_id() {
        let catalog = demo_catalog();
        assert_eq!(catalog.product_by_id(4).unwrap().name, "Sony WH-1000XM5");
        assert!(catalog.product_by_id(99).is_none());
    }
}
