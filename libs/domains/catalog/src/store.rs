//! In-memory collection store.
//!
//! The [`Catalog`] owns both collections outright. It is shared between
//! requests behind a single `RwLock` (see [`crate::state::CatalogState`]);
//! a request holds the lock for its whole middleware chain plus the terminal
//! operation, so there is exactly one writer at a time and an index resolved
//! by a lookup step stays valid until the request is done with it.

use crate::models::{Category, CollectionKind, Product, Record};

/// Ordered, mutable sequence of records. Insertion order is the listing order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based index of the first record with the given id (linear scan)
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Append at the end and return the stored record
    pub fn push(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Overwrite the record at `index`; `None` if the index is out of range
    pub fn replace(&mut self, index: usize, item: T) -> Option<&T> {
        let slot = self.items.get_mut(index)?;
        *slot = item;
        Some(&*slot)
    }

    /// Remove the record at `index`, shifting later records left
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

/// Both collections of the catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Collection<Product>,
    pub categories: Collection<Category>,
}

impl Catalog {
    /// Build the catalog from a startup snapshot
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products: Collection::new(products),
            categories: Collection::new(categories),
        }
    }

    /// Index of `id` within the collection of the given kind
    pub fn position(&self, kind: CollectionKind, id: &str) -> Option<usize> {
        match kind {
            CollectionKind::Products => self.products.position(id),
            CollectionKind::Categories => self.categories.position(id),
        }
    }

    /// Products whose `categoryId` equals `category_id`, in listing order
    pub fn products_in_category(&self, category_id: &str) -> Vec<Product> {
        self.products
            .as_slice()
            .iter()
            .filter(|product| product.belongs_to(category_id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str) -> Product {
        let mut product = Product::new(format!("product {}", id), category);
        product.assign_id(id.to_string());
        product
    }

    fn category(id: &str) -> Category {
        let mut category = Category::new(format!("category {}", id));
        category.assign_id(id.to_string());
        category
    }

    #[test]
    fn test_position_and_find() {
        let products = Collection::new(vec![product("a", "x"), product("b", "x")]);

        assert_eq!(products.position("b"), Some(1));
        assert_eq!(products.position("c"), None);
        assert_eq!(products.find("a").map(|p| p.id.as_str()), Some("a"));
        assert!(products.contains("a"));
        assert!(!products.contains("z"));
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut products = Collection::new(vec![product("a", "x")]);
        let stored = products.push(product("b", "x"));
        assert_eq!(stored.id, "b");
        assert_eq!(products.position("b"), Some(1));
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_replace_in_place() {
        let mut products = Collection::new(vec![product("a", "x"), product("b", "x")]);
        let replaced = products.replace(0, product("a", "y")).cloned();

        assert!(replaced.unwrap().belongs_to("y"));
        assert_eq!(products.position("a"), Some(0));
        assert!(products.replace(5, product("q", "x")).is_none());
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut products = Collection::new(vec![
            product("a", "x"),
            product("b", "x"),
            product("c", "x"),
        ]);

        let removed = products.remove(1).unwrap();
        assert_eq!(removed.id, "b");

        let ids: Vec<&str> = products.as_slice().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(products.remove(2).is_none());
    }

    #[test]
    fn test_catalog_position_by_kind() {
        let catalog = Catalog::new(vec![product("p1", "c1")], vec![category("c1")]);

        assert_eq!(catalog.position(CollectionKind::Products, "p1"), Some(0));
        assert_eq!(catalog.position(CollectionKind::Categories, "p1"), None);
        assert_eq!(catalog.position(CollectionKind::Categories, "c1"), Some(0));
    }

    #[test]
    fn test_products_in_category_keeps_order() {
        let catalog = Catalog::new(
            vec![product("p1", "c1"), product("p2", "c2"), product("p3", "c1")],
            vec![category("c1")],
        );

        let ids: Vec<String> = catalog
            .products_in_category("c1")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert!(catalog.products_in_category("c9").is_empty());
    }
}
