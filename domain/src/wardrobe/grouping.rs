//! Catalog grouping view

use super::category::Category;
use super::item::ClothingItem;

/// Items of one category, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a ClothingItem>,
}

impl CategoryGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition items into one group per category, in [`Category::ALL`] order.
///
/// Always yields exactly three groups, empty ones included.
pub fn group_by_category(items: &[ClothingItem]) -> Vec<CategoryGroup<'_>> {
    Category::ALL
        .iter()
        .map(|&category| CategoryGroup {
            category,
            items: items
                .iter()
                .filter(|item| item.category() == category)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::image::InlineImage;

    fn item(category: Category, tag: &[u8]) -> ClothingItem {
        ClothingItem::new(category, InlineImage::encode(tag, "image/png"))
    }

    #[test]
    fn test_groups_preserve_insertion_order() {
        let items = vec![
            item(Category::Tops, b"1"),
            item(Category::Shoes, b"2"),
            item(Category::Tops, b"3"),
        ];

        let groups = group_by_category(&items);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].category, Category::Tops);
        assert_eq!(groups[0].items, vec![&items[0], &items[2]]);
        assert_eq!(groups[1].category, Category::Bottoms);
        assert!(groups[1].is_empty());
        assert_eq!(groups[2].category, Category::Shoes);
        assert_eq!(groups[2].items, vec![&items[1]]);
    }

    #[test]
    fn test_empty_catalog_yields_three_empty_groups() {
        let groups = group_by_category(&[]);
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.is_empty()));
    }
}
