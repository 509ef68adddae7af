use crate::classifier::Category;

/// The reply branch selected for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    General,
    Emergency,
    MentalHealth,
}

/// Map a category to its handler.
///
/// Pure and total over the enum; no default arm, so a new category will not
/// compile until it is routed.
pub fn route(category: Category) -> Handler {
    match category {
        Category::General => Handler::General,
        Category::Emergency => Handler::Emergency,
        Category::MentalHealth => Handler::MentalHealth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_over_all_categories() {
        assert_eq!(route(Category::General), Handler::General);
        assert_eq!(route(Category::Emergency), Handler::Emergency);
        assert_eq!(route(Category::MentalHealth), Handler::MentalHealth);
    }

    #[test]
    fn stable_across_calls() {
        for _ in 0..3 {
            assert_eq!(route(Category::Emergency), Handler::Emergency);
        }
    }
}
