//! The sorted, category-grouped record set the layout consumes

use std::collections::HashSet;
use std::ops::Range;

use super::records::{Solution, SolutionId};

/// A run of consecutive records sharing one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub name: String,
    /// Indices into [`Dataset::solutions`]
    pub range: Range<usize>,
}

impl CategoryGroup {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Records sorted by category (case-sensitive, ordinal; stable within a
/// category) with their category runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    solutions: Vec<Solution>,
    categories: Vec<CategoryGroup>,
}

impl Dataset {
    pub fn new(mut solutions: Vec<Solution>) -> Self {
        // Stable sort keeps the export order within a category
        solutions.sort_by(|a, b| a.category.cmp(&b.category));

        let mut categories: Vec<CategoryGroup> = Vec::new();
        for (idx, solution) in solutions.iter().enumerate() {
            match categories.last_mut() {
                Some(group) if group.name == solution.category => group.range.end = idx + 1,
                _ => categories.push(CategoryGroup {
                    name: solution.category.clone(),
                    range: idx..idx + 1,
                }),
            }
        }

        let mut seen = HashSet::new();
        for solution in &solutions {
            if !seen.insert(&solution.id) {
                crate::log::warn!(id = %solution.id, "duplicate solution id; hover will match every copy");
            }
        }

        crate::log::debug!(
            solutions = solutions.len(),
            categories = categories.len(),
            "dataset built"
        );

        Self { solutions, categories }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn find(&self, id: &SolutionId) -> Option<&Solution> {
        self.solutions.iter().find(|s| &s.id == id)
    }

    /// Records of one category group, in layout order.
    pub fn members(&self, group: &CategoryGroup) -> &[Solution] {
        &self.solutions[group.range.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sol(id: &str, category: &str) -> Solution {
        Solution::new(id, category, id, format!("{id} description"))
    }

    #[test]
    fn sorts_by_category_and_keeps_order_within() {
        let ds = Dataset::new(vec![
            sol("b1", "Beta"),
            sol("a1", "Alpha"),
            sol("b2", "Beta"),
            sol("a2", "Alpha"),
        ]);
        let ids: Vec<&str> = ds.solutions().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "b1", "b2"]);
        assert_eq!(
            ds.categories(),
            [
                CategoryGroup { name: "Alpha".into(), range: 0..2 },
                CategoryGroup { name: "Beta".into(), range: 2..4 },
            ]
        );
    }

    #[test]
    fn category_sort_is_case_sensitive() {
        let ds = Dataset::new(vec![sol("1", "apple"), sol("2", "Zebra")]);
        let names: Vec<&str> = ds.categories().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Zebra", "apple"]);
    }

    #[test]
    fn grouping_is_by_exact_string() {
        let ds = Dataset::new(vec![sol("1", "Care"), sol("2", "Care "), sol("3", "Care")]);
        assert_eq!(ds.categories().len(), 2);
        assert_eq!(ds.members(&ds.categories()[0]).len(), 2);
    }

    #[test]
    fn empty_dataset_has_no_groups() {
        let ds = Dataset::new(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.categories().is_empty());
    }

    #[test]
    fn find_by_id() {
        let ds = Dataset::new(vec![sol("x", "A"), sol("y", "B")]);
        assert_eq!(ds.find(&"y".into()).map(|s| s.category.as_str()), Some("B"));
        assert!(ds.find(&"z".into()).is_none());
    }
}
