use crate::domain::entities::project::Project;
use crate::domain::values::category::Category;

/// Fixed, ordered list of tracked projects. Read-only for the process lifetime.
pub trait ProjectCatalog: Send + Sync {
    fn projects(&self) -> &[Project];

    fn symbols(&self) -> Vec<String> {
        self.projects().iter().map(|p| p.symbol.to_string()).collect()
    }

    fn by_category(&self, category: Category) -> Vec<Project> {
        self.projects()
            .iter()
            .filter(|p| p.category == category)
            .copied()
            .collect()
    }

    fn find(&self, symbol: &str) -> Option<Project> {
        self.projects()
            .iter()
            .find(|p| p.symbol.eq_ignore_ascii_case(symbol))
            .copied()
    }
}
