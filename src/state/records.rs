//! Records Table State
//!
//! Stored rows plus the current view. Searching narrows the view without
//! touching the rows; deleting drops a row and resets the view.

use crate::models::TableRow;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableView {
    #[default]
    All,
    /// Lowercased search term
    Search(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    Search(String),
    /// Already confirmed by the visitor
    Delete(u32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordsState {
    rows: Vec<TableRow>,
    view: TableView,
}

/// Case-insensitive substring match across name, category, technologies, date
pub fn row_matches(row: &TableRow, term: &str) -> bool {
    row.name.to_lowercase().contains(term)
        || row.category.to_lowercase().contains(term)
        || row.technologies.to_lowercase().contains(term)
        || row.date.contains(term)
}

impl RecordsState {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows, view: TableView::All }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::Search(term) => self.search(&term),
            TableAction::Delete(id) => self.delete_row(id),
        }
    }

    pub fn search(&mut self, term: &str) {
        self.view = TableView::Search(term.to_lowercase());
    }

    /// Remove the row with `id` (if any) and show the full table again
    pub fn delete_row(&mut self, id: u32) {
        self.rows.retain(|row| row.id != id);
        self.view = TableView::All;
    }

    /// Rows for the current view, in stored order
    pub fn visible(&self) -> Vec<TableRow> {
        match &self.view {
            TableView::All => self.rows.clone(),
            TableView::Search(term) => self
                .rows
                .iter()
                .filter(|row| row_matches(row, term))
                .cloned()
                .collect(),
        }
    }

    /// Visible rows paired with their 1-based display position (not the id)
    pub fn numbered(&self) -> Vec<(usize, TableRow)> {
        self.visible()
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row))
            .collect()
    }

    /// Size of the currently rendered set
    pub fn count(&self) -> usize {
        match &self.view {
            TableView::All => self.rows.len(),
            TableView::Search(term) => self.rows.iter().filter(|row| row_matches(row, term)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids(rows: &[TableRow]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut state = RecordsState::new(seed::table_rows());
        state.search("PYTHON");
        let found = ids(&state.visible());
        for id in [1, 2, 4] {
            assert!(found.contains(&id), "row {} missing from {:?}", id, found);
        }
        assert!(!found.contains(&5));
    }

    #[test]
    fn test_search_covers_each_field() {
        let mut state = RecordsState::new(seed::table_rows());
        state.search("лендинг");
        assert_eq!(ids(&state.visible()), vec![5, 6]);
        state.search("2024-11");
        assert_eq!(ids(&state.visible()), vec![6]);
        state.search("dobro");
        assert_eq!(ids(&state.visible()), vec![2, 3]);
    }

    #[test]
    fn test_search_leaves_rows_untouched() {
        let mut state = RecordsState::new(seed::table_rows());
        state.apply(TableAction::Search("redis".into()));
        assert_eq!(ids(&state.visible()), vec![4]);
        assert_eq!(state.rows().len(), 7);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let mut state = RecordsState::new(seed::table_rows());
        state.search("");
        assert_eq!(state.visible().len(), 7);
    }

    #[test]
    fn test_delete_removes_one_row_in_order() {
        let mut state = RecordsState::new(seed::table_rows());
        state.apply(TableAction::Delete(3));
        assert_eq!(ids(state.rows()), vec![1, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut state = RecordsState::new(seed::table_rows());
        state.delete_row(42);
        assert_eq!(state.rows(), seed::table_rows().as_slice());
    }

    #[test]
    fn test_delete_discards_search_view() {
        let mut state = RecordsState::new(seed::table_rows());
        state.search("python");
        assert_eq!(ids(&state.visible()), vec![1, 2, 3, 4]);
        state.delete_row(1);
        assert_eq!(ids(&state.visible()), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_display_index_is_position_not_id() {
        let mut state = RecordsState::new(seed::table_rows());
        state.delete_row(1);
        let numbered = state.numbered();
        assert_eq!(numbered[0].0, 1);
        assert_eq!(numbered[0].1.id, 2);
        assert_eq!(numbered.last().map(|(n, row)| (*n, row.id)), Some((6, 7)));
        assert_eq!(state.count(), 6);
    }

    #[test]
    fn test_count_tracks_search_results() {
        let mut state = RecordsState::new(seed::table_rows());
        state.search("лендинг");
        assert_eq!(state.count(), 2);
        assert_eq!(
            state.numbered().iter().map(|(n, row)| (*n, row.id)).collect::<Vec<_>>(),
            vec![(1, 5), (2, 6)]
        );
        state.search("no such project");
        assert_eq!(state.count(), 0);
        assert!(state.numbered().is_empty());
    }

    #[test]
    fn test_rerender_is_stable() {
        let mut state = RecordsState::new(seed::table_rows());
        state.search("javascript");
        assert_eq!(state.visible(), state.visible());
    }
}
