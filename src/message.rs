use crate::screens::Tab;
use crate::state::CategoryFilter;

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    CellEdited {
        metric: &'static str,
        week: usize,
        value: String,
    },
    SelectCategory(CategoryFilter),
}
