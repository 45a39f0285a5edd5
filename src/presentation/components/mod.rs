pub mod category_state;
pub mod column_options;
pub mod view_mode;

pub use category_state::OptionCategoryState;
pub use column_options::{
    CategorySection, ColumnOptionsView, OptionCheckbox, available_categories, section_summary,
};
pub use view_mode::{
    AppViewMode, CardViewMode, app_view_mode, card_view_mode, enable_compact_labels,
};
