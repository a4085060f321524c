pub mod edit_food_form;
pub mod food_row;
pub mod sidebar;
