pub mod food_entry;
pub mod food_list;
