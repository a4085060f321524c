pub const FOOD_LIST: &str = "/foods";
pub const FOOD_NEW: &str = "/foods/new";

/// Edit route for a stored entry.
pub fn food_edit(id: &str) -> String {
    format!("{}/{}", FOOD_LIST, id)
}
