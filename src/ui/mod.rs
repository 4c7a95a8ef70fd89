pub mod assistant;
pub mod badges;
pub mod content_row;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod player;
pub mod search_grid;
pub mod toast;
