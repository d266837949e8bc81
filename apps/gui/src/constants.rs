pub const APP_ID: &str = "docseek";

pub const ID_PANEL_SEARCH_BAR: &str = "search_bar_panel";
pub const ID_RESULTS_MODAL: &str = "search_results_modal";

pub const SEARCH_BAR_HINT: &str = "Enter the term you want to search";
