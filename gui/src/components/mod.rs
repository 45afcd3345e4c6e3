// GUI components module
pub mod amount_input;
pub mod result_card;
pub mod result_grid;
pub mod toolbar;
