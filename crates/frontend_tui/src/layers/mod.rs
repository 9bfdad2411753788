pub mod dialogs;
pub mod editor_pane;
pub mod menu_bar;
pub mod status_bar;
pub mod training_pane;
