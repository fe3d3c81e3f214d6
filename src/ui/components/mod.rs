pub mod confirm_dialog;
pub mod editor_panel;
pub mod entry_list;
pub mod help;
pub mod status_bar;
