// src/gui/components/mod.rs
pub mod action_buttons;
pub mod dialogs;
pub mod dir_browser;
pub mod log_panel;
pub mod package_table;
pub mod path_bar;
