// src/readme/mod.rs
//
// README in and out. `render` produces the whole file from scratch every
// time; `parse` reads package names back out of a previously rendered one.

mod parse;
mod render;

pub use parse::extract_names;
pub use render::{render, render_at, render_package_list, render_package_list_at, table_row};
