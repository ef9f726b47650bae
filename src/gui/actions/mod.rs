// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, add, ...}.

mod git;      // src/gui/actions/git.rs
mod packages; // src/gui/actions/packages.rs
mod readme;   // src/gui/actions/readme.rs

pub use git::{pull, publish};
pub use packages::{add, confirm_remove, remove};
pub use readme::{generate, load};
