//! Configuration section definitions.
//!
//! | Module  | TOML Section | Purpose                          |
//! |---------|--------------|----------------------------------|
//! | `build` | `[build]`    | Paths, layout, output options    |
//! | `check` | `[check]`    | Dead-link failure level          |

mod build;
mod check;

pub use build::BuildConfig;
pub use check::{CheckConfig, CheckLevel};
