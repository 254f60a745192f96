//! Shared helpers.
//!
//! | Module   | Purpose                              |
//! |----------|--------------------------------------|
//! | `date`   | Dependency-free UTC date parsing     |
//! | `hash`   | blake3 content hashing               |
//! | `html`   | Entity escaping for HTML/SVG text    |
//! | `mime`   | Content-Type constants and detection |
//! | `plural` | Count formatting for log lines       |

pub mod date;
pub mod hash;
pub mod html;
pub mod mime;
pub mod plural;

pub use plural::plural_count;
