//! Declarative route table and the switch that renders it.
//!
//! ARCHITECTURE
//! ============
//! `pattern` parses and matches path templates, `params` exposes captures to
//! views, `table` holds the ordered declarations and resolves a path for a
//! viewer, and `switch` renders the resolution. Everything except `switch` is
//! plain data and runs without a browser.

pub mod params;
pub mod pattern;
pub mod switch;
pub mod table;
pub mod view;
