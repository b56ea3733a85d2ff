//! Spatial layout engine for the dashboard builder.
//!
//! Widgets live on a bounded canvas and must never overlap. This crate snaps
//! dropped and dragged widgets to the grid, detects collisions, and searches
//! outward from the requested spot for the nearest free position. The host
//! owns pointer capture and rendering; it calls the [`controller`] when a
//! gesture ends and persists the returned [`controller::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Points, rectangles, canvas size, and overlap primitives |
//! | [`grid`] | Grid snapping for coordinates and sizes |
//! | [`collision`] | Widget footprints and collision queries |
//! | [`placement`] | Ring search for the nearest free position |
//! | [`store`] | In-memory widget store and selection |
//! | [`controller`] | Drop, move, resize, and preview entry points |
//! | [`config`] | Layout configuration and environment overrides |
//! | [`consts`] | Shared numeric constants (grid pitch, minimum sizes, etc.) |

pub mod collision;
pub mod config;
pub mod consts;
pub mod controller;
pub mod geom;
pub mod grid;
pub mod placement;
pub mod store;
