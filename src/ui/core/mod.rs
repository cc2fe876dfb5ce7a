//! Core UI functionality for pixeltodo.
//!
//! This module contains the toolkit-independent building blocks the
//! controllers are written against: logical geometry, input events, actions,
//! text measurement and the [`Component`] trait. The only terminal-specific
//! piece is the [`event_handler`], which turns crossterm events into
//! [`InputEvent`]s in logical coordinates.
//!
//! # Module Components
//!
//! - [`actions`] - Domain actions and modal payloads
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal input collection and viewport scaling
//! - [`geometry`] - Points and rectangles on the 800x600 canvas
//! - [`input`] - Input events and keys
//! - [`measure`] - Text width measurement

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod geometry;
pub mod input;
pub mod measure;

pub use actions::{Action, EditTarget, EditingSession, PendingConfirmation};
pub use component::Component;
pub use event_handler::{EventHandler, Viewport};
pub use geometry::{Point, Rect};
pub use input::{InputEvent, Key};
pub use measure::{MonospaceMeasure, TextMeasure};
