//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the application
//! shell, following ShadCN-UI design principles. Interactivity is split the
//! usual way: HTMX for anything that needs the server (fetching, selecting,
//! generating, chat submission), Alpine for purely local state (tree
//! expansion, dropdowns, dialogs).
//!
//! # Structure
//!
//! - [`app`]: Page layouts and routed pages
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`sidebar`]: Collection sidebar and collapsed header
//! - [`clustering`]: Clustering panel and tree view
//! - [`chat`]: Chat input form
//! - [`settings`]: Settings dialog and panel
//! - [`toast`]: Transient notifications

// Allow dead code for UI components that will be used in future iterations
#![allow(dead_code)]

pub mod app;
pub mod chat;
pub mod clustering;
pub mod components;
pub mod settings;
pub mod sidebar;
pub mod toast;
