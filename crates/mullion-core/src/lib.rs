//! Platform-free frameless window chrome logic.
//!
//! This crate holds everything that makes a frameless window behave like a
//! native one without touching a real window system: hit-test
//! classification, interactive-region tracking, the maximize/restore state
//! machine, decoration hints, and the message dispatcher that ties them
//! together. The platform boundary is the [`host::WindowHost`] trait; the
//! `mullion` crate provides the winit-backed implementation, and
//! [`host::HeadlessHost`] stands in for tests.
//!
//! # Overview
//!
//! A host message flows through [`interceptor::MessageInterceptor`]:
//!
//! - a non-client size query is answered with "the full rectangle is
//!   client area", so the application draws its own chrome;
//! - a hit-test query is classified by [`hit_test::classify`] against the
//!   window's current geometry and the
//!   [`regions::InteractiveRegionRegistry`];
//! - a size/state-changed notification reconciles
//!   [`state::ChromeStateController`] against the host's authoritative
//!   maximize flag and triggers a visual refresh;
//! - everything else returns to default processing.
//!
//! All of it runs synchronously on the UI thread; nothing here blocks,
//! sleeps, or performs I/O.

pub mod config;
pub mod decoration;
pub mod geometry;
pub mod host;
pub mod interceptor;
pub mod regions;
pub mod state;
pub mod theme;

pub use config::ChromeConfig;
pub use decoration::{CornerStyle, DecorationError};
pub use geometry::{Insets, Point, Rect, ScreenPoint, ScreenRect, Size};
pub use hit_test::{DEFAULT_RESIZE_BORDER, HitZone, classify};
pub use host::{HeadlessHost, WindowHost, WindowStateCommand};
pub use interceptor::{HostMessage, MessageInterceptor, MessageReply};
pub use regions::{FixedRegion, InteractiveRegionRegistry, RegionBounds, RegionId};
pub use state::{ChromeRefresh, ChromeState, ChromeStateController, RefreshReason};
