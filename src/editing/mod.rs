// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod mouse;
pub mod session;
pub mod undo;
pub mod viewport;

pub use hit_test::{ControlField, ControlHandle, HitTarget};
pub use mouse::{MouseDelegate, MouseEvent};
pub use session::EditSession;
pub use undo::UndoState;
pub use viewport::ViewPort;
