//! Camera-follow rig for scripted 3D simulation hosts.
//!
//! camrig keeps an invisible actor glued to a free camera — smoothed or
//! snapped, with vehicle-inertia lead — carries an optional prop at a
//! tunable local offset on that actor, and eases the camera's field of
//! view toward a zoom target with separate in/out rates. A shared lock
//! gates every tuning control behind one toggle.
//!
//! The crate has no frame loop and no input backend of its own. The
//! embedder implements [`host::Host`] over its engine (entity spawning,
//! pose reads/writes, camera FOV, held-control polling) and drives a
//! [`rig::CameraRig`] with two calls: [`rig::CameraRig::on_key_event`]
//! for each key-down and [`rig::CameraRig::on_frame`] once per frame,
//! after the events.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - the facade owning all rig state
//! - [`host::Host`] - the trait the embedder implements
//! - [`options::Options`] - runtime configuration (follower, zoom,
//!   attachment, keybindings), TOML round-trippable
//! - [`util::angle`] - wrap-safe angle interpolation primitives

pub mod attachment;
pub mod command;
pub mod error;
pub mod follower;
pub mod host;
pub mod inertia;
pub mod input;
pub mod options;
pub mod rig;
pub mod util;
pub mod zoom;

pub use command::{OffsetAxis, RigCommand, StepDirection};
pub use error::RigError;
pub use host::{
    CameraSample, EntityBasis, EntityHandle, HeldControl, Host,
};
pub use input::{Key, KeyAction, KeyEvent, Modifiers};
pub use options::Options;
pub use rig::{CameraRig, Notice, RigStatus};
pub use zoom::ZoomMode;
