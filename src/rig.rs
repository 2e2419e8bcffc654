//! The rig facade: one object owning every subsystem and both host
//! entry points.
//!
//! The embedder drives a [`CameraRig`] with exactly two calls — one per
//! key-down event, one per frame — from its scheduler. The two are never
//! reentrant and never concurrent; all mutable state lives here, behind
//! `&mut self`. Input-driven state changes are visible to the same
//! frame's updates: a toggle takes effect on the very next render.

use std::fmt;

use glam::Vec3;

use crate::attachment::OffsetAttachment;
use crate::command::RigCommand;
use crate::error::RigError;
use crate::follower::PoseFollower;
use crate::host::Host;
use crate::input::{InputRouter, KeyEvent, RouteContext};
use crate::options::Options;
use crate::zoom::{ZoomController, ZoomMode};

/// User-facing outcome of a command, for the embedder's HUD/subtitle
/// layer. `Display` gives the ready-made message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The tracked actor was spawned.
    ActorSpawned,
    /// The tracked actor (and its prop) was deleted.
    ActorDeleted,
    /// The shared lock engaged; gated controls are now ignored.
    ControlsLocked,
    /// The shared lock released.
    ControlsUnlocked,
    /// A gated command was ignored because the lock is engaged.
    Locked,
    /// The embedder should persist the current offset/zoom state.
    SettingsSaved,
    /// Visibility/collision override turned on.
    VisibilityEnabled,
    /// Visibility/collision override turned off.
    VisibilityDisabled,
    /// The attachment prop is now shown.
    AttachmentVisible,
    /// The attachment prop is now hidden.
    AttachmentHidden,
    /// Zoom input switched mode.
    ZoomMode(ZoomMode),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActorSpawned => write!(f, "Follower spawned"),
            Self::ActorDeleted => write!(f, "Follower deleted"),
            Self::ControlsLocked => write!(f, "Controls locked"),
            Self::ControlsUnlocked => write!(f, "Controls unlocked"),
            Self::Locked => {
                write!(f, "Controls are locked (toggle lock to enable)")
            }
            Self::SettingsSaved => write!(f, "Settings saved"),
            Self::VisibilityEnabled => {
                write!(f, "Follower visibility/collision enabled")
            }
            Self::VisibilityDisabled => {
                write!(f, "Follower visibility/collision disabled")
            }
            Self::AttachmentVisible => write!(f, "Attachment visible"),
            Self::AttachmentHidden => write!(f, "Attachment hidden"),
            Self::ZoomMode(mode) => {
                write!(f, "Zoom mode: {}", mode.label())
            }
        }
    }
}

/// Read-only snapshot of everything a HUD wants to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigStatus {
    /// Whether the tracked actor currently exists.
    pub actor_spawned: bool,
    /// Whether the attachment prop is toggled visible.
    pub prop_visible: bool,
    /// Whether the shared control lock is engaged.
    pub locked: bool,
    /// Attachment position offset (local space).
    pub offset: Vec3,
    /// Attachment rotation offset (local space, degrees).
    pub rotation_offset: Vec3,
    /// FOV being rendered this frame.
    pub current_fov: f32,
    /// FOV the zoom controller is easing toward.
    pub target_fov: f32,
    /// Active zoom-in ease rate.
    pub ease_in: f32,
    /// Active zoom-out ease rate.
    pub ease_out: f32,
    /// Current zoom input mode.
    pub zoom_mode: ZoomMode,
}

/// The camera-follow rig: follower, attachment, zoom, and the shared
/// lock, driven by two host entry points.
pub struct CameraRig {
    options: Options,
    router: InputRouter,
    follower: PoseFollower,
    attachment: OffsetAttachment,
    zoom: ZoomController,
    locked: bool,
}

impl CameraRig {
    /// A rig with the given options, unlocked, nothing spawned.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let zoom = ZoomController::new(&options.zoom);
        Self {
            options,
            router: InputRouter::new(),
            follower: PoseFollower::new(),
            attachment: OffsetAttachment::new(),
            zoom,
            locked: false,
        }
    }

    /// A rig that adopts the host camera's live FOV as its zoom
    /// baseline.
    #[must_use]
    pub fn attached_to<H: Host + ?Sized>(host: &H, options: Options) -> Self {
        let mut rig = Self::new(options);
        rig.zoom.adopt_camera(host);
        rig
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable options access for the embedder's settings UI.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Whether the shared control lock is engaged.
    #[must_use]
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Engage or release the lock externally. Also gates zoom.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        self.zoom.set_enabled(!locked);
    }

    /// Direct access to the zoom controller (for embedder-driven scroll
    /// events and enablement).
    pub fn zoom_mut(&mut self) -> &mut ZoomController {
        &mut self.zoom
    }

    /// Status snapshot for display.
    #[must_use]
    pub fn status(&self) -> RigStatus {
        RigStatus {
            actor_spawned: self.follower.actor().is_some(),
            prop_visible: self.attachment.visible(),
            locked: self.locked,
            offset: self.attachment.offset(),
            rotation_offset: self.attachment.rotation_offset(),
            current_fov: self.zoom.current_fov(),
            target_fov: self.zoom.target_fov(),
            ease_in: self.zoom.ease_in(),
            ease_out: self.zoom.ease_out(),
            zoom_mode: self.zoom.mode(),
        }
    }

    /// Key-event entry point: route, then execute.
    ///
    /// # Errors
    /// Propagates spawn-path failures ([`RigError::AssetNotFound`],
    /// [`RigError::AssetLoadTimeout`], [`RigError::Spawn`]); everything
    /// else degrades to a notice or a silent no-op.
    pub fn on_key_event<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: KeyEvent,
    ) -> Result<Option<Notice>, RigError> {
        let ctx = RouteContext {
            unlocked: !self.locked,
            attachment_adjustable: self.follower.is_spawned(host)
                && self.attachment.adjustable(host),
        };
        let Some(cmd) = self.router.route(event, &self.options.keybindings, ctx)
        else {
            return Ok(None);
        };
        self.execute(host, cmd)
    }

    /// Execute one command. All lock gating lives here: a gated command
    /// arriving while locked changes nothing and reports
    /// [`Notice::Locked`].
    ///
    /// # Errors
    /// Spawn-path failures only; see [`Self::on_key_event`].
    pub fn execute<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        cmd: RigCommand,
    ) -> Result<Option<Notice>, RigError> {
        match cmd {
            RigCommand::ToggleActor => self.toggle_actor(host),
            RigCommand::ToggleLock => {
                self.set_locked(!self.locked);
                log::debug!("controls locked: {}", self.locked);
                Ok(Some(if self.locked {
                    Notice::ControlsLocked
                } else {
                    Notice::ControlsUnlocked
                }))
            }
            RigCommand::SaveSettings => {
                if self.locked {
                    return Ok(Some(Notice::Locked));
                }
                Ok(Some(Notice::SettingsSaved))
            }
            RigCommand::ToggleVisibility => {
                if self.locked {
                    return Ok(Some(Notice::Locked));
                }
                if !self.follower.is_spawned(host) {
                    return Ok(None);
                }
                let on = self.follower.toggle_visibility_override(host);
                Ok(Some(if on {
                    Notice::VisibilityEnabled
                } else {
                    Notice::VisibilityDisabled
                }))
            }
            RigCommand::ToggleAttachment => {
                if self.locked {
                    return Ok(Some(Notice::Locked));
                }
                let Some(actor) = self.follower.live_actor(host) else {
                    return Ok(None);
                };
                let visible = self.attachment.toggle(
                    host,
                    actor,
                    &self.options.attachment,
                )?;
                Ok(Some(if visible {
                    Notice::AttachmentVisible
                } else {
                    Notice::AttachmentHidden
                }))
            }
            RigCommand::ToggleZoomMode => {
                if self.locked {
                    return Ok(Some(Notice::Locked));
                }
                Ok(Some(Notice::ZoomMode(self.zoom.toggle_mode())))
            }
            RigCommand::NudgeOffset { axis, direction } => {
                self.attachment.nudge_offset(
                    axis,
                    direction,
                    &self.options.attachment,
                );
                Ok(None)
            }
            RigCommand::NudgePitch { direction } => {
                self.attachment
                    .nudge_pitch(direction, &self.options.attachment);
                Ok(None)
            }
        }
    }

    /// Spawn-or-delete the tracked actor. Deleting also tears down the
    /// attachment prop synchronously, in the same operation — no
    /// orphaned prop, ever.
    fn toggle_actor<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<Option<Notice>, RigError> {
        if self.follower.is_spawned(host) {
            self.follower.despawn(host);
            self.attachment.teardown(host);
            Ok(Some(Notice::ActorDeleted))
        } else {
            let _ = self.follower.spawn(host, &self.options.follower)?;
            Ok(Some(Notice::ActorSpawned))
        }
    }

    /// Frame entry point: follower, then attachment, then zoom.
    ///
    /// Runs after any key events this frame, so their state changes are
    /// already visible. Every step silently skips missing dependencies
    /// and re-evaluates next frame.
    pub fn on_frame<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.follower.update(host, &self.options.follower);
        if let Some(actor) = self.follower.live_actor(host) {
            self.attachment.update(host, actor);
        }
        self.zoom.update(host, &self.options.zoom);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
