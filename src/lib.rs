//! A furnished room assembled from one cube mesh.
//!
//! Every piece of furniture is a scaled, rotated and translated copy of the
//! same 24-vertex cube. The crate keeps the scene, cameras, fan animation and
//! input handling free of any window or GPU so they can be exercised headless;
//! [`render::Renderer`] is the only part that touches wgpu.

pub mod app;
pub mod camera;
pub mod config;
pub mod controls;
pub mod error;
pub mod fan;
pub mod input;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod transform;

pub use app::{Frame, RoomState, ViewMode};
pub use camera::{CameraMovement, CameraSettings, FreeCamera, LookAtCamera};
pub use config::CliOptions;
pub use error::StartupError;
pub use fan::{CeilingFan, FanState};
pub use input::{InputState, KeyCode, NamedKey};
pub use render::{FrameUniforms, Renderer};
pub use scene::{DrawCommand, Group, Instance, Room};
pub use transform::{Axis, RootTransform, Transform};
