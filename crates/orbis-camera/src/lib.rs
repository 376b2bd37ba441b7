//! # orbis-camera
//!
//! Per-frame transform computation for the turntable camera.
//!
//! The render loop owns a [`CameraConfig`] and a [`TurntableState`] and
//! calls [`advance_frame`] once per tick to obtain the
//! projection / model-view / normal-matrix triple for the draw call.
//! There is no hidden state: the accumulated angle lives in the state
//! struct the caller passes in.

pub mod config;
pub mod frame;

pub use config::CameraConfig;
pub use frame::{advance_frame, FrameTransforms, TurntableState};
