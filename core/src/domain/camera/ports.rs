use std::future::Future;

use crate::domain::camera::entities::{CameraError, MediaConstraints, VideoFrame};

/// A live media stream made of one or more tracks.
pub trait MediaStream: Send {
    fn active_tracks(&self) -> usize;

    fn grab_frame(&mut self) -> Result<VideoFrame, CameraError>;

    /// Stops every track. Must be safe to call more than once.
    fn stop(&mut self);
}

/// Platform media-capture subsystem.
pub trait MediaDevices: Send + Sync {
    type Stream: MediaStream;

    fn get_user_media(
        &self,
        constraints: MediaConstraints,
    ) -> impl Future<Output = Result<Self::Stream, CameraError>> + Send;
}
