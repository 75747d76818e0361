use base64::{Engine as _, engine::general_purpose};
use image::{ExtendedColorType, ImageEncoder, codecs::jpeg::JpegEncoder};

use crate::domain::{
    camera::{
        entities::{CameraError, CameraState, JPEG_QUALITY, MediaConstraints, VideoFrame},
        ports::{MediaDevices, MediaStream},
    },
    food_input::{entities::FoodInput, services::InputCollector},
};

/// Owns an acquired stream and stops its tracks when dropped.
struct StreamGuard<S>
where
    S: MediaStream,
{
    stream: S,
}

impl<S> Drop for StreamGuard<S>
where
    S: MediaStream,
{
    fn drop(&mut self) {
        self.stream.stop();
        tracing::debug!("camera stream released");
    }
}

enum Session<S>
where
    S: MediaStream,
{
    Closed,
    Requesting,
    Streaming(StreamGuard<S>),
    Denied(CameraError),
}

/// Live camera preview that freezes a frame into a JPEG data URI.
///
/// `Closed -> Requesting -> Streaming -> Closed`, or `Requesting -> Denied`
/// when access fails. The stream is released on close, on capture and when
/// the adapter itself is dropped.
pub struct CameraCapture<D>
where
    D: MediaDevices,
{
    devices: D,
    session: Session<D::Stream>,
}

impl<D> CameraCapture<D>
where
    D: MediaDevices,
{
    pub fn new(devices: D) -> Self {
        Self {
            devices,
            session: Session::Closed,
        }
    }

    pub fn state(&self) -> CameraState {
        match &self.session {
            Session::Closed => CameraState::Closed,
            Session::Requesting => CameraState::Requesting,
            Session::Streaming(_) => CameraState::Streaming,
            Session::Denied(e) => CameraState::Denied(e.clone()),
        }
    }

    pub fn active_tracks(&self) -> usize {
        match &self.session {
            Session::Streaming(guard) => guard.stream.active_tracks(),
            _ => 0,
        }
    }

    /// Starts the preview. A no-op while already streaming.
    pub async fn open(&mut self) -> Result<(), CameraError> {
        if matches!(self.session, Session::Streaming(_)) {
            return Ok(());
        }

        self.session = Session::Requesting;

        match self
            .devices
            .get_user_media(MediaConstraints::rear_camera())
            .await
        {
            Ok(stream) => {
                self.session = Session::Streaming(StreamGuard { stream });
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Camera access failed: {}", e);
                self.session = Session::Denied(e.clone());
                Err(e)
            }
        }
    }

    /// Freezes the current frame, then closes the preview.
    pub fn capture(&mut self) -> Result<String, CameraError> {
        let Session::Streaming(guard) = &mut self.session else {
            return Err(CameraError::NotStreaming);
        };

        let frame = guard.stream.grab_frame()?;
        let data_url = encode_jpeg_data_url(&frame, JPEG_QUALITY)?;

        self.close();
        Ok(data_url)
    }

    /// Captures a still and appends it to `collector` as a camera input.
    pub fn capture_into<'a>(
        &mut self,
        collector: &'a mut InputCollector,
    ) -> Result<&'a FoodInput, CameraError> {
        let data_url = self.capture()?;
        Ok(collector.add_camera_input(data_url)?)
    }

    pub fn close(&mut self) {
        self.session = Session::Closed;
    }
}

/// Encodes an RGB8 frame as `data:image/jpeg;base64,...`.
pub fn encode_jpeg_data_url(frame: &VideoFrame, quality: u8) -> Result<String, CameraError> {
    let expected = frame.width as usize * frame.height as usize * 3;
    if frame.width == 0 || frame.height == 0 || frame.rgb.len() != expected {
        return Err(CameraError::InvalidFrame(format!(
            "{}x{} frame with {} bytes",
            frame.width,
            frame.height,
            frame.rgb.len()
        )));
    }

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .write_image(&frame.rgb, frame.width, frame.height, ExtendedColorType::Rgb8)
        .map_err(|e| CameraError::Encoding(e.to_string()))?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(&jpeg)
    ))
}
