//! CamTimer Core - camera self-timer logic library
//!
//! This crate provides the logic core for CamTimer, a camera self-timer:
//! orientation resolution for preview and capture, preview-size selection,
//! the per-camera session cache around them, the tap-to-toggle countdown,
//! and the pipeline that bakes the computed rotation into a captured JPEG.
//!
//! Everything here is synchronous and platform-free. The embedding shell
//! owns the camera, the rendering surface, the clock, audio, and file
//! persistence, and feeds this crate plain values at each event:
//!
//! - on surface change: device orientation + viewport into
//!   [`session::PreviewSession::configure`], apply the returned rotation
//!   plan and preview size to the camera;
//! - on screen tap: [`countdown::ShutterTimer::tap`], then drive
//!   [`countdown::ShutterTimer::tick`] once per second, playing a sound on
//!   each tick and capturing on fire;
//! - on capture: [`capture::orient_jpeg`] with the image rotation from the
//!   current surface configuration, then write the bytes under
//!   [`capture::photo_filename`].

pub mod capture;
pub mod countdown;
pub mod orientation;
pub mod preview;
pub mod session;

pub use capture::{orient_jpeg, photo_filename, CaptureError, DEFAULT_JPEG_QUALITY};
pub use countdown::{CountdownEvent, ShutterDelay, ShutterTimer, TapAction};
pub use orientation::{
    display_rotation, image_rotation, resolve, Facing, Orientation, OrientationError,
    RotationPlan, SensorMount,
};
pub use preview::{select_preview_size, Resolution, Viewport, ASPECT_TOLERANCE};
pub use session::{
    next_camera_index, CameraDescriptor, CameraId, PreviewSession, SurfaceConfig,
};

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageEncoder;

    /// One full self-timer pass: configure the surface, run the countdown,
    /// orient the resulting photo.
    #[test]
    fn test_full_timer_flow() {
        let camera = CameraDescriptor::new(
            CameraId(1),
            SensorMount::new(Orientation::Deg270, Facing::Front),
            vec![Resolution::new(1280, 720), Resolution::new(640, 480)],
        );
        let mut session = PreviewSession::new(camera);

        // Portrait phone, front camera.
        let config = session.configure(Orientation::Deg0, Viewport::new(720, 1280));
        assert_eq!(config.rotation.display, Orientation::Deg90);
        assert_eq!(config.rotation.image, Orientation::Deg270);
        assert_eq!(config.preview_size, Some(Resolution::new(1280, 720)));

        // Tap, tick down, fire.
        let mut timer = ShutterTimer::new(ShutterDelay::TwoSeconds);
        assert_eq!(timer.tap(), TapAction::Started);
        assert_eq!(timer.tick(), Some(CountdownEvent::Tick { seconds_left: 1 }));
        assert_eq!(timer.tick(), Some(CountdownEvent::Fire));

        // Orient the captured bytes with the image rotation; a quarter turn
        // swaps the photo's dimensions.
        let photo = {
            let image = image::RgbImage::from_fn(16, 8, |x, _| image::Rgb([x as u8, 0, 0]));
            let mut buffer = std::io::Cursor::new(Vec::new());
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, 90)
                .write_image(
                    image.as_raw(),
                    16,
                    8,
                    image::ExtendedColorType::Rgb8,
                )
                .unwrap();
            buffer.into_inner()
        };
        let oriented = orient_jpeg(&photo, config.rotation.image, DEFAULT_JPEG_QUALITY).unwrap();
        let decoded = image::load_from_memory(&oriented).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 16));
    }
}
