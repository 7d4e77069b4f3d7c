//! Wallpaper generation: scale planning plus an external rasterizer

// Use 3rd party
use async_trait::async_trait;
use log::{debug, error};
use thiserror::Error;

// Use built-in library
use std::cell::Cell;

// Use internal modules
use crate::model::device::DeviceProfile;
use crate::model::display::DisplayTrack;
use crate::planner::{plan_scale, PlanError, ScalePlan};

pub const FAILURE_MESSAGE: &str = "Failed to generate wallpaper. Please try again.";

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("surface is not attached")]
    Detached,
    #[error("capture failed: {0}")]
    Capture(String),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no track loaded")]
    NoTrack,
    #[error("a wallpaper is already being generated")]
    Busy,
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

impl GenerateError {
    /// The single alert shown for any generation failure.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

/// What the rasterizer is asked to produce: the surface magnified by
/// `scale` from its top left corner, `width` x `height` pixels, uncropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureOptions {
    pub scale: f64,
    pub width: u32,
    pub height: u32,
}

impl From<&ScalePlan> for CaptureOptions {
    fn from(plan: &ScalePlan) -> Self {
        let (width, height) = plan.output_pixels();
        Self {
            scale: plan.scale,
            width,
            height,
        }
    }
}

/// One encoded image as produced by the rasterizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub data: Vec<u8>,
}

/// Captures a rendered card surface into an image.
///
/// Surfaces usually belong to a UI thread, so captures are not `Send`.
#[async_trait(?Send)]
pub trait Rasterizer {
    type Surface: ?Sized;

    async fn capture(
        &self,
        surface: &Self::Surface,
        options: &CaptureOptions,
    ) -> Result<RasterImage, RasterError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wallpaper {
    pub file_name: String,
    pub plan: ScalePlan,
    pub image: RasterImage,
}

/// `spotify-wallpaper-4k-{song}-{device}.png`, with every character of the
/// song name outside `[A-Za-z0-9]` replaced by `-`.
pub fn wallpaper_file_name(song_name: &str, device: DeviceProfile) -> String {
    let song: String = song_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("spotify-wallpaper-4k-{}-{}.png", song, device)
}

// Clears the in-flight flag however generation ends
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Runs one generation at a time.
#[derive(Debug, Default)]
pub struct Generator {
    in_flight: Cell<bool>,
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn generate<R: Rasterizer>(
        &self,
        rasterizer: &R,
        surface: &R::Surface,
        rendered_width: f64,
        rendered_height: f64,
        device: DeviceProfile,
        track: &DisplayTrack,
    ) -> Result<Wallpaper, GenerateError> {
        if self.in_flight.replace(true) {
            return Err(GenerateError::Busy);
        }
        let _latch = InFlight(&self.in_flight);

        let result = Self::render(
            rasterizer,
            surface,
            rendered_width,
            rendered_height,
            device,
            track,
        )
        .await;
        if let Err(error) = &result {
            error!("Error generating wallpaper: {}", error);
        }
        result
    }

    async fn render<R: Rasterizer>(
        rasterizer: &R,
        surface: &R::Surface,
        rendered_width: f64,
        rendered_height: f64,
        device: DeviceProfile,
        track: &DisplayTrack,
    ) -> Result<Wallpaper, GenerateError> {
        let plan = plan_scale(device, rendered_width, rendered_height)?;
        let options = CaptureOptions::from(&plan);
        debug!(
            "Generating 4K wallpaper: {}x{} (scale: {:.2}x)",
            plan.target_width, plan.target_height, plan.scale
        );

        let image = rasterizer.capture(surface, &options).await?;

        Ok(Wallpaper {
            file_name: wallpaper_file_name(&track.song_name, device),
            plan,
            image,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::sync::Notify;

    /// Returns the surface bytes, or fails when the surface is empty.
    #[derive(Default)]
    pub struct FakeRasterizer {
        pub calls: RefCell<Vec<CaptureOptions>>,
    }

    #[async_trait(?Send)]
    impl Rasterizer for FakeRasterizer {
        type Surface = str;

        async fn capture(
            &self,
            surface: &str,
            options: &CaptureOptions,
        ) -> Result<RasterImage, RasterError> {
            self.calls.borrow_mut().push(*options);
            if surface.is_empty() {
                return Err(RasterError::Detached);
            }
            Ok(RasterImage {
                data: surface.as_bytes().to_vec(),
            })
        }
    }

    struct GatedRasterizer {
        gate: Notify,
    }

    #[async_trait(?Send)]
    impl Rasterizer for GatedRasterizer {
        type Surface = str;

        async fn capture(
            &self,
            _surface: &str,
            _options: &CaptureOptions,
        ) -> Result<RasterImage, RasterError> {
            self.gate.notified().await;
            Ok(RasterImage { data: vec![1] })
        }
    }

    pub fn track() -> DisplayTrack {
        DisplayTrack {
            song_name: "Kickstart My Heart!".to_owned(),
            artist_name: "Mötley Crüe".to_owned(),
            album_art: String::new(),
            duration: "4:42".to_owned(),
            spotify_url: "https://open.spotify.com/track/abc".to_owned(),
        }
    }

    #[test]
    fn file_name() {
        assert_eq!(
            wallpaper_file_name("Kickstart My Heart!", DeviceProfile::Pc),
            "spotify-wallpaper-4k-Kickstart-My-Heart--pc.png"
        );
        assert_eq!(
            wallpaper_file_name("Crüe", DeviceProfile::Mobile),
            "spotify-wallpaper-4k-Cr-e-mobile.png"
        );
    }

    #[test]
    fn user_message() {
        assert_eq!(GenerateError::Busy.user_message(), FAILURE_MESSAGE);
        assert_eq!(
            GenerateError::from(RasterError::Detached).user_message(),
            "Failed to generate wallpaper. Please try again."
        );
    }

    #[tokio::test]
    async fn generate() {
        let generator = Generator::new();
        let rasterizer = FakeRasterizer::default();

        let wallpaper = generator
            .generate(&rasterizer, "card", 300.0, 500.0, DeviceProfile::Mobile, &track())
            .await
            .unwrap();

        assert_eq!(wallpaper.file_name, "spotify-wallpaper-4k-Kickstart-My-Heart--mobile.png");
        assert_eq!(wallpaper.image.data, b"card".to_vec());
        let calls = rasterizer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!((calls[0].width, calls[0].height), (1440, 2400));
        assert!((calls[0].scale - 4.8).abs() < 1e-9);
        assert!(!generator.is_generating());
    }

    #[tokio::test]
    async fn invalid_geometry_skips_capture() {
        let generator = Generator::new();
        let rasterizer = FakeRasterizer::default();

        let error = generator
            .generate(&rasterizer, "card", 0.0, 500.0, DeviceProfile::Tablet, &track())
            .await
            .unwrap_err();

        assert!(matches!(error, GenerateError::Plan(PlanError::InvalidGeometry { .. })));
        assert!(rasterizer.calls.borrow().is_empty());
        assert!(!generator.is_generating());
    }

    #[tokio::test]
    async fn rasterizer_failure_releases_latch() {
        let generator = Generator::new();
        let rasterizer = FakeRasterizer::default();

        let error = generator
            .generate(&rasterizer, "", 300.0, 500.0, DeviceProfile::Mobile, &track())
            .await
            .unwrap_err();
        assert!(matches!(error, GenerateError::Raster(RasterError::Detached)));
        assert!(!generator.is_generating());

        // A manual retry goes through
        assert!(generator
            .generate(&rasterizer, "card", 300.0, 500.0, DeviceProfile::Mobile, &track())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn second_generation_is_refused_while_one_is_outstanding() {
        let generator = Generator::new();
        let rasterizer = GatedRasterizer { gate: Notify::new() };
        let track = track();

        let first =
            generator.generate(&rasterizer, "card", 300.0, 500.0, DeviceProfile::Pc, &track);
        tokio::pin!(first);

        // Drive the first generation until it waits on the rasterizer
        tokio::select! {
            biased;
            _ = &mut first => panic!("capture should still be pending"),
            _ = std::future::ready(()) => {}
        }
        assert!(generator.is_generating());

        let second = generator
            .generate(&rasterizer, "card", 300.0, 500.0, DeviceProfile::Pc, &track)
            .await;
        assert!(matches!(second, Err(GenerateError::Busy)));
        assert!(generator.is_generating());

        rasterizer.gate.notify_one();
        assert!(first.await.is_ok());
        assert!(!generator.is_generating());
    }

    #[tokio::test]
    async fn dropped_generation_releases_latch() {
        let generator = Generator::new();
        let rasterizer = GatedRasterizer { gate: Notify::new() };
        let track = track();

        {
            let pending =
                generator.generate(&rasterizer, "card", 300.0, 500.0, DeviceProfile::Pc, &track);
            tokio::pin!(pending);
            tokio::select! {
                biased;
                _ = &mut pending => panic!("capture should still be pending"),
                _ = std::future::ready(()) => {}
            }
            assert!(generator.is_generating());
        }

        assert!(!generator.is_generating());
    }
}
