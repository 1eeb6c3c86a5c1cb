use keysharp::image::Image;

/// A named set of image windows.
///
/// With the `viz` feature the images are logged to a spawned rerun viewer,
/// otherwise only their sizes are logged.
pub struct Display {
    #[cfg(feature = "viz")]
    rec: rerun::RecordingStream,
}

impl Display {
    /// Open the display for the given application name.
    pub fn new(app_name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        #[cfg(feature = "viz")]
        {
            let rec = rerun::RecordingStreamBuilder::new(app_name).spawn()?;
            return Ok(Self { rec });
        }

        #[cfg(not(feature = "viz"))]
        {
            log::debug!("{app_name}: built without the viz feature, images are not shown");
            return Ok(Self {});
        }
    }

    /// Show an image in the window called `name`, replacing its previous content.
    pub fn show<const C: usize>(
        &self,
        name: &str,
        image: &Image<u8, C>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("{name}: {}", image.size());

        #[cfg(feature = "viz")]
        {
            let color_model = match C {
                1 => rerun::ColorModel::L,
                _ => rerun::ColorModel::RGB,
            };
            self.rec.log(
                name,
                &rerun::Image::from_elements(image.as_slice(), image.size().into(), color_model),
            )?;
        }

        Ok(())
    }
}
