use argh::FromArgs;
use std::path::PathBuf;

use keysharp::imgproc::chroma_key::{ChromaKeySession, Threshold, DEFAULT_THRESHOLD};
use keysharp::imgproc::histogram::DEFAULT_BUCKETS;
use keysharp::io::{read_image_rgb8, write_image_jpeg_rgb8, DEFAULT_JPEG_QUALITY};
use keysharp_demos::control::{ControlEvent, ThresholdControl};
use keysharp_demos::display::Display;

#[derive(FromArgs)]
/// Replace the dominant color of a foreground image with a tiled background
struct Args {
    /// path to the foreground image
    #[argh(option, short = 'f', default = "PathBuf::from(\"foreground.jpg\")")]
    foreground: PathBuf,

    /// path to the background image
    #[argh(option, short = 'b', default = "PathBuf::from(\"background.jpg\")")]
    background: PathBuf,

    /// path of the composited image
    #[argh(option, short = 'o', default = "PathBuf::from(\"overlay.jpg\")")]
    output: PathBuf,

    /// initial color distance threshold in [0, 255]
    #[argh(option, short = 't', default = "i64::from(DEFAULT_THRESHOLD)")]
    threshold: i64,

    /// number of histogram buckets per channel, must divide 256
    #[argh(option, default = "DEFAULT_BUCKETS")]
    buckets: usize,

    /// composite once and exit without reading thresholds from stdin
    #[argh(switch)]
    batch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    keysharp_demos::init_logger();

    let threshold = Threshold::try_from(args.threshold)?;

    // both images are required, a missing one ends the demo
    let (foreground, background) = match (
        read_image_rgb8(&args.foreground),
        read_image_rgb8(&args.background),
    ) {
        (Ok(foreground), Ok(background)) => (foreground, background),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("could not load the input images: {e}");
            std::process::exit(keysharp_demos::LOAD_FAILURE_EXIT_CODE);
        }
    };

    let mut session =
        ChromaKeySession::with_buckets(foreground, background, threshold, args.buckets)?;

    let display = Display::new("Chroma Key")?;
    display.show("foreground", session.foreground())?;
    display.show("background", session.background())?;
    log_composite(&session);
    display.show("overlay", session.output())?;

    if !args.batch {
        log::info!("enter a threshold in [0, 255], an empty line or `q` to finish");
        let mut control = ThresholdControl::new(std::io::stdin().lock());
        loop {
            match control.next_event()? {
                ControlEvent::Threshold(threshold) => {
                    let output = session.set_threshold(threshold)?;
                    display.show("overlay", output)?;
                    log_composite(&session);
                }
                ControlEvent::Invalid(reason) => log::warn!("{reason}"),
                ControlEvent::Quit => break,
            }
        }
    }

    let overlay = session.into_output();
    write_image_jpeg_rgb8(&args.output, &overlay, DEFAULT_JPEG_QUALITY)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn log_composite(session: &ChromaKeySession) {
    let dominant = session.dominant_color();
    log::info!(
        "threshold {}: key color {:?} from bucket {:?} with {} votes",
        session.threshold(),
        dominant.color,
        dominant.bucket,
        dominant.votes
    );
}
