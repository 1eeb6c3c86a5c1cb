use argh::FromArgs;
use std::path::PathBuf;

use keysharp::image::Image;
use keysharp::imgproc::filter::{sharpen_with, SharpenStrategy};
use keysharp::io::{
    read_image_any_gray8, read_image_rgb8, write_image_jpeg_gray8, write_image_jpeg_rgb8,
    DEFAULT_JPEG_QUALITY,
};
use keysharp_demos::control::wait_for_key;
use keysharp_demos::display::Display;

#[derive(FromArgs)]
/// Sharpen an image with each pixel access strategy and compare the results
struct Args {
    /// path to the input image
    #[argh(option, short = 'i', default = "PathBuf::from(\"boomer.jpg\")")]
    image_path: PathBuf,

    /// path of the sharpened image
    #[argh(option, short = 'o', default = "PathBuf::from(\"output.jpg\")")]
    output: PathBuf,

    /// load the image as a single gray channel
    #[argh(switch, short = 'g')]
    grayscale: bool,

    /// do not wait for a key between the steps
    #[argh(switch)]
    batch: bool,
}

const STRATEGIES: [SharpenStrategy; 3] = [
    SharpenStrategy::Indexed,
    SharpenStrategy::RowSlices,
    SharpenStrategy::Cursor,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    keysharp_demos::init_logger();

    let display = Display::new("Sharpen")?;

    if args.grayscale {
        let image = load_or_exit(read_image_any_gray8(&args.image_path));
        let sharpened = run(&display, &image, args.batch)?;
        write_image_jpeg_gray8(&args.output, &sharpened, DEFAULT_JPEG_QUALITY)?;
    } else {
        let image = load_or_exit(read_image_rgb8(&args.image_path));
        let sharpened = run(&display, &image, args.batch)?;
        write_image_jpeg_rgb8(&args.output, &sharpened, DEFAULT_JPEG_QUALITY)?;
    }

    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn load_or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(image) => image,
        Err(e) => {
            log::error!("could not load the input image: {e}");
            std::process::exit(keysharp_demos::LOAD_FAILURE_EXIT_CODE);
        }
    }
}

fn run<const C: usize>(
    display: &Display,
    image: &Image<u8, C>,
    batch: bool,
) -> Result<Image<u8, C>, Box<dyn std::error::Error>> {
    let mut stdin = std::io::stdin().lock();

    display.show("original", image)?;
    if !batch {
        wait_for_key(&mut stdin)?;
    }

    let mut results = Vec::with_capacity(STRATEGIES.len());
    for (i, strategy) in STRATEGIES.into_iter().enumerate() {
        let mut sharpened = Image::<u8, C>::from_size_val(image.size(), 0)?;

        let start = std::time::Instant::now();
        sharpen_with(image, &mut sharpened, strategy)?;
        log::info!("{strategy:?}: {:?}", start.elapsed());

        display.show(&format!("sharpened_{}", i + 1), &sharpened)?;
        if !batch {
            wait_for_key(&mut stdin)?;
        }

        results.push(sharpened);
    }

    let identical = results.windows(2).all(|pair| pair[0] == pair[1]);
    if identical {
        log::info!("all strategies produced identical images");
    } else {
        log::warn!("the strategies produced different images");
    }

    results
        .pop()
        .ok_or_else(|| "no sharpening strategy was run".into())
}
