use std::error::Error;

use image::{Rgb, RgbImage};
use qrmark::{container, OutputFormat};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let out = args.next().unwrap_or_else(|| "qr_logo.jpg".to_string());
    let content = args.next().unwrap_or_else(|| "中文".to_string());

    // Without a logo path, draw a placeholder badge
    let logo_path = match args.next() {
        Some(p) => p,
        None => {
            let badge = RgbImage::from_fn(120, 120, |x, y| Rgb([30, (x * 2) as u8, (y * 2) as u8]));
            container::save_file(&badge, OutputFormat::Png, "logo.png")?;
            "logo.png".to_string()
        }
    };

    let path = qrmark::create_qr_with_logo(&out, &logo_path, &content)?;
    println!("QR with logo saved to: {}", path.display());

    let text = qrmark::read_qr(&path)?;
    println!("Read back: {text}");
    Ok(())
}
