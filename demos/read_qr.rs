use std::error::Error;

use qrmark::QRError;

fn main() -> Result<(), Box<dyn Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: read_qr <image>");
        std::process::exit(2);
    };

    match qrmark::read_qr(&path) {
        Ok(text) => println!("Decoded message: {text}"),
        Err(QRError::Decode(e)) if e.symbol_present() => {
            println!("Found a QR code in {path} but could not read it: {e}")
        }
        Err(QRError::Decode(_)) => println!("No QR code found in the image: {path}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
