use b64convert::{Base64Converter, util};
use std::{error::Error, path::Path};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <base64 string or file> <output path>", args[0]);
        std::process::exit(1);
    }
    let text = util::text_source(&args[1])?;

    let mut converter = Base64Converter::new();
    let written = converter.decode_to_file(Some(&text), Some(Path::new(&args[2])))?;
    println!("[Decoded File] {}", written.display());

    Ok(())
}
