use b64convert::Base64Converter;
use std::{error::Error, path::Path};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file path>", args[0]);
        std::process::exit(1);
    }
    let mut converter = Base64Converter::new();
    println!(
        "[Encoded Text] {}",
        converter.encode_file(Some(Path::new(&args[1])))?
    );

    Ok(())
}
