use anyhow::Result;
use b64convert::{Base64Converter, util};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

fn main() -> Result<()> {
    let mut converter = Base64Converter::new();

    loop {
        println!();
        println!("[1] Encode a file to base64");
        println!("[2] Decode base64 into a file");
        println!("[3] Exit");
        let Some(choice) = prompt("> ")? else { break };

        match choice.as_str() {
            "1" => {
                let Some(path) = prompt("File to encode: ")? else {
                    break;
                };
                match converter.encode_file(Some(Path::new(&path))) {
                    Ok(text) => {
                        println!("[Encoded Text] {text}");
                        println!("[Done] {} characters", text.len());
                    }
                    Err(err) => eprintln!("[Error] {err}"),
                }
            }
            "2" => {
                let Some(text) = prompt("Base64 text: ")? else {
                    break;
                };
                let text = util::strip_whitespace(&text);
                let Some(dest) = prompt("Write decoded bytes to: ")? else {
                    break;
                };
                match converter.decode_to_file(Some(&text), Some(Path::new(&dest))) {
                    Ok(written) => {
                        let size = fs::metadata(&written)?.len();
                        let absolute = fs::canonicalize(&written)?;
                        println!("[Saved] {size} bytes -> {}", absolute.display());
                    }
                    Err(err) => eprintln!("[Error] {err}"),
                }
            }
            "3" => break,
            other => eprintln!("[Error] unknown choice: {other}"),
        }
    }

    Ok(())
}

/// Prints `label` and reads one trimmed line. `None` means stdin hit EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
