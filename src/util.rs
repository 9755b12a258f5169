use std::{error::Error, fs, path::Path};

/// Returns the base64 text referred to by `input`: the contents of the file
/// at that path when one exists, otherwise the literal string itself.
/// Embedded whitespace is stripped either way, so pasted or wrapped base64
/// decodes cleanly.
pub fn text_source(input: &str) -> Result<String, Box<dyn Error>> {
    let path = Path::new(input);

    let text = if path.exists() && path.is_file() {
        // Definitely a real file
        fs::read_to_string(path)?
    } else {
        // Not a real file → treat as literal string
        input.to_string()
    };
    Ok(strip_whitespace(&text))
}

/// Drops every whitespace character, including newlines inside wrapped
/// base64 blobs.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
