use std::io::BufRead;

/// Next line without its line ending, or `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn parse_number(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
