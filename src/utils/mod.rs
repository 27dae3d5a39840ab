const FALLBACK_FILENAME: &str = "download.mp4";

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect();

    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if cleaned.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("abc/def.mp4"), "abc_def.mp4");
        assert_eq!(sanitize_filename("dQw4w9WgXcQ.mp4"), "dQw4w9WgXcQ.mp4");
        assert_eq!(sanitize_filename("  ..clip.mp4. "), "clip.mp4");
    }

    #[test]
    fn test_empty_filename_falls_back() {
        assert_eq!(sanitize_filename(""), "download.mp4");
        assert_eq!(sanitize_filename(" . "), "download.mp4");
    }
}
