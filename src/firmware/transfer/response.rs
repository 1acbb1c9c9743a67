use core::fmt::Write as _;

use heapless::String;

use super::super::types::REMOTE_PATH_MAX;

/// Extracts the leading three-digit status code from a server response
/// line. Anything that is not exactly three digits up front is treated
/// as unparseable rather than guessed at.
pub fn parse_status_code(line: &str) -> Option<u16> {
    let trimmed = line.trim_start();
    let digits = trimmed
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits != 3 {
        return None;
    }
    trimmed[..3].parse().ok()
}

pub fn is_positive_completion(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Joins the remote root and an artifact basename with a single slash.
pub fn remote_path(remote_root: &str, basename: &str) -> String<REMOTE_PATH_MAX> {
    let mut path = String::new();
    let root = remote_root.trim_end_matches('/');
    let _ = write!(&mut path, "{root}/{basename}");
    path
}
