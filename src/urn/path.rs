/*
  Lexical POSIX path algebra. Never touches the filesystem:
  the same input gives the same output on every platform.
*/

/// Collapses `.` and `..` segments and duplicate separators.
/// An empty path normalizes to `"."`, trailing separators are dropped,
/// `..` never climbs above the root of an absolute path.
pub fn normalize(path: &str) -> String {
  if path.is_empty() {
    return ".".to_string();
  }
  let absolute = path.starts_with('/');
  let mut segments: Vec<&str> = Vec::new();
  for segment in path.split('/') {
    match segment {
      "" | "." => {},
      ".." => {
        if segments.last().map_or(false, |last| *last != "..") {
          segments.pop();
        }
        else if !absolute {
          segments.push("..");
        }
      },
      _ => segments.push(segment),
    }
  }
  let joined = segments.join("/");
  if absolute {
    format!("/{}", joined)
  }
  else if joined.is_empty() {
    ".".to_string()
  }
  else {
    joined
  }
}

/// Joins like `posixpath.join`: an absolute component replaces the base.
pub fn join(base: &str, component: &str) -> String {
  if component.starts_with('/') || base.is_empty() {
    component.to_string()
  }
  else if base.ends_with('/') {
    format!("{}{}", base, component)
  }
  else {
    format!("{}/{}", base, component)
  }
}
