/* Percent-encoding of path text. Unreserved characters (RFC 3986)
  pass through, every other byte of the UTF-8 form becomes %XX. */

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const PATH: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~')
  .remove(b'/');

const SEGMENT: &AsciiSet = &PATH.add(b'/');

/// Encodes a single segment name; `/` is escaped too.
pub fn quote_segment(input: &str) -> String {
  utf8_percent_encode(input, SEGMENT).to_string()
}

/// Encodes a whole path, keeping its separators.
pub fn quote_path(input: &str) -> String {
  utf8_percent_encode(input, PATH).to_string()
}
