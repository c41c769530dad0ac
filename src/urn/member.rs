/*
  Mapping between URNs and the member names they are stored
  under inside a zip based volume. Member names are relative
  to the volume URN and escape anything a zip tool might choke on.
*/

use {
  percent_encoding::{percent_decode_str, percent_encode, AsciiSet, CONTROLS},
  super::Urn,
};

/* Bytes outside printable ASCII are always escaped. */
const MEMBER: &AsciiSet = &CONTROLS
  .add(b'!')
  .add(b'$')
  .add(b'\\')
  .add(b':')
  .add(b'*')
  .add(b'%')
  .add(b'?')
  .add(b'"')
  .add(b'<')
  .add(b'>')
  .add(b'|');

const MEMBER_NO_SLASH: &AsciiSet = &MEMBER.add(b'/');

fn escape(name: &str, set: &'static AsciiSet) -> String {
  percent_encode(name.as_bytes(), set)
    .map(|chunk| if chunk.starts_with('%') { chunk.to_ascii_lowercase() } else { chunk.to_string() })
    .collect()
}

/// The member name `member` is stored under in the volume `base`.
/// URNs outside the volume keep their full serialized form.
pub fn member_name_for_urn(member: &Urn, base: &Urn, slash_ok: bool) -> String {
  let relative = base.relative_path(member).unwrap_or_else(|| member.as_str());
  let name = relative.strip_prefix('/').unwrap_or(relative);
  if !slash_ok {
    return escape(name, MEMBER_NO_SLASH);
  }
  // "//" would read back as an empty path segment
  name.split("//")
    .map(|piece| escape(piece, MEMBER))
    .collect::<Vec<_>>()
    .join("%2f%2f")
}

/* %00 escapes are dropped. A name that does not decode to
  UTF-8 is kept in its escaped form. */
fn unescape(member: &str) -> String {
  let decoded: Vec<u8> = percent_decode_str(member).filter(|&b| b != 0).collect();
  String::from_utf8(decoded).unwrap_or_else(|_| member.to_string())
}

/// Inverse of [`member_name_for_urn`]. Fully qualified `aff4:` names
/// are returned as they are, anything else lands under `base`. Names
/// whose escapes are not valid UTF-8 are appended still escaped.
pub fn urn_from_member_name(member: &str, base: &Urn) -> Urn {
  let name = unescape(member);
  let urn = Urn::new(&name);
  if urn.scheme() == "aff4" {
    return urn;
  }
  base.append_with(&name, false)
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  fn volume() -> Urn {
    Urn::new("aff4://685f5dfa-6d8b-4e36-b9b1-c3d07d1ab1ed")
  }

  #[test]
  fn members_inside_the_volume() {
    let image = volume().append("image").append("data");
    assert_eq!(member_name_for_urn(&image, &volume(), true), "image/data");
    assert_eq!(member_name_for_urn(&image, &volume(), false), "image%2fdata");
    assert_eq!(urn_from_member_name("image/data", &volume()), image);
  }
  #[test]
  fn reserved_bytes_are_escaped() {
    let odd = volume().append_with("a:b*c|", false);
    let name = member_name_for_urn(&odd, &volume(), true);
    assert_eq!(name, "a%3ab%2ac%7c");
    assert_eq!(urn_from_member_name(&name, &volume()), odd);
  }
  #[test]
  fn members_outside_the_volume() {
    let foreign = Urn::new("aff4://other-volume/stream");
    let name = member_name_for_urn(&foreign, &volume(), true);
    assert_eq!(name, "aff4%3a%2f%2fother-volume/stream");
    assert_eq!(urn_from_member_name(&name, &volume()), foreign);
  }
  #[test]
  fn non_ascii_is_escaped_bytewise() {
    let member = volume().append_with("é", false);
    assert_eq!(member_name_for_urn(&member, &volume(), true), "%c3%a9");
    assert_eq!(urn_from_member_name("%c3%a9", &volume()), member);
  }
  #[test]
  fn unescape_edge_cases() {
    assert_eq!(unescape("a%00b"), "ab");
    assert_eq!(unescape("100%"), "100%");
    assert_eq!(unescape("%zz%4"), "%zz%4");
    assert_eq!(unescape("%2F"), "/");
    assert_eq!(unescape("%ff%41"), "%ff%41");
  }
  #[test]
  fn invalid_utf8_names_stay_escaped() {
    let urn = urn_from_member_name("%ff", &volume());
    assert_eq!(urn, volume().append_with("%ff", false));
    assert_eq!(urn.path(), "/%ff");
  }
  #[test]
  fn doubled_slashes_are_escaped() {
    let nested = volume().append_with("a", false);
    let name = member_name_for_urn(&nested, &volume(), true);
    assert_eq!(name, "a");
    let urn = Urn::new("aff4://685f5dfa-6d8b-4e36-b9b1-c3d07d1ab1ed?x//y");
    let name = member_name_for_urn(&urn, &volume(), true);
    assert_eq!(name, "%3fx%2f%2fy");
    assert_eq!(escape("a\x7f b", MEMBER), "a%7f b");
  }
}
