//! Small pure text helpers shared by validation and display code.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL: OnceLock<Regex> = OnceLock::new();
static NON_SLUG: OnceLock<Regex> = OnceLock::new();
static SEPARATORS: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
  EMAIL.get_or_init(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
      .expect("valid email regex")
  })
}

/// `local@domain.tld`, case-insensitive.
///
/// The local part is letters, digits and `_'+-.`, may not start with a dot or
/// contain `..`, and ends in a letter, digit, `_`, `+` or `-`. Each domain
/// label starts with a letter or digit; the TLD is two or more letters.
pub fn is_valid_email(email: &str) -> bool {
  !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

/// Format a 10-digit North American number as `(AAA) BBB-CCCC`.
///
/// Anything that does not reduce to exactly ten digits is returned as given.
pub fn format_phone_number(phone: &str) -> String {
  let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
  if digits.len() == 10 {
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
  } else {
    phone.to_string()
  }
}

/// Lowercase URL slug: `"THINDOWN® Classic"` becomes `"thindown-classic"`.
pub fn slugify(text: &str) -> String {
  let non_slug = NON_SLUG
    .get_or_init(|| Regex::new(r"[^a-zA-Z0-9_\s-]").expect("valid slug regex"));
  let separators =
    SEPARATORS.get_or_init(|| Regex::new(r"[\s_-]+").expect("valid separator regex"));

  let lower = text.to_lowercase();
  let cleaned = non_slug.replace_all(&lower, "");
  separators
    .replace_all(&cleaned, "-")
    .trim_matches('-')
    .to_string()
}
