pub(crate) use {super::*, pretty_assertions::assert_eq as pretty_assert_eq, regex::Regex};

macro_rules! assert_regex_match {
  ($value:expr, $pattern:expr $(,)?) => {
    let regex = Regex::new(&format!("^(?s){}$", $pattern)).unwrap();
    let string = $value.to_string();

    if !regex.is_match(string.as_ref()) {
      panic!(
        "Regex:\n\n{}\n\n…did not match string:\n\n{}",
        regex, string
      );
    }
  };
}

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat_param )|+ $( if $guard:expr )? $(,)?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

pub(crate) const TEST_SECRET: &str =
  "fc7458de3d5616e7803fdc81d688b9642641be32fee74c4558ce680cac3d4111";

pub(crate) const TESTNET_DESTINATION: &str =
  "tb1p54k30k88cuewxusuyxca7wsxg0qwgfswldfy6qdmpn8plax2qanqjxas2p";

pub(crate) fn test_key() -> SigningKey {
  SigningKey::from_hex(TEST_SECRET).unwrap()
}

pub(crate) fn txid(n: u64) -> Txid {
  let hex = format!("{n:x}");

  if hex.is_empty() || hex.len() > 1 {
    panic!();
  }

  hex.repeat(64).parse().unwrap()
}

pub(crate) fn inscription(content_type: &str, body: impl AsRef<[u8]>) -> Inscription {
  Inscription::new(content_type, body.as_ref(), TARGET_POSTAGE).unwrap()
}

pub(crate) fn default<T: Default>() -> T {
  Default::default()
}
