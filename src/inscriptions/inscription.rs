use super::*;

/// Content to embed in a reveal script.
///
/// `postage` is the intended value of the output that will carry the
/// inscription. It is advisory and not written on-chain.
#[derive(Debug, PartialEq, Clone, Eq, Serialize, Deserialize)]
pub struct Inscription {
  body: Vec<u8>,
  content_type: Vec<u8>,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  postage: Amount,
}

impl Inscription {
  pub const DEFAULT_POSTAGE: Amount = TARGET_POSTAGE;

  pub const TEXT_CONTENT_TYPE: &'static str = "text/plain;charset=utf-8";

  pub fn new(
    content_type: impl Into<Vec<u8>>,
    body: impl Into<Vec<u8>>,
    postage: Amount,
  ) -> Result<Self> {
    let content_type = content_type.into();

    if content_type.is_empty() {
      return Err(Error::InvalidInscription {
        reason: "content type must not be empty".into(),
      });
    }

    if !content_type.is_ascii() {
      return Err(Error::InvalidInscription {
        reason: "content type must be ASCII".into(),
      });
    }

    if content_type.len() > MAX_SCRIPT_ELEMENT_SIZE {
      return Err(Error::InvalidInscription {
        reason: format!(
          "content type of {} bytes exceeds {MAX_SCRIPT_ELEMENT_SIZE} byte push limit",
          content_type.len()
        ),
      });
    }

    Ok(Self {
      body: body.into(),
      content_type,
      postage,
    })
  }

  pub fn text(text: &str, postage: Amount) -> Self {
    Self {
      body: text.as_bytes().to_vec(),
      content_type: Self::TEXT_CONTENT_TYPE.as_bytes().to_vec(),
      postage,
    }
  }

  /// Reads `path`, taking the content type from its extension.
  pub fn from_file(path: &Path, postage: Amount) -> Result<Self> {
    let content_type = Media::content_type_for_path(path)?;

    let body = fs::read(path).context(error::Io { path })?;

    Self::new(content_type, body, postage)
  }

  pub fn body(&self) -> &[u8] {
    &self.body
  }

  pub fn content_type(&self) -> &[u8] {
    &self.content_type
  }

  pub fn postage(&self) -> Amount {
    self.postage
  }

  /// The reveal leaf for `key`: a key check followed by the envelope.
  pub fn reveal_elements(&self, key: XOnlyPublicKey) -> Vec<Element> {
    let mut elements = vec![
      Element::Push(key.serialize().to_vec()),
      Element::Op(opcodes::all::OP_CHECKSIG),
      Element::FALSE,
      Element::Op(opcodes::all::OP_IF),
      Element::Push(envelope::PROTOCOL_ID.to_vec()),
      Element::Push(envelope::CONTENT_TYPE_TAG.to_vec()),
      Element::Push(self.content_type.clone()),
      Element::Push(envelope::BODY_TAG.to_vec()),
    ];

    if self.body.is_empty() {
      elements.push(Element::FALSE);
    } else {
      elements.extend(
        self
          .body
          .chunks(MAX_SCRIPT_ELEMENT_SIZE)
          .map(|chunk| Element::Push(chunk.to_vec())),
      );
    }

    elements.push(Element::Op(opcodes::all::OP_ENDIF));

    elements
  }

  pub fn reveal_script(&self, key: XOnlyPublicKey) -> Result<ScriptBuf> {
    element::compile(&self.reveal_elements(key))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_uses_utf8_plain_text() {
    let inscription = Inscription::text("Hello!!", Inscription::DEFAULT_POSTAGE);
    assert_eq!(inscription.content_type(), b"text/plain;charset=utf-8");
    assert_eq!(inscription.body(), b"Hello!!");
    assert_eq!(inscription.postage(), Amount::from_sat(10_000));
  }

  #[test]
  fn binary_body_is_not_transcoded() {
    let body: [u8; 4] = [0xff, 0x00, 0xfe, 0x80];
    let inscription = Inscription::new("image/png", body, Amount::from_sat(546)).unwrap();
    assert_eq!(inscription.body(), body);
    assert_eq!(inscription.content_type(), b"image/png");
  }

  #[test]
  fn empty_body_is_allowed() {
    assert!(Inscription::new("text/plain", Vec::<u8>::new(), TARGET_POSTAGE)
      .unwrap()
      .body()
      .is_empty());
  }

  #[test]
  fn content_type_must_not_be_empty() {
    assert_matches!(
      Inscription::new("", "foo", TARGET_POSTAGE),
      Err(Error::InvalidInscription { .. })
    );
  }

  #[test]
  fn content_type_must_be_ascii() {
    assert_matches!(
      Inscription::new("text/plain;charset=ütf-8", "foo", TARGET_POSTAGE),
      Err(Error::InvalidInscription { .. })
    );
  }

  #[test]
  fn content_type_must_fit_in_one_push() {
    assert_matches!(
      Inscription::new("a".repeat(521), "foo", TARGET_POSTAGE),
      Err(Error::InvalidInscription { .. })
    );
  }

  #[test]
  fn reveal_script_layout() {
    let key = test_key().x_only_public_key();

    let script = inscription("text/plain;charset=utf-8", "Hello!!")
      .reveal_script(key)
      .unwrap();

    let mut expected = vec![0x20u8];
    expected.extend(key.serialize());
    expected.extend([0xac, 0x00, 0x63, 0x03]);
    expected.extend(b"ord");
    expected.extend([0x01, 0x01, 0x18]);
    expected.extend(b"text/plain;charset=utf-8");
    expected.extend([0x00, 0x07]);
    expected.extend(b"Hello!!");
    expected.push(0x68);

    pretty_assert_eq!(script.as_bytes(), expected.as_slice());
  }

  #[test]
  fn large_bodies_are_split_into_max_size_pushes() {
    let elements =
      inscription("text/plain", vec![0u8; 1041]).reveal_elements(test_key().x_only_public_key());

    let body = &elements[8..elements.len() - 1];

    assert_eq!(
      body
        .iter()
        .map(|element| match element {
          Element::Push(data) => data.len(),
          Element::Op(op) => panic!("unexpected opcode {op}"),
        })
        .collect::<Vec<usize>>(),
      [520, 520, 1],
    );
  }

  #[test]
  fn empty_body_is_a_single_empty_push() {
    let elements =
      inscription("text/plain", Vec::<u8>::new()).reveal_elements(test_key().x_only_public_key());

    assert_eq!(elements.len(), 10);
    assert_eq!(elements[7], Element::FALSE);
    assert_eq!(elements[8], Element::FALSE);
    assert_eq!(elements[9], Element::Op(opcodes::all::OP_ENDIF));
  }

  #[test]
  fn empty_body_script_ends_with_two_op_0s() {
    let script = inscription("text/plain", Vec::<u8>::new())
      .reveal_script(test_key().x_only_public_key())
      .unwrap();

    let bytes = script.as_bytes();

    assert_eq!(bytes[bytes.len() - 3..], [0x00, 0x00, 0x68]);
  }

  #[test]
  fn from_file_uses_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pepe.png");
    fs::write(&path, [1u8, 2, 3]).unwrap();

    let inscription = Inscription::from_file(&path, TARGET_POSTAGE).unwrap();
    assert_eq!(inscription.content_type(), b"image/png");
    assert_eq!(inscription.body(), [1, 2, 3]);
  }

  #[test]
  fn from_file_missing_file() {
    assert_matches!(
      Inscription::from_file(Path::new("/nonexistent/foo.txt"), TARGET_POSTAGE),
      Err(Error::Io { .. })
    );
  }
}
