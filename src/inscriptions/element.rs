//! Script elements of a reveal leaf, and conversion to and from a compiled
//! script.

use super::*;

/// A single script element. `OP_0` is an empty push, matching how script
/// instructions decode.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Element {
  Op(opcodes::Opcode),
  Push(Vec<u8>),
}

impl Element {
  pub const FALSE: Self = Self::Push(Vec::new());
}

/// Compiles elements with standard push encoding. Pushes are never rewritten
/// into `OP_1`..`OP_16`, so a one byte push of `1` stays `01 01`.
pub fn compile(elements: &[Element]) -> Result<ScriptBuf> {
  let mut builder = script::Builder::new();

  for element in elements {
    builder = match element {
      Element::Op(op) => builder.push_opcode(*op),
      Element::Push(data) => {
        builder.push_slice(<&PushBytes>::try_from(data.as_slice()).context(error::Encoding)?)
      }
    };
  }

  Ok(builder.into_script())
}

pub fn decompile(script: &Script) -> Result<Vec<Element>> {
  script
    .instructions()
    .map(|instruction| {
      Ok(match instruction.context(error::Decode)? {
        Instruction::Op(op) => Element::Op(op),
        Instruction::PushBytes(push) => Element::Push(push.as_bytes().to_vec()),
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn false_is_op_0() {
    assert_eq!(compile(&[Element::FALSE]).unwrap().as_bytes(), [0x00]);
  }

  #[test]
  fn one_byte_push_is_not_minimized() {
    assert_eq!(
      compile(&[Element::Push(vec![1])]).unwrap().as_bytes(),
      [0x01, 0x01]
    );
  }

  #[test]
  fn large_pushes_use_pushdata() {
    let script = compile(&[Element::Push(vec![0; 80])]).unwrap();
    assert_eq!(&script.as_bytes()[..2], [0x4c, 80]);

    let script = compile(&[Element::Push(vec![0; 300])]).unwrap();
    assert_eq!(&script.as_bytes()[..3], [0x4d, 0x2c, 0x01]);
  }

  #[test]
  fn reveal_elements_round_trip() {
    let elements = inscription("text/plain;charset=utf-8", "Hello!!")
      .reveal_elements(test_key().x_only_public_key());

    pretty_assert_eq!(
      decompile(&compile(&elements).unwrap()).unwrap(),
      elements
    );
  }

  #[test]
  fn binary_reveal_elements_round_trip() {
    let elements = inscription("application/octet-stream", vec![0x51u8; 2000])
      .reveal_elements(test_key().x_only_public_key());

    assert_eq!(decompile(&compile(&elements).unwrap()).unwrap(), elements);
  }

  #[test]
  fn decompile_rejects_truncated_push() {
    assert_matches!(
      decompile(Script::from_bytes(&[0x05, 0x01])),
      Err(Error::Decode { .. })
    );
  }
}
