use {
  super::*,
  bitcoin::script::Instructions,
  std::{collections::BTreeMap, iter::Peekable},
};

pub(crate) const PROTOCOL_ID: [u8; 3] = *b"ord";
pub(crate) const CONTENT_TYPE_TAG: [u8; 1] = [1];
pub(crate) const BODY_TAG: [u8; 0] = [];

type ScriptResult<T> = std::result::Result<T, script::Error>;

struct RawEnvelope {
  input: u32,
  offset: u32,
  payload: Vec<Vec<u8>>,
  pushnum: bool,
}

/// An inscription envelope recovered from a reveal transaction's tapscript.
#[derive(Default, PartialEq, Clone, Serialize, Deserialize, Debug, Eq)]
pub struct Envelope {
  pub body: Option<Vec<u8>>,
  pub content_type: Option<Vec<u8>>,
  pub duplicate_field: bool,
  pub incomplete_field: bool,
  pub input: u32,
  pub offset: u32,
  /// A payload element was pushed with `OP_1`..`OP_16` or `OP_1NEGATE`
  /// rather than a data push.
  pub pushnum: bool,
  pub unrecognized_even_field: bool,
}

impl From<RawEnvelope> for Envelope {
  fn from(envelope: RawEnvelope) -> Self {
    let body = envelope
      .payload
      .iter()
      .enumerate()
      .position(|(i, push)| i % 2 == 0 && push.as_slice() == BODY_TAG);

    let mut fields: BTreeMap<&[u8], Vec<&[u8]>> = BTreeMap::new();

    let mut incomplete_field = false;

    for item in envelope.payload[..body.unwrap_or(envelope.payload.len())].chunks(2) {
      match item {
        [key, value] => fields.entry(key).or_default().push(value),
        _ => incomplete_field = true,
      }
    }

    let duplicate_field = fields.iter().any(|(_key, values)| values.len() > 1);

    let content_type = fields
      .remove(CONTENT_TYPE_TAG.as_slice())
      .and_then(|values| values.first().map(|value| value.to_vec()));

    let unrecognized_even_field = fields
      .keys()
      .any(|tag| tag.first().map(|lsb| lsb % 2 == 0).unwrap_or_default());

    Self {
      body: body.map(|i| {
        envelope.payload[i + 1..]
          .iter()
          .flatten()
          .copied()
          .collect()
      }),
      content_type,
      duplicate_field,
      incomplete_field,
      input: envelope.input,
      offset: envelope.offset,
      pushnum: envelope.pushnum,
      unrecognized_even_field,
    }
  }
}

impl Envelope {
  pub fn from_transaction(transaction: &Transaction) -> Vec<Self> {
    let mut envelopes = Vec::new();

    for (i, input) in transaction.input.iter().enumerate() {
      if let Some(leaf) = input.witness.taproot_leaf_script() {
        if leaf.version != LeafVersion::TapScript {
          continue;
        }

        if let Ok(input_envelopes) = Self::from_tapscript(leaf.script, i) {
          envelopes.extend(input_envelopes);
        }
      }
    }

    envelopes
  }

  pub fn from_tapscript(tapscript: &Script, input: usize) -> ScriptResult<Vec<Self>> {
    let mut envelopes = Vec::new();

    let mut instructions = tapscript.instructions().peekable();

    while let Some(instruction) = instructions.next().transpose()? {
      if instruction == Instruction::PushBytes((&[]).into()) {
        if let Some(envelope) = Self::from_instructions(&mut instructions, input, envelopes.len())?
        {
          envelopes.push(envelope.into());
        }
      }
    }

    Ok(envelopes)
  }

  /// Whether this envelope carries exactly the content of `inscription`.
  pub fn contains(&self, inscription: &Inscription) -> bool {
    self.content_type.as_deref() == Some(inscription.content_type())
      && self.body.as_deref() == Some(inscription.body())
  }

  fn accept(
    instructions: &mut Peekable<Instructions>,
    instruction: Instruction,
  ) -> ScriptResult<bool> {
    if instructions.peek() == Some(&Ok(instruction)) {
      instructions.next().transpose()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  fn from_instructions(
    instructions: &mut Peekable<Instructions>,
    input: usize,
    offset: usize,
  ) -> ScriptResult<Option<RawEnvelope>> {
    if !Self::accept(instructions, Instruction::Op(opcodes::all::OP_IF))? {
      return Ok(None);
    }

    if !Self::accept(instructions, Instruction::PushBytes((&PROTOCOL_ID).into()))? {
      return Ok(None);
    }

    let mut pushnum = false;

    let mut payload = Vec::new();

    loop {
      match instructions.next().transpose()? {
        None => return Ok(None),
        Some(Instruction::Op(opcodes::all::OP_ENDIF)) => {
          return Ok(Some(RawEnvelope {
            input: input.try_into().unwrap_or(u32::MAX),
            offset: offset.try_into().unwrap_or(u32::MAX),
            payload,
            pushnum,
          }));
        }
        Some(Instruction::Op(opcodes::all::OP_PUSHNUM_NEG1)) => {
          pushnum = true;
          payload.push(vec![0x81]);
        }
        Some(Instruction::Op(op))
          if (opcodes::all::OP_PUSHNUM_1.to_u8()..=opcodes::all::OP_PUSHNUM_16.to_u8())
            .contains(&op.to_u8()) =>
        {
          pushnum = true;
          payload.push(vec![op.to_u8() - opcodes::all::OP_PUSHNUM_1.to_u8() + 1]);
        }
        Some(Instruction::PushBytes(push)) => {
          payload.push(push.as_bytes().to_vec());
        }
        Some(_) => return Ok(None),
      }
    }
  }
}
