use super::*;

/// Identifies an inscription by the reveal transaction that created it and
/// the index of the inscription within that transaction.
#[derive(
  Debug, PartialEq, Copy, Clone, Hash, Eq, PartialOrd, Ord, DeserializeFromStr, SerializeDisplay,
)]
pub struct InscriptionId {
  pub txid: Txid,
  pub index: u32,
}

impl InscriptionId {
  pub fn new(txid: Txid, index: u32) -> Self {
    Self { txid, index }
  }
}

/// Formats `<txid>i<index>`.
pub fn derive_id(txid: Txid, index: u32) -> String {
  InscriptionId::new(txid, index).to_string()
}

impl Display for InscriptionId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}i{}", self.txid, self.index)
  }
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum ParseError {
  #[snafu(display("invalid character: '{character}'"))]
  Character { character: char },
  #[snafu(display("invalid length: {len}"))]
  Length { len: usize },
  #[snafu(display("invalid separator: `{separator}`"))]
  Separator { separator: char },
  #[snafu(display("invalid txid"))]
  InvalidTxid {
    source: bitcoin::hex::HexToArrayError,
  },
  #[snafu(display("invalid index"))]
  Index { source: std::num::ParseIntError },
}

impl FromStr for InscriptionId {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    const TXID_LEN: usize = 64;

    if let Some(character) = s.chars().find(|c| !c.is_ascii()) {
      return Err(ParseError::Character { character });
    }

    if s.len() < TXID_LEN + 2 {
      return Err(ParseError::Length { len: s.len() });
    }

    let (txid, rest) = s.split_at(TXID_LEN);

    let mut rest = rest.chars();

    match rest.next() {
      Some('i') => {}
      Some(separator) => return Err(ParseError::Separator { separator }),
      None => return Err(ParseError::Length { len: s.len() }),
    }

    Ok(Self {
      txid: txid.parse().context(InvalidTxid)?,
      index: rest.as_str().parse().context(Index)?,
    })
  }
}
