use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("invalid destination address `{input}`"))]
  AddressParse {
    input: String,
    source: bitcoin::address::ParseError,
  },
  #[snafu(display("address `{input}` is not valid on {chain}"))]
  AddressNetwork {
    chain: Chain,
    input: String,
    source: bitcoin::address::ParseError,
  },
  #[snafu(display("failed to parse config file `{}`", path.display()))]
  Config {
    path: PathBuf,
    source: serde_yaml::Error,
  },
  #[snafu(display("failed to decode script"))]
  Decode { source: script::Error },
  #[snafu(display(
    "reveal output of {} sat is below dust limit of {} sat",
    amount.to_sat(),
    dust_limit.to_sat()
  ))]
  Dust { amount: Amount, dust_limit: Amount },
  #[snafu(display("failed to encode script push"))]
  Encoding { source: script::PushBytesError },
  #[snafu(display("failed to finalize reveal input: {reason}"))]
  Finalization { reason: &'static str },
  #[snafu(display(
    "reveal output of {} sat exceeds {} sat sent to commit output",
    amount.to_sat(),
    available.to_sat()
  ))]
  InsufficientFunds { amount: Amount, available: Amount },
  #[snafu(display("invalid inscription: {reason}"))]
  InvalidInscription { reason: String },
  #[snafu(display("invalid key"))]
  InvalidKey { source: secp256k1::Error },
  #[snafu(display("invalid key hex"))]
  InvalidKeyHex { source: hex::FromHexError },
  #[snafu(display("invalid key length: expected {expected} bytes, got {len}"))]
  InvalidKeyLength { expected: &'static str, len: usize },
  #[snafu(display("I/O error at `{}`", path.display()))]
  Io {
    backtrace: Backtrace,
    path: PathBuf,
    source: io::Error,
  },
  #[snafu(display("signing failed"))]
  Signature { source: secp256k1::Error },
  #[snafu(display("signing key {actual} does not match commit internal key {expected}"))]
  SignatureKeyMismatch {
    actual: XOnlyPublicKey,
    expected: XOnlyPublicKey,
  },
  #[snafu(display("failed to compute reveal signature hash"))]
  Sighash {
    source: bitcoin::sighash::TaprootError,
  },
  #[snafu(display("failed to build taproot tree"))]
  Taproot {
    source: bitcoin::taproot::TaprootBuilderError,
  },
  #[snafu(display("taproot tree is incomplete"))]
  TaprootIncomplete,
  #[snafu(display(
    "reveal transaction weight greater than {MAX_STANDARD_TX_WEIGHT} (MAX_STANDARD_TX_WEIGHT): {weight}"
  ))]
  WeightLimit { weight: Weight },
}
