//! Build the commit and reveal transactions that put an inscription
//! on-chain.
//!
//! The inscription is embedded in a tapscript leaf that checks a single
//! x-only key. Funding the commit address and broadcasting the reveal are
//! left to the caller:
//!
//! ```no_run
//! use inscribe::{build_and_sign_reveal, Chain, CommitFunding, CommitTxData, Inscription, SigningKey};
//!
//! # fn main() -> Result<(), inscribe::Error> {
//! let key = SigningKey::from_hex("fc7458de3d5616e7803fdc81d688b9642641be32fee74c4558ce680cac3d4111")?;
//! let inscription = Inscription::text("Hello!!", Inscription::DEFAULT_POSTAGE);
//!
//! let commit = CommitTxData::new(&key.public_key().serialize(), &inscription, Chain::Testnet)?;
//!
//! // send at least `commit.required_amount(..)` to `commit.address()`, then:
//! let funding = CommitFunding {
//!   txid: "d2e8358a8f6257ed6fc5eabe4e85951b702918a7a5d5b79a45e535e1d5d65fb2".parse().unwrap(),
//!   vout: 1,
//!   amount: inscribe::bitcoin::Amount::from_sat(2_301),
//! };
//!
//! let reveal = build_and_sign_reveal(
//!   &commit,
//!   funding,
//!   "tb1p54k30k88cuewxusuyxca7wsxg0qwgfswldfy6qdmpn8plax2qanqjxas2p",
//!   &key,
//!   inscribe::bitcoin::Amount::from_sat(549),
//! )?;
//!
//! println!("{}", reveal.inscription_id);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::result_large_err, clippy::too_many_arguments)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::inscriptions::media::Media,
  bitcoin::{
    address::{Address, NetworkUnchecked},
    blockdata::{constants::MAX_SCRIPT_ELEMENT_SIZE, locktime::absolute::LockTime},
    consensus,
    hashes::Hash,
    key::{Keypair, XOnlyPublicKey},
    opcodes,
    policy::MAX_STANDARD_TX_WEIGHT,
    script::{self, Instruction, PushBytes},
    secp256k1::{self, Secp256k1},
    sighash::{Prevouts, SighashCache, TapSighashType},
    taproot::{ControlBlock, LeafVersion, TapLeafHash, TaprootBuilder},
    transaction::Version,
    Amount, Network, OutPoint, Script, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid,
    Weight, Witness,
  },
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  snafu::{Backtrace, ResultExt, Snafu},
  std::{
    fmt::{self, Display, Formatter},
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    str::FromStr,
  },
};

pub use self::{
  chain::Chain,
  commit::{build_commit, CommitTxData},
  error::Error,
  fee_rate::FeeRate,
  inscriptions::{derive_id, Element, Envelope, Inscription, InscriptionId},
  reveal::{build_and_sign_reveal, reveal_witness, CommitFunding, Reveal, RevealTxResult},
  settings::Settings,
  signing_key::SigningKey,
};

pub use bitcoin;

#[cfg(test)]
#[macro_use]
mod test;

#[cfg(test)]
use self::test::*;

pub mod chain;
mod commit;
pub mod error;
mod fee_rate;
pub mod inscriptions;
mod reveal;
mod settings;
mod signing_key;

type Result<T = (), E = Error> = std::result::Result<T, E>;

const TARGET_POSTAGE: Amount = Amount::from_sat(10_000);
