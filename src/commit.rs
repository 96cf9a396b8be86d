use super::*;

/// Everything a funding step needs to pay into the inscription's commit
/// output, and everything the reveal needs to spend it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitTxData {
  address: Address,
  chain: Chain,
  control_block: ControlBlock,
  internal_key: XOnlyPublicKey,
  leaf_hash: TapLeafHash,
  output_key: XOnlyPublicKey,
  script: ScriptBuf,
}

/// Accepts a 33-byte compressed key, or a 32-byte x-only key.
fn parse_internal_key(public_key: &[u8]) -> Result<XOnlyPublicKey> {
  match public_key.len() {
    secp256k1::constants::PUBLIC_KEY_SIZE => Ok(
      secp256k1::PublicKey::from_slice(public_key)
        .context(error::InvalidKey)?
        .x_only_public_key()
        .0,
    ),
    secp256k1::constants::SCHNORR_PUBLIC_KEY_SIZE => {
      XOnlyPublicKey::from_slice(public_key).context(error::InvalidKey)
    }
    len => Err(Error::InvalidKeyLength {
      expected: "33 or 32",
      len,
    }),
  }
}

pub fn build_commit(
  public_key: &[u8],
  inscription: &Inscription,
  chain: Chain,
) -> Result<CommitTxData> {
  CommitTxData::new(public_key, inscription, chain)
}

impl CommitTxData {
  pub fn new(public_key: &[u8], inscription: &Inscription, chain: Chain) -> Result<Self> {
    let internal_key = parse_internal_key(public_key)?;

    let script = inscription.reveal_script(internal_key)?;

    let secp256k1 = Secp256k1::verification_only();

    let taproot_spend_info = TaprootBuilder::new()
      .add_leaf(0, script.clone())
      .context(error::Taproot)?
      .finalize(&secp256k1, internal_key)
      .map_err(|_| Error::TaprootIncomplete)?;

    let control_block = taproot_spend_info
      .control_block(&(script.clone(), LeafVersion::TapScript))
      .ok_or(Error::Finalization {
        reason: "no control block for reveal leaf",
      })?;

    let output_key = taproot_spend_info.output_key();

    let address = Address::p2tr_tweaked(output_key, chain.network());

    log::debug!(
      "derived {chain} commit address {address} for {} byte {} inscription",
      inscription.body().len(),
      String::from_utf8_lossy(inscription.content_type()),
    );

    Ok(Self {
      address,
      chain,
      control_block,
      internal_key,
      leaf_hash: TapLeafHash::from_script(&script, LeafVersion::TapScript),
      output_key: output_key.to_x_only_public_key(),
      script,
    })
  }

  /// The P2TR address the funding transaction must pay.
  pub fn address(&self) -> &Address {
    &self.address
  }

  pub fn chain(&self) -> Chain {
    self.chain
  }

  pub fn control_block(&self) -> &ControlBlock {
    &self.control_block
  }

  pub fn control_block_hex(&self) -> String {
    hex::encode(self.control_block.serialize())
  }

  pub fn internal_key(&self) -> XOnlyPublicKey {
    self.internal_key
  }

  pub fn internal_key_hex(&self) -> String {
    hex::encode(self.internal_key.serialize())
  }

  pub fn leaf_hash(&self) -> TapLeafHash {
    self.leaf_hash
  }

  pub fn leaf_hash_hex(&self) -> String {
    hex::encode(self.leaf_hash.to_byte_array())
  }

  pub fn output_key(&self) -> XOnlyPublicKey {
    self.output_key
  }

  pub fn output_key_hex(&self) -> String {
    hex::encode(self.output_key.serialize())
  }

  /// The compiled reveal leaf.
  pub fn script(&self) -> &Script {
    &self.script
  }

  pub fn script_pubkey(&self) -> ScriptBuf {
    self.address.script_pubkey()
  }

  /// Fee for a reveal paying `amount` to `destination` at `fee_rate`,
  /// sized with a placeholder signature of the final length.
  pub fn reveal_fee(&self, fee_rate: FeeRate, destination: &Address, amount: Amount) -> Amount {
    let mut reveal_tx = Reveal::transaction(
      OutPoint::null(),
      TxOut {
        script_pubkey: destination.script_pubkey(),
        value: amount,
      },
    );

    reveal_tx.input[0]
      .witness
      .push([0; secp256k1::constants::SCHNORR_SIGNATURE_SIZE]);
    reveal_tx.input[0].witness.push(self.script.as_bytes());
    reveal_tx.input[0]
      .witness
      .push(self.control_block.serialize());

    fee_rate.fee(reveal_tx.vsize())
  }

  /// Amount the funding collaborator must send to [`Self::address`].
  pub fn required_amount(
    &self,
    fee_rate: FeeRate,
    destination: &Address,
    amount: Amount,
  ) -> Amount {
    amount + self.reveal_fee(fee_rate, destination, amount)
  }
}
