use super::*;

/// The funded commit output, as reported by whoever broadcast the commit
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitFunding {
  pub txid: Txid,
  pub vout: u32,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub amount: Amount,
}

impl CommitFunding {
  pub fn outpoint(&self) -> OutPoint {
    OutPoint {
      txid: self.txid,
      vout: self.vout,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealTxResult {
  pub inscription_id: InscriptionId,
  pub raw_tx_hex: String,
  pub signature: String,
  #[serde(skip)]
  pub transaction: Transaction,
  pub txid: Txid,
  pub vsize: usize,
}

/// A reveal spending a funded commit output to a single destination.
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
  pub amount: Amount,
  pub commit: &'a CommitTxData,
  pub destination: Address,
  pub funding: CommitFunding,
  pub no_limit: bool,
}

/// Builds and signs a reveal with the standard weight limit, checking that
/// `destination` is an address on the commit's chain.
pub fn build_and_sign_reveal(
  commit: &CommitTxData,
  funding: CommitFunding,
  destination: &str,
  signing_key: &SigningKey,
  amount: Amount,
) -> Result<RevealTxResult> {
  Reveal {
    amount,
    commit,
    destination: commit.chain().address_from_str(destination)?,
    funding,
    no_limit: false,
  }
  .sign(signing_key)
}

/// Script path witness: `[signature, leaf script, control block]`.
pub fn reveal_witness(signature: &[u8], script: &[u8], control_block: &[u8]) -> Result<Witness> {
  if !matches!(
    signature.len(),
    secp256k1::constants::SCHNORR_SIGNATURE_SIZE | 65
  ) {
    return Err(Error::Finalization {
      reason: "signature must be 64 or 65 bytes",
    });
  }

  if script.is_empty() {
    return Err(Error::Finalization {
      reason: "missing leaf script",
    });
  }

  if control_block.is_empty() {
    return Err(Error::Finalization {
      reason: "missing control block",
    });
  }

  ControlBlock::decode(control_block).map_err(|_| Error::Finalization {
    reason: "malformed control block",
  })?;

  Ok(Witness::from_slice(&[signature, script, control_block]))
}

impl Reveal<'_> {
  pub(crate) fn transaction(previous_output: OutPoint, output: TxOut) -> Transaction {
    Transaction {
      version: Version::TWO,
      lock_time: LockTime::ZERO,
      input: vec![TxIn {
        previous_output,
        script_sig: ScriptBuf::new(),
        sequence: Sequence::ENABLE_RBF_NO_LOCKTIME,
        witness: Witness::new(),
      }],
      output: vec![output],
    }
  }

  fn check_amounts(&self) -> Result {
    if self.amount > self.funding.amount {
      return Err(Error::InsufficientFunds {
        amount: self.amount,
        available: self.funding.amount,
      });
    }

    let dust_limit = self.destination.script_pubkey().minimal_non_dust();

    if self.amount < dust_limit {
      return Err(Error::Dust {
        amount: self.amount,
        dust_limit,
      });
    }

    Ok(())
  }

  pub fn sign(self, signing_key: &SigningKey) -> Result<RevealTxResult> {
    self.check_amounts()?;

    let internal_key = self.commit.internal_key();

    if signing_key.x_only_public_key() != internal_key {
      return Err(Error::SignatureKeyMismatch {
        actual: signing_key.x_only_public_key(),
        expected: internal_key,
      });
    }

    let prevouts = [TxOut {
      script_pubkey: self.commit.script_pubkey(),
      value: self.funding.amount,
    }];

    let mut reveal_tx = Self::transaction(
      self.funding.outpoint(),
      TxOut {
        script_pubkey: self.destination.script_pubkey(),
        value: self.amount,
      },
    );

    let secp256k1 = Secp256k1::new();

    let signature = {
      let mut sighash_cache = SighashCache::new(&mut reveal_tx);

      let sighash = sighash_cache
        .taproot_script_spend_signature_hash(
          0,
          &Prevouts::All(&prevouts),
          self.commit.leaf_hash(),
          TapSighashType::Default,
        )
        .context(error::Sighash)?;

      let message = secp256k1::Message::from_digest(sighash.to_byte_array());

      let signature = secp256k1.sign_schnorr(&message, signing_key.keypair());

      secp256k1
        .verify_schnorr(&signature, &message, &internal_key)
        .context(error::Signature)?;

      let signature = bitcoin::taproot::Signature {
        signature,
        sighash_type: TapSighashType::Default,
      }
      .to_vec();

      *sighash_cache.witness_mut(0).ok_or(Error::Finalization {
        reason: "reveal transaction has no input",
      })? = reveal_witness(
        &signature,
        self.commit.script().as_bytes(),
        &self.commit.control_block().serialize(),
      )?;

      signature
    };

    let weight = reveal_tx.weight();

    if !self.no_limit && weight > Weight::from_wu(MAX_STANDARD_TX_WEIGHT.into()) {
      return Err(Error::WeightLimit { weight });
    }

    let txid = reveal_tx.compute_txid();
    let vsize = reveal_tx.vsize();

    log::info!(
      "signed reveal {txid} spending {} for {} sat to {} ({vsize} vB, {} sat fee)",
      self.funding.outpoint(),
      self.amount.to_sat(),
      self.destination,
      (self.funding.amount - self.amount).to_sat(),
    );

    Ok(RevealTxResult {
      inscription_id: InscriptionId::new(txid, 0),
      raw_tx_hex: consensus::encode::serialize_hex(&reveal_tx),
      signature: hex::encode(signature),
      transaction: reveal_tx,
      txid,
      vsize,
    })
  }
}
