use super::*;

/// Explicit configuration threaded through the commit and reveal builders.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
  pub chain: Chain,
  pub no_limit: bool,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub postage: Amount,
  pub reveal_fee_rate: FeeRate,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      chain: Chain::Mainnet,
      no_limit: false,
      postage: TARGET_POSTAGE,
      reveal_fee_rate: FeeRate::default(),
    }
  }
}

impl Settings {
  pub fn load(path: &Path) -> Result<Self> {
    let file = File::open(path).context(error::Io { path })?;
    serde_yaml::from_reader(file).context(error::Config { path })
  }

  pub fn text_inscription(&self, text: &str) -> Inscription {
    Inscription::text(text, self.postage)
  }

  pub fn commit(&self, public_key: &[u8], inscription: &Inscription) -> Result<CommitTxData> {
    CommitTxData::new(public_key, inscription, self.chain)
  }

  /// Amount the funding transaction must send to the commit address so the
  /// reveal can pay `amount` to `destination` at the configured fee rate.
  pub fn required_amount(
    &self,
    commit: &CommitTxData,
    destination: &str,
    amount: Amount,
  ) -> Result<Amount> {
    let destination = self.chain.address_from_str(destination)?;
    Ok(commit.required_amount(self.reveal_fee_rate, &destination, amount))
  }

  pub fn reveal(
    &self,
    commit: &CommitTxData,
    funding: CommitFunding,
    destination: &str,
    signing_key: &SigningKey,
    amount: Amount,
  ) -> Result<RevealTxResult> {
    Reveal {
      amount,
      commit,
      destination: self.chain.address_from_str(destination)?,
      funding,
      no_limit: self.no_limit,
    }
    .sign(signing_key)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::io::Write};

  #[test]
  fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.chain, Chain::Mainnet);
    assert_eq!(settings.postage, Amount::from_sat(10_000));
    assert_eq!(settings.reveal_fee_rate, FeeRate::default());
    assert!(!settings.no_limit);
  }

  #[test]
  fn load_from_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "chain: testnet\npostage: 546\nreveal-fee-rate: 2.5").unwrap();

    pretty_assert_eq!(
      Settings::load(file.path()).unwrap(),
      Settings {
        chain: Chain::Testnet,
        no_limit: false,
        postage: Amount::from_sat(546),
        reveal_fee_rate: "2.5".parse().unwrap(),
      }
    );
  }

  #[test]
  fn unknown_fields_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "network: testnet").unwrap();

    assert_matches!(Settings::load(file.path()), Err(Error::Config { .. }));
  }

  #[test]
  fn missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();

    assert_matches!(
      Settings::load(&dir.path().join("inscribe.yaml")),
      Err(Error::Io { .. })
    );
  }

  #[test]
  fn settings_chain_selects_commit_address_network() {
    let key = test_key();
    let inscription = inscription("text/plain;charset=utf-8", "foo");

    let mainnet = Settings::default()
      .commit(&key.public_key().serialize(), &inscription)
      .unwrap();

    let testnet = Settings {
      chain: Chain::Testnet,
      ..default()
    }
    .commit(&key.public_key().serialize(), &inscription)
    .unwrap();

    assert!(mainnet.address().to_string().starts_with("bc1p"));
    assert!(testnet.address().to_string().starts_with("tb1p"));
    assert_eq!(mainnet.script_pubkey(), testnet.script_pubkey());
  }
}
