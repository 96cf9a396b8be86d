use {super::*, zeroize::Zeroizing};

/// A secp256k1 secret key used to sign the reveal input.
///
/// The key is erased when dropped, on success and error paths alike.
pub struct SigningKey {
  keypair: Keypair,
}

impl SigningKey {
  pub fn from_slice(secret: &[u8]) -> Result<Self> {
    if secret.len() != secp256k1::constants::SECRET_KEY_SIZE {
      return Err(Error::InvalidKeyLength {
        expected: "32",
        len: secret.len(),
      });
    }

    let secp256k1 = Secp256k1::new();

    let mut secret_key = secp256k1::SecretKey::from_slice(secret).context(error::InvalidKey)?;
    let keypair = Keypair::from_secret_key(&secp256k1, &secret_key);
    secret_key.non_secure_erase();

    Ok(Self { keypair })
  }

  pub fn from_hex(secret: &str) -> Result<Self> {
    let secret = Zeroizing::new(hex::decode(secret.trim()).context(error::InvalidKeyHex)?);
    Self::from_slice(&secret)
  }

  /// The 33-byte compressed public key.
  pub fn public_key(&self) -> secp256k1::PublicKey {
    self.keypair.public_key()
  }

  pub fn x_only_public_key(&self) -> XOnlyPublicKey {
    self.keypair.x_only_public_key().0
  }

  pub(crate) fn keypair(&self) -> &Keypair {
    &self.keypair
  }
}

impl Drop for SigningKey {
  fn drop(&mut self) {
    self.keypair.non_secure_erase();
  }
}

impl fmt::Debug for SigningKey {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("SigningKey")
      .field("public_key", &format_args!("{}", self.x_only_public_key()))
      .finish_non_exhaustive()
  }
}
