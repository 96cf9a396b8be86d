use super::*;

pub use self::{
  element::Element,
  envelope::Envelope,
  inscription::Inscription,
  inscription_id::{derive_id, InscriptionId},
};

pub mod element;
pub mod envelope;
mod inscription;
pub mod inscription_id;
pub(crate) mod media;
