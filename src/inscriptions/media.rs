use super::*;

pub(crate) struct Media;

impl Media {
  #[rustfmt::skip]
  const TABLE: &'static [(&'static str, &'static [&'static str])] = &[
    ("application/cbor",            &["cbor"]),
    ("application/json",            &["json"]),
    ("application/octet-stream",    &["bin"]),
    ("application/pdf",             &["pdf"]),
    ("application/pgp-signature",   &["asc"]),
    ("application/protobuf",        &["binpb"]),
    ("application/yaml",            &["yaml", "yml"]),
    ("audio/flac",                  &["flac"]),
    ("audio/mpeg",                  &["mp3"]),
    ("audio/wav",                   &["wav"]),
    ("font/otf",                    &["otf"]),
    ("font/ttf",                    &["ttf"]),
    ("font/woff",                   &["woff"]),
    ("font/woff2",                  &["woff2"]),
    ("image/apng",                  &["apng"]),
    ("image/avif",                  &["avif"]),
    ("image/gif",                   &["gif"]),
    ("image/jpeg",                  &["jpg", "jpeg"]),
    ("image/png",                   &["png"]),
    ("image/svg+xml",               &["svg"]),
    ("image/webp",                  &["webp"]),
    ("model/gltf+json",             &["gltf"]),
    ("model/gltf-binary",           &["glb"]),
    ("model/stl",                   &["stl"]),
    ("text/css",                    &["css"]),
    ("text/html;charset=utf-8",     &["html"]),
    ("text/javascript",             &["js"]),
    ("text/markdown;charset=utf-8", &["md"]),
    ("text/plain;charset=utf-8",    &["txt"]),
    ("text/x-python",               &["py"]),
    ("video/mp4",                   &["mp4"]),
    ("video/webm",                  &["webm"]),
  ];

  pub(crate) fn content_type_for_path(path: &Path) -> Result<&'static str> {
    let Some(extension) = path.extension().and_then(|extension| extension.to_str()) else {
      return Err(Error::InvalidInscription {
        reason: format!("`{}` has no recognizable file extension", path.display()),
      });
    };

    let extension = extension.to_lowercase();

    for (content_type, extensions) in Self::TABLE {
      if extensions.contains(&extension.as_str()) {
        return Ok(*content_type);
      }
    }

    let mut extensions = Self::TABLE
      .iter()
      .filter_map(|(_, extensions)| extensions.first().copied())
      .collect::<Vec<&str>>();

    extensions.sort();

    Err(Error::InvalidInscription {
      reason: format!(
        "unsupported file extension `.{extension}`, supported extensions: {}",
        extensions.join(" "),
      ),
    })
  }
}
