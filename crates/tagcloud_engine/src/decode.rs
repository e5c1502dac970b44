use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown encoding label {0:?}")]
    UnknownLabel(String),
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> explicit label -> chardetng fallback.
pub fn decode_text(bytes: &[u8], label: Option<&str>) -> Result<DecodedText, DecodeError> {
    // 1) BOM always wins
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    // 2) Caller supplied label
    if let Some(label) = label {
        let enc = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| DecodeError::UnknownLabel(label.to_string()))?;
        return decode_with(bytes, enc);
    }

    // 3) chardetng detection over the whole input
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, had_errors) = enc.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "malformed byte sequence".into(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    })
}
