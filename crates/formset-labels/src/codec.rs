use formset_core::NormalizedBox;

/// Result of decoding one label line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoded {
    /// A well-formed label line.
    Box(NormalizedBox),
    /// A line with the wrong token count. Hand-edited label files routinely
    /// carry blank or truncated lines; readers ignore these.
    Skip,
}

/// Errors from decoding a single label line.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("unparseable {field} token {token:?}")]
    MalformedLabel { field: &'static str, token: String },
}

/// Format one box as a label line: no trailing newline, six decimal places
/// per float field.
pub fn encode(b: &NormalizedBox) -> String {
    format!(
        "{} {:.6} {:.6} {:.6} {:.6}",
        b.class_id, b.cx, b.cy, b.w, b.h
    )
}

/// Decode one label line.
///
/// Anything other than exactly five whitespace-separated tokens is `Skip`.
/// Five tokens with an unparseable number is a `MalformedLabel` error for
/// this line only; callers skip the line rather than aborting the file.
pub fn decode(line: &str) -> Result<Decoded, CodecError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 5 {
        return Ok(Decoded::Skip);
    }
    let class_id: u32 = tokens[0]
        .parse()
        .map_err(|_| CodecError::MalformedLabel {
            field: "class id",
            token: tokens[0].to_string(),
        })?;
    let cx = parse_float("cx", tokens[1])?;
    let cy = parse_float("cy", tokens[2])?;
    let w = parse_float("w", tokens[3])?;
    let h = parse_float("h", tokens[4])?;
    Ok(Decoded::Box(NormalizedBox::new(class_id, cx, cy, w, h)))
}

fn parse_float(field: &'static str, token: &str) -> Result<f32, CodecError> {
    token.parse().map_err(|_| CodecError::MalformedLabel {
        field,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn encode_renders_six_decimal_places() {
        let b = NormalizedBox::new(1, 0.245098, 0.896463, 0.163399, 0.025253);
        assert_eq!(encode(&b), "1 0.245098 0.896463 0.163399 0.025253");
    }

    #[test]
    fn decode_round_trips_an_encoded_box() {
        let b = NormalizedBox::new(4, 0.123456, 0.5, 0.25, 0.042);
        let line = encode(&b);
        let Decoded::Box(back) = decode(&line).expect("decode") else {
            panic!("expected a box, got Skip");
        };
        assert_eq!(back.class_id, b.class_id);
        assert_relative_eq!(back.cx, b.cx, epsilon = 1e-6);
        assert_relative_eq!(back.cy, b.cy, epsilon = 1e-6);
        assert_relative_eq!(back.w, b.w, epsilon = 1e-6);
        assert_relative_eq!(back.h, b.h, epsilon = 1e-6);
    }

    #[test]
    fn wrong_token_count_is_skip_not_error() {
        assert_eq!(decode("not a valid line").expect("decode"), Decoded::Skip);
        assert_eq!(decode("1 2 3").expect("decode"), Decoded::Skip);
        assert_eq!(decode("").expect("decode"), Decoded::Skip);
        assert_eq!(decode("   ").expect("decode"), Decoded::Skip);
    }

    #[test]
    fn five_tokens_with_bad_numbers_is_malformed() {
        let err = decode("x 0.5 0.5 0.1 0.1").expect_err("class id");
        assert!(matches!(err, CodecError::MalformedLabel { field: "class id", .. }));
        let err = decode("0 0.5 abc 0.1 0.1").expect_err("cy");
        assert!(matches!(err, CodecError::MalformedLabel { field: "cy", .. }));
        // Negative class ids are not representable.
        assert!(decode("-1 0.5 0.5 0.1 0.1").is_err());
    }
}
