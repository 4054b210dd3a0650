use super::header::HEADER_LEN;
use captive_dns_domain::{ParseStop, QueryName};

const MAX_LABEL_LEN: usize = 63;

/// Decodes the QNAME of the first question, starting right after the header.
///
/// Never fails. Decoding stops at the root label, at a length byte above 63
/// (compression pointers included) or at the end of the buffer, and whatever
/// labels were read up to that point are returned. Label bytes are decoded
/// as UTF-8 with invalid sequences replaced and case preserved.
pub fn parse_query_name(buf: &[u8]) -> QueryName {
    let mut pos = HEADER_LEN;
    let mut name = String::new();
    let mut labels = 0usize;

    let stop = loop {
        let Some(&len_byte) = buf.get(pos) else {
            break Some(ParseStop::Truncated);
        };
        if len_byte == 0 {
            break None;
        }
        let label_len = len_byte as usize;
        if label_len > MAX_LABEL_LEN {
            break Some(ParseStop::InvalidLabelLength(len_byte));
        }
        pos += 1;
        let Some(label) = buf.get(pos..pos + label_len) else {
            break Some(ParseStop::Truncated);
        };
        if labels > 0 {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
        labels += 1;
        pos += label_len;
    };

    match (labels, stop) {
        (0, _) => QueryName::Empty,
        (_, None) => QueryName::Complete(name),
        (_, Some(stop)) => QueryName::Partial { name, stop },
    }
}
