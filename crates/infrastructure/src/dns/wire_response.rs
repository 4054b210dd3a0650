use super::header::{DnsHeader, STANDARD_RESPONSE_FLAGS};
use captive_dns_domain::RedirectAddress;

/// Classic DNS-over-UDP message limit; responses never exceed it.
pub const MAX_UDP_MESSAGE: usize = 512;

/// TTL of the synthesized A record, in seconds.
pub const ANSWER_TTL: u32 = 30;

/// Size of the appended answer: pointer, type, class, ttl, rdlength, rdata.
pub const ANSWER_RECORD_LEN: usize = 2 + 2 + 2 + 4 + 2 + 4;

/// Pointer to the question name at offset 12.
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];
const TYPE_A: u16 = 1;
const CLASS_IN: u16 = 1;
const IPV4_RDLENGTH: u16 = 4;

/// Builds the answer for `query` by echoing it and appending one A record
/// pointing at `address`.
///
/// The query (header and question) is copied verbatim, then the flags are set
/// to a standard response and ANCOUNT to 1. The answer starts right after the
/// last query byte, whatever the question type or count was. The result is
/// `query.len() + 16` bytes, cut at [`MAX_UDP_MESSAGE`].
pub fn build_redirect_response(query: &[u8], address: RedirectAddress) -> Vec<u8> {
    let mut buf = [0u8; MAX_UDP_MESSAGE];

    let copied = query.len().min(MAX_UDP_MESSAGE);
    buf[..copied].copy_from_slice(&query[..copied]);

    let mut header = DnsHeader::decode(&buf).unwrap_or_default();
    header.flags = STANDARD_RESPONSE_FLAGS;
    header.answer_count = 1;
    header.encode_into(&mut buf);

    let record = answer_record(address);
    let start = query.len();
    let end = (start + ANSWER_RECORD_LEN).min(MAX_UDP_MESSAGE);
    if start < end {
        buf[start..end].copy_from_slice(&record[..end - start]);
    }

    buf[..end].to_vec()
}

fn answer_record(address: RedirectAddress) -> [u8; ANSWER_RECORD_LEN] {
    let mut record = [0u8; ANSWER_RECORD_LEN];
    record[0..2].copy_from_slice(&NAME_POINTER);
    record[2..4].copy_from_slice(&TYPE_A.to_be_bytes());
    record[4..6].copy_from_slice(&CLASS_IN.to_be_bytes());
    record[6..10].copy_from_slice(&ANSWER_TTL.to_be_bytes());
    record[10..12].copy_from_slice(&IPV4_RDLENGTH.to_be_bytes());
    record[12..16].copy_from_slice(&address.octets());
    record
}
