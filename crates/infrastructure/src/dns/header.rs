/// Size of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;

/// QR: message is a response.
pub const FLAG_RESPONSE: u16 = 0x8000;
/// RD: recursion desired.
pub const FLAG_RECURSION_DESIRED: u16 = 0x0100;
/// RA: recursion available.
pub const FLAG_RECURSION_AVAILABLE: u16 = 0x0080;

/// Flags of every synthesized answer: `0x81 0x80` on the wire,
/// opcode QUERY and rcode NOERROR.
pub const STANDARD_RESPONSE_FLAGS: u16 =
    FLAG_RESPONSE | FLAG_RECURSION_DESIRED | FLAG_RECURSION_AVAILABLE;

/// The fixed 12-byte header, field by field.
///
/// ```text
/// 0      2      4        6        8        10       12
/// | id   | flags| qdcount| ancount| nscount| arcount|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl DnsHeader {
    /// Returns `None` when `buf` is shorter than [`HEADER_LEN`].
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let h = buf.get(..HEADER_LEN)?;
        let field = |at: usize| u16::from_be_bytes([h[at], h[at + 1]]);
        Some(Self {
            id: field(0),
            flags: field(2),
            question_count: field(4),
            answer_count: field(6),
            authority_count: field(8),
            additional_count: field(10),
        })
    }

    /// Writes all six fields into the first [`HEADER_LEN`] bytes of `buf`.
    /// Returns `false`, leaving `buf` untouched, when it is too short.
    pub fn encode_into(&self, buf: &mut [u8]) -> bool {
        let Some(h) = buf.get_mut(..HEADER_LEN) else {
            return false;
        };
        let fields = [
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        ];
        for (chunk, value) in h.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        true
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_RESPONSE != 0
    }
}
