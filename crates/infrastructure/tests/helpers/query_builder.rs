#![allow(dead_code)]

/// Builds raw DNS query datagrams.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    domain: String,
    qtype: u16,
    qclass: u16,
    additional: Vec<u8>,
}

impl QueryBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            domain: domain.to_string(),
            qtype: 1,
            qclass: 1,
            additional: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    /// Appends an EDNS0 OPT record and bumps ARCOUNT.
    pub fn with_opt_record(mut self) -> Self {
        self.additional.extend_from_slice(&[
            0x00, 0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let arcount: u16 = if self.additional.is_empty() { 0 } else { 1 };
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT
        buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT
        buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
        buf.extend_from_slice(&arcount.to_be_bytes());
        for label in self.domain.split('.').filter(|l| !l.is_empty()) {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0x00);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf.extend_from_slice(&self.additional);
        buf
    }
}
