//! DNS response decoding for the TXT lookup.
//!
//! The header and question section are decoded up front. Answer records are
//! decoded one at a time as [`AnswerRecords`] is pulled, so a scan that stops
//! at the first match never decodes the rest of the message.

use hickory_proto::op::{Header, MessageType, Query};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use rpp_domain::DomainError;

/// Decodes only the fixed 12-byte header.
pub fn read_header(buf: &[u8]) -> Result<Header, DomainError> {
    let mut decoder = BinDecoder::new(buf);
    Header::read(&mut decoder).map_err(|e| {
        DomainError::InvalidDnsResponse(format!("Failed to parse DNS header: {}", e))
    })
}

pub struct ResponseView<'a> {
    header: Header,
    decoder: BinDecoder<'a>,
}

impl<'a> ResponseView<'a> {
    /// Decodes the header and every question, leaving the decoder at the
    /// start of the answer section.
    pub fn parse(buf: &'a [u8]) -> Result<Self, DomainError> {
        let mut decoder = BinDecoder::new(buf);
        let header = Header::read(&mut decoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS header: {}", e))
        })?;

        if header.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "QR bit not set".to_string(),
            ));
        }

        for index in 0..header.query_count() {
            Query::read(&mut decoder).map_err(|e| {
                DomainError::InvalidDnsResponse(format!("question {}: {}", index, e))
            })?;
        }

        Ok(Self { header, decoder })
    }

    pub fn answer_count(&self) -> usize {
        self.header.answer_count() as usize
    }

    pub fn answers(self) -> AnswerRecords<'a> {
        AnswerRecords {
            remaining: self.header.answer_count(),
            decoder: self.decoder,
            index: 0,
        }
    }
}

/// Lazy iterator over the answer section.
///
/// Yields `Err` for the first record that cannot be decoded and ends there.
pub struct AnswerRecords<'a> {
    decoder: BinDecoder<'a>,
    index: u16,
    remaining: u16,
}

impl Iterator for AnswerRecords<'_> {
    type Item = Result<Record, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.index;
        let record = Record::read(&mut self.decoder)
            .map_err(|e| DomainError::InvalidDnsResponse(format!("answer {}: {}", index, e)));

        self.index += 1;
        self.remaining = match record {
            Ok(_) => self.remaining - 1,
            Err(_) => 0,
        };
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining as usize))
    }
}
