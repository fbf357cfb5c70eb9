//! Decoding and encoding of the sensor result packet.
//!
//! Packet layout (little-endian throughout):
//! - HEADER (4 bytes): two reserved bytes + payload length (u16)
//! - COUNT (1 byte): number of meaningful face slots (0-4)
//! - FACES (4 × 9 bytes): all four slots are always present; slots past
//!   COUNT carry whatever the sensor left there and are ignored
//! - CHECKSUM (2 bytes): transmitted by the sensor, read but not verified

/// Header size in bytes
pub const HEADER_SIZE: usize = 4;

/// Size of one face record on the wire
pub const FACE_RECORD_SIZE: usize = 9;

/// Number of face slots in every response
pub const MAX_FACES: usize = 4;

/// Total response size: header + count + slots + checksum
pub const SENSOR_RESULT_SIZE: usize = HEADER_SIZE + 1 + MAX_FACES * FACE_RECORD_SIZE + 2;

/// Errors that can occur during packet decoding or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Decode input is not exactly [`SENSOR_RESULT_SIZE`] bytes
    WrongLength,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Response header preceding the face slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResultHeader {
    /// Reserved/version bytes, meaning unspecified by the sensor
    pub reserved: [u8; 2],
    /// Length of the payload following the header
    pub payload_len: u16,
}

/// One detected face
///
/// Bounding box coordinates are in the sensor's own 0-255 image space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Face {
    /// Detection confidence (0-255)
    pub box_confidence: u8,
    /// Bounding box left edge
    pub box_left: u8,
    /// Bounding box top edge
    pub box_top: u8,
    /// Bounding box right edge
    pub box_right: u8,
    /// Bounding box bottom edge
    pub box_bottom: u8,
    /// Identity recognition confidence (0-255)
    pub id_confidence: u8,
    /// Identity slot assigned by the sensor
    pub id: u8,
    /// Signed facing flag; exactly 1 means the face looks at the camera
    pub is_facing: i8,
}

impl Face {
    /// Whether the face is looking at the camera
    ///
    /// Only the exact value 1 counts; 0, negative values, and anything
    /// else read as not facing.
    pub fn facing(&self) -> bool {
        self.is_facing == 1
    }

    /// Decode one face record from its 9-byte wire slot
    ///
    /// The trailing reserved byte of the slot is skipped.
    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            box_confidence: bytes[0],
            box_left: bytes[1],
            box_top: bytes[2],
            box_right: bytes[3],
            box_bottom: bytes[4],
            id_confidence: bytes[5],
            id: bytes[6],
            is_facing: bytes[7] as i8,
        }
    }

    /// Write this face into a 9-byte wire slot
    fn write_to(&self, bytes: &mut [u8]) {
        bytes[0] = self.box_confidence;
        bytes[1] = self.box_left;
        bytes[2] = self.box_top;
        bytes[3] = self.box_right;
        bytes[4] = self.box_bottom;
        bytes[5] = self.id_confidence;
        bytes[6] = self.id;
        bytes[7] = self.is_facing as u8;
        bytes[8] = 0; // reserved
    }
}

/// A complete decoded sensor response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorResult {
    /// Response header
    pub header: ResultHeader,
    /// Raw count byte as transmitted; may exceed [`MAX_FACES`] on
    /// malformed input
    pub num_faces: u8,
    /// All four face slots, decoded regardless of the count
    pub slots: [Face; MAX_FACES],
    /// Trailing checksum, read but never verified
    pub checksum: u16,
}

impl SensorResult {
    /// Decode a response from a raw I2C read
    ///
    /// The buffer must be exactly [`SENSOR_RESULT_SIZE`] bytes; the
    /// sensor transfers fixed-size responses and a short read means the
    /// transfer itself failed. Decoding is total for any buffer of the
    /// right length - no field value is rejected.
    pub fn decode(buf: &[u8]) -> Result<Self, PacketError> {
        if buf.len() != SENSOR_RESULT_SIZE {
            return Err(PacketError::WrongLength);
        }

        let header = ResultHeader {
            reserved: [buf[0], buf[1]],
            payload_len: u16::from_le_bytes([buf[2], buf[3]]),
        };
        let num_faces = buf[HEADER_SIZE];

        let mut slots = [Face::default(); MAX_FACES];
        let mut offset = HEADER_SIZE + 1;
        for slot in slots.iter_mut() {
            *slot = Face::from_bytes(&buf[offset..offset + FACE_RECORD_SIZE]);
            offset += FACE_RECORD_SIZE;
        }

        let checksum = u16::from_le_bytes([buf[offset], buf[offset + 1]]);

        Ok(Self {
            header,
            num_faces,
            slots,
            checksum,
        })
    }

    /// Encode this response into a byte buffer
    ///
    /// Returns the number of bytes written. Reserved slot bytes are
    /// written as zero.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, PacketError> {
        if buf.len() < SENSOR_RESULT_SIZE {
            return Err(PacketError::BufferTooSmall);
        }

        buf[0] = self.header.reserved[0];
        buf[1] = self.header.reserved[1];
        buf[2..4].copy_from_slice(&self.header.payload_len.to_le_bytes());
        buf[HEADER_SIZE] = self.num_faces;

        let mut offset = HEADER_SIZE + 1;
        for slot in &self.slots {
            slot.write_to(&mut buf[offset..offset + FACE_RECORD_SIZE]);
            offset += FACE_RECORD_SIZE;
        }

        buf[offset..offset + 2].copy_from_slice(&self.checksum.to_le_bytes());

        Ok(SENSOR_RESULT_SIZE)
    }

    /// The meaningful faces: the first `num_faces` slots, clamped to
    /// [`MAX_FACES`]
    pub fn faces(&self) -> &[Face] {
        let count = (self.num_faces as usize).min(MAX_FACES);
        &self.slots[..count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_buffer() -> [u8; SENSOR_RESULT_SIZE] {
        let mut buf = [0u8; SENSOR_RESULT_SIZE];
        // header: reserved (0, 0), payload_len 39
        buf[2..4].copy_from_slice(&39u16.to_le_bytes());
        buf[4] = 2; // count
        // face 0
        buf[5..13].copy_from_slice(&[200, 10, 20, 30, 40, 50, 1, 1]);
        // face 1
        buf[14..22].copy_from_slice(&[100, 5, 5, 50, 50, 10, 2, 0]);
        // faces 2..3 zeroed, checksum 0
        buf
    }

    #[test]
    fn test_decode_sample() {
        let result = SensorResult::decode(&sample_buffer()).unwrap();

        assert_eq!(result.header.reserved, [0, 0]);
        assert_eq!(result.header.payload_len, 39);
        assert_eq!(result.num_faces, 2);
        assert_eq!(result.checksum, 0);

        let faces = result.faces();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].box_confidence, 200);
        assert_eq!(faces[0].box_left, 10);
        assert_eq!(faces[0].box_top, 20);
        assert_eq!(faces[0].box_right, 30);
        assert_eq!(faces[0].box_bottom, 40);
        assert_eq!(faces[0].id_confidence, 50);
        assert_eq!(faces[0].id, 1);
        assert!(faces[0].facing());
        assert_eq!(faces[1].box_confidence, 100);
        assert!(!faces[1].facing());
    }

    #[test]
    fn test_decode_wrong_length() {
        let buf = [0u8; SENSOR_RESULT_SIZE];
        assert_eq!(
            SensorResult::decode(&buf[..SENSOR_RESULT_SIZE - 1]),
            Err(PacketError::WrongLength)
        );

        let long = [0u8; SENSOR_RESULT_SIZE + 1];
        assert_eq!(SensorResult::decode(&long), Err(PacketError::WrongLength));

        assert_eq!(SensorResult::decode(&[]), Err(PacketError::WrongLength));
    }

    #[test]
    fn test_checksum_at_fixed_offset() {
        // Even with count = 0, the checksum sits at the end of all four
        // slots, not after the last meaningful one.
        let mut buf = [0u8; SENSOR_RESULT_SIZE];
        buf[SENSOR_RESULT_SIZE - 2..].copy_from_slice(&0xBEEFu16.to_le_bytes());

        let result = SensorResult::decode(&buf).unwrap();
        assert_eq!(result.num_faces, 0);
        assert!(result.faces().is_empty());
        assert_eq!(result.checksum, 0xBEEF);
    }

    #[test]
    fn test_slots_beyond_count_are_decoded() {
        let mut buf = [0u8; SENSOR_RESULT_SIZE];
        buf[4] = 1;
        // slot 3 starts at 5 + 3 * 9 = 32
        buf[32..40].copy_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2]);

        let result = SensorResult::decode(&buf).unwrap();
        assert_eq!(result.faces().len(), 1);
        assert_eq!(result.slots[3].box_confidence, 9);
        assert_eq!(result.slots[3].is_facing, 2);
    }

    #[test]
    fn test_count_clamped_by_accessor() {
        let mut buf = [0u8; SENSOR_RESULT_SIZE];
        buf[4] = 9;

        let result = SensorResult::decode(&buf).unwrap();
        assert_eq!(result.num_faces, 9);
        assert_eq!(result.faces().len(), MAX_FACES);
    }

    #[test]
    fn test_facing_requires_exactly_one() {
        for (byte, expected) in [(1u8, true), (0, false), (0xFF, false), (2, false)] {
            let mut buf = [0u8; SENSOR_RESULT_SIZE];
            buf[4] = 1;
            buf[12] = byte; // is_facing of slot 0
            let result = SensorResult::decode(&buf).unwrap();
            assert_eq!(result.faces()[0].facing(), expected, "byte {byte}");
        }

        // 0xFF decodes as -1
        let mut buf = [0u8; SENSOR_RESULT_SIZE];
        buf[12] = 0xFF;
        let result = SensorResult::decode(&buf).unwrap();
        assert_eq!(result.slots[0].is_facing, -1);
    }

    #[test]
    fn test_roundtrip() {
        let original = SensorResult {
            header: ResultHeader {
                reserved: [3, 7],
                payload_len: 39,
            },
            num_faces: 3,
            slots: [
                Face {
                    box_confidence: 255,
                    box_left: 1,
                    box_top: 2,
                    box_right: 3,
                    box_bottom: 4,
                    id_confidence: 5,
                    id: 6,
                    is_facing: 1,
                },
                Face {
                    box_confidence: 0,
                    box_left: 255,
                    box_top: 0,
                    box_right: 255,
                    box_bottom: 0,
                    id_confidence: 255,
                    id: 0,
                    is_facing: -1,
                },
                Face::default(),
                Face::default(),
            ],
            checksum: 0xA55A,
        };

        let mut buf = [0u8; SENSOR_RESULT_SIZE];
        let len = original.encode(&mut buf).unwrap();
        assert_eq!(len, SENSOR_RESULT_SIZE);

        let decoded = SensorResult::decode(&buf).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let result = SensorResult::default();
        let mut buf = [0u8; SENSOR_RESULT_SIZE - 1];
        assert_eq!(result.encode(&mut buf), Err(PacketError::BufferTooSmall));
    }

    proptest! {
        #[test]
        fn decode_is_total_and_deterministic(bytes in prop::collection::vec(any::<u8>(), SENSOR_RESULT_SIZE)) {
            let first = SensorResult::decode(&bytes).unwrap();
            let second = SensorResult::decode(&bytes).unwrap();
            prop_assert_eq!(first, second);
            prop_assert!(first.faces().len() <= MAX_FACES);
        }

        #[test]
        fn roundtrip_preserves_fields(
            reserved in any::<[u8; 2]>(),
            payload_len in any::<u16>(),
            num_faces in any::<u8>(),
            checksum in any::<u16>(),
            fields in prop::collection::vec(any::<[u8; 8]>(), MAX_FACES),
        ) {
            let mut slots = [Face::default(); MAX_FACES];
            for (slot, f) in slots.iter_mut().zip(&fields) {
                *slot = Face {
                    box_confidence: f[0],
                    box_left: f[1],
                    box_top: f[2],
                    box_right: f[3],
                    box_bottom: f[4],
                    id_confidence: f[5],
                    id: f[6],
                    is_facing: f[7] as i8,
                };
            }
            let original = SensorResult {
                header: ResultHeader { reserved, payload_len },
                num_faces,
                slots,
                checksum,
            };

            let mut buf = [0u8; SENSOR_RESULT_SIZE];
            original.encode(&mut buf).unwrap();
            prop_assert_eq!(SensorResult::decode(&buf).unwrap(), original);
        }
    }
}
