//! DER-encoded OCSP requests and their base64 GET forms.

pub struct OcspPayload {
    pub encoded: &'static str,
    pub der: &'static [u8],
}

pub fn payloads() -> Vec<OcspPayload> {
    vec![
        // Base64 text without '/'.
        OcspPayload {
            encoded: "MFUwUzBRME8wTTAJBgUrDgMCGgUABBT3O18PnpuclNZtpOrVxflCqr5EhAQUpAUtGSmhUlvQrdQvR22AQcL1TkICFATjZCxaxNrh6M4oUoMxQ6O0hW24",
            der: &[
                0x30, 0x55, 0x30, 0x53, 0x30, 0x51, 0x30, 0x4f, 0x30, 0x4d, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e,
                0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14, 0xf7, 0x3b, 0x5f, 0x0f, 0x9e, 0x9b, 0x9c, 0x94, 0xd6,
                0x6d, 0xa4, 0xea, 0xd5, 0xc5, 0xf9, 0x42, 0xaa, 0xbe, 0x44, 0x84, 0x04, 0x14, 0xa4, 0x05, 0x2d,
                0x19, 0x29, 0xa1, 0x52, 0x5b, 0xd0, 0xad, 0xd4, 0x2f, 0x47, 0x6d, 0x80, 0x41, 0xc2, 0xf5, 0x4e,
                0x42, 0x02, 0x14, 0x04, 0xe3, 0x64, 0x2c, 0x5a, 0xc4, 0xda, 0xe1, 0xe8, 0xce, 0x28, 0x52, 0x83,
                0x31, 0x43, 0xa3, 0xb4, 0x85, 0x6d, 0xb8,
            ],
        },
        // Base64 text containing "//", which must not be treated as a separator.
        OcspPayload {
            encoded: "MFUwUzBRME8wTTAJBgUrDgMCGgUABBT3O18PnpuclNZtpOrVxflCqr5EhAQUpAUtGSmhUlvQrdQvR22AQcL1TkICFFJrnVz4T93oc55//y83KISdFI8z",
            der: &[
                0x30, 0x55, 0x30, 0x53, 0x30, 0x51, 0x30, 0x4f, 0x30, 0x4d, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e,
                0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14, 0xf7, 0x3b, 0x5f, 0x0f, 0x9e, 0x9b, 0x9c, 0x94, 0xd6,
                0x6d, 0xa4, 0xea, 0xd5, 0xc5, 0xf9, 0x42, 0xaa, 0xbe, 0x44, 0x84, 0x04, 0x14, 0xa4, 0x05, 0x2d,
                0x19, 0x29, 0xa1, 0x52, 0x5b, 0xd0, 0xad, 0xd4, 0x2f, 0x47, 0x6d, 0x80, 0x41, 0xc2, 0xf5, 0x4e,
                0x42, 0x02, 0x14, 0x52, 0x6b, 0x9d, 0x5c, 0xf8, 0x4f, 0xdd, 0xe8, 0x73, 0x9e, 0x7f, 0xff, 0x2f,
                0x37, 0x28, 0x84, 0x9d, 0x14, 0x8f, 0x33,
            ],
        },
    ]
}
