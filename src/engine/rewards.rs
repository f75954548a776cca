use uuid::Uuid;

const CODE_PREFIX: &str = "RDM";
const CODE_LENGTH: usize = 8;

/// Opaque redemption code shown to the voucher partner as a QR payload.
pub fn redemption_code() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{CODE_PREFIX}-{}", &raw[..CODE_LENGTH])
}
