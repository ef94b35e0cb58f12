use upi_checkout::registry::BankRegistry;
use upi_checkout::upi::payload::{build, deep_link, is_valid_amount, virtual_address};
use upi_checkout::upi::qr::QrImage;

#[test]
fn deep_link_matches_upi_wire_format_exactly() {
    let registry = BankRegistry::builtin();
    let bank = registry.find_by_id("hdfc").unwrap();
    let payload = build("9876543210", bank, "250.50");
    assert_eq!(payload.virtual_address, "9876543210@hdfcbank");
    assert_eq!(
        payload.deep_link,
        "upi://pay?pa=9876543210@hdfcbank&pn=HDFC Bank&am=250.50&cu=INR"
    );
}

#[test]
fn amount_is_passed_through_unrounded() {
    assert_eq!(
        deep_link("9876543210@icici", "ICICI Bank", "99.999"),
        "upi://pay?pa=9876543210@icici&pn=ICICI Bank&am=99.999&cu=INR"
    );
}

#[test]
fn virtual_address_appends_bank_handle_suffix() {
    let registry = BankRegistry::builtin();
    let bank = registry.find_by_id("sbi").unwrap();
    assert_eq!(virtual_address("9000000001", bank), "9000000001@sbi");
}

#[test]
fn amount_validation_accepts_positive_decimals_only() {
    assert!(is_valid_amount("250.50"));
    assert!(is_valid_amount("1"));
    assert!(!is_valid_amount(""));
    assert!(!is_valid_amount("0"));
    assert!(!is_valid_amount("00.0"));
    assert!(!is_valid_amount("abc"));
    assert!(!is_valid_amount("1,000"));
}

#[test]
fn qr_renders_the_deep_link_as_a_data_url() {
    let registry = BankRegistry::builtin();
    let bank = registry.find_by_id("hdfc").unwrap();
    let payload = build("9876543210", bank, "250.50");
    let qr = QrImage::new_from_data(&payload.deep_link, 256).unwrap();
    assert!(qr.data.starts_with("data:image/png;base64,"));
    assert!(qr.data.len() > "data:image/png;base64,".len());
}
