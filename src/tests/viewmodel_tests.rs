use crate::api::models::ListingRecord;
use crate::controller::viewmodel::CardVm;
use crate::tests::utils::record;

#[test]
fn full_record_maps_cleanly() {
    let vm = CardVm::from_record(&record(7, true));

    assert_eq!(vm.base_id, 7);
    assert_eq!(vm.price, "1200");
    assert_eq!(vm.rooms, "2");
    assert_eq!(vm.area, "48 m²");
    assert_eq!(vm.commission_label, "no commission");
    assert_eq!(vm.save_label, "Remove");
    assert_eq!(vm.image.as_deref(), Some("https://img.example/7.jpg"));
    assert_eq!(vm.map_query, "Warsaw, Mokotów, Main Street 7");
}

#[test]
fn sparse_record_gets_placeholders_not_failures() {
    let vm = CardVm::from_record(&ListingRecord::default());

    assert_eq!(vm.price, "—");
    assert_eq!(vm.rooms, "—");
    assert_eq!(vm.area, "—");
    assert_eq!(vm.address, "—");
    assert_eq!(vm.city_distr, "—");
    assert_eq!(vm.property_type, None);
    assert_eq!(vm.image, None);
    assert_eq!(vm.save_label, "Save");
    assert_eq!(vm.commission_label, "commission");
}

#[test]
fn fractional_numbers_keep_their_fraction() {
    let mut rec = record(1, false);
    rec.price = Some(999.5);
    rec.area = Some(54.5);

    let vm = CardVm::from_record(&rec);
    assert_eq!(vm.price, "999.5");
    assert_eq!(vm.area, "54.5 m²");
}

#[test]
fn map_query_skips_empty_parts() {
    let mut rec = record(1, false);
    rec.city_distr = String::new();

    let vm = CardVm::from_record(&rec);
    assert_eq!(vm.map_query, "Main Street 1");
}

#[test]
fn map_url_is_encoded() {
    let vm = CardVm::from_record(&record(1, false));
    let url = vm.map_url();

    assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
    assert!(!url.contains(' '), "query must be percent-encoded: {url}");
}

#[test]
fn blank_image_entries_are_skipped() {
    let mut rec = record(1, false);
    rec.images = vec![String::new(), "https://img.example/real.jpg".to_string()];

    let vm = CardVm::from_record(&rec);
    assert_eq!(vm.image.as_deref(), Some("https://img.example/real.jpg"));
}
