use pdf_images::constants::PAGE_MARGIN_PT;
use pdf_images::*;
use proptest::prelude::*;

const EPS: f32 = 1e-3;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_a4_center_scenario() {
    // 2000x1000 image on a 595x842 page:
    // scale = min(555 / 2000, 802 / 1000) = 0.2775
    let rect = compute_draw_rect((2000.0, 1000.0), (595.0, 842.0), Placement::Center).unwrap();

    assert_close(rect.width, 555.0);
    assert_close(rect.height, 277.5);
    assert_close(rect.x, 20.0);
    assert_close(rect.y, 282.25);
}

#[test]
fn test_corner_placements_touch_margins() {
    let page = (612.0, 792.0);
    let image = (300.0, 200.0);

    let rect = compute_draw_rect(image, page, Placement::TopLeft).unwrap();
    assert_close(rect.x, 20.0);
    assert_close(rect.y, page.1 - rect.height - 20.0);

    let rect = compute_draw_rect(image, page, Placement::TopRight).unwrap();
    assert_close(rect.x, page.0 - rect.width - 20.0);
    assert_close(rect.top(), page.1 - 20.0);

    let rect = compute_draw_rect(image, page, Placement::BottomLeft).unwrap();
    assert_close(rect.x, 20.0);
    assert_close(rect.y, 20.0);

    let rect = compute_draw_rect(image, page, Placement::BottomRight).unwrap();
    assert_close(rect.right(), page.0 - 20.0);
    assert_close(rect.y, 20.0);
}

#[test]
fn test_stretch_fills_page() {
    let rect = compute_draw_rect((123.0, 4567.0), (842.0, 1191.0), Placement::Stretch).unwrap();
    assert_eq!(rect, DrawRect::new(0.0, 0.0, 842.0, 1191.0));
}

#[test]
fn test_page_descriptor_uses_page_size() {
    let descriptor = page_descriptor((1000.0, 1000.0), PageSize::Letter, Placement::Center).unwrap();

    assert_eq!(descriptor.page_width, 612.0);
    assert_eq!(descriptor.page_height, 792.0);
    // Width-limited: 612 - 40
    assert_close(descriptor.rect.width, 572.0);
    assert_close(descriptor.rect.height, 572.0);
    assert_close(descriptor.rect.y, (792.0 - 572.0) / 2.0);
}

#[test]
fn test_unrecognized_placement_lays_out_as_center() {
    let placement = Placement::from_label_or_default("Diagonal");
    let rect = compute_draw_rect((400.0, 300.0), (612.0, 792.0), placement).unwrap();
    let center = compute_draw_rect((400.0, 300.0), (612.0, 792.0), Placement::Center).unwrap();
    assert_eq!(rect, center);
}

#[test]
fn test_degenerate_inputs_are_rejected() {
    let result = compute_draw_rect((0.0, 100.0), (612.0, 792.0), Placement::Center);
    assert!(matches!(result, Err(ConvertError::DegenerateLayout(_))));

    let result = compute_draw_rect((100.0, 100.0), (612.0, -792.0), Placement::TopLeft);
    assert!(matches!(result, Err(ConvertError::DegenerateLayout(_))));
}

#[test]
fn test_oversized_margin_is_rejected_not_negative() {
    let result =
        compute_draw_rect_with_margin((100.0, 100.0), (612.0, 792.0), Placement::Center, 400.0);
    assert!(matches!(result, Err(ConvertError::NoPrintableArea { .. })));
}

fn image_dims() -> impl Strategy<Value = (f32, f32)> {
    (1u32..=10_000, 1u32..=10_000).prop_map(|(w, h)| (w as f32, h as f32))
}

fn page_dims() -> impl Strategy<Value = (f32, f32)> {
    prop_oneof![
        Just(PageSize::Letter),
        Just(PageSize::A4),
        Just(PageSize::Legal),
        Just(PageSize::Tabloid),
        Just(PageSize::A3),
    ]
    .prop_map(PageSize::dimensions_pt)
}

fn fitted_placement() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Center),
        Just(Placement::TopLeft),
        Just(Placement::TopRight),
        Just(Placement::BottomLeft),
        Just(Placement::BottomRight),
    ]
}

proptest! {
    #[test]
    fn prop_aspect_ratio_preserved(image in image_dims(), page in page_dims(), placement in fitted_placement()) {
        let rect = compute_draw_rect(image, page, placement).unwrap();
        let expected = image.0 / image.1;
        let relative = (rect.aspect_ratio() - expected).abs() / expected;
        prop_assert!(relative < 1e-4, "ratio {} vs {}", rect.aspect_ratio(), expected);
    }

    #[test]
    fn prop_fits_inside_margins(image in image_dims(), page in page_dims(), placement in fitted_placement()) {
        let rect = compute_draw_rect(image, page, placement).unwrap();
        let slack = 0.01;
        prop_assert!(rect.width > 0.0 && rect.height > 0.0);
        prop_assert!(rect.x >= PAGE_MARGIN_PT - slack);
        prop_assert!(rect.y >= PAGE_MARGIN_PT - slack);
        prop_assert!(rect.right() <= page.0 - PAGE_MARGIN_PT + slack);
        prop_assert!(rect.top() <= page.1 - PAGE_MARGIN_PT + slack);
    }

    #[test]
    fn prop_center_is_symmetric(image in image_dims(), page in page_dims()) {
        let rect = compute_draw_rect(image, page, Placement::Center).unwrap();
        prop_assert!((rect.x - (page.0 - rect.width - rect.x)).abs() < 0.01);
        prop_assert!((rect.y - (page.1 - rect.height - rect.y)).abs() < 0.01);
    }

    #[test]
    fn prop_stretch_covers_page(image in image_dims(), page in page_dims()) {
        let rect = compute_draw_rect(image, page, Placement::Stretch).unwrap();
        prop_assert_eq!(rect, DrawRect::new(0.0, 0.0, page.0, page.1));
    }

    #[test]
    fn prop_layout_is_deterministic(image in image_dims(), page in page_dims(), placement in fitted_placement()) {
        let first = compute_draw_rect(image, page, placement).unwrap();
        let second = compute_draw_rect(image, page, placement).unwrap();
        prop_assert_eq!(first, second);
    }
}
