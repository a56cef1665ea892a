use pdf_images::*;

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::Letter.dimensions_pt(), (612.0, 792.0));
    assert_eq!(PageSize::Legal.dimensions_pt(), (612.0, 1008.0));
    assert_eq!(PageSize::Tabloid.dimensions_pt(), (792.0, 1224.0));

    let (w, h) = PageSize::A4.dimensions_pt();
    assert!((w - 595.276).abs() < 0.01);
    assert!((h - 841.89).abs() < 0.01);

    let (w, h) = PageSize::A3.dimensions_pt();
    assert!((w - 841.89).abs() < 0.01);
    assert!((h - 1190.551).abs() < 0.01);
}

#[test]
fn test_page_size_parsing() {
    assert_eq!("letter".parse::<PageSize>().unwrap(), PageSize::Letter);
    assert_eq!("A4".parse::<PageSize>().unwrap(), PageSize::A4);
    assert_eq!(" Tabloid ".parse::<PageSize>().unwrap(), PageSize::Tabloid);
    assert!("B5".parse::<PageSize>().is_err());

    // Unknown names fall back to A4
    assert_eq!(PageSize::from_label_or_default("executive"), PageSize::A4);
    assert_eq!(PageSize::from_label_or_default("legal"), PageSize::Legal);
}

#[test]
fn test_placement_parsing() {
    assert_eq!("Top-Left".parse::<Placement>().unwrap(), Placement::TopLeft);
    assert_eq!("top_right".parse::<Placement>().unwrap(), Placement::TopRight);
    assert_eq!("bottomleft".parse::<Placement>().unwrap(), Placement::BottomLeft);
    assert_eq!("Bottom Right".parse::<Placement>().unwrap(), Placement::BottomRight);
    assert_eq!("STRETCH".parse::<Placement>().unwrap(), Placement::Stretch);
    assert!("middle".parse::<Placement>().is_err());

    assert_eq!(Placement::from_label_or_default("middle"), Placement::Center);
}

#[test]
fn test_labels_round_trip_through_parse() {
    for size in PageSize::ALL {
        assert_eq!(size.label().parse::<PageSize>().unwrap(), size);
    }
    for placement in Placement::ALL {
        assert_eq!(placement.label().parse::<Placement>().unwrap(), placement);
    }
}

#[test]
fn test_only_stretch_distorts() {
    for placement in Placement::ALL {
        assert_eq!(
            placement.preserves_aspect_ratio(),
            placement != Placement::Stretch
        );
    }
}

#[test]
fn test_defaults() {
    assert_eq!(PageSize::default(), PageSize::A4);
    assert_eq!(Placement::default(), Placement::Center);
}

#[test]
fn test_draw_rect_edges() {
    let rect = DrawRect::new(20.0, 30.0, 100.0, 50.0);
    assert_eq!(rect.right(), 120.0);
    assert_eq!(rect.top(), 80.0);
    assert_eq!(rect.aspect_ratio(), 2.0);
}
