use strictbounds::prelude::*;

const IMAGE_URL: &str = "https://example.com/floorplan.png";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn image() -> LatLngBounds {
    LatLngBounds::from_coords(-10.0, -10.0, 10.0, 10.0)
}

fn attached(map: &Rc<RefCell<Map>>, options: OverlayOptions) -> BoundedImageOverlay<Map> {
    init_logging();
    BoundedImageOverlay::new(IMAGE_URL, image(), options)
        .unwrap()
        .with_map(map.clone())
        .unwrap()
}

fn viewport_inside_image(map: &Rc<RefCell<Map>>) -> bool {
    image().contains_bounds(&map.borrow().bounds())
}

/// Delivers the notifications queued by attaching and lets their windows pass
fn settle(map: &Rc<RefCell<Map>>, overlay: &mut BoundedImageOverlay<Map>, start: Instant) {
    Map::dispatch(map, overlay, start).unwrap();
    Map::dispatch(map, overlay, start + Duration::from_millis(200)).unwrap();
    Map::dispatch(map, overlay, start + Duration::from_millis(400)).unwrap();
    assert!(!overlay.has_pending_work());
}

#[test]
fn attach_centers_mounts_and_fits_zoom() {
    let map = Map::shared(LatLng::new(40.0, 40.0), 2, Point::new(800.0, 600.0));
    let overlay = attached(&map, OverlayOptions::default());

    let host = map.borrow();
    let center = host.center();
    assert!(center.lat.abs() < 1e-9 && center.lng.abs() < 1e-9);
    assert_eq!(host.overlay_pane(), ["bounded-image".to_string()]);
    assert_eq!(host.listener_count(), 2);

    // 20 degrees is ~57px at zoom 2; 800px needs 16x, i.e. zoom 6
    assert_eq!(host.min_zoom(), 6);
    assert_eq!(host.zoom(), 6);

    let element = overlay.element().unwrap();
    assert_eq!(element.url, IMAGE_URL);
    let placement = element.placement.clone().unwrap();
    assert!((placement.width() - 20.0 / 360.0 * 256.0 * 64.0).abs() < 1e-6);
    assert!((placement.center().x - 400.0).abs() < 1e-6);
    assert!((placement.center().y - 300.0).abs() < 1e-6);
    assert!(viewport_inside_image(&map));
}

#[test]
fn panning_past_east_edge_is_pulled_back_after_debounce() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let start = Instant::now();
    settle(&map, &mut overlay, start);

    let t = start + Duration::from_secs(1);
    map.borrow_mut().pan_by(Point::new(300.0, 0.0));
    assert!(!viewport_inside_image(&map));

    Map::dispatch(&map, &mut overlay, t).unwrap();
    assert!(overlay.has_pending_work());
    assert!(!viewport_inside_image(&map));

    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(5)).unwrap();
    assert!(viewport_inside_image(&map));

    // settled just inside the edge, by the wiggle margin
    let east = map.borrow().bounds().east();
    let pixels_per_degree = 256.0 * 64.0 / 360.0;
    assert!((east - (10.0 - 5.0 / pixels_per_degree)).abs() < 1e-6);
}

#[test]
fn bursts_of_moves_collapse_into_one_clamp_on_latest_state() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let start = Instant::now();
    settle(&map, &mut overlay, start);

    let t = start + Duration::from_secs(1);
    for step in 0..3u64 {
        map.borrow_mut().pan_by(Point::new(0.0, 250.0));
        Map::dispatch(&map, &mut overlay, t + Duration::from_millis(2 * step)).unwrap();
    }

    // last move at t+4ms, so nothing fires before t+9ms
    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(8)).unwrap();
    assert!(overlay.has_pending_work());
    assert!(!viewport_inside_image(&map));

    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(9)).unwrap();
    assert!(!overlay.has_pending_work());
    assert!(viewport_inside_image(&map));
}

#[test]
fn clamped_view_is_left_alone_on_the_follow_up_notification() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let start = Instant::now();
    settle(&map, &mut overlay, start);

    map.borrow_mut().pan_by(Point::new(-400.0, -400.0));
    let t = start + Duration::from_secs(1);
    Map::dispatch(&map, &mut overlay, t).unwrap();
    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(5)).unwrap();
    let clamped = map.borrow().center();

    // the correction itself emitted a center change; clamping it again is a no-op
    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(10)).unwrap();
    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(20)).unwrap();
    assert_eq!(map.borrow().center(), clamped);
    assert_eq!(overlay.reposition_to_bounds(), None);
}

#[test]
fn resize_raises_min_zoom_after_debounce() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let start = Instant::now();
    settle(&map, &mut overlay, start);
    assert_eq!(map.borrow().min_zoom(), 6);

    let t = start + Duration::from_secs(1);
    map.borrow_mut().resize(1600, 1200);
    Map::dispatch(&map, &mut overlay, t).unwrap();
    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(50)).unwrap();
    assert_eq!(map.borrow().min_zoom(), 6);

    Map::dispatch(&map, &mut overlay, t + Duration::from_millis(100)).unwrap();
    assert_eq!(map.borrow().min_zoom(), 7);
    assert_eq!(map.borrow().zoom(), 7);
}

#[test]
fn zero_sized_container_enforces_nothing() {
    let map = Map::shared(LatLng::default(), 3, Point::new(0.0, 0.0));
    let mut overlay = attached(&map, OverlayOptions::default());

    assert_eq!(map.borrow().min_zoom(), 0);
    assert_eq!(map.borrow().zoom(), 3);
    assert_eq!(overlay.recalculate_min_zoom(), None);
}

#[test]
fn fixed_min_zoom_is_applied_as_is() {
    let map = Map::shared(LatLng::default(), 1, Point::new(800.0, 600.0));
    let options = OverlayOptions::default().with_min_zoom(MinZoom::Fixed(3));
    let mut overlay = attached(&map, options);

    assert_eq!(map.borrow().min_zoom(), 3);
    assert_eq!(map.borrow().zoom(), 3);

    let start = Instant::now();
    map.borrow_mut().resize(4000, 4000);
    Map::dispatch(&map, &mut overlay, start).unwrap();
    Map::dispatch(&map, &mut overlay, start + Duration::from_millis(100)).unwrap();
    assert_eq!(map.borrow().min_zoom(), 3);
}

#[test]
fn detach_releases_everything_and_is_idempotent() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let start = Instant::now();

    map.borrow_mut().pan_by(Point::new(500.0, 0.0));
    Map::dispatch(&map, &mut overlay, start).unwrap();
    assert!(overlay.has_pending_work());

    overlay.on_detach().unwrap();
    assert!(!overlay.is_attached());
    assert!(!overlay.has_pending_work());
    assert!(overlay.element().is_none());
    assert_eq!(map.borrow().listener_count(), 0);
    assert!(map.borrow().overlay_pane().is_empty());

    overlay.on_detach().unwrap();

    // nothing is listening any more, so the view stays where it was panned
    map.borrow_mut().pan_by(Point::new(500.0, 0.0));
    Map::dispatch(&map, &mut overlay, start + Duration::from_millis(50)).unwrap();
    assert!(!overlay.has_pending_work());
    assert!(!viewport_inside_image(&map));
}

#[test]
fn detaching_a_never_attached_overlay_is_a_noop() {
    let mut overlay: BoundedImageOverlay<Map> =
        BoundedImageOverlay::new(IMAGE_URL, image(), OverlayOptions::default()).unwrap();

    overlay.on_detach().unwrap();
    overlay.set_map(None).unwrap();
    assert!(!overlay.is_attached());
    assert!(matches!(overlay.on_attach(), Err(MapError::NotAttached)));
}

#[test]
fn overlay_can_move_between_maps() {
    let first = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let second = Map::shared(LatLng::new(30.0, 30.0), 2, Point::new(400.0, 300.0));
    let mut overlay = attached(&first, OverlayOptions::default());

    overlay.set_map(Some(second.clone())).unwrap();

    assert_eq!(first.borrow().listener_count(), 0);
    assert!(first.borrow().overlay_pane().is_empty());
    assert_eq!(second.borrow().listener_count(), 2);
    assert_eq!(second.borrow().center(), image().center());
    assert!(Rc::ptr_eq(overlay.map().unwrap(), &second));
}

#[test]
fn inverted_bounds_are_rejected() {
    let bounds = LatLngBounds::from_coords(10.0, -10.0, -10.0, 10.0);
    let result: Result<BoundedImageOverlay<Map>> =
        BoundedImageOverlay::new(IMAGE_URL, bounds, OverlayOptions::default());

    assert!(matches!(result, Err(MapError::InvalidBounds { .. })));
}

#[test]
fn redraw_tracks_zoom_changes() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let before = overlay.element().unwrap().placement.clone().unwrap();

    map.borrow_mut().set_zoom(7);
    Map::dispatch(&map, &mut overlay, Instant::now()).unwrap();

    let after = overlay.element().unwrap().placement.clone().unwrap();
    assert!((after.width() - before.width() * 2.0).abs() < 1e-6);
    assert!((after.height() - before.height() * 2.0).abs() < 1e-6);
}

#[test]
fn options_round_trip_through_layer_interface() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());

    let options = overlay.options();
    assert_eq!(options["url"], IMAGE_URL);
    assert_eq!(options["bounds"]["east"], 10.0);
    assert_eq!(overlay.bounds(), Some(image()));
    assert_eq!(overlay.layer_type(), LayerType::Image);

    let mut updated = overlay.overlay_options().clone().with_wiggle(1.0);
    updated.opacity = 0.4;
    overlay
        .set_options(serde_json::to_value(&updated).unwrap())
        .unwrap();
    assert_eq!(overlay.overlay_options().wiggle_px, 1.0);
    assert!((overlay.opacity() - 0.4).abs() < f32::EPSILON);

    let renamed = updated.with_id("other");
    assert!(overlay
        .set_options(serde_json::to_value(&renamed).unwrap())
        .is_err());
}

#[test]
fn changing_debounce_windows_keeps_a_pending_clamp() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let mut overlay = attached(&map, OverlayOptions::default());
    let start = Instant::now();
    settle(&map, &mut overlay, start);

    let t = start + Duration::from_secs(1);
    map.borrow_mut().pan_by(Point::new(300.0, 0.0));
    Map::dispatch(&map, &mut overlay, t).unwrap();
    assert!(overlay.has_pending_work());

    let slower = overlay
        .overlay_options()
        .clone()
        .with_debounce(Duration::from_millis(10), Duration::from_millis(200));
    overlay
        .set_options(serde_json::to_value(&slower).unwrap())
        .unwrap();
    assert!(overlay.has_pending_work());

    Map::dispatch(&map, &mut overlay, t + Duration::from_secs(5)).unwrap();
    assert!(!overlay.has_pending_work());
    assert!(viewport_inside_image(&map));

    // the new window applies to the next burst
    map.borrow_mut().pan_by(Point::new(300.0, 0.0));
    let later = t + Duration::from_secs(10);
    Map::dispatch(&map, &mut overlay, later).unwrap();
    Map::dispatch(&map, &mut overlay, later + Duration::from_millis(5)).unwrap();
    assert!(!viewport_inside_image(&map));
    Map::dispatch(&map, &mut overlay, later + Duration::from_millis(10)).unwrap();
    assert!(viewport_inside_image(&map));
}

#[test]
fn layer_properties_reach_the_mounted_element() {
    let map = Map::shared(LatLng::default(), 2, Point::new(800.0, 600.0));
    let options = OverlayOptions {
        opacity: 0.8,
        z_index: 4,
        ..OverlayOptions::default()
    };
    let mut overlay = attached(&map, options);

    let element = overlay.element().unwrap();
    assert!((element.opacity - 0.8).abs() < f32::EPSILON);
    assert!(element.visible);
    assert_eq!(element.z_index, 4);

    overlay.set_visible(false);
    overlay.set_opacity(1.7);
    overlay.set_z_index(9);
    let element = overlay.element().unwrap();
    assert!(!element.visible);
    assert_eq!(element.opacity, 1.0);
    assert_eq!(element.z_index, 9);

    let mut updated = overlay.overlay_options().clone();
    updated.opacity = 0.25;
    updated.visible = true;
    overlay
        .set_options(serde_json::to_value(&updated).unwrap())
        .unwrap();
    let element = overlay.element().unwrap();
    assert!((element.opacity - 0.25).abs() < f32::EPSILON);
    assert!(element.visible);

    // a redraw keeps them alongside the new placement
    map.borrow_mut().set_zoom(7);
    Map::dispatch(&map, &mut overlay, Instant::now()).unwrap();
    let element = overlay.element().unwrap();
    assert!((element.opacity - 0.25).abs() < f32::EPSILON);
    assert!(element.placement.is_some());
}
