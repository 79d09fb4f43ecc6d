use strictbounds::prelude::*;

/// Headless walkthrough: attach an overlay, drag the map around and resize
/// it, printing what the overlay does in response.
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let map = Map::shared(LatLng::new(48.0, 2.0), 3, Point::new(1024.0, 768.0));
    let bounds = LatLngBounds::try_from_coords(45.0, -2.0, 51.0, 8.0)?;
    let options = match std::env::args().nth(1) {
        Some(json) => OverlayOptions::from_json(&json)?,
        None => OverlayOptions::default(),
    };

    let mut overlay = BoundedImageOverlay::new("tiles/relief.png", bounds, options)?
        .with_map(map.clone())?;
    report("attached", &map, &overlay);

    let mut now = Instant::now();
    let mut advance = |ms: u64| {
        now += Duration::from_millis(ms);
        now
    };

    Map::dispatch(&map, &mut overlay, advance(0))?;
    Map::dispatch(&map, &mut overlay, advance(200))?;

    for (label, offset) in [
        ("drag east", Point::new(600.0, 0.0)),
        ("drag north-west", Point::new(-450.0, -450.0)),
        ("drag south", Point::new(0.0, 900.0)),
    ] {
        map.borrow_mut().pan_by(offset);
        report(&format!("{label} (before clamp)"), &map, &overlay);
        Map::dispatch(&map, &mut overlay, advance(1))?;
        Map::dispatch(&map, &mut overlay, advance(10))?;
        report(&format!("{label} (after clamp)"), &map, &overlay);
    }

    map.borrow_mut().resize(2560, 1440);
    Map::dispatch(&map, &mut overlay, advance(1))?;
    Map::dispatch(&map, &mut overlay, advance(150))?;
    report("resized to 2560x1440", &map, &overlay);

    overlay.set_map(None)?;
    log::info!("detached, {} listeners left", map.borrow().listener_count());
    println!("{}", serde_json::to_string_pretty(&overlay.options())?);
    Ok(())
}

fn report(label: &str, map: &Rc<RefCell<Map>>, overlay: &BoundedImageOverlay<Map>) {
    let host = map.borrow();
    let view = host.bounds();
    let inside = overlay.image_bounds().contains_bounds(&view);
    println!(
        "{label:<32} zoom {:>2} (min {:>2})  view S{:.3} W{:.3} N{:.3} E{:.3}  inside: {inside}",
        host.zoom(),
        host.min_zoom(),
        view.south(),
        view.west(),
        view.north(),
        view.east(),
    );
}
