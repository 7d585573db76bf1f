use geo_types::{Rect, coord, point};
use log::info;
use sinoproj::{CrsError, Shape, Transformer};

fn main() -> Result<(), CrsError> {
    env_logger::init();

    let transformer = Transformer::builder().exact(true).build();
    let wgs = transformer.resolve_or_err(4326u32)?;
    let gcj = transformer.resolve_or_err("GCJ02")?;
    let bd = transformer.resolve_or_err("BD09")?;
    let bdmc = transformer.resolve_or_err("BD09MC")?;

    let tiananmen = point! { x: 116.391275, y: 39.907335 };
    info!("transforming {:?} from {}", tiananmen, wgs);

    for dst in [&gcj, &bd, &bdmc] {
        let pt = transformer.transform_point(&wgs, dst, &tiananmen)?;
        println!("{:>8}: ({}, {})", dst.label(), pt.x(), pt.y());
    }

    let rect = Rect::new(coord! { x: 116.0, y: 39.6 }, coord! { x: 116.8, y: 40.2 });
    let envelope = transformer.transform_rect_default(&wgs, &bdmc, &rect)?;
    println!("Envelope in {}: {:?}", bdmc, envelope);

    let shape = Shape::Point(tiananmen);
    let moved = transformer.apply_geometry(&shape, &wgs, &gcj)?;
    println!("GeoJSON in {}: {}", gcj, moved.to_geojson());

    Ok(())
}
