use anyhow::Result;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{Layer as _, fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt};
use vectors::{
    ArrayVector, DEFAULT_PATH, add, dot, format, load_binary, load_text, save_binary, save_text,
    scale,
};

fn main() -> Result<()> {
    let layer = Layer::new().with_filter(LevelFilter::INFO);
    tracing_subscriber::registry().with(layer).init();

    let vector1 = [1.0, 2.0, 0.0];
    let vector2 = [1.2, -2.5, 10.0];
    println!("vector1 : {}", format(&vector1));
    println!("vector2 : {}", format(&vector2));

    save_binary(DEFAULT_PATH, &add(&vector1, &vector2)?)?;
    let vector3 = load_binary(DEFAULT_PATH)?;
    println!("vector3 = vector1 + vector2 : {}", vector3);

    save_text(DEFAULT_PATH, &scale(&vector1, dot(&vector2, &vector3)?))?;
    let vector2 = load_text(DEFAULT_PATH)?;
    println!("vector2 = vector1 * (vector2, vector3) : {}", vector2);

    let written = ArrayVector::new([1, 3, 5]);
    let read = ArrayVector::from_bytes(&written.to_bytes()?)?;
    info!(
        "array vector round trip: equal={} hash={}",
        read == written,
        read.hash_code()
    );
    Ok(())
}
