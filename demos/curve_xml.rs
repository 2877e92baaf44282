use yee1d::curve::{variant_function, Curve};

fn main() {
    let curve = Curve::sample(-100.0, 101.0, 0.01, variant_function);

    let path = curve.save("result").unwrap();
    println!("wrote {} samples to {}", curve.len(), path.display());
}
