use real_bessel::*;

fn main() {
    let x = 2.5_f64;

    // -- Single-value functions --
    println!("=== Single-value functions (f64) ===");
    let j = besselj(0, x).unwrap();
    println!("J_0({x}) = {j}");

    let y = bessely(3, x).unwrap();
    println!("Y_3({x}) = {y}");

    let i = besseli(1, x).unwrap();
    println!("I_1({x}) = {i}");

    let k = besselk(10, x).unwrap();
    println!("K_10({x}) = {k}");

    // -- Scaled computation --
    println!("\n=== Scaled functions ===");
    let big = 800.0_f64;
    println!("I_5({big})        = {}", besseli(5, big).unwrap());
    println!("exp(-x)*I_5({big}) = {}", besseli_scaled(5, big).unwrap());
    println!("K_5({big})        = {}", besselk(5, big).unwrap());
    println!("exp(x)*K_5({big})  = {}", besselk_scaled(5, big).unwrap());

    // -- Reusable engines and regimes --
    println!("\n=== J_20 across regimes ===");
    let j20 = OrdinaryBessel::<f64>::instance_of(20).unwrap();
    for x in [1.0, 10.0, 50.0, 500.0] {
        println!("  J_20({x}) = {:e}  via {:?}", j20.bessel_j(x), j20.j_regime(x));
    }

    // -- Family-parameterised factory --
    println!("\n=== Factory ===");
    for order in [-1, 0, 100, 101] {
        match factory::instance_of::<f64>(Family::Modified, order) {
            Ok(engine) => println!("  order {order}: {:?} engine", engine.family()),
            Err(e) => println!("  order {order}: {e}"),
        }
    }

    // -- Single precision --
    println!("\n=== f32 ===");
    let j32 = besselj(2, 1.5_f32).unwrap();
    println!("J_2(1.5) = {j32}");
}
