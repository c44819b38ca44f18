//! Identity number decoding demo
//! Run: ./target/release/demo_resolve

use idcard_demographics::IdCardResolver;

fn main() {
    let resolver = IdCardResolver::bundled();

    println!("\n{}", "=".repeat(60));
    println!("        RESIDENT IDENTITY NUMBER DEMOGRAPHICS DEMO");
    println!("{}\n", "=".repeat(60));

    let samples = [
        "110101199003076499", // Beijing
        "440301198512240021", // Shenzhen
        "310101200007154531", // Shanghai
        "999999197001019876", // unmapped region code
    ];

    println!("DECODED SAMPLES");
    println!("{}", "-".repeat(60));
    for id in samples {
        match resolver.resolve(id) {
            Ok(p) => {
                let region = if p.region.is_empty() {
                    "(unknown region)"
                } else {
                    p.region.as_str()
                };
                println!("  {}  {}  {}  {}", id, p.birth_date, p.gender.as_zh(), region);
            }
            Err(e) => println!("  {}  error: {}", id, e),
        }
    }

    println!("\nFAILURE MODES");
    println!("{}", "-".repeat(60));
    for id in ["1101", "110101199013076499", "1101011990030764X9"] {
        match resolver.resolve(id) {
            Ok(p) => println!("  {:<20} unexpectedly ok: {:?}", id, p),
            Err(e) => println!("  {:<20} {}", id, e),
        }
    }
    println!();
}
