use normal_baker::diagnostics::bake_with_report;
use normal_baker::image::{NormalSink, SourceImage};

fn main() {
    // Demo stub: bakes a normal map from four synthetic mid-gray sources
    let w = 256usize;
    let h = 256usize;
    let lit = vec![128u8; w * h * 4];
    let sources = [
        SourceImage { w, h, stride: w * 4, data: &lit },
        SourceImage { w, h, stride: w * 4, data: &lit },
        SourceImage { w, h, stride: w * 4, data: &lit },
        SourceImage { w, h, stride: w * 4, data: &lit },
    ];

    let mut out = vec![0u8; w * h * 12];
    let mut sink = NormalSink { stride: w * 12, data: &mut out };

    let report = bake_with_report(&sources, &mut sink);
    println!("ok={} latency_ms={:.3}", report.ok, report.latency_ms);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Failed to serialize report: {err}"),
    }
}
