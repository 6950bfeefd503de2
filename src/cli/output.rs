use crate::generator::{ByteSize, FixturePlan, FixtureReport};

/// Human-readable summary of a finished run
pub fn render_report(report: &FixtureReport) -> String {
    let overshoot = report.bytes_written.saturating_sub(report.target_bytes);
    let mut lines = vec![
        "📄 Fixture Generated".to_string(),
        "===================".to_string(),
        format!("  • Path: {}", report.path.display()),
        format!(
            "  • Target: {} ({} bytes)",
            ByteSize(report.target_bytes),
            report.target_bytes
        ),
        format!(
            "  • Chunk: {} bytes x {} chunks",
            report.chunk_len, report.chunks_written
        ),
        format!("  • Overshoot: {overshoot} bytes"),
        format!("  • Duration: {} ms", report.elapsed_ms),
    ];
    if let Some(checksum) = &report.checksum {
        lines.push(format!("  • SHA-256: {checksum}"));
    }
    lines.push(format!(
        "✅ Final size: {} bytes ({} MiB)",
        report.size.bytes, report.size.mib
    ));
    lines.join("\n")
}

/// Human-readable summary of a dry run
pub fn render_plan(plan: &FixturePlan) -> String {
    [
        "🔍 Dry Run - nothing written".to_string(),
        "===========================".to_string(),
        format!("  • Path: {}", plan.path.display()),
        format!(
            "  • Target: {} ({} bytes)",
            ByteSize(plan.target_bytes),
            plan.target_bytes
        ),
        format!(
            "  • Chunk: {} bytes x {} chunks",
            plan.chunk_len, plan.planned_chunks
        ),
        format!(
            "📐 Planned size: {} bytes ({} MiB)",
            plan.planned_size.bytes, plan.planned_size.mib
        ),
    ]
    .join("\n")
}

pub fn print_report(report: &FixtureReport) {
    println!("{}", render_report(report));
}

pub fn print_plan(plan: &FixturePlan) {
    println!("{}", render_plan(plan));
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{json_output}");
    Ok(())
}
